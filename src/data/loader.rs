//! Lade-Aufträge für Katalog und Kartendaten mit Generationszähler.
//!
//! Jeder Ladeauftrag bekommt beim Start eine Generation. Ein Ergebnis wird nur
//! übernommen, wenn seine Generation beim Eintreffen noch die aktuelle ist
//! („letzte Auswahl gewinnt“).

use super::documents::{load_catalog, load_map_data};
use super::source::DataSource;
use crate::core::{Catalog, MapData};
use crate::error::LoadError;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Ausführungsart der Ladeaufträge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadExecution {
    /// Eigener Worker-Thread pro Auftrag
    #[default]
    Background,
    /// Sofort im aufrufenden Thread (Tests, Kommandozeile)
    Inline,
}

/// Führt Aufträge inline oder in Worker-Threads aus und sammelt die
/// Ergebnisse in einem Kanal.
struct Worker<C> {
    execution: LoadExecution,
    tx: Sender<C>,
    rx: Receiver<C>,
}

impl<C: Send + 'static> Worker<C> {
    fn new(execution: LoadExecution) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { execution, tx, rx }
    }

    /// Startet `job`. Lässt sich kein Thread starten, wird `on_spawn_error`
    /// mit der Ursache als Ergebnis eingereiht.
    fn run<J, E>(&self, thread_name: String, job: J, on_spawn_error: E)
    where
        J: FnOnce() -> C + Send + 'static,
        E: FnOnce(String) -> C,
    {
        match self.execution {
            LoadExecution::Inline => {
                // Empfänger lebt so lange wie der Worker selbst
                let _ = self.tx.send(job());
            }
            LoadExecution::Background => {
                let tx = self.tx.clone();
                let spawned = thread::Builder::new().name(thread_name).spawn(move || {
                    if tx.send(job()).is_err() {
                        log::debug!("Loader beendet, Ergebnis verworfen");
                    }
                });
                if let Err(e) = spawned {
                    log::error!("Worker-Thread nicht startbar: {}", e);
                    let _ = self.tx.send(on_spawn_error(e.to_string()));
                }
            }
        }
    }

    fn drain(&self) -> Vec<C> {
        let mut completions = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(completion) => completions.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        completions
    }
}

// ── Kartendaten ─────────────────────────────────────────────────────

/// Beim Start eines Auftrags erfasste Identität.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub map_id: String,
}

/// Abgeschlossener Ladeauftrag.
#[derive(Debug, Clone)]
pub struct LoadCompletion {
    pub ticket: LoadTicket,
    pub result: Result<Arc<MapData>, LoadError>,
}

/// Startet Kartendaten-Ladeaufträge und sammelt deren Ergebnisse ein.
pub struct MapDataLoader {
    generation: u64,
    worker: Worker<LoadCompletion>,
}

impl MapDataLoader {
    pub fn new(execution: LoadExecution) -> Self {
        Self {
            generation: 0,
            worker: Worker::new(execution),
        }
    }

    /// Beginnt einen neuen Auftrag und macht alle laufenden veraltet.
    pub fn begin(&mut self, map_id: &str) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
            map_id: map_id.to_string(),
        }
    }

    /// Verwirft alle laufenden Aufträge ohne neuen zu starten.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Gibt `true` zurück, wenn das Ticket noch zum neuesten Auftrag gehört.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Startet einen Ladeauftrag für `map_id` gegen `source`.
    pub fn spawn(&mut self, source: Arc<dyn DataSource>, map_id: &str) -> LoadTicket {
        let ticket = self.begin(map_id);
        let job_ticket = ticket.clone();
        let error_ticket = ticket.clone();

        self.worker.run(
            format!("map-data-{}", ticket.generation),
            move || {
                let result = load_map_data(source.as_ref(), &job_ticket.map_id).map(Arc::new);
                LoadCompletion {
                    ticket: job_ticket,
                    result,
                }
            },
            |reason| LoadCompletion {
                result: Err(LoadError::MapDataUnavailable {
                    map_id: error_ticket.map_id.clone(),
                    reason,
                }),
                ticket: error_ticket,
            },
        );

        ticket
    }

    /// Holt alle bisher eingetroffenen Ergebnisse ab (nicht blockierend).
    ///
    /// Veraltete Ergebnisse werden mitgeliefert; der Aufrufer prüft sie mit
    /// [`MapDataLoader::is_current`].
    pub fn drain(&self) -> Vec<LoadCompletion> {
        self.worker.drain()
    }
}

// ── Katalog ─────────────────────────────────────────────────────────

/// Abgeschlossener Katalog-Ladeauftrag.
#[derive(Debug, Clone)]
pub struct CatalogCompletion {
    pub generation: u64,
    pub result: Result<Catalog, LoadError>,
}

/// Lädt den Katalog abseits des UI-Threads; ein neuer Auftrag (Reload)
/// macht ältere veraltet.
pub struct CatalogLoader {
    generation: u64,
    worker: Worker<CatalogCompletion>,
}

impl CatalogLoader {
    pub fn new(execution: LoadExecution) -> Self {
        Self {
            generation: 0,
            worker: Worker::new(execution),
        }
    }

    pub fn is_current(&self, completion: &CatalogCompletion) -> bool {
        completion.generation == self.generation
    }

    /// Startet einen Ladeauftrag und gibt seine Generation zurück.
    pub fn spawn(&mut self, source: Arc<dyn DataSource>) -> u64 {
        self.generation += 1;
        let generation = self.generation;

        self.worker.run(
            format!("catalog-{generation}"),
            move || CatalogCompletion {
                generation,
                result: load_catalog(source.as_ref()),
            },
            |reason| CatalogCompletion {
                generation,
                result: Err(LoadError::CatalogUnavailable { reason }),
            },
        );

        generation
    }

    /// Holt alle bisher eingetroffenen Ergebnisse ab (nicht blockierend).
    pub fn drain(&self) -> Vec<CatalogCompletion> {
        self.worker.drain()
    }
}
