//! Key-Value-Speicher-Schnittstelle und In-Memory-Implementierung.

use crate::error::StoreError;
use indexmap::IndexMap;

/// Lokaler, string-adressierter Key-Value-Speicher.
///
/// Schreibzugriffe sind last-write-wins pro Schlüssel; es gibt keine
/// Transaktionen über mehrere Schlüssel.
pub trait PersistenceStore: Send {
    /// Liest einen Wert, `None` wenn der Schlüssel fehlt.
    fn get(&self, key: &str) -> Option<String>;

    /// Schreibt einen Wert.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Flüchtiger Speicher, z.B. für Tests oder ohne Schreibrechte.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Speicher mit Startinhalt.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PersistenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
