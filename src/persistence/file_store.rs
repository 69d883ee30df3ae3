//! Dateibasierter Key-Value-Speicher (JSON-Objekt, write-through).

use super::store::PersistenceStore;
use crate::error::StoreError;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Persistiert alle Einträge als ein JSON-Objekt in einer Datei.
///
/// Jeder Schreibzugriff schreibt die komplette Datei neu.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: IndexMap<String, String>,
}

impl FileStore {
    /// Öffnet den Speicher. Fehlende oder beschädigte Dateien ergeben einen
    /// leeren Speicher; die Datei wird beim nächsten Schreiben ersetzt.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<IndexMap<String, String>>(&content) {
                Ok(entries) => {
                    log::info!(
                        "Gespeicherter Zustand geladen aus: {} ({} Einträge)",
                        path.display(),
                        entries.len()
                    );
                    entries
                }
                Err(e) => {
                    log::warn!(
                        "Zustandsdatei {} fehlerhaft, starte mit leerem Zustand: {}",
                        path.display(),
                        e
                    );
                    IndexMap::new()
                }
            },
            Err(_) => {
                log::info!("Keine Zustandsdatei gefunden unter {}", path.display());
                IndexMap::new()
            }
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl PersistenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "game_map_viewer_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");
        let _ = std::fs::remove_file(&path);

        let mut store = FileStore::open(&path);
        store
            .set("gamemap.language", "ru".to_string())
            .expect("Schreiben sollte klappen");
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("gamemap.language").as_deref(), Some("ru"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{not json").expect("Testdatei schreiben");

        let store = FileStore::open(&path);
        assert!(store.get("anything").is_none());

        let _ = std::fs::remove_file(&path);
    }
}
