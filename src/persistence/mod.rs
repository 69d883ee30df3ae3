//! Lokale Persistenz: Speicher-Schnittstelle, Schlüsselschema, typisierte Helfer.
//!
//! Alle Zustandsspeicher bekommen den Speicher als `dyn PersistenceStore`
//! übergeben und greifen nie auf globale Ablagen zu.

mod file_store;
mod store;

pub use file_store::FileStore;
pub use store::{MemoryStore, PersistenceStore};

use crate::error::{LoadError, StoreError};

/// Schlüsselschema `<prefix>.<domäne>.v1.<mapId>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Sichtbare Subtypen einer Karte.
    pub fn visible_subtypes(&self, map_id: &str) -> String {
        format!("{}.visibleSubtypes.v1.{}", self.prefix, map_id)
    }

    /// Sichtbare Regionen einer Karte.
    pub fn visible_regions(&self, map_id: &str) -> String {
        format!("{}.visibleRegions.v1.{}", self.prefix, map_id)
    }

    /// Erledigte Marker einer Karte.
    pub fn completed_markers(&self, map_id: &str) -> String {
        format!("{}.completedMarkers.v1.{}", self.prefix, map_id)
    }

    /// Zuletzt gewählte Sprache (kartenunabhängig).
    pub fn language(&self) -> String {
        format!("{}.language", self.prefix)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(crate::shared::options::STORAGE_PREFIX)
    }
}

/// Liest eine JSON-String-Liste.
///
/// `Ok(None)` wenn der Schlüssel fehlt, `PersistedStateCorrupt` wenn der
/// Inhalt kein JSON-Array aus Strings ist.
pub fn read_string_list(
    store: &dyn PersistenceStore,
    key: &str,
) -> Result<Option<Vec<String>>, LoadError> {
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    serde_json::from_str::<Vec<String>>(&raw)
        .map(Some)
        .map_err(|e| LoadError::PersistedStateCorrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Wie [`read_string_list`], behandelt beschädigte Einträge aber wie fehlende.
pub fn load_string_list(store: &dyn PersistenceStore, key: &str) -> Option<Vec<String>> {
    read_string_list(store, key).unwrap_or_else(|e| {
        log::warn!("{} – verwende Standardwert", e);
        None
    })
}

/// Schreibt eine String-Liste als JSON-Array.
pub fn save_string_list(
    store: &mut dyn PersistenceStore,
    key: &str,
    values: &[String],
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(values)?;
    log::debug!("Persistiere {} ({} Einträge)", key, values.len());
    store.set(key, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_scheme_is_scoped_per_map() {
        let keys = StorageKeys::new("gamemap");
        assert_eq!(keys.visible_subtypes("orium"), "gamemap.visibleSubtypes.v1.orium");
        assert_eq!(keys.visible_regions("orium"), "gamemap.visibleRegions.v1.orium");
        assert_eq!(keys.completed_markers("panesterra"), "gamemap.completedMarkers.v1.panesterra");
        assert_ne!(keys.completed_markers("orium"), keys.completed_markers("panesterra"));
    }

    #[test]
    fn test_string_list_roundtrip() {
        let mut store = MemoryStore::new();
        let values = vec!["m1".to_string(), "m2".to_string()];
        save_string_list(&mut store, "k", &values).expect("Schreiben");
        assert_eq!(load_string_list(&store, "k"), Some(values));
        assert_eq!(store.get("k").as_deref(), Some(r#"["m1","m2"]"#));
    }

    #[test]
    fn test_corrupt_entry_reports_error_but_loads_as_missing() {
        let store = MemoryStore::with_entries([("k", "{broken"), ("n", "[1,2]")]);

        assert!(matches!(
            read_string_list(&store, "k"),
            Err(LoadError::PersistedStateCorrupt { .. })
        ));
        assert_eq!(load_string_list(&store, "k"), None);
        assert_eq!(load_string_list(&store, "n"), None);
        assert_eq!(load_string_list(&store, "missing"), None);
    }
}
