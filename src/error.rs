//! Fehlertypen der Lade- und Persistenzschicht.

use thiserror::Error;

/// Fehler beim Laden von Katalog, Kartendaten oder gespeichertem Zustand.
///
/// Keiner dieser Fehler ist fatal: Aufrufer fallen auf einen leeren bzw.
/// dokumentierten Standardzustand zurück.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Katalog nicht verfügbar: {reason}")]
    CatalogUnavailable { reason: String },

    #[error("Kartendaten für '{map_id}' nicht verfügbar: {reason}")]
    MapDataUnavailable { map_id: String, reason: String },

    #[error("gespeicherter Zustand unter '{key}' ist beschädigt: {reason}")]
    PersistedStateCorrupt { key: String, reason: String },
}

/// Fehler einer Datenquelle (Verzeichnis oder HTTP).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Lesefehler bei {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP-Fehler: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP-Status {status} für {url}")]
    Status { url: String, status: u16 },
}

/// Fehler des lokalen Key-Value-Speichers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Speicherdatei {path} nicht schreibbar: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialisierung fehlgeschlagen: {0}")]
    Serialize(#[from] serde_json::Error),
}
