//! Datenquellen für Katalog- und Kartendokumente.

use crate::error::SourceError;
use indexmap::IndexMap;
use std::path::PathBuf;
use std::time::Duration;

/// Nur-Lese-Quelle deklarativer Datendokumente, adressiert über relative Pfade
/// wie `maps.json` oder `markers/orium.json`.
pub trait DataSource: Send + Sync {
    /// Liest ein Dokument. `Ok(None)` wenn es nicht existiert.
    fn fetch_text(&self, path: &str) -> Result<Option<String>, SourceError>;

    /// Kurzbeschreibung für Logs und Statusleiste.
    fn describe(&self) -> String;
}

/// Static-Modus: Dokumente aus einem lokalen Verzeichnis.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataSource for DirectorySource {
    fn fetch_text(&self, path: &str) -> Result<Option<String>, SourceError> {
        let full = self.root.join(path);
        match std::fs::read_to_string(&full) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SourceError::Io {
                path: full.display().to_string(),
                source,
            }),
        }
    }

    fn describe(&self) -> String {
        format!("Verzeichnis {}", self.root.display())
    }
}

/// Dynamic-Modus: Dokumente von einer HTTP-API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Erstellt die Quelle mit Basis-URL (ohne abschließenden Slash) und Timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl DataSource for HttpSource {
    fn fetch_text(&self, path: &str) -> Result<Option<String>, SourceError> {
        let url = self.url_for(path);
        let response = self.client.get(&url).send()?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        Ok(Some(response.text()?))
    }

    fn describe(&self) -> String {
        format!("API {}", self.base_url)
    }
}

/// Dokumente im Speicher, z.B. für Tests und Benchmarks.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: IndexMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt ein Dokument ab (ersetzt ein vorhandenes).
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.documents.insert(path.into(), content.into());
    }

    /// Builder-Variante von [`MemorySource::insert`].
    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }
}

impl DataSource for MemorySource {
    fn fetch_text(&self, path: &str) -> Result<Option<String>, SourceError> {
        Ok(self.documents.get(path).cloned())
    }

    fn describe(&self) -> String {
        format!("Speicher ({} Dokumente)", self.documents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_source_reports_missing_files_as_none() {
        let root = std::env::temp_dir().join(format!("game_map_viewer_src_{}", std::process::id()));
        std::fs::create_dir_all(root.join("markers")).expect("Testverzeichnis");
        std::fs::write(root.join("markers/orium.json"), "{}").expect("Testdatei");

        let source = DirectorySource::new(&root);
        assert_eq!(
            source.fetch_text("markers/orium.json").expect("lesbar").as_deref(),
            Some("{}")
        );
        assert!(source.fetch_text("markers/none.json").expect("lesbar").is_none());

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn test_http_source_joins_paths_without_double_slash() {
        let source =
            HttpSource::new("http://localhost:9000/api/v1/export/", Duration::from_secs(1))
                .expect("Client");
        assert_eq!(
            source.url_for("/maps.json"),
            "http://localhost:9000/api/v1/export/maps.json"
        );
    }
}
