use crate::data::{CatalogLoader, LoadExecution};

/// Ladezustand des Katalogs. Der Katalog selbst liegt in `AppState::catalog`.
pub struct CatalogLoadState {
    /// Ein Katalog-Ladeauftrag läuft
    pub loading: bool,
    pub loader: CatalogLoader,
}

impl CatalogLoadState {
    pub fn new(execution: LoadExecution) -> Self {
        Self {
            loading: false,
            loader: CatalogLoader::new(execution),
        }
    }
}
