use crate::core::{MapData, MarkerStats};
use crate::data::{LoadExecution, MapDataLoader};
use crate::error::LoadError;
use std::sync::Arc;

/// Kartendaten der gewählten Karte samt Ladezustand.
pub struct MapDataState {
    /// Zuletzt übernommene Kartendaten (leer bis zum ersten Ergebnis)
    pub data: Arc<MapData>,
    /// Ein Ladeauftrag für die gewählte Karte läuft
    pub loading: bool,
    /// Fehler des letzten übernommenen Ladeauftrags
    pub last_error: Option<LoadError>,
    /// Abgeleitete Zähler, nach jeder Änderung neu berechnet
    pub stats: MarkerStats,
    pub loader: MapDataLoader,
}

impl MapDataState {
    pub fn new(execution: LoadExecution) -> Self {
        Self {
            data: Arc::new(MapData::default()),
            loading: false,
            last_error: None,
            stats: MarkerStats::default(),
            loader: MapDataLoader::new(execution),
        }
    }

    pub fn marker_count(&self) -> usize {
        self.data.markers.len()
    }
}
