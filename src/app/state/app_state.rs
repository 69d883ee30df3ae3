use super::{
    CatalogLoadState, CompletionState, MapDataState, SelectionState, UiState, ViewState,
    VisibilityState,
};
use crate::app::location::ViewLocation;
use crate::app::CommandLog;
use crate::core::{Catalog, MapDescriptor, MarkerInstance, RegionInstance};
use crate::data::{DataSource, LoadExecution, MemorySource};
use crate::persistence::{MemoryStore, PersistenceStore, StorageKeys};
use crate::shared::ViewerOptions;
use std::sync::Arc;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Geladener Katalog (leer bis ein Ladeauftrag erfolgreich übernommen wurde)
    pub catalog: Arc<Catalog>,
    /// Laufender Katalog-Ladeauftrag
    pub catalog_load: CatalogLoadState,
    /// Kartendaten und Loader
    pub map_data: MapDataState,
    pub selection: SelectionState,
    pub visibility: VisibilityState,
    pub completion: CompletionState,
    pub view: ViewState,
    pub ui: UiState,
    /// Adresse der Ansicht (Query-Parameter `map`, `lng`)
    pub location: ViewLocation,
    /// Lokaler Zustandsspeicher
    pub store: Box<dyn PersistenceStore>,
    pub storage_keys: StorageKeys,
    /// Quelle für Katalog und Kartendaten
    pub data_source: Arc<dyn DataSource>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren App-State mit flüchtigem Speicher, leerer
    /// Datenquelle und blockierendem Laden.
    pub fn new() -> Self {
        let options = ViewerOptions {
            background_loading: false,
            ..ViewerOptions::default()
        };
        Self::with_services(
            options,
            Box::new(MemoryStore::new()),
            Arc::new(MemorySource::new()),
        )
    }

    /// Erstellt den App-State mit injiziertem Speicher und Datenquelle.
    pub fn with_services(
        options: ViewerOptions,
        store: Box<dyn PersistenceStore>,
        data_source: Arc<dyn DataSource>,
    ) -> Self {
        let execution = if options.background_loading {
            LoadExecution::Background
        } else {
            LoadExecution::Inline
        };
        let location = options
            .initial_location
            .as_deref()
            .map(ViewLocation::parse)
            .unwrap_or_default();

        Self {
            catalog: Arc::new(Catalog::default()),
            catalog_load: CatalogLoadState::new(execution),
            map_data: MapDataState::new(execution),
            selection: SelectionState::new(),
            visibility: VisibilityState::new(),
            completion: CompletionState::new(),
            view: ViewState::new(&options),
            ui: UiState::new(&options),
            location,
            store,
            storage_keys: StorageKeys::new(options.storage_prefix.clone()),
            data_source,
            command_log: CommandLog::new(),
            should_exit: false,
            options,
        }
    }

    /// Gibt `true` zurück, solange Katalog oder Kartendaten geladen werden.
    pub fn is_loading(&self) -> bool {
        self.catalog_load.loading || self.map_data.loading
    }

    /// Beschreibung der gewählten Karte.
    pub fn selected_map(&self) -> Option<&MapDescriptor> {
        self.selection
            .selected_map_id
            .as_deref()
            .and_then(|id| self.catalog.map(id))
    }

    /// Ein Marker ist sichtbar, wenn sein Subtyp sichtbar ist.
    pub fn is_marker_visible(&self, marker: &MarkerInstance) -> bool {
        self.visibility.is_subtype_visible(&marker.subtype_key())
    }

    pub fn is_marker_completed(&self, marker_id: &str) -> bool {
        self.completion.is_completed(marker_id)
    }

    /// Sichtbare Marker der gewählten Karte in Ladereihenfolge.
    pub fn visible_markers(&self) -> impl Iterator<Item = &MarkerInstance> + '_ {
        self.map_data
            .data
            .markers
            .iter()
            .filter(move |m| self.is_marker_visible(m))
    }

    /// Sichtbare Regionen der gewählten Karte.
    pub fn visible_regions(&self) -> impl Iterator<Item = &RegionInstance> + '_ {
        self.map_data
            .data
            .regions
            .iter()
            .filter(move |r| self.visibility.is_region_visible(&r.name))
    }

    /// Aktuell im Popup angezeigter Marker.
    pub fn selected_marker(&self) -> Option<&MarkerInstance> {
        self.selection
            .selected_marker_id
            .as_deref()
            .and_then(|id| self.map_data.data.marker(id))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
