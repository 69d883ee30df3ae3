use crate::core::SubtypeKey;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung gestartet: Katalog laden, Sprache und Karte wählen
    StartupRequested,
    /// Katalog erneut laden (Menü)
    CatalogReloadRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Karte in der Seitenleiste gewählt
    MapSelected { map_id: String },
    /// Eingetroffene Katalog- und Kartendaten abholen (pro Frame)
    LoadPollRequested,
    /// Sprache gewählt
    LanguageSelected { language: String },
    /// Sichtbarkeit eines Subtyps umschalten
    SubtypeVisibilityToggled { key: SubtypeKey },
    /// Sichtbarkeit einer Region umschalten
    RegionVisibilityToggled { name: String },
    /// Alle Subtypen einblenden
    ShowAllSubtypesRequested,
    /// Alle Subtypen ausblenden
    HideAllSubtypesRequested,
    /// Erledigt-Status eines Markers umschalten (Popup)
    MarkerCompletionToggled { marker_id: String },
    /// Marker per Klick wählen (Nearest-Marker-Pick)
    MarkerPickRequested { world_pos: glam::Vec2 },
    /// Marker-Popup schließen
    MarkerPopupClosed,
    /// Markernamen ein-/ausblenden
    LabelsToggled,
    /// Seitenleiste ein-/ausklappen
    SidebarToggled,
    /// Kamera auf die Kartenmitte setzen
    RecenterRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Mauszeiger über der Karte bewegt (None = verlassen)
    CursorMoved { world_pos: Option<glam::Vec2> },
}
