use crate::core::SubtypeKey;
use crate::data::LoadCompletion;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Katalog-Ladeauftrag starten
    LoadCatalog,
    /// Eingetroffenen Katalog übernehmen und Start-Karte wählen
    PollCatalog,
    /// Sprache aus Adresse, Speicher oder Standard wiederherstellen
    RestoreLanguage,
    /// Sprache setzen und speichern
    SetLanguage { language: String },
    /// Karte wählen und kartenbezogene Zustände wiederherstellen
    SelectMap { map_id: String },
    /// Kamera auf die Mitte der gewählten Karte setzen
    CenterOnSelectedMap,
    /// Ladeauftrag für die Kartendaten der gewählten Karte starten
    RequestMapData,
    /// Eingetroffene Ladeergebnisse abholen und übernehmen
    PollMapData,
    /// Einzelnes Ladeergebnis übernehmen (veraltete werden verworfen)
    ApplyMapData { completion: LoadCompletion },
    /// Sichtbarkeit eines Subtyps umschalten
    ToggleSubtypeVisibility { key: SubtypeKey },
    /// Sichtbarkeit einer Region umschalten
    ToggleRegionVisibility { name: String },
    /// Alle Subtypen einblenden
    ShowAllSubtypes,
    /// Alle Subtypen ausblenden
    HideAllSubtypes,
    /// Erledigt-Status eines Markers umschalten
    ToggleMarkerCompleted { marker_id: String },
    /// Nächsten sichtbaren Marker im Radius wählen
    SelectNearestMarker {
        world_pos: glam::Vec2,
        max_distance: f32,
    },
    /// Marker-Auswahl setzen oder aufheben
    SelectMarker { marker_id: Option<String> },
    /// Markernamen ein-/ausblenden
    ToggleLabels,
    /// Seitenleiste ein-/ausklappen
    ToggleSidebar,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Cursor-Position für die Statusleiste setzen
    SetCursorPosition { world_pos: Option<glam::Vec2> },
    /// Anwendung beenden
    RequestExit,
}
