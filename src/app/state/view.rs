use crate::core::Camera2D;
use crate::shared::ViewerOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// 2D-Kamera für die Kartenansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Weltposition unter dem Mauszeiger (None = außerhalb der Karte)
    pub cursor_world: Option<glam::Vec2>,
    /// Markernamen in der Karte anzeigen
    pub show_labels: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand aus den Optionen.
    pub fn new(options: &ViewerOptions) -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            cursor_world: None,
            show_labels: options.show_labels,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Seitenleiste eingeklappt
    pub sidebar_collapsed: bool,
    /// Letzte Fehlermeldung für die Statusleiste
    pub status_message: Option<String>,
    /// Aktive Sprache
    pub language: String,
}

impl UiState {
    pub fn new(options: &ViewerOptions) -> Self {
        Self {
            sidebar_collapsed: false,
            status_message: None,
            language: options.default_language.clone(),
        }
    }
}
