//! Zentrale Konfiguration für den Karten-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Datenquelle ─────────────────────────────────────────────────────

/// Standard-Datenverzeichnis im Static-Modus.
pub const DATA_DIR: &str = "data";
/// Standard-API im Dynamic-Modus.
pub const API_BASE_URL: &str = "http://localhost:9000/api/v1/export";
/// HTTP-Timeout in Sekunden.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// ── Persistenz ──────────────────────────────────────────────────────

/// Präfix aller Speicher-Schlüssel.
pub const STORAGE_PREFIX: &str = "gamemap";
/// Dateiname des lokalen Zustandsspeichers.
pub const STORAGE_FILE: &str = "game_map_viewer_state.json";

// ── Sprache ─────────────────────────────────────────────────────────

/// Fallback-Sprache.
pub const DEFAULT_LANGUAGE: &str = "en";

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor (Pixel pro Karteneinheit).
pub const CAMERA_ZOOM_MIN: f32 = 0.25;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 4.0;
/// Zoom-Schritt bei Menü-Buttons.
pub const CAMERA_ZOOM_STEP: f32 = 1.25;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Marker-Darstellung ─────────────────────────────────────────────

/// Marker-Radius in Bildschirm-Pixeln.
pub const MARKER_RADIUS_PX: f32 = 7.0;
/// Pick-Radius in Bildschirm-Pixeln.
pub const MARKER_PICK_RADIUS_PX: f32 = 12.0;
/// Deckkraft erledigter Marker.
pub const COMPLETED_MARKER_OPACITY: f32 = 0.4;

/// Herkunft der Katalog- und Kartendaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    /// Lokales Verzeichnis
    #[default]
    Static,
    /// HTTP-API
    Dynamic,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `game_map_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Datenquelle ─────────────────────────────────────────────
    pub data_mode: DataMode,
    /// Wurzelverzeichnis im Static-Modus
    pub data_dir: PathBuf,
    /// Basis-URL im Dynamic-Modus
    pub api_base_url: String,
    pub http_timeout_secs: u64,
    /// Kartendaten im Hintergrund laden (aus: blockierend im UI-Thread)
    pub background_loading: bool,

    // ── Persistenz ──────────────────────────────────────────────
    /// Pfad der Zustandsdatei (relativ zur Binary, falls nicht absolut)
    pub storage_path: PathBuf,
    pub storage_prefix: String,

    // ── Sprache ─────────────────────────────────────────────────
    pub default_language: String,
    pub supported_languages: Vec<String>,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Markernamen standardmäßig anzeigen
    pub show_labels: bool,
    pub camera_zoom_min: f32,
    pub camera_zoom_max: f32,
    pub camera_zoom_step: f32,
    pub camera_scroll_zoom_step: f32,
    pub marker_radius_px: f32,
    pub marker_pick_radius_px: f32,
    pub completed_marker_opacity: f32,

    /// Start-Adresse, z.B. `?map=orium&lng=ru`
    pub initial_location: Option<String>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            data_mode: DataMode::Static,
            data_dir: PathBuf::from(DATA_DIR),
            api_base_url: API_BASE_URL.to_string(),
            http_timeout_secs: HTTP_TIMEOUT_SECS,
            background_loading: true,

            storage_path: PathBuf::from(STORAGE_FILE),
            storage_prefix: STORAGE_PREFIX.to_string(),

            default_language: DEFAULT_LANGUAGE.to_string(),
            supported_languages: vec!["en".to_string(), "ru".to_string()],

            show_labels: true,
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            marker_radius_px: MARKER_RADIUS_PX,
            marker_pick_radius_px: MARKER_PICK_RADIUS_PX,
            completed_marker_opacity: COMPLETED_MARKER_OPACITY,

            initial_location: None,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.validated()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unbrauchbare Kamera-Werte durch die Standardwerte.
    ///
    /// Zoom-Grenzen müssen endlich, positiv und aufsteigend sein, Zoom-Schritte
    /// endlich und positiv.
    pub fn validated(mut self) -> Self {
        let min = self.camera_zoom_min;
        let max = self.camera_zoom_max;
        let bounds_ok = min.is_finite() && max.is_finite() && min > 0.0 && min <= max;
        if !bounds_ok {
            log::warn!(
                "Zoom-Grenzen ungültig (min {}, max {}), verwende Standard {}..{}",
                min,
                max,
                CAMERA_ZOOM_MIN,
                CAMERA_ZOOM_MAX
            );
            self.camera_zoom_min = CAMERA_ZOOM_MIN;
            self.camera_zoom_max = CAMERA_ZOOM_MAX;
        }

        if !(self.camera_zoom_step.is_finite() && self.camera_zoom_step > 0.0) {
            log::warn!("Zoom-Schritt ungültig ({}), verwende Standard", self.camera_zoom_step);
            self.camera_zoom_step = CAMERA_ZOOM_STEP;
        }
        if !(self.camera_scroll_zoom_step.is_finite() && self.camera_scroll_zoom_step > 0.0) {
            log::warn!(
                "Scroll-Zoom-Schritt ungültig ({}), verwende Standard",
                self.camera_scroll_zoom_step
            );
            self.camera_scroll_zoom_step = CAMERA_SCROLL_ZOOM_STEP;
        }

        self
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        Self::beside_binary(std::path::Path::new("game_map_viewer.toml"))
    }

    /// Absoluter Pfad der Zustandsdatei.
    pub fn resolved_storage_path(&self) -> PathBuf {
        if self.storage_path.is_absolute() {
            self.storage_path.clone()
        } else {
            Self::beside_binary(&self.storage_path)
        }
    }

    /// Gibt `true` zurück, wenn die Sprache unterstützt wird.
    pub fn supports_language(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|l| l == language)
    }

    fn beside_binary(file: &std::path::Path) -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("game_map_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(file)
    }
}
