//! Handler für Karten- und Marker-Auswahl.

use crate::app::use_cases;
use crate::app::AppState;

/// Wählt eine Karte (unbekannte IDs sind ein Fehler).
pub fn select_map(state: &mut AppState, map_id: &str) -> anyhow::Result<()> {
    use_cases::selection::select_map(state, map_id)
}

/// Wählt den nächsten sichtbaren Marker im Radius.
pub fn select_nearest_marker(state: &mut AppState, world_pos: glam::Vec2, max_distance: f32) {
    use_cases::selection::select_nearest_marker(state, world_pos, max_distance);
}

/// Setzt oder löscht die Marker-Auswahl.
pub fn select_marker(state: &mut AppState, marker_id: Option<String>) {
    use_cases::selection::select_marker(state, marker_id);
}
