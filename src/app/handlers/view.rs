//! Handler für Kamera, Viewport und Layout.

use crate::app::use_cases;
use crate::app::AppState;

/// Zentriert die Kamera auf die gewählte Karte.
pub fn center_on_selected_map(state: &mut AppState) {
    use_cases::camera::center_on_selected_map(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt im Weltkoordinatensystem.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    use_cases::camera::zoom_towards(state, factor, focus_world);
}

pub fn set_cursor_position(state: &mut AppState, world_pos: Option<glam::Vec2>) {
    use_cases::viewport::set_cursor_position(state, world_pos);
}

pub fn toggle_labels(state: &mut AppState) {
    use_cases::viewport::toggle_labels(state);
}

pub fn toggle_sidebar(state: &mut AppState) {
    use_cases::viewport::toggle_sidebar(state);
}

/// Signalisiert dem Host das Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
