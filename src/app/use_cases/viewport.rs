//! Use-Case-Funktionen für Viewport- und Layout-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Merkt sich die Weltposition unter dem Mauszeiger.
pub fn set_cursor_position(state: &mut AppState, world_pos: Option<glam::Vec2>) {
    state.view.cursor_world = world_pos;
}

/// Schaltet die Anzeige der Markernamen um.
pub fn toggle_labels(state: &mut AppState) {
    state.view.show_labels = !state.view.show_labels;
}

/// Klappt die Seitenleiste ein oder aus.
pub fn toggle_sidebar(state: &mut AppState) {
    state.ui.sidebar_collapsed = !state.ui.sidebar_collapsed;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport_size() {
        let mut state = AppState::new();

        resize(&mut state, [1920.0, 1080.0]);

        assert_eq!(state.view.viewport_size, [1920.0, 1080.0]);
    }

    #[test]
    fn toggles_flip_flags() {
        let mut state = AppState::new();
        let labels = state.view.show_labels;

        toggle_labels(&mut state);
        toggle_sidebar(&mut state);

        assert_eq!(state.view.show_labels, !labels);
        assert!(state.ui.sidebar_collapsed);
    }
}
