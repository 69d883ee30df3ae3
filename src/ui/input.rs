//! Viewport-Input-Handling: Maus-Events, Drag, Scroll → AppIntent.

use crate::app::{AppIntent, AppState, Camera2D};

/// Verwaltet den Input-Zustand der Kartenansicht
#[derive(Default)]
pub struct MapInputState {
    dragging: bool,
}

impl MapInputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Linke Maustaste: Klick wählt einen Marker, Drag verschiebt die Karte.
    /// Mausrad zoomt auf die Mausposition.
    pub fn collect_map_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let viewport_size = [response.rect.width(), response.rect.height()];
        let camera = &state.view.camera;

        if viewport_size != state.view.viewport_size {
            events.push(AppIntent::ViewportResized {
                size: viewport_size,
            });
        }

        let cursor = response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, response, viewport_size, camera));
        if cursor != state.view.cursor_world {
            events.push(AppIntent::CursorMoved { world_pos: cursor });
        }

        if response.drag_started_by(egui::PointerButton::Primary) {
            self.dragging = true;
        }
        if self.dragging && response.dragged() {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                let world_delta = camera.screen_delta_to_world(glam::Vec2::new(delta.x, delta.y));
                events.push(AppIntent::CameraPan {
                    delta: -world_delta,
                });
            }
        }
        if response.drag_stopped() {
            self.dragging = false;
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::MarkerPickRequested {
                    world_pos: screen_pos_to_world(pos, response, viewport_size, camera),
                });
            }
        }

        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 && response.hovered() {
            let step = state.options.camera_scroll_zoom_step;
            let factor = if scroll > 0.0 { step } else { 1.0 / step };
            events.push(AppIntent::CameraZoom {
                factor,
                focus_world: cursor,
            });
        }

        events
    }
}

fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
