//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.selected_map() {
                Some(map) => {
                    let (width, height) = map.pixel_size();
                    ui.label(format!("Map: {} ({}×{})", map.name, width, height));
                }
                None => {
                    ui.label("No map selected");
                }
            }

            ui.separator();

            if state.catalog_load.loading {
                ui.spinner();
                ui.label("Loading catalog…");
            } else if state.map_data.loading {
                ui.spinner();
                ui.label("Loading markers…");
            } else {
                let visible = state.visible_markers().count();
                ui.label(format!(
                    "Markers: {} / {} | Completed: {}",
                    visible,
                    state.map_data.marker_count(),
                    state.completion.completed_count()
                ));
            }

            ui.separator();

            ui.label(format!("Zoom: {:.2}x", state.view.camera.zoom));
            if let Some(cursor) = state.view.cursor_world {
                ui.label(format!("Cursor: ({:.0}, {:.0})", cursor.x, cursor.y));
            }

            ui.separator();

            ui.label(format!("Language: {}", state.ui.language));

            if ui
                .small_button("Copy link")
                .on_hover_text(state.location.href())
                .clicked()
            {
                ui.ctx().copy_text(state.location.href().to_string());
            }

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(229, 57, 53), message.as_str());
            }
        });
    });
}
