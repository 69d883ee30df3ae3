//! Popup mit Details zum gewählten Marker.

use crate::app::{AppIntent, AppState};

/// Zeigt das Popup des gewählten Markers und gibt erzeugte Events zurück.
pub fn show_marker_popup(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(marker) = state.selected_marker() else {
        return events;
    };

    let key = marker.subtype_key();
    let mut open = true;

    egui::Window::new(marker.display_name())
        .id(egui::Id::new(("marker_popup", marker.id.as_str())))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(format!("{} › {}", key.category(), key.subtype()));
            ui.weak(format!(
                "({:.0}, {:.0})",
                marker.position[0], marker.position[1]
            ));

            if let Some(description) = &marker.description {
                ui.separator();
                ui.label(description.as_str());
            }

            if state.catalog.can_complete(&key) {
                ui.separator();
                let mut completed = state.is_marker_completed(&marker.id);
                if ui.checkbox(&mut completed, "Completed").changed() {
                    events.push(AppIntent::MarkerCompletionToggled {
                        marker_id: marker.id.clone(),
                    });
                }
            }
        });

    if !open {
        events.push(AppIntent::MarkerPopupClosed);
    }

    events
}
