//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Reload catalog").clicked() {
                    events.push(AppIntent::CatalogReloadRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let has_map = state.selection.selected_map_id.is_some();

                if ui
                    .add_enabled(has_map, egui::Button::new("Center map"))
                    .clicked()
                {
                    events.push(AppIntent::RecenterRequested);
                    ui.close();
                }

                if ui.button("Zoom in").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                let labels = if state.view.show_labels {
                    "Hide labels"
                } else {
                    "Show labels"
                };
                if ui.button(labels).clicked() {
                    events.push(AppIntent::LabelsToggled);
                    ui.close();
                }

                let sidebar = if state.ui.sidebar_collapsed {
                    "Show sidebar"
                } else {
                    "Hide sidebar"
                };
                if ui.button(sidebar).clicked() {
                    events.push(AppIntent::SidebarToggled);
                    ui.close();
                }
            });
        });
    });

    events
}
