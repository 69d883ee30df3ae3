//! Seitenleiste: Kartenwahl, Sprache, Subtyp- und Regions-Filter.

use super::map_view::marker_color;
use crate::app::{AppIntent, AppState};
use crate::core::MarkerTypeCategory;

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
pub fn render_sidebar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if state.ui.sidebar_collapsed {
        egui::SidePanel::left("sidebar_collapsed")
            .resizable(false)
            .exact_width(28.0)
            .show(ctx, |ui| {
                if ui.small_button("»").on_hover_text("Show sidebar").clicked() {
                    events.push(AppIntent::SidebarToggled);
                }
            });
        return events;
    }

    egui::SidePanel::left("sidebar")
        .default_width(260.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Maps");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("«").on_hover_text("Hide sidebar").clicked() {
                        events.push(AppIntent::SidebarToggled);
                    }
                });
            });
            render_map_list(ui, state, &mut events);

            ui.separator();
            render_language_selector(ui, state, &mut events);

            let mut show_labels = state.view.show_labels;
            if ui.checkbox(&mut show_labels, "Show labels").changed() {
                events.push(AppIntent::LabelsToggled);
            }

            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_marker_filters(ui, state, &mut events);
                render_region_filters(ui, state, &mut events);
            });
        });

    events
}

fn render_map_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    if state.catalog.maps.is_empty() {
        ui.label("No maps available");
        return;
    }

    for map in &state.catalog.maps {
        let selected = state.selection.is_selected_map(&map.name);
        if ui.selectable_label(selected, map.name.as_str()).clicked() && !selected {
            events.push(AppIntent::MapSelected {
                map_id: map.name.clone(),
            });
        }
    }
}

fn render_language_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    egui::ComboBox::from_label("Language")
        .selected_text(state.ui.language.as_str())
        .show_ui(ui, |ui| {
            for language in &state.options.supported_languages {
                let selected = *language == state.ui.language;
                if ui.selectable_label(selected, language.as_str()).clicked() && !selected {
                    events.push(AppIntent::LanguageSelected {
                        language: language.clone(),
                    });
                }
            }
        });
}

fn render_marker_filters(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        ui.strong("Markers");
        if ui.small_button("Show all").clicked() {
            events.push(AppIntent::ShowAllSubtypesRequested);
        }
        if ui.small_button("Hide all").clicked() {
            events.push(AppIntent::HideAllSubtypesRequested);
        }
    });

    for category in &state.catalog.categories {
        render_category(ui, state, category, events);
    }
}

fn render_category(
    ui: &mut egui::Ui,
    state: &AppState,
    category: &MarkerTypeCategory,
    events: &mut Vec<AppIntent>,
) {
    let progress = state
        .map_data
        .stats
        .category_progress(&state.catalog, &category.id);
    let header = if progress.total > 0 {
        format!("{} ({}/{})", category.id, progress.completed, progress.total)
    } else {
        category.id.clone()
    };

    egui::CollapsingHeader::new(header)
        .id_salt(("category", category.id.as_str()))
        .default_open(true)
        .show(ui, |ui| {
            for subtype in &category.subtypes {
                let key = category.key_for(subtype);
                let stats = &state.map_data.stats;
                let badge = if subtype.can_complete {
                    format!("{}/{}", stats.completed(&key), stats.total(&key))
                } else {
                    stats.total(&key).to_string()
                };

                ui.horizontal(|ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter().circle_filled(
                        swatch.center(),
                        5.0,
                        marker_color(&state.catalog, &key),
                    );

                    let mut visible = state.visibility.is_subtype_visible(&key);
                    if ui.checkbox(&mut visible, subtype.id.as_str()).changed() {
                        events.push(AppIntent::SubtypeVisibilityToggled { key: key.clone() });
                    }
                    ui.weak(badge);
                });
            }
        });
}

fn render_region_filters(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let regions = &state.map_data.data.regions;
    if regions.is_empty() {
        return;
    }

    ui.separator();
    ui.strong("Regions");
    for region in regions {
        let mut visible = state.visibility.is_region_visible(&region.name);
        if ui.checkbox(&mut visible, region.name.as_str()).changed() {
            events.push(AppIntent::RegionVisibilityToggled {
                name: region.name.clone(),
            });
        }
    }
}
