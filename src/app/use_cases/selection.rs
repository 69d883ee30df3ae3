//! Use-Cases für Karten- und Marker-Auswahl.

use crate::app::location::MAP_PARAM;
use crate::app::AppState;

/// Wählt die Start-Karte: `map`-Parameter der Adresse, falls im Katalog,
/// sonst die erste Katalogkarte. Die Wahl wird in die Adresse zurückgeschrieben.
///
/// Bei leerem Katalog bleibt keine Karte gewählt.
pub fn select_initial_map(state: &mut AppState) -> anyhow::Result<()> {
    let requested = state.location.map_id();
    let map_id = match requested {
        Some(id) if state.catalog.contains_map(&id) => id,
        other => {
            if let Some(id) = other {
                log::warn!("Karte '{}' aus der Adresse unbekannt, nutze erste Karte", id);
            }
            let first = state.catalog.first_map().map(|map| map.name.clone());
            match first {
                Some(id) => id,
                None => {
                    log::warn!("Katalog enthält keine Karten");
                    clear_map_selection(state);
                    return Ok(());
                }
            }
        }
    };

    select_map(state, &map_id)?;
    super::camera::center_on_selected_map(state);
    super::map_data::request_map_data(state);
    Ok(())
}

/// Wählt eine Karte und stellt deren Sichtbarkeit und Erledigt-Status wieder her.
///
/// Bereits geladene Kartendaten werden verworfen; der Ladeauftrag folgt
/// separat über `RequestMapData`.
pub fn select_map(state: &mut AppState, map_id: &str) -> anyhow::Result<()> {
    if !state.catalog.contains_map(map_id) {
        anyhow::bail!("Unbekannte Karte: {map_id}");
    }

    state.selection.selected_map_id = Some(map_id.to_string());
    state.selection.selected_marker_id = None;
    state.location.set_param(MAP_PARAM, Some(map_id));

    super::visibility::restore_subtypes(state, map_id);
    super::visibility::reset_regions(state);
    super::completion::read_persisted(state, map_id);
    super::map_data::clear_map_data(state);

    log::info!("Karte gewählt: {}", map_id);
    Ok(())
}

/// Hebt die Kartenauswahl auf und leert alle kartenbezogenen Zustände.
pub fn clear_map_selection(state: &mut AppState) {
    state.selection.selected_map_id = None;
    state.selection.selected_marker_id = None;
    state.visibility.subtypes.reset();
    state.visibility.regions.reset();
    state.completion.markers.reset();
    state.completion.pending = None;
    super::map_data::clear_map_data(state);
}

/// Wählt den nächsten sichtbaren Marker im Radius; ohne Treffer wird die
/// Auswahl aufgehoben.
pub fn select_nearest_marker(state: &mut AppState, world_pos: glam::Vec2, max_distance: f32) {
    let hit = state
        .map_data
        .data
        .nearest_marker(world_pos, max_distance, |m| state.is_marker_visible(m))
        .map(|m| m.id.clone());

    state.selection.selected_marker_id = hit;
}

/// Setzt die Marker-Auswahl direkt. Unbekannte IDs heben die Auswahl auf.
pub fn select_marker(state: &mut AppState, marker_id: Option<String>) {
    state.selection.selected_marker_id =
        marker_id.filter(|id| state.map_data.data.marker(id).is_some());
}
