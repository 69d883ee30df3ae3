//! Use-Cases für das Laden der Kartendaten.
//!
//! Es gilt „letzte Auswahl gewinnt“: nur das Ergebnis des neuesten Auftrags
//! für die aktuell gewählte Karte wird übernommen.

use crate::app::AppState;
use crate::core::{MapData, MarkerStats};
use crate::data::LoadCompletion;
use std::sync::Arc;

/// Startet einen Ladeauftrag für die gewählte Karte.
pub fn request_map_data(state: &mut AppState) {
    let Some(map_id) = state.selection.selected_map_id.clone() else {
        log::debug!("Keine Karte gewählt, kein Ladeauftrag");
        return;
    };

    state.map_data.loading = true;
    state.map_data.last_error = None;
    let ticket = state
        .map_data
        .loader
        .spawn(Arc::clone(&state.data_source), &map_id);
    log::debug!(
        "Kartendaten für '{}' angefordert (Generation {})",
        map_id,
        ticket.generation
    );
}

/// Holt alle eingetroffenen Ergebnisse ab und übernimmt die aktuellen.
pub fn poll_map_data(state: &mut AppState) {
    for completion in state.map_data.loader.drain() {
        apply_map_data(state, completion);
    }
}

/// Übernimmt ein Ladeergebnis, sofern es noch aktuell ist.
///
/// Fehler führen zu leeren Kartendaten; die Karte bleibt gewählt.
pub fn apply_map_data(state: &mut AppState, completion: LoadCompletion) {
    let LoadCompletion { ticket, result } = completion;

    if !state.map_data.loader.is_current(&ticket)
        || !state.selection.is_selected_map(&ticket.map_id)
    {
        log::debug!(
            "Veraltetes Ergebnis für '{}' verworfen (Generation {})",
            ticket.map_id,
            ticket.generation
        );
        return;
    }

    state.map_data.loading = false;
    match result {
        Ok(data) => {
            log::info!(
                "Kartendaten übernommen: '{}' ({} Marker, {} Regionen)",
                data.map_id,
                data.markers.len(),
                data.regions.len()
            );
            state.map_data.data = data;
            state.map_data.last_error = None;
        }
        Err(e) => {
            log::error!("{}", e);
            state.map_data.data = Arc::new(MapData::empty(ticket.map_id.as_str()));
            state.ui.status_message = Some(e.to_string());
            state.map_data.last_error = Some(e);
        }
    }

    super::visibility::restore_regions(state, &ticket.map_id);
    super::completion::reconcile_with_markers(state, &ticket.map_id);
    refresh_stats(state);
}

/// Verwirft geladene Kartendaten und alle laufenden Aufträge.
pub fn clear_map_data(state: &mut AppState) {
    let map_id = state.selection.selected_map_id.as_deref().unwrap_or_default();
    state.map_data.data = Arc::new(MapData::empty(map_id));
    state.map_data.loading = false;
    state.map_data.last_error = None;
    state.map_data.loader.invalidate();
    refresh_stats(state);
}

/// Berechnet die abgeleiteten Zähler aus Markern und Erledigt-Set neu.
pub fn refresh_stats(state: &mut AppState) {
    state.map_data.stats =
        MarkerStats::compute(&state.map_data.data.markers, state.completion.markers.active());
}
