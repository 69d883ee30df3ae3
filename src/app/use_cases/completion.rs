//! Use-Cases für den Erledigt-Status von Markern.

use crate::app::AppState;
use crate::core::DefaultPolicy;
use crate::persistence::{load_string_list, save_string_list};

/// Liest die gespeicherte Erledigt-Liste einer Karte.
///
/// Der Abgleich gegen die Marker-IDs folgt in [`reconcile_with_markers`].
pub fn read_persisted(state: &mut AppState, map_id: &str) {
    let key = state.storage_keys.completed_markers(map_id);
    state.completion.markers.reset();
    state.completion.pending = load_string_list(state.store.as_ref(), &key);
}

/// Gleicht die gelesene Liste gegen die geladenen Marker ab (Standard: leer).
pub fn reconcile_with_markers(state: &mut AppState, map_id: &str) {
    let pending = state.completion.pending.take();
    let reconciled = state.completion.markers.restore(
        state.map_data.data.marker_ids(),
        pending.as_deref(),
        DefaultPolicy::Empty,
    );
    log::debug!(
        "Erledigte Marker '{}': {} ({:?}, {} verworfen)",
        map_id,
        reconciled.keys.len(),
        reconciled.source,
        reconciled.dropped
    );
}

/// Schaltet den Erledigt-Status eines Markers um und speichert das Set.
///
/// Nur Marker abhakbarer Subtypen werden berücksichtigt.
pub fn toggle_marker_completed(state: &mut AppState, marker_id: &str) -> anyhow::Result<()> {
    let Some(marker) = state.map_data.data.marker(marker_id) else {
        log::debug!("Unbekannter Marker '{}' ignoriert", marker_id);
        return Ok(());
    };
    if !state.catalog.can_complete(&marker.subtype_key()) {
        log::debug!("Marker '{}' ist nicht abhakbar", marker_id);
        return Ok(());
    }

    let Some(completed) = state.completion.markers.toggle(&marker_id.to_string()) else {
        return Ok(());
    };
    log::debug!("Marker '{}' erledigt: {}", marker_id, completed);

    super::map_data::refresh_stats(state);
    persist_completed(state)
}

fn persist_completed(state: &mut AppState) -> anyhow::Result<()> {
    let Some(map_id) = state.selection.selected_map_id.as_deref() else {
        return Ok(());
    };
    let key = state.storage_keys.completed_markers(map_id);
    save_string_list(
        state.store.as_mut(),
        &key,
        &state.completion.markers.to_strings(),
    )?;
    Ok(())
}
