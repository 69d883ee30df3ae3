//! Use-Cases für die Sichtbarkeit von Subtypen und Regionen.
//!
//! Nur Benutzeraktionen schreiben in den Speicher; das Wiederherstellen
//! beim Kartenwechsel liest ausschließlich.

use crate::app::AppState;
use crate::core::{DefaultPolicy, SubtypeKey};
use crate::persistence::{load_string_list, save_string_list};

/// Stellt die Subtyp-Sichtbarkeit einer Karte wieder her (Standard: alle).
pub fn restore_subtypes(state: &mut AppState, map_id: &str) {
    let key = state.storage_keys.visible_subtypes(map_id);
    let persisted = load_string_list(state.store.as_ref(), &key);
    let reconciled = state.visibility.subtypes.restore(
        state.catalog.subtype_keys(),
        persisted.as_deref(),
        DefaultPolicy::AllValid,
    );
    log::debug!(
        "Subtyp-Sichtbarkeit '{}': {} aktiv ({:?}, {} verworfen)",
        map_id,
        reconciled.keys.len(),
        reconciled.source,
        reconciled.dropped
    );
}

/// Leert die Regions-Sichtbarkeit bis zum Eintreffen der Kartendaten.
pub fn reset_regions(state: &mut AppState) {
    state.visibility.regions.reset();
}

/// Stellt die Regions-Sichtbarkeit gegen die geladenen Regionen wieder her.
pub fn restore_regions(state: &mut AppState, map_id: &str) {
    let key = state.storage_keys.visible_regions(map_id);
    let persisted = load_string_list(state.store.as_ref(), &key);
    let reconciled = state.visibility.regions.restore(
        state.map_data.data.region_names(),
        persisted.as_deref(),
        DefaultPolicy::AllValid,
    );
    log::debug!(
        "Regions-Sichtbarkeit '{}': {} aktiv ({:?}, {} verworfen)",
        map_id,
        reconciled.keys.len(),
        reconciled.source,
        reconciled.dropped
    );
}

/// Schaltet die Sichtbarkeit eines Subtyps um und speichert sie.
///
/// Unbekannte Schlüssel ändern nichts.
pub fn toggle_subtype(state: &mut AppState, key: &SubtypeKey) -> anyhow::Result<()> {
    match state.visibility.subtypes.toggle(key) {
        Some(visible) => {
            log::debug!("Subtyp {} sichtbar: {}", key, visible);
            persist_subtypes(state)
        }
        None => {
            log::debug!("Unbekannter Subtyp {} ignoriert", key);
            Ok(())
        }
    }
}

/// Blendet alle Subtypen des Katalogs ein.
pub fn show_all_subtypes(state: &mut AppState) -> anyhow::Result<()> {
    state.visibility.subtypes.select_all();
    persist_subtypes(state)
}

/// Blendet alle Subtypen aus.
pub fn hide_all_subtypes(state: &mut AppState) -> anyhow::Result<()> {
    state.visibility.subtypes.clear();
    persist_subtypes(state)
}

/// Schaltet die Sichtbarkeit einer Region um und speichert sie.
pub fn toggle_region(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    match state.visibility.regions.toggle(&name.to_string()) {
        Some(visible) => {
            log::debug!("Region '{}' sichtbar: {}", name, visible);
            persist_regions(state)
        }
        None => {
            log::debug!("Unbekannte Region '{}' ignoriert", name);
            Ok(())
        }
    }
}

fn persist_subtypes(state: &mut AppState) -> anyhow::Result<()> {
    let Some(map_id) = state.selection.selected_map_id.as_deref() else {
        return Ok(());
    };
    let key = state.storage_keys.visible_subtypes(map_id);
    save_string_list(
        state.store.as_mut(),
        &key,
        &state.visibility.subtypes.to_strings(),
    )?;
    Ok(())
}

fn persist_regions(state: &mut AppState) -> anyhow::Result<()> {
    let Some(map_id) = state.selection.selected_map_id.as_deref() else {
        return Ok(());
    };
    let key = state.storage_keys.visible_regions(map_id);
    save_string_list(
        state.store.as_mut(),
        &key,
        &state.visibility.regions.to_strings(),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, MarkerTypeCategory, MarkerTypeSubtype};
    use std::sync::Arc;

    fn state() -> AppState {
        let mut state = AppState::new();
        let subtype = |id: &str| MarkerTypeSubtype {
            id: id.into(),
            icon: None,
            color: None,
            can_complete: false,
        };
        state.catalog = Arc::new(Catalog::new(
            vec![],
            vec![MarkerTypeCategory {
                id: "loot".into(),
                icon: None,
                color: None,
                subtypes: vec![subtype("chest"), subtype("urn")],
            }],
        ));
        state
    }

    #[test]
    fn restore_without_persisted_entry_shows_all_and_writes_nothing() {
        let mut state = state();

        restore_subtypes(&mut state, "orium");

        assert_eq!(state.visibility.subtypes.len(), 2);
        assert!(state
            .store
            .get(&state.storage_keys.visible_subtypes("orium"))
            .is_none());
    }

    #[test]
    fn toggle_without_selected_map_changes_memory_only() {
        let mut state = state();
        restore_subtypes(&mut state, "orium");

        toggle_subtype(&mut state, &SubtypeKey::new("loot", "chest")).expect("toggle");

        assert_eq!(state.visibility.subtypes.len(), 1);
        assert!(state
            .store
            .get(&state.storage_keys.visible_subtypes("orium"))
            .is_none());
    }

    #[test]
    fn hide_all_persists_empty_list_for_selected_map() {
        let mut state = state();
        state.selection.selected_map_id = Some("orium".into());
        restore_subtypes(&mut state, "orium");

        hide_all_subtypes(&mut state).expect("hide");

        assert!(state.visibility.subtypes.is_empty());
        assert_eq!(
            state
                .store
                .get(&state.storage_keys.visible_subtypes("orium"))
                .as_deref(),
            Some("[]")
        );
    }
}
