//! Use-Cases: Katalog laden.
//!
//! Das Laden läuft über den `CatalogLoader`; übernommen wird erst beim
//! Abholen der Ergebnisse, danach folgt die Start-Kartenwahl.

use crate::app::AppState;
use crate::core::Catalog;
use crate::data::CatalogCompletion;
use std::sync::Arc;

/// Startet einen Katalog-Ladeauftrag (ein Versuch, keine Wiederholung).
///
/// Der bisherige Katalog bleibt bis zur Übernahme des Ergebnisses aktiv.
pub fn request_catalog(state: &mut AppState) {
    state.catalog_load.loading = true;
    let generation = state
        .catalog_load
        .loader
        .spawn(Arc::clone(&state.data_source));
    log::debug!("Katalog angefordert (Generation {})", generation);
}

/// Holt eingetroffene Katalog-Ergebnisse ab und übernimmt das aktuelle.
pub fn poll_catalog(state: &mut AppState) -> anyhow::Result<()> {
    for completion in state.catalog_load.loader.drain() {
        apply_catalog(state, completion)?;
    }
    Ok(())
}

/// Übernimmt ein Katalog-Ergebnis, sofern es vom neuesten Auftrag stammt.
///
/// Bei Fehler bleibt ein leerer Katalog aktiv; die Meldung landet in der
/// Statusleiste. Kartenbezogene Zustände werden zurückgesetzt, weil ihre
/// Schlüsselräume ungültig geworden sein können. Danach wird die Start-Karte
/// aus der Adresse (oder die erste Karte) gewählt.
pub fn apply_catalog(state: &mut AppState, completion: CatalogCompletion) -> anyhow::Result<()> {
    if !state.catalog_load.loader.is_current(&completion) {
        log::debug!(
            "Veralteter Katalog verworfen (Generation {})",
            completion.generation
        );
        return Ok(());
    }

    state.catalog_load.loading = false;
    match completion.result {
        Ok(catalog) => {
            state.catalog = Arc::new(catalog);
            state.ui.status_message = None;
        }
        Err(e) => {
            log::error!("{}", e);
            state.catalog = Arc::new(Catalog::default());
            state.ui.status_message = Some(e.to_string());
        }
    }

    super::selection::clear_map_selection(state);
    super::selection::select_initial_map(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MemorySource, MAPS_PATH, TYPES_PATH};
    use crate::persistence::MemoryStore;
    use crate::shared::ViewerOptions;

    fn source() -> MemorySource {
        MemorySource::new()
            .with(
                MAPS_PATH,
                r#"{"maps":[{"name":"orium","width":100,"height":100}]}"#,
            )
            .with(TYPES_PATH, r#"{"categories":[]}"#)
    }

    fn state_with_source(source: MemorySource) -> AppState {
        let mut state = AppState::new();
        state.data_source = Arc::new(source);
        state
    }

    #[test]
    fn catalog_is_applied_on_poll_not_on_request() {
        let mut state = state_with_source(source());
        state.ui.status_message = Some("alt".into());

        request_catalog(&mut state);
        assert!(state.catalog_load.loading);
        assert!(state.catalog.is_empty(), "vor dem Abholen unverändert");

        poll_catalog(&mut state).expect("poll");

        assert!(!state.catalog_load.loading);
        assert_eq!(state.catalog.maps.len(), 1);
        assert!(state.ui.status_message.is_none());
        assert_eq!(state.selection.selected_map_id.as_deref(), Some("orium"));
        assert!(state.map_data.loading, "Kartendaten wurden angefordert");
    }

    #[test]
    fn failed_catalog_load_leaves_empty_catalog_and_status_message() {
        let mut state = state_with_source(MemorySource::new());

        request_catalog(&mut state);
        poll_catalog(&mut state).expect("Fehler wird nicht propagiert");

        assert!(state.catalog.is_empty());
        assert!(!state.catalog_load.loading);
        assert!(state.selection.selected_map_id.is_none());
        assert!(state
            .ui
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("Katalog")));
    }

    #[test]
    fn superseded_catalog_result_is_ignored() {
        let mut state = state_with_source(source());
        request_catalog(&mut state);
        let mut first = state.catalog_load.loader.drain();
        request_catalog(&mut state);

        apply_catalog(&mut state, first.remove(0)).expect("apply");
        assert!(state.catalog.is_empty());
        assert!(state.catalog_load.loading, "neuerer Auftrag läuft noch");

        poll_catalog(&mut state).expect("poll");
        assert!(state.catalog.contains_map("orium"));
    }

    #[test]
    fn background_request_does_not_block_and_arrives_later() {
        let options = ViewerOptions {
            background_loading: true,
            ..ViewerOptions::default()
        };
        let mut state = AppState::with_services(
            options,
            Box::new(MemoryStore::new()),
            Arc::new(source()),
        );
        request_catalog(&mut state);
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while state.catalog_load.loading && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(5));
            poll_catalog(&mut state).expect("poll");
        }

        assert!(!state.catalog_load.loading);
        assert!(state.catalog.contains_map("orium"));
    }
}
