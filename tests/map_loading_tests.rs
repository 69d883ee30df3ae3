mod common;

use common::{make_state, make_state_with, poll, source, start, switch_map};
use crossbeam_channel::Receiver;
use game_map_viewer::{
    AppCommand, AppController, AppIntent, DataSource, MemorySource, MemoryStore, SourceError,
};
use std::time::{Duration, Instant};

#[test]
fn test_late_result_for_previous_map_is_ignored() {
    let mut controller = AppController::new();
    let mut state = make_state(None);
    start(&mut controller, &mut state);

    // Auftrag für panesterra starten, Ergebnis abfangen (noch "unterwegs")
    controller
        .handle_intent(
            &mut state,
            AppIntent::MapSelected {
                map_id: "panesterra".into(),
            },
        )
        .expect("MapSelected sollte ohne Fehler durchlaufen");
    let in_flight = state.map_data.loader.drain();
    assert_eq!(in_flight.len(), 1);

    // Zurück zu orium, dessen Ergebnis trifft zuerst ein
    switch_map(&mut controller, &mut state, "orium");
    assert_eq!(state.map_data.data.map_id, "orium");

    // Das späte panesterra-Ergebnis darf nichts mehr ändern
    for completion in in_flight {
        controller
            .handle_command(&mut state, AppCommand::ApplyMapData { completion })
            .expect("ApplyMapData sollte ohne Fehler durchlaufen");
    }

    assert_eq!(state.selection.selected_map_id.as_deref(), Some("orium"));
    assert_eq!(state.map_data.data.map_id, "orium");
    assert_eq!(state.map_data.marker_count(), 7);
    assert_eq!(state.visibility.regions.len(), 2);
}

#[test]
fn test_rapid_switches_apply_only_last_selection() {
    let mut controller = AppController::new();
    let mut state = make_state(None);
    start(&mut controller, &mut state);

    for map_id in ["panesterra", "orium", "panesterra"] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::MapSelected {
                    map_id: map_id.into(),
                },
            )
            .expect("MapSelected sollte ohne Fehler durchlaufen");
    }
    poll(&mut controller, &mut state);

    assert_eq!(state.map_data.data.map_id, "panesterra");
    assert_eq!(state.map_data.marker_count(), 2);
    assert!(!state.map_data.loading);
}

#[test]
fn test_missing_marker_document_yields_empty_map_data() {
    let mut controller = AppController::new();
    let mut source = source();
    source.insert(
        game_map_viewer::data::markers_path("panesterra"),
        "{ kaputt",
    );
    let mut state = make_state_with(None, Box::new(MemoryStore::new()), source);
    start(&mut controller, &mut state);

    switch_map(&mut controller, &mut state, "panesterra");

    assert_eq!(
        state.selection.selected_map_id.as_deref(),
        Some("panesterra")
    );
    assert!(state.map_data.data.markers.is_empty());
    assert!(state.map_data.last_error.is_some());
    assert!(state.ui.status_message.is_some());
    assert!(!state.map_data.loading);
}

fn background_state(source: std::sync::Arc<dyn DataSource>) -> game_map_viewer::AppState {
    let options = game_map_viewer::ViewerOptions {
        background_loading: true,
        ..common::inline_options(None)
    };
    game_map_viewer::AppState::with_services(options, Box::new(MemoryStore::new()), source)
}

fn poll_until_idle(controller: &mut AppController, state: &mut game_map_viewer::AppState) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.is_loading() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
        poll(controller, state);
    }
}

/// Datenquelle, die jeden Abruf bis zur Freigabe zurückhält.
struct GatedSource {
    inner: MemorySource,
    gate: Receiver<()>,
}

impl DataSource for GatedSource {
    fn fetch_text(&self, path: &str) -> Result<Option<String>, SourceError> {
        // Freigabe = Sender verworfen; danach kehrt recv sofort zurück
        let _ = self.gate.recv_timeout(Duration::from_secs(5));
        self.inner.fetch_text(path)
    }

    fn describe(&self) -> String {
        "gated".to_string()
    }
}

#[test]
fn test_background_loading_delivers_through_poll() {
    let mut controller = AppController::new();
    let mut state = background_state(std::sync::Arc::new(source()));
    controller
        .handle_intent(&mut state, AppIntent::StartupRequested)
        .expect("StartupRequested sollte ohne Fehler durchlaufen");

    poll_until_idle(&mut controller, &mut state);

    assert!(!state.is_loading(), "Worker sollte rechtzeitig liefern");
    assert_eq!(state.catalog.maps.len(), 2);
    assert_eq!(state.map_data.data.map_id, "orium");
}

#[test]
fn test_catalog_request_returns_before_source_answers() {
    let mut controller = AppController::new();
    let (release, gate) = crossbeam_channel::bounded::<()>(0);
    let mut state = background_state(std::sync::Arc::new(GatedSource {
        inner: source(),
        gate,
    }));

    let started = Instant::now();
    controller
        .handle_intent(&mut state, AppIntent::StartupRequested)
        .expect("StartupRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::CatalogReloadRequested)
        .expect("CatalogReloadRequested sollte ohne Fehler durchlaufen");
    poll(&mut controller, &mut state);

    assert!(started.elapsed() < Duration::from_secs(2), "UI-Thread blockiert");
    assert!(state.catalog_load.loading);
    assert!(state.catalog.is_empty());

    drop(release);
    poll_until_idle(&mut controller, &mut state);

    assert!(!state.is_loading());
    assert_eq!(state.selection.selected_map_id.as_deref(), Some("orium"));
    assert_eq!(state.map_data.marker_count(), 7);
}
