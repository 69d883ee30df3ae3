use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{Catalog, MapData, MarkerInstance, MarkerTypeCategory, MarkerTypeSubtype};
use std::sync::Arc;

use super::map_intent_to_commands;

fn state_with_chest_and_npc() -> AppState {
    let mut state = AppState::new();
    state.catalog = Arc::new(Catalog::new(
        vec![],
        vec![MarkerTypeCategory {
            id: "loot".into(),
            icon: None,
            color: None,
            subtypes: vec![
                MarkerTypeSubtype {
                    id: "chest".into(),
                    icon: None,
                    color: None,
                    can_complete: true,
                },
                MarkerTypeSubtype {
                    id: "npc".into(),
                    icon: None,
                    color: None,
                    can_complete: false,
                },
            ],
        }],
    ));
    let marker = |id: &str, subtype: &str| MarkerInstance {
        id: id.into(),
        category: "loot".into(),
        subtype: subtype.into(),
        position: [0.0, 0.0],
        name: None,
        description: None,
    };
    state.map_data.data = Arc::new(MapData::new(
        "orium",
        vec![marker("m1", "chest"), marker("n1", "npc")],
        vec![],
    ));
    state
}

#[test]
fn startup_requested_restores_language_then_requests_catalog() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::StartupRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::RestoreLanguage));
    assert!(matches!(commands[1], AppCommand::LoadCatalog));
}

#[test]
fn load_poll_collects_catalog_before_map_data() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::LoadPollRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::PollCatalog));
    assert!(matches!(commands[1], AppCommand::PollMapData));
}

#[test]
fn map_selected_selects_centers_and_requests_data() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapSelected {
            map_id: "orium".into(),
        },
    );

    assert_eq!(commands.len(), 3);
    assert!(matches!(&commands[0], AppCommand::SelectMap { map_id } if map_id == "orium"));
    assert!(matches!(commands[1], AppCommand::CenterOnSelectedMap));
    assert!(matches!(commands[2], AppCommand::RequestMapData));
}

#[test]
fn completion_toggle_for_completable_marker_maps_to_command() {
    let state = state_with_chest_and_npc();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MarkerCompletionToggled {
            marker_id: "m1".into(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        &commands[0],
        AppCommand::ToggleMarkerCompleted { marker_id } if marker_id == "m1"
    ));
}

#[test]
fn completion_toggle_for_non_completable_or_unknown_marker_is_dropped() {
    let state = state_with_chest_and_npc();

    for marker_id in ["n1", "missing"] {
        let commands = map_intent_to_commands(
            &state,
            AppIntent::MarkerCompletionToggled {
                marker_id: marker_id.into(),
            },
        );
        assert!(commands.is_empty(), "{marker_id} sollte ignoriert werden");
    }
}

#[test]
fn marker_pick_uses_pick_radius_in_world_units() {
    let mut state = AppState::new();
    state.view.camera.zoom = 2.0;
    let expected = state.options.marker_pick_radius_px / 2.0;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MarkerPickRequested {
            world_pos: glam::Vec2::new(10.0, 20.0),
        },
    );

    assert_eq!(commands.len(), 1);
    match commands[0] {
        AppCommand::SelectNearestMarker { max_distance, .. } => {
            assert!((max_distance - expected).abs() < 1e-6);
        }
        ref other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn popup_closed_clears_marker_selection() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::MarkerPopupClosed);

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::SelectMarker { marker_id: None }]
    ));
}
