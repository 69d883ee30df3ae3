//! Gemeinsame Testdaten: zwei Karten, drei Subtypen, Marker und Regionen.

#![allow(dead_code)]

use game_map_viewer::data::{markers_path, regions_path, MAPS_PATH, TYPES_PATH};
use game_map_viewer::{
    AppController, AppIntent, AppState, MemorySource, MemoryStore, PersistenceStore, SubtypeKey,
    ViewerOptions,
};
use std::sync::Arc;

pub const MAPS: &str = r#"{"version":1,"maps":[
    {"name":"orium","tileWidth":256,"tileHeight":256,"tilesX":4,"tilesY":4},
    {"name":"panesterra","imageUrl":"/maps/panesterra.webp","width":2000,"height":1000}
]}"#;

pub const TYPES: &str = r##"{"version":1,"categories":[
    {"id":"loot","color":"#FFC107","subtypes":[
        {"id":"chest","canComplete":true},
        {"id":"urn"}
    ]},
    {"id":"gathering","subtypes":[{"id":"mining","color":"#8D6E63"}]}
]}"##;

/// Typen ohne `loot::urn` (für geänderte Kataloge).
pub const TYPES_WITHOUT_URN: &str = r#"{"version":1,"categories":[
    {"id":"loot","subtypes":[{"id":"chest","canComplete":true}]},
    {"id":"gathering","subtypes":[{"id":"mining"}]}
]}"#;

pub const ORIUM_MARKERS: &str = r#"{"markers":[
    {"id":"m1","category":"loot","subtype":"chest","position":[100,100],"name":"Old chest"},
    {"id":"m2","category":"loot","subtype":"chest","position":[200,100]},
    {"id":"m3","category":"loot","subtype":"chest","position":[300,100]},
    {"id":"m4","category":"loot","subtype":"chest","position":[400,100]},
    {"id":"m5","category":"loot","subtype":"chest","position":[500,100]},
    {"id":"u1","category":"loot","subtype":"urn","position":[100,300]},
    {"id":"g1","category":"gathering","subtype":"mining","position":[700,700]}
]}"#;

pub const ORIUM_REGIONS: &str = r#"{"regions":[
    {"name":"North","polygon":[[0,512],[1024,512],[1024,1024],[0,1024]]},
    {"name":"South","polygon":[[0,0],[1024,0],[1024,512],[0,512]]}
]}"#;

pub const PANESTERRA_MARKERS: &str = r#"{"markers":[
    {"id":"p1","category":"loot","subtype":"chest","position":[50,50]},
    {"id":"p2","category":"gathering","subtype":"mining","position":[60,60]}
]}"#;

pub fn source() -> MemorySource {
    source_with_types(TYPES)
}

pub fn source_with_types(types: &str) -> MemorySource {
    MemorySource::new()
        .with(MAPS_PATH, MAPS)
        .with(TYPES_PATH, types)
        .with(markers_path("orium"), ORIUM_MARKERS)
        .with(regions_path("orium"), ORIUM_REGIONS)
        .with(markers_path("panesterra"), PANESTERRA_MARKERS)
}

pub fn key(category: &str, subtype: &str) -> SubtypeKey {
    SubtypeKey::new(category, subtype)
}

pub fn inline_options(location: Option<&str>) -> ViewerOptions {
    ViewerOptions {
        background_loading: false,
        initial_location: location.map(str::to_string),
        ..ViewerOptions::default()
    }
}

/// State mit Testdaten, leerem Speicher und blockierendem Laden.
pub fn make_state(location: Option<&str>) -> AppState {
    make_state_with(location, Box::new(MemoryStore::new()), source())
}

pub fn make_state_with(
    location: Option<&str>,
    store: Box<dyn PersistenceStore>,
    source: MemorySource,
) -> AppState {
    AppState::with_services(inline_options(location), store, Arc::new(source))
}

/// Startet die Anwendung und übernimmt die ersten Kartendaten.
pub fn start(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::StartupRequested)
        .expect("StartupRequested sollte ohne Fehler durchlaufen");
    poll(controller, state);
}

pub fn poll(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::LoadPollRequested)
        .expect("LoadPollRequested sollte ohne Fehler durchlaufen");
}

/// Wählt eine Karte und übernimmt ihre Daten.
pub fn switch_map(controller: &mut AppController, state: &mut AppState, map_id: &str) {
    controller
        .handle_intent(
            state,
            AppIntent::MapSelected {
                map_id: map_id.to_string(),
            },
        )
        .expect("MapSelected sollte ohne Fehler durchlaufen");
    poll(controller, state);
}

/// Persistierte Liste als Strings.
pub fn stored_list(state: &AppState, key: &str) -> Option<Vec<String>> {
    state
        .store
        .get(key)
        .map(|raw| serde_json::from_str(&raw).expect("gespeicherte Liste ist JSON"))
}
