//! Handler für Kartendaten-Ladeaufträge.

use crate::app::use_cases;
use crate::app::AppState;
use crate::data::LoadCompletion;

pub fn request(state: &mut AppState) {
    use_cases::map_data::request_map_data(state);
}

pub fn poll(state: &mut AppState) {
    use_cases::map_data::poll_map_data(state);
}

pub fn apply(state: &mut AppState, completion: LoadCompletion) {
    use_cases::map_data::apply_map_data(state, completion);
}
