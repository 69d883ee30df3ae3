//! Handler für den Erledigt-Status.

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet den Erledigt-Status um und propagiert Speicherfehler.
pub fn toggle(state: &mut AppState, marker_id: &str) -> anyhow::Result<()> {
    use_cases::completion::toggle_marker_completed(state, marker_id)
}
