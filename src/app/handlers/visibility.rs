//! Handler für Subtyp- und Regions-Sichtbarkeit.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SubtypeKey;

pub fn toggle_subtype(state: &mut AppState, key: &SubtypeKey) -> anyhow::Result<()> {
    use_cases::visibility::toggle_subtype(state, key)
}

pub fn toggle_region(state: &mut AppState, name: &str) -> anyhow::Result<()> {
    use_cases::visibility::toggle_region(state, name)
}

pub fn show_all(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::visibility::show_all_subtypes(state)
}

pub fn hide_all(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::visibility::hide_all_subtypes(state)
}
