//! Handler für Katalog und Sprache.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet das Laden des Katalogs.
pub fn load(state: &mut AppState) {
    use_cases::catalog::request_catalog(state);
}

/// Übernimmt einen eingetroffenen Katalog und wählt die Start-Karte.
pub fn poll(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::catalog::poll_catalog(state)
}

/// Stellt die Sprache aus Adresse, Speicher oder Standard wieder her.
pub fn restore_language(state: &mut AppState) {
    use_cases::language::restore_language(state);
}

/// Setzt und speichert die Sprache.
pub fn set_language(state: &mut AppState, language: &str) -> anyhow::Result<()> {
    use_cases::language::set_language(state, language)
}
