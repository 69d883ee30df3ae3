//! Use-Cases für die Sprachwahl.
//!
//! Reihenfolge beim Start: `lng`-Parameter der Adresse, gespeicherte Wahl,
//! konfigurierte Standardsprache.

use crate::app::location::LANGUAGE_PARAM;
use crate::app::AppState;

/// Stellt die Sprache beim Start wieder her, ohne zu schreiben.
pub fn restore_language(state: &mut AppState) {
    let from_location = state.location.language();
    if let Some(lang) = from_location.as_deref() {
        if !state.options.supports_language(lang) {
            log::warn!("Sprache '{}' aus der Adresse nicht unterstützt", lang);
        }
    }

    let language = from_location
        .filter(|lang| state.options.supports_language(lang))
        .or_else(|| {
            state
                .store
                .get(&state.storage_keys.language())
                .filter(|lang| state.options.supports_language(lang))
        })
        .unwrap_or_else(|| state.options.default_language.clone());

    log::info!("Sprache: {}", language);
    state.ui.language = language;
}

/// Setzt die Sprache, speichert sie und schreibt sie in die Adresse.
pub fn set_language(state: &mut AppState, language: &str) -> anyhow::Result<()> {
    if !state.options.supports_language(language) {
        anyhow::bail!("Nicht unterstützte Sprache: {language}");
    }

    state.ui.language = language.to_string();
    state.location.set_param(LANGUAGE_PARAM, Some(language));
    let key = state.storage_keys.language();
    state.store.set(&key, language.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::location::ViewLocation;

    #[test]
    fn location_param_wins_over_store() {
        let mut state = AppState::new();
        let key = state.storage_keys.language();
        state.store.set(&key, "en".into()).expect("set");
        state.location = ViewLocation::parse("?lng=ru");

        restore_language(&mut state);

        assert_eq!(state.ui.language, "ru");
    }

    #[test]
    fn unsupported_values_fall_back_to_default() {
        let mut state = AppState::new();
        let key = state.storage_keys.language();
        state.store.set(&key, "xx".into()).expect("set");
        state.location = ViewLocation::parse("?lng=yy");

        restore_language(&mut state);

        assert_eq!(state.ui.language, state.options.default_language);
    }

    #[test]
    fn set_language_writes_store_and_location() {
        let mut state = AppState::new();

        set_language(&mut state, "ru").expect("ru wird unterstützt");

        assert_eq!(state.location.language().as_deref(), Some("ru"));
        assert_eq!(
            state.store.get(&state.storage_keys.language()).as_deref(),
            Some("ru")
        );
        assert!(set_language(&mut state, "xx").is_err());
        assert_eq!(state.ui.language, "ru");
    }
}
