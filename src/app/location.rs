//! Adressierbare Position der Ansicht (Query-Parameter `map` und `lng`).
//!
//! Ein geteilter Link öffnet dieselbe Karte in derselben Sprache. Änderungen
//! ersetzen die aktuelle Adresse in-place, ohne Verlauf aufzubauen.

use reqwest::Url;

/// Query-Parameter der Karten-ID.
pub const MAP_PARAM: &str = "map";
/// Query-Parameter der Sprache.
pub const LANGUAGE_PARAM: &str = "lng";

const DEFAULT_BASE: &str = "http://localhost/";

/// Aktuelle Adresse der Ansicht.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLocation {
    url: Url,
    /// Anzahl der In-place-Ersetzungen (für Statusanzeige und Tests)
    replacements: u64,
}

impl ViewLocation {
    /// Parst eine vollständige URL oder einen reinen Query-String (`?map=...`).
    ///
    /// Unlesbare Eingaben ergeben die leere Standardadresse.
    pub fn parse(input: &str) -> Self {
        let base = Self::base_url();
        let trimmed = input.trim();
        let parsed = if trimmed.is_empty() {
            Ok(base.clone())
        } else {
            Url::parse(trimmed).or_else(|_| base.join(trimmed))
        };

        let url = parsed.unwrap_or_else(|e| {
            log::warn!("Adresse '{}' nicht lesbar, verwende Standard: {}", input, e);
            base
        });

        Self {
            url,
            replacements: 0,
        }
    }

    /// Liest einen Query-Parameter (erster Treffer).
    pub fn param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    }

    /// Setzt (oder entfernt mit `None`) einen Query-Parameter in-place.
    ///
    /// Die Reihenfolge der übrigen Parameter bleibt erhalten.
    pub fn set_param(&mut self, key: &str, value: Option<&str>) {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != key)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        if let Some(value) = value {
            let position = self
                .url
                .query_pairs()
                .position(|(k, _)| k == key)
                .unwrap_or(pairs.len());
            pairs.insert(position.min(pairs.len()), (key.to_string(), value.to_string()));
        }

        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }
        self.replacements += 1;
    }

    pub fn map_id(&self) -> Option<String> {
        self.param(MAP_PARAM)
    }

    pub fn language(&self) -> Option<String> {
        self.param(LANGUAGE_PARAM)
    }

    /// Vollständige Adresse.
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Nur der Query-Teil inkl. `?` (leer, wenn keine Parameter gesetzt sind).
    pub fn query_string(&self) -> String {
        self.url.query().map(|q| format!("?{q}")).unwrap_or_default()
    }

    pub fn replacements(&self) -> u64 {
        self.replacements
    }

    fn base_url() -> Url {
        Url::parse(DEFAULT_BASE).expect("statische Basis-URL ist gültig")
    }
}

impl Default for ViewLocation {
    fn default() -> Self {
        Self::parse("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_query_string() {
        let location = ViewLocation::parse("?map=orium&lng=ru");
        assert_eq!(location.map_id().as_deref(), Some("orium"));
        assert_eq!(location.language().as_deref(), Some("ru"));
    }

    #[test]
    fn test_parse_full_url_keeps_host_and_path() {
        let location = ViewLocation::parse("https://maps.example.org/viewer/?map=panesterra");
        assert_eq!(location.map_id().as_deref(), Some("panesterra"));
        assert!(location.href().starts_with("https://maps.example.org/viewer/"));
    }

    #[test]
    fn test_set_param_replaces_in_place_and_keeps_other_params() {
        let mut location = ViewLocation::parse("?lng=en&map=orium&debug=1");
        location.set_param(MAP_PARAM, Some("panesterra"));

        assert_eq!(location.query_string(), "?lng=en&map=panesterra&debug=1");
        assert_eq!(location.replacements(), 1);
    }

    #[test]
    fn test_set_param_encodes_and_removes() {
        let mut location = ViewLocation::default();
        location.set_param(MAP_PARAM, Some("deep woods"));
        assert_eq!(location.map_id().as_deref(), Some("deep woods"));

        location.set_param(MAP_PARAM, None);
        assert_eq!(location.map_id(), None);
        assert_eq!(location.query_string(), "");
    }

    #[test]
    fn test_empty_param_counts_as_missing() {
        let location = ViewLocation::parse("?map=");
        assert_eq!(location.map_id(), None);
    }
}
