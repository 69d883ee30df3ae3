use crate::core::{KeySet, SubtypeKey};

/// Sichtbarkeit von Subtypen und Regionen der aktuellen Karte.
///
/// Der gültige Schlüsselraum der Subtypen kommt aus dem Katalog, der der
/// Regionen aus den geladenen Kartendaten.
#[derive(Debug, Clone, Default)]
pub struct VisibilityState {
    pub subtypes: KeySet<SubtypeKey>,
    pub regions: KeySet<String>,
}

impl VisibilityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_subtype_visible(&self, key: &SubtypeKey) -> bool {
        self.subtypes.contains(key)
    }

    pub fn is_region_visible(&self, name: &str) -> bool {
        self.regions.active().contains(name)
    }
}
