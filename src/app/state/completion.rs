use crate::core::KeySet;

/// Erledigte Marker der aktuellen Karte.
///
/// Beim Kartenwechsel wird die gespeicherte Liste sofort gelesen, aber erst
/// gegen die Marker-IDs abgeglichen, wenn die Kartendaten eintreffen.
#[derive(Debug, Clone, Default)]
pub struct CompletionState {
    /// Erledigte Marker-IDs über dem Raum der geladenen Marker
    pub markers: KeySet<String>,
    /// Gelesene, noch nicht abgeglichene Liste der gewählten Karte
    pub pending: Option<Vec<String>>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, marker_id: &str) -> bool {
        self.markers.active().contains(marker_id)
    }

    pub fn completed_count(&self) -> usize {
        self.markers.len()
    }
}
