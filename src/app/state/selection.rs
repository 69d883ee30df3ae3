/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuell gewählte Karte (Some erst nach erfolgreichem Katalog-Abgleich)
    pub selected_map_id: Option<String>,
    /// Marker, dessen Popup gerade offen ist
    pub selected_marker_id: Option<String>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn `map_id` die aktuell gewählte Karte ist.
    pub fn is_selected_map(&self, map_id: &str) -> bool {
        self.selected_map_id.as_deref() == Some(map_id)
    }
}
