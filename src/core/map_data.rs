//! Kartendaten: Marker- und Regions-Instanzen der aktuell gewählten Karte.

use super::catalog::SubtypeKey;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Konkreter Marker auf einer Karte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerInstance {
    /// Innerhalb der Karte eindeutige ID
    pub id: String,
    /// Kategorie-ID
    pub category: String,
    /// Subtyp-ID innerhalb der Kategorie
    pub subtype: String,
    /// Position `[x, y]` in Karteneinheiten (y wächst nach oben)
    pub position: [f32; 2],
    /// Anzeigename (fällt auf die ID zurück)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MarkerInstance {
    /// Subtyp-Schlüssel dieses Markers.
    pub fn subtype_key(&self) -> SubtypeKey {
        SubtypeKey::new(self.category.as_str(), self.subtype.as_str())
    }

    /// Position als `glam::Vec2`.
    pub fn world_pos(&self) -> glam::Vec2 {
        glam::Vec2::from(self.position)
    }

    /// Anzeigename oder ID.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Benannte Region einer Karte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionInstance {
    /// Regionsname (zugleich Sichtbarkeits-Schlüssel)
    pub name: String,
    /// Umriss in Karteneinheiten
    #[serde(default)]
    pub polygon: Vec<[f32; 2]>,
}

/// Alle Instanzdaten einer Karte, pro Ladevorgang unveränderlich.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapData {
    pub map_id: String,
    pub markers: Vec<MarkerInstance>,
    pub regions: Vec<RegionInstance>,
}

impl MapData {
    /// Erstellt Kartendaten und verwirft doppelte Marker-IDs bzw. Regionsnamen.
    pub fn new(
        map_id: impl Into<String>,
        markers: Vec<MarkerInstance>,
        regions: Vec<RegionInstance>,
    ) -> Self {
        let map_id = map_id.into();

        let mut marker_ids = IndexSet::new();
        let markers = markers
            .into_iter()
            .filter(|marker| {
                let fresh = marker_ids.insert(marker.id.clone());
                if !fresh {
                    log::warn!("Karte {}: doppelte Marker-ID verworfen: {}", map_id, marker.id);
                }
                fresh
            })
            .collect();

        let mut region_names = IndexSet::new();
        let regions = regions
            .into_iter()
            .filter(|region| {
                let fresh = region_names.insert(region.name.clone());
                if !fresh {
                    log::warn!("Karte {}: doppelte Region verworfen: {}", map_id, region.name);
                }
                fresh
            })
            .collect();

        Self {
            map_id,
            markers,
            regions,
        }
    }

    /// Leere Kartendaten für eine Karte.
    pub fn empty(map_id: impl Into<String>) -> Self {
        Self {
            map_id: map_id.into(),
            ..Default::default()
        }
    }

    pub fn marker(&self, marker_id: &str) -> Option<&MarkerInstance> {
        self.markers.iter().find(|m| m.id == marker_id)
    }

    /// IDs aller Marker in Ladereihenfolge.
    pub fn marker_ids(&self) -> IndexSet<String> {
        self.markers.iter().map(|m| m.id.clone()).collect()
    }

    /// Namen aller Regionen in Ladereihenfolge.
    pub fn region_names(&self) -> IndexSet<String> {
        self.regions.iter().map(|r| r.name.clone()).collect()
    }

    /// Nächster Marker innerhalb von `max_distance` um `world_pos`,
    /// eingeschränkt auf Marker, für die `filter` gilt.
    pub fn nearest_marker(
        &self,
        world_pos: glam::Vec2,
        max_distance: f32,
        filter: impl Fn(&MarkerInstance) -> bool,
    ) -> Option<&MarkerInstance> {
        self.markers
            .iter()
            .filter(|m| filter(m))
            .map(|m| (m, m.world_pos().distance(world_pos)))
            .filter(|(_, distance)| *distance <= max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(m, _)| m)
    }
}
