//! Katalog: Kartenliste und Marker-Typ-Taxonomie.
//!
//! Der Katalog wird einmal geladen und von allen Karten geteilt. Er legt den
//! gültigen Schlüsselraum der Subtyp-Sichtbarkeit fest.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trennzeichen zwischen Kategorie- und Subtyp-ID im zusammengesetzten Schlüssel.
pub const SUBTYPE_KEY_SEPARATOR: &str = "::";

/// Eindeutiger Schlüssel eines Marker-Subtyps: `kategorie::subtyp`.
///
/// Subtyp-IDs sind nur innerhalb ihrer Kategorie eindeutig, deshalb wird
/// immer die Kategorie mitgeführt. Sichtbarkeit, Zähler und Stil-Lookups
/// verwenden ausschließlich diesen Typ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubtypeKey {
    category: String,
    subtype: String,
}

impl SubtypeKey {
    /// Erstellt einen Schlüssel aus Kategorie- und Subtyp-ID.
    pub fn new(category: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subtype: subtype.into(),
        }
    }

    /// Kategorie-ID
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Subtyp-ID innerhalb der Kategorie
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Gibt `true` zurück, wenn eine Kategorie-ID verlustfrei in der Textform
    /// `kategorie::subtyp` steht (endet sie auf `:`, verschiebt sich die Trennung).
    pub fn is_valid_category_id(id: &str) -> bool {
        !id.is_empty() && !id.contains(SUBTYPE_KEY_SEPARATOR) && !id.ends_with(':')
    }

    /// Gibt `true` zurück, wenn eine Subtyp-ID verlustfrei in der Textform steht.
    pub fn is_valid_subtype_id(id: &str) -> bool {
        !id.is_empty() && !id.contains(SUBTYPE_KEY_SEPARATOR)
    }
}

impl fmt::Display for SubtypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.category, SUBTYPE_KEY_SEPARATOR, self.subtype)
    }
}

/// Fehler beim Parsen eines `SubtypeKey` aus seiner Textform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ungültiger Subtyp-Schlüssel: '{0}'")]
pub struct InvalidSubtypeKey(pub String);

impl FromStr for SubtypeKey {
    type Err = InvalidSubtypeKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(SUBTYPE_KEY_SEPARATOR) {
            Some((category, subtype))
                if !category.is_empty()
                    && !subtype.is_empty()
                    && !subtype.contains(SUBTYPE_KEY_SEPARATOR) =>
            {
                Ok(Self::new(category, subtype))
            }
            _ => Err(InvalidSubtypeKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for SubtypeKey {
    type Error = InvalidSubtypeKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubtypeKey> for String {
    fn from(key: SubtypeKey) -> Self {
        key.to_string()
    }
}

/// Geometrie einer Karte: gekachelt oder (Altformat) als Einzelbild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MapGeometry {
    /// Kachel-Raster mit fester Kachelgröße
    #[serde(rename_all = "camelCase")]
    Tiled {
        tile_width: u32,
        tile_height: u32,
        tiles_x: u32,
        tiles_y: u32,
        /// URL-Muster der Kacheln mit `{x}`/`{y}`-Platzhaltern
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tile_url: Option<String>,
    },
    /// Einzelbild mit Pixelmaßen
    #[serde(rename_all = "camelCase")]
    Image {
        #[serde(default)]
        image_url: String,
        width: u32,
        height: u32,
    },
}

/// Metadaten einer Karte. Nach dem Laden unveränderlich.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDescriptor {
    /// Karten-ID (auch Wert des `map`-Query-Parameters)
    #[serde(alias = "id")]
    pub name: String,
    /// Kachel- oder Bildgeometrie
    #[serde(flatten)]
    pub geometry: MapGeometry,
}

impl MapDescriptor {
    /// Pixelgröße der gesamten Karte (Breite, Höhe).
    pub fn pixel_size(&self) -> (u32, u32) {
        match &self.geometry {
            MapGeometry::Tiled {
                tile_width,
                tile_height,
                tiles_x,
                tiles_y,
                ..
            } => (
                tile_width.saturating_mul(*tiles_x),
                tile_height.saturating_mul(*tiles_y),
            ),
            MapGeometry::Image { width, height, .. } => (*width, *height),
        }
    }

    /// Geometrischer Mittelpunkt in Karteneinheiten.
    pub fn center(&self) -> glam::Vec2 {
        let (width, height) = self.pixel_size();
        glam::Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
    }
}

/// Subtyp innerhalb einer Marker-Kategorie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerTypeSubtype {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Überschreibt die Kategorie-Farbe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Marker dieses Subtyps können als erledigt markiert werden
    #[serde(default)]
    pub can_complete: bool,
}

/// Marker-Kategorie mit geordneter Subtyp-Liste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerTypeCategory {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub subtypes: Vec<MarkerTypeSubtype>,
}

impl MarkerTypeCategory {
    /// Schlüssel eines Subtyps dieser Kategorie.
    pub fn key_for(&self, subtype: &MarkerTypeSubtype) -> SubtypeKey {
        SubtypeKey::new(self.id.as_str(), subtype.id.as_str())
    }
}

/// Geladener Katalog: Karten und Taxonomie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub maps: Vec<MapDescriptor>,
    pub categories: Vec<MarkerTypeCategory>,
}

impl Catalog {
    /// Erstellt einen Katalog und verwirft doppelte Karten-/Kategorie-IDs.
    ///
    /// Bei Duplikaten gewinnt jeweils der erste Eintrag. Kategorien und
    /// Subtypen, deren Schlüssel sich nicht als Text speichern und wieder
    /// lesen lässt (leer, `::` enthalten), werden ebenfalls verworfen.
    pub fn new(maps: Vec<MapDescriptor>, categories: Vec<MarkerTypeCategory>) -> Self {
        let mut seen_maps = IndexSet::new();
        let maps = maps
            .into_iter()
            .filter(|map| {
                let fresh = seen_maps.insert(map.name.clone());
                if !fresh {
                    log::warn!("Doppelte Karten-ID im Katalog verworfen: {}", map.name);
                }
                fresh
            })
            .collect();

        let mut seen_categories = IndexSet::new();
        let categories = categories
            .into_iter()
            .filter(|category| {
                if !SubtypeKey::is_valid_category_id(&category.id) {
                    log::warn!("Ungültige Kategorie-ID im Katalog verworfen: '{}'", category.id);
                    return false;
                }
                let fresh = seen_categories.insert(category.id.clone());
                if !fresh {
                    log::warn!("Doppelte Kategorie-ID im Katalog verworfen: {}", category.id);
                }
                fresh
            })
            .map(|mut category| {
                category.subtypes.retain(|subtype| {
                    let valid = SubtypeKey::is_valid_subtype_id(&subtype.id);
                    if !valid {
                        log::warn!(
                            "Ungültige Subtyp-ID in Kategorie '{}' verworfen: '{}'",
                            category.id,
                            subtype.id
                        );
                    }
                    valid
                });
                category
            })
            .collect();

        Self { maps, categories }
    }

    /// Gibt `true` zurück, wenn weder Karten noch Kategorien geladen sind.
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty() && self.categories.is_empty()
    }

    /// Sucht eine Karte per ID.
    pub fn map(&self, map_id: &str) -> Option<&MapDescriptor> {
        self.maps.iter().find(|m| m.name == map_id)
    }

    /// Prüft, ob die Karten-ID im Katalog vorkommt.
    pub fn contains_map(&self, map_id: &str) -> bool {
        self.map(map_id).is_some()
    }

    /// Erste Karte in Katalog-Reihenfolge.
    pub fn first_map(&self) -> Option<&MapDescriptor> {
        self.maps.first()
    }

    /// Alle gültigen Subtyp-Schlüssel in Katalog-Reihenfolge.
    pub fn subtype_keys(&self) -> IndexSet<SubtypeKey> {
        self.categories
            .iter()
            .flat_map(|category| {
                category
                    .subtypes
                    .iter()
                    .map(move |subtype| category.key_for(subtype))
            })
            .collect()
    }

    /// Sucht Kategorie und Subtyp zu einem Schlüssel.
    pub fn subtype(&self, key: &SubtypeKey) -> Option<(&MarkerTypeCategory, &MarkerTypeSubtype)> {
        let category = self.categories.iter().find(|c| c.id == key.category())?;
        let subtype = category.subtypes.iter().find(|s| s.id == key.subtype())?;
        Some((category, subtype))
    }

    /// Gibt `true` zurück, wenn Marker des Subtyps abgehakt werden können.
    pub fn can_complete(&self, key: &SubtypeKey) -> bool {
        self.subtype(key).is_some_and(|(_, subtype)| subtype.can_complete)
    }
}
