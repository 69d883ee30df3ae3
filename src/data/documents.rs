//! Dokumentformate und Ladefunktionen für Katalog und Kartendaten.

use super::source::DataSource;
use crate::core::{Catalog, MapData, MapDescriptor, MarkerInstance, MarkerTypeCategory, RegionInstance};
use crate::error::LoadError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Pfad der Kartenliste.
pub const MAPS_PATH: &str = "maps.json";
/// Pfad der Marker-Typ-Taxonomie.
pub const TYPES_PATH: &str = "types.json";

/// Pfad der Marker einer Karte.
pub fn markers_path(map_id: &str) -> String {
    format!("markers/{map_id}.json")
}

/// Pfad der Regionen einer Karte.
pub fn regions_path(map_id: &str) -> String {
    format!("regions/{map_id}.json")
}

/// `maps.json`
#[derive(Debug, Deserialize)]
pub struct MapsFile {
    #[serde(default)]
    pub version: u32,
    pub maps: Vec<MapDescriptor>,
}

/// `types.json`
#[derive(Debug, Deserialize)]
pub struct TypesFile {
    #[serde(default)]
    pub version: u32,
    pub categories: Vec<MarkerTypeCategory>,
}

/// `markers/<mapId>.json`
#[derive(Debug, Deserialize)]
pub struct MarkersFile {
    #[serde(default)]
    pub version: u32,
    pub markers: Vec<MarkerInstance>,
}

/// `regions/<mapId>.json`
#[derive(Debug, Deserialize)]
pub struct RegionsFile {
    #[serde(default)]
    pub version: u32,
    pub regions: Vec<RegionInstance>,
}

/// Lädt und parst ein Dokument. `Ok(None)` wenn es fehlt.
fn fetch_document<T: DeserializeOwned>(
    source: &dyn DataSource,
    path: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = source.fetch_text(path).map_err(|e| e.to_string())? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| format!("{path}: {e}"))
}

/// Lädt Kartenliste und Taxonomie (ein Versuch, keine Wiederholung).
pub fn load_catalog(source: &dyn DataSource) -> Result<Catalog, LoadError> {
    let unavailable = |reason: String| LoadError::CatalogUnavailable { reason };

    let maps = fetch_document::<MapsFile>(source, MAPS_PATH)
        .map_err(unavailable)?
        .ok_or_else(|| unavailable(format!("{MAPS_PATH} fehlt")))?;
    let types = fetch_document::<TypesFile>(source, TYPES_PATH)
        .map_err(unavailable)?
        .ok_or_else(|| unavailable(format!("{TYPES_PATH} fehlt")))?;

    let catalog = Catalog::new(maps.maps, types.categories);
    log::info!(
        "Katalog geladen aus {}: {} Karten, {} Kategorien (Version {}/{})",
        source.describe(),
        catalog.maps.len(),
        catalog.categories.len(),
        maps.version,
        types.version
    );
    Ok(catalog)
}

/// Lädt Marker und Regionen einer Karte.
///
/// Fehlende Marker sind ein Fehler, fehlende Regionen bedeuten „keine Regionen“.
pub fn load_map_data(source: &dyn DataSource, map_id: &str) -> Result<MapData, LoadError> {
    let unavailable = |reason: String| LoadError::MapDataUnavailable {
        map_id: map_id.to_string(),
        reason,
    };

    let markers_path = markers_path(map_id);
    let markers = fetch_document::<MarkersFile>(source, &markers_path)
        .map_err(unavailable)?
        .ok_or_else(|| unavailable(format!("{markers_path} fehlt")))?;
    let regions =
        fetch_document::<RegionsFile>(source, &regions_path(map_id)).map_err(unavailable)?;

    let data = MapData::new(
        map_id,
        markers.markers,
        regions.map(|r| r.regions).unwrap_or_default(),
    );
    log::info!(
        "Kartendaten für {} geladen: {} Marker, {} Regionen",
        map_id,
        data.markers.len(),
        data.regions.len()
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemorySource;

    const MAPS: &str = r#"{"version":1,"maps":[
        {"name":"orium","tileWidth":256,"tileHeight":256,"tilesX":4,"tilesY":4},
        {"id":"world","imageUrl":"/maps/world.webp","width":2275,"height":1285}
    ]}"#;
    const TYPES: &str = r##"{"version":1,"categories":[
        {"id":"loot","color":"#FFAA00","subtypes":[{"id":"chest","canComplete":true}]}
    ]}"##;

    #[test]
    fn test_load_catalog_parses_both_documents() {
        let source = MemorySource::new()
            .with(MAPS_PATH, MAPS)
            .with(TYPES_PATH, TYPES);
        let catalog = load_catalog(&source).expect("Katalog");
        assert_eq!(catalog.maps.len(), 2);
        assert_eq!(catalog.subtype_keys().len(), 1);
    }

    #[test]
    fn test_missing_or_malformed_catalog_is_unavailable() {
        let missing = MemorySource::new().with(MAPS_PATH, MAPS);
        assert!(matches!(
            load_catalog(&missing),
            Err(LoadError::CatalogUnavailable { .. })
        ));

        let malformed = MemorySource::new()
            .with(MAPS_PATH, "{\"maps\": 3}")
            .with(TYPES_PATH, TYPES);
        assert!(matches!(
            load_catalog(&malformed),
            Err(LoadError::CatalogUnavailable { .. })
        ));
    }

    #[test]
    fn test_map_data_without_regions_document_has_no_regions() {
        let source = MemorySource::new().with(
            markers_path("orium"),
            r#"{"version":1,"markers":[{"id":"m1","category":"loot","subtype":"chest","position":[1,2]}]}"#,
        );
        let data = load_map_data(&source, "orium").expect("Kartendaten");
        assert_eq!(data.markers.len(), 1);
        assert!(data.regions.is_empty());
    }

    #[test]
    fn test_missing_markers_document_is_unavailable() {
        let source = MemorySource::new().with(regions_path("orium"), r#"{"regions":[]}"#);
        match load_map_data(&source, "orium") {
            Err(LoadError::MapDataUnavailable { map_id, .. }) => assert_eq!(map_id, "orium"),
            other => panic!("Unerwartetes Ergebnis: {other:?}"),
        }
    }
}
