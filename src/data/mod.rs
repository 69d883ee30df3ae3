//! Datenschicht: Quellen, Dokumentformate und Kartendaten-Loader.

mod documents;
mod loader;
mod source;

pub use documents::{
    load_catalog, load_map_data, markers_path, regions_path, MapsFile, MarkersFile, RegionsFile,
    TypesFile, MAPS_PATH, TYPES_PATH,
};
pub use loader::{
    CatalogCompletion, CatalogLoader, LoadCompletion, LoadExecution, LoadTicket, MapDataLoader,
};
pub use source::{DataSource, DirectorySource, HttpSource, MemorySource};
