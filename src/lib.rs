//! Game Map Viewer Library.
//! Zustandskern des interaktiven Karten-Viewers als Library exportiert
//! für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod data;
pub mod error;
pub mod persistence;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewLocation};
pub use crate::core::{
    Camera2D, Catalog, KeySet, MapData, MapDescriptor, MarkerInstance, MarkerStats,
    MarkerTypeCategory, MarkerTypeSubtype, RegionInstance, SubtypeKey,
};
pub use data::{
    CatalogLoader, DataSource, DirectorySource, HttpSource, LoadExecution, MapDataLoader,
    MemorySource,
};
pub use error::{LoadError, SourceError, StoreError};
pub use persistence::{FileStore, MemoryStore, PersistenceStore, StorageKeys};
pub use shared::{DataMode, ViewerOptions};
