//! Core-Domänentypen: Katalog, Kartendaten, Schlüsselmengen, Zähler, Kamera.

pub mod camera;
pub mod catalog;
pub mod counts;
pub mod key_set;
pub mod map_data;
pub mod style;

pub use camera::Camera2D;
pub use catalog::{
    Catalog, InvalidSubtypeKey, MapDescriptor, MapGeometry, MarkerTypeCategory,
    MarkerTypeSubtype, SubtypeKey,
};
pub use counts::{completed_counts, subtype_counts, CompletionProgress, MarkerStats};
pub use key_set::{reconcile, DefaultPolicy, KeySet, ReconcileSource, Reconciled};
pub use map_data::{MapData, MarkerInstance, RegionInstance};
pub use style::{resolve_style, MarkerStyle};
