//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod catalog;
pub mod completion;
pub mod language;
pub mod map_data;
pub mod selection;
pub mod viewport;
pub mod visibility;
