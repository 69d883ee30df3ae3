//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod catalog;
pub mod completion;
pub mod map_data;
pub mod selection;
pub mod view;
pub mod visibility;
