//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die `app`, `ui` und `main` gemeinsam
//! lesen, um direkte Abhängigkeiten zwischen den Schichten zu vermeiden.

pub mod options;

pub use options::{DataMode, ViewerOptions};
