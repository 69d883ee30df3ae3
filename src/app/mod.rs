//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod location;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand des Viewers (Katalog, Kartendaten,
/// Sichtbarkeit, Erledigt-Status, Ansicht).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use location::ViewLocation;
pub use state::{
    AppState, CatalogLoadState, CompletionState, MapDataState, SelectionState, UiState, ViewState, VisibilityState,
};
