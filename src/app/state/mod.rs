//! Application State: zentrale Datenhaltung des Viewers.
//!
//! Jeder Teilzustand gehört genau einem Feature-Bereich; Mutationen laufen
//! ausschließlich über Use-Cases.

mod app_state;
mod catalog;
mod completion;
mod map_data;
mod selection;
mod view;
mod visibility;

pub use app_state::AppState;
pub use catalog::CatalogLoadState;
pub use completion::CompletionState;
pub use map_data::MapDataState;
pub use selection::SelectionState;
pub use view::{UiState, ViewState};
pub use visibility::VisibilityState;
