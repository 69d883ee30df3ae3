//! UI-Komponenten: Menü, Seitenleiste, Kartenansicht, Popup, Statusleiste.

/// UI-Layer mit egui
///
/// Jede Komponente liest den `AppState` nur und gibt `AppIntent`s zurück;
/// Mutationen laufen ausschließlich über den Controller.
pub mod input;
pub mod map_view;
pub mod marker_popup;
pub mod menu;
pub mod sidebar;
pub mod status;

pub use input::MapInputState;
pub use map_view::paint_map;
pub use marker_popup::show_marker_popup;
pub use menu::render_menu;
pub use sidebar::render_sidebar;
pub use status::render_status_bar;
