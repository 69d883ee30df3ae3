//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Schlägt ein Command fehl, werden die folgenden Commands desselben
    /// Intents nicht mehr ausgeführt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Katalog & Sprache ===
            AppCommand::LoadCatalog => handlers::catalog::load(state),
            AppCommand::PollCatalog => handlers::catalog::poll(state)?,
            AppCommand::RestoreLanguage => handlers::catalog::restore_language(state),
            AppCommand::SetLanguage { language } => {
                handlers::catalog::set_language(state, &language)?
            }

            // === Auswahl ===
            AppCommand::SelectMap { map_id } => handlers::selection::select_map(state, &map_id)?,
            AppCommand::SelectNearestMarker {
                world_pos,
                max_distance,
            } => handlers::selection::select_nearest_marker(state, world_pos, max_distance),
            AppCommand::SelectMarker { marker_id } => {
                handlers::selection::select_marker(state, marker_id)
            }

            // === Kartendaten ===
            AppCommand::RequestMapData => handlers::map_data::request(state),
            AppCommand::PollMapData => handlers::map_data::poll(state),
            AppCommand::ApplyMapData { completion } => handlers::map_data::apply(state, completion),

            // === Sichtbarkeit & Erledigt-Status ===
            AppCommand::ToggleSubtypeVisibility { key } => {
                handlers::visibility::toggle_subtype(state, &key)?
            }
            AppCommand::ToggleRegionVisibility { name } => {
                handlers::visibility::toggle_region(state, &name)?
            }
            AppCommand::ShowAllSubtypes => handlers::visibility::show_all(state)?,
            AppCommand::HideAllSubtypes => handlers::visibility::hide_all(state)?,
            AppCommand::ToggleMarkerCompleted { marker_id } => {
                handlers::completion::toggle(state, &marker_id)?
            }

            // === Kamera & Viewport ===
            AppCommand::CenterOnSelectedMap => handlers::view::center_on_selected_map(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),
            AppCommand::SetCursorPosition { world_pos } => {
                handlers::view::set_cursor_position(state, world_pos)
            }
            AppCommand::ToggleLabels => handlers::view::toggle_labels(state),
            AppCommand::ToggleSidebar => handlers::view::toggle_sidebar(state),
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }
}
