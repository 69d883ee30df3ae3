//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StartupRequested => {
            vec![AppCommand::RestoreLanguage, AppCommand::LoadCatalog]
        }
        AppIntent::CatalogReloadRequested => vec![AppCommand::LoadCatalog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::MapSelected { map_id } => vec![
            AppCommand::SelectMap { map_id },
            AppCommand::CenterOnSelectedMap,
            AppCommand::RequestMapData,
        ],
        AppIntent::LoadPollRequested => vec![AppCommand::PollCatalog, AppCommand::PollMapData],
        AppIntent::LanguageSelected { language } => vec![AppCommand::SetLanguage { language }],
        AppIntent::SubtypeVisibilityToggled { key } => {
            vec![AppCommand::ToggleSubtypeVisibility { key }]
        }
        AppIntent::RegionVisibilityToggled { name } => {
            vec![AppCommand::ToggleRegionVisibility { name }]
        }
        AppIntent::ShowAllSubtypesRequested => vec![AppCommand::ShowAllSubtypes],
        AppIntent::HideAllSubtypesRequested => vec![AppCommand::HideAllSubtypes],
        AppIntent::MarkerCompletionToggled { marker_id } => {
            let completable = state
                .map_data
                .data
                .marker(&marker_id)
                .is_some_and(|m| state.catalog.can_complete(&m.subtype_key()));
            if completable {
                vec![AppCommand::ToggleMarkerCompleted { marker_id }]
            } else {
                log::debug!("Marker '{}' ist nicht abhakbar, ignoriert", marker_id);
                vec![]
            }
        }
        AppIntent::MarkerPickRequested { world_pos } => {
            let max_distance = state
                .view
                .camera
                .pick_radius_world(state.options.marker_pick_radius_px);
            vec![AppCommand::SelectNearestMarker {
                world_pos,
                max_distance,
            }]
        }
        AppIntent::MarkerPopupClosed => vec![AppCommand::SelectMarker { marker_id: None }],
        AppIntent::LabelsToggled => vec![AppCommand::ToggleLabels],
        AppIntent::SidebarToggled => vec![AppCommand::ToggleSidebar],
        AppIntent::RecenterRequested => vec![AppCommand::CenterOnSelectedMap],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::CursorMoved { world_pos } => vec![AppCommand::SetCursorPosition { world_pos }],
    }
}

#[cfg(test)]
mod tests;
