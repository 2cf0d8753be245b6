//! Application Controller für zentrale Event-Verarbeitung.

use super::command_log::CommandOutcome;
use super::render_scene;
use super::{AppCommand, AppIntent, AppState, EditError};
use crate::shared::RenderScene;

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
    /// Eine Ablehnung landet in `state.ui.last_rejection`; nur Invariantenfehler
    /// werden als Fehler zurückgegeben.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        state.ui.last_rejection = None;
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
        use super::handlers;
        let logged = command.clone();

        if let AppCommand::SaveOptions = command {
            let result = handlers::settings::save_options(state);
            let outcome = match &result {
                Ok(()) => CommandOutcome::Applied,
                Err(_) => CommandOutcome::Failed,
            };
            self.record(state, logged, outcome);
            return result;
        }

        let result = match command {
            // === Werkzeug ===
            AppCommand::SetEditorTool { tool } => {
                handlers::editing::set_editor_tool(state, tool);
                Ok(())
            }

            // === Punkt-Editing ===
            AppCommand::MovePoint { point, world_pos } => {
                handlers::editing::move_point(state, point, world_pos)
            }
            AppCommand::EndPointDrag => {
                handlers::editing::end_point_drag(state);
                Ok(())
            }
            AppCommand::AddPoint {
                shape_index,
                segment_index,
                world_pos,
            } => handlers::editing::add_point(state, shape_index, segment_index, world_pos),
            AppCommand::DeletePoint { point } => handlers::editing::delete_point(state, point),
            AppCommand::TogglePointSelection { point } => {
                handlers::editing::toggle_point_selection(state, point)
            }
            AppCommand::NudgeSelectedPoint { direction } => {
                handlers::editing::nudge_selected_point(state, direction)
            }

            // === Shapes ===
            AppCommand::SelectShape { shape_id } => handlers::shapes::select(state, shape_id),
            AppCommand::ClearSelection => {
                handlers::shapes::clear_selection(state);
                Ok(())
            }
            AppCommand::DeleteSelectedShape => handlers::shapes::delete_selected(state),
            AppCommand::DuplicateSelectedShape => handlers::shapes::duplicate_selected(state),
            AppCommand::ScaleSelectedShape { factor } => {
                handlers::shapes::scale_selected(state, factor)
            }
            AppCommand::ToggleShapeVisibility { shape_id } => {
                handlers::shapes::toggle_visibility(state, shape_id)
            }
            AppCommand::ToggleShapeLock { shape_id } => {
                handlers::shapes::toggle_lock(state, shape_id)
            }
            AppCommand::SetStrokeWidth { shape_id, width } => {
                handlers::shapes::set_stroke_width(state, shape_id, width)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Laden ===
            AppCommand::LoadTemplate { template_id } => {
                handlers::file_io::load_template(state, &template_id)
            }
            AppCommand::LoadDxfContent {
                source_name,
                content,
            } => handlers::file_io::load_dxf_content(state, &source_name, &content),

            // === Abrunden ===
            AppCommand::RoundingPickPoint { point } => handlers::rounding::pick_point(state, point),
            AppCommand::BeginRoundingDrag => {
                handlers::rounding::begin_drag(state);
                Ok(())
            }
            AppCommand::UpdateRoundingDrag { world_pos } => {
                handlers::rounding::update_drag(state, world_pos);
                Ok(())
            }
            AppCommand::EndRoundingDrag => handlers::rounding::end_drag(state),

            // === Einstellungen ===
            AppCommand::SetGridSize { inches } => {
                handlers::settings::set_grid_size(state, inches);
                Ok(())
            }
            AppCommand::ToggleSnapToGrid => {
                handlers::settings::toggle_snap_to_grid(state);
                Ok(())
            }
            AppCommand::ToggleGridVisibility => {
                handlers::settings::toggle_grid_visibility(state);
                Ok(())
            }
            AppCommand::ToggleMeasurementsVisibility => {
                handlers::settings::toggle_measurements_visibility(state);
                Ok(())
            }
            AppCommand::SetMoveIncrement { inches } => {
                handlers::settings::set_move_increment(state, inches);
                Ok(())
            }
            AppCommand::SetAreaUnit { unit } => {
                handlers::settings::set_area_unit(state, unit);
                Ok(())
            }
            AppCommand::SaveOptions => Ok(()),
        };

        let outcome = match &result {
            Ok(()) => CommandOutcome::Applied,
            Err(EditError::Rejected(rejection)) => CommandOutcome::Rejected(*rejection),
            Err(_) => CommandOutcome::Failed,
        };
        self.record(state, logged, outcome);
        self.report(state, result)
    }

    fn record(&self, state: &mut AppState, command: AppCommand, outcome: CommandOutcome) {
        let position = (state.history.cursor(), state.history.len());
        state.command_log.record(command, outcome, position);
    }

    /// Ablehnungen werden als Hinweis gespeichert, Invariantenfehler weitergereicht.
    fn report(&self, state: &mut AppState, result: Result<(), EditError>) -> anyhow::Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(EditError::Rejected(rejection)) => {
                log::warn!("Aktion abgelehnt: {}", rejection);
                state.ui.last_rejection = Some(rejection);
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
