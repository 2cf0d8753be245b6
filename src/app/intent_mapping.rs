//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Punkt- und Kanten-Klicks werden abhängig vom aktiven Werkzeug übersetzt.

use super::state::EditorTool;
use super::{AppCommand, AppIntent, AppState};
use crate::core::PointRef;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let tool = state.editor.active_tool;

    match intent {
        // ── Zeiger ──
        AppIntent::PointClicked {
            shape_index,
            point_index,
        } => {
            let point = PointRef::new(shape_index, point_index);
            match tool {
                EditorTool::SelectPoint => vec![AppCommand::TogglePointSelection { point }],
                EditorTool::DeletePoint => vec![AppCommand::DeletePoint { point }],
                EditorTool::RoundByDrag => vec![AppCommand::RoundingPickPoint { point }],
                EditorTool::Select | EditorTool::AddPoint => vec![],
            }
        }
        AppIntent::PointDragMoved {
            shape_index,
            point_index,
            world_pos,
        } if tool == EditorTool::Select => vec![AppCommand::MovePoint {
            point: PointRef::new(shape_index, point_index),
            world_pos,
        }],
        AppIntent::PointDragMoved { .. } => vec![],
        AppIntent::PointDragEnded if tool == EditorTool::Select => vec![AppCommand::EndPointDrag],
        AppIntent::PointDragEnded => vec![],
        AppIntent::ShapeClicked { shape_id } => vec![AppCommand::SelectShape { shape_id }],
        AppIntent::SegmentClicked {
            shape_index,
            segment_index,
            world_pos,
        } if tool == EditorTool::AddPoint => vec![AppCommand::AddPoint {
            shape_index,
            segment_index,
            world_pos,
        }],
        AppIntent::SegmentClicked { .. } => vec![],
        AppIntent::BackgroundClicked => vec![AppCommand::ClearSelection],
        AppIntent::RoundingHandleDragStarted if tool == EditorTool::RoundByDrag => {
            vec![AppCommand::BeginRoundingDrag]
        }
        AppIntent::RoundingHandleDragMoved { world_pos } if tool == EditorTool::RoundByDrag => {
            vec![AppCommand::UpdateRoundingDrag { world_pos }]
        }
        AppIntent::RoundingHandleDragEnded if tool == EditorTool::RoundByDrag => {
            vec![AppCommand::EndRoundingDrag]
        }
        AppIntent::RoundingHandleDragStarted
        | AppIntent::RoundingHandleDragMoved { .. }
        | AppIntent::RoundingHandleDragEnded => vec![],

        // ── Werkzeug & History ──
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        // ── Shape-Aktionen ──
        AppIntent::DeleteSelectedShapeRequested => vec![AppCommand::DeleteSelectedShape],
        AppIntent::DuplicateSelectedShapeRequested => vec![AppCommand::DuplicateSelectedShape],
        AppIntent::ScaleSelectedShapeRequested { factor } => {
            vec![AppCommand::ScaleSelectedShape { factor }]
        }
        AppIntent::ToggleVisibilityRequested { shape_id } => {
            vec![AppCommand::ToggleShapeVisibility { shape_id }]
        }
        AppIntent::ToggleLockRequested { shape_id } => {
            vec![AppCommand::ToggleShapeLock { shape_id }]
        }
        AppIntent::NudgeSelectedPointRequested { direction } => {
            vec![AppCommand::NudgeSelectedPoint { direction }]
        }
        AppIntent::StrokeWidthChanged { shape_id, width } => {
            vec![AppCommand::SetStrokeWidth { shape_id, width }]
        }

        // ── Laden ──
        AppIntent::TemplateSelected { template_id } => {
            vec![AppCommand::LoadTemplate { template_id }]
        }
        AppIntent::DxfContentLoaded {
            source_name,
            content,
        } => vec![AppCommand::LoadDxfContent {
            source_name,
            content,
        }],

        // ── Einstellungen ──
        AppIntent::GridSizeChanged { inches } => vec![AppCommand::SetGridSize { inches }],
        AppIntent::SnapToGridToggled => vec![AppCommand::ToggleSnapToGrid],
        AppIntent::GridVisibilityToggled => vec![AppCommand::ToggleGridVisibility],
        AppIntent::MeasurementsVisibilityToggled => vec![AppCommand::ToggleMeasurementsVisibility],
        AppIntent::MoveIncrementChanged { inches } => vec![AppCommand::SetMoveIncrement { inches }],
        AppIntent::AreaUnitChanged { unit } => vec![AppCommand::SetAreaUnit { unit }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}

#[cfg(test)]
mod tests;
