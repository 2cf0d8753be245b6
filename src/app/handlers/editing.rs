//! Handler für Punkt-Editing und Editor-Werkzeug.

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::{AppState, EditError, NudgeDirection};
use crate::core::{Point, PointRef};

/// Aktiviert ein Editor-Werkzeug und setzt tool-spezifische Zwischenselektion zurück.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    let previous = state.editor.active_tool;
    if previous == EditorTool::SelectPoint && tool != EditorTool::SelectPoint {
        state.selection.selected_point = None;
    }
    if previous == EditorTool::RoundByDrag && tool != EditorTool::RoundByDrag {
        state.editor.rounding.reset();
    }
    state.editor.active_tool = tool;
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Verschiebt einen Punkt live während eines Drags.
pub fn move_point(state: &mut AppState, point: PointRef, world_pos: Point) -> Result<(), EditError> {
    use_cases::editing::move_point(state, point, world_pos)
}

/// Schließt einen Punkt-Drag ab.
pub fn end_point_drag(state: &mut AppState) {
    use_cases::editing::end_point_drag(state);
}

/// Fügt einen Punkt auf einer Kante ein.
pub fn add_point(
    state: &mut AppState,
    shape_index: usize,
    segment_index: usize,
    world_pos: Point,
) -> Result<(), EditError> {
    use_cases::editing::add_point(state, shape_index, segment_index, world_pos)
}

/// Löscht einen Punkt.
pub fn delete_point(state: &mut AppState, point: PointRef) -> Result<(), EditError> {
    use_cases::editing::delete_point(state, point)
}

/// Schaltet die Punkt-Selektion um.
pub fn toggle_point_selection(state: &mut AppState, point: PointRef) -> Result<(), EditError> {
    use_cases::editing::toggle_point_selection(state, point)
}

/// Verschiebt den selektierten Punkt um eine Schrittweite.
pub fn nudge_selected_point(
    state: &mut AppState,
    direction: NudgeDirection,
) -> Result<(), EditError> {
    use_cases::editing::nudge_selected_point(state, direction)
}
