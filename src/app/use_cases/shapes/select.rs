//! Use-Case: Shape-Selektion.

use crate::app::{AppState, EditError, Rejection};
use crate::core::ShapeId;

/// Selektiert ein Shape. Klicks auf gesperrte Shapes werden ignoriert.
pub fn select_shape(state: &mut AppState, shape_id: ShapeId) -> Result<(), EditError> {
    let index = state.shape_index_of(shape_id)?;
    if state.drawing.shapes[index].locked {
        log::debug!("Gesperrtes Shape {} nicht selektierbar", shape_id);
        return Ok(());
    }
    state.selection.selected_shape = Some(shape_id);
    Ok(())
}

/// Hebt Shape- und Punkt-Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// ID des selektierten Shapes, sonst `NothingSelected`.
pub fn selected_shape_id(state: &AppState) -> Result<ShapeId, EditError> {
    state
        .selection
        .selected_shape
        .ok_or(Rejection::NothingSelected.into())
}
