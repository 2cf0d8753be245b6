//! Handler für Shape-Selektion und Shape-Operationen.

use crate::app::use_cases;
use crate::app::{AppState, EditError};
use crate::core::ShapeId;

/// Selektiert ein Shape (gesperrte werden ignoriert).
pub fn select(state: &mut AppState, shape_id: ShapeId) -> Result<(), EditError> {
    use_cases::shapes::select_shape(state, shape_id)
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    use_cases::shapes::clear_selection(state);
}

/// Löscht das selektierte Shape.
pub fn delete_selected(state: &mut AppState) -> Result<(), EditError> {
    let shape_id = use_cases::shapes::selected_shape_id(state)?;
    use_cases::shapes::delete_shape(state, shape_id)
}

/// Dupliziert das selektierte Shape.
pub fn duplicate_selected(state: &mut AppState) -> Result<(), EditError> {
    let shape_id = use_cases::shapes::selected_shape_id(state)?;
    use_cases::shapes::duplicate_shape(state, shape_id).map(|_| ())
}

/// Skaliert das selektierte Shape um seinen Schwerpunkt.
pub fn scale_selected(state: &mut AppState, factor: f64) -> Result<(), EditError> {
    let shape_id = use_cases::shapes::selected_shape_id(state)?;
    use_cases::shapes::scale_shape(state, shape_id, factor)
}

/// Schaltet die Sichtbarkeit um.
pub fn toggle_visibility(state: &mut AppState, shape_id: ShapeId) -> Result<(), EditError> {
    use_cases::shapes::toggle_visibility(state, shape_id).map(|_| ())
}

/// Schaltet die Sperre um.
pub fn toggle_lock(state: &mut AppState, shape_id: ShapeId) -> Result<(), EditError> {
    use_cases::shapes::toggle_lock(state, shape_id).map(|_| ())
}

/// Setzt die Linienstärke.
pub fn set_stroke_width(
    state: &mut AppState,
    shape_id: ShapeId,
    width: f32,
) -> Result<(), EditError> {
    use_cases::shapes::set_stroke_width(state, shape_id, width)
}
