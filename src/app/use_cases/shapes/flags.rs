//! Use-Case: Sichtbarkeit und Sperre umschalten.

use crate::app::{AppState, EditError};
use crate::core::ShapeId;

/// Schaltet die Sichtbarkeit eines Shapes um (auch bei gesperrten Shapes).
pub fn toggle_visibility(state: &mut AppState, shape_id: ShapeId) -> Result<bool, EditError> {
    let index = state.shape_index_of(shape_id)?;
    let visible = !state.shape_at(index)?.visible;
    if let Some(shape) = state.shape_mut(index) {
        shape.visible = visible;
    }
    state.commit();
    log::info!("Shape {} sichtbar: {}", shape_id, visible);
    Ok(visible)
}

/// Schaltet die Sperre eines Shapes um.
pub fn toggle_lock(state: &mut AppState, shape_id: ShapeId) -> Result<bool, EditError> {
    let index = state.shape_index_of(shape_id)?;
    let locked = !state.shape_at(index)?.locked;
    if let Some(shape) = state.shape_mut(index) {
        shape.locked = locked;
    }
    if locked && state.selection.selected_shape == Some(shape_id) {
        state.selection.selected_shape = None;
    }
    state.commit();
    log::info!("Shape {} gesperrt: {}", shape_id, locked);
    Ok(locked)
}
