//! Use-Case: Shape löschen.

use crate::app::{AppState, EditError};
use crate::core::ShapeId;
use std::sync::Arc;

/// Entfernt ein nicht gesperrtes Shape und hebt die Selektion auf.
pub fn delete_shape(state: &mut AppState, shape_id: ShapeId) -> Result<(), EditError> {
    let index = state.shape_index_of(shape_id)?;
    state.unlocked_shape_at(index)?;

    Arc::make_mut(&mut state.drawing).shapes.remove(index);
    state.selection.clear();
    state.editor.rounding.reset();
    state.commit();
    log::info!("Shape {} gelöscht", shape_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Rejection;

    #[test]
    fn removes_shape_and_clears_selection() {
        let mut state = AppState::new();
        let id = state.drawing.shapes[0].id;
        state.selection.selected_shape = Some(id);

        delete_shape(&mut state, id).expect("löschbar");
        assert_eq!(state.shape_count(), 0);
        assert_eq!(state.selection.selected_shape, None);
        assert_eq!(state.measurements.total_area_sq_ft, 0.0);
    }

    #[test]
    fn locked_shape_survives() {
        let mut state = AppState::new();
        let id = state.drawing.shapes[0].id;
        state.shape_mut(0).expect("Shape").locked = true;

        assert_eq!(
            delete_shape(&mut state, id).unwrap_err(),
            EditError::Rejected(Rejection::ShapeLocked)
        );
        assert_eq!(state.shape_count(), 1);
    }
}
