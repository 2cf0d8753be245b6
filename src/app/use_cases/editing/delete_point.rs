//! Use-Case: Punkt löschen.

use crate::app::{AppState, EditError, Rejection};
use crate::core::{PointRef, MIN_SHAPE_POINTS};

/// Entfernt einen Punkt. Ein Shape behält immer mindestens drei Punkte.
pub fn delete_point(state: &mut AppState, point: PointRef) -> Result<(), EditError> {
    state.unlocked_point_at(point)?;
    let count = state.shape_at(point.shape_index)?.point_count();
    if count <= MIN_SHAPE_POINTS {
        return Err(Rejection::MinimumPoints.into());
    }

    if let Some(shape) = state.shape_mut(point.shape_index) {
        shape.points.remove(point.point_index);
    }
    state.selection.selected_point = None;
    state.commit();
    log::info!(
        "Punkt {} aus Shape {} gelöscht",
        point.point_index,
        point.shape_index
    );
    Ok(())
}
