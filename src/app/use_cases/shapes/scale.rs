//! Use-Case: Shape um seinen Schwerpunkt skalieren.

use crate::app::{AppState, EditError, Rejection};
use crate::core::geometry::{centroid, scale_about};
use crate::core::ShapeId;

/// Skaliert alle Punkte eines Shapes: `centroid + (p − centroid) · factor`.
///
/// Negative Faktoren spiegeln das Shape am Schwerpunkt.
pub fn scale_shape(state: &mut AppState, shape_id: ShapeId, factor: f64) -> Result<(), EditError> {
    if !factor.is_finite() || factor == 0.0 {
        return Err(Rejection::InvalidScaleFactor.into());
    }
    let index = state.shape_index_of(shape_id)?;
    let shape = state.unlocked_shape_at(index)?;
    let Some(center) = centroid(&shape.points) else {
        return Ok(());
    };

    if let Some(shape) = state.shape_mut(index) {
        scale_about(&mut shape.points, center, factor);
    }
    state.commit();
    log::info!("Shape {} skaliert (Faktor {})", shape_id, factor);
    Ok(())
}
