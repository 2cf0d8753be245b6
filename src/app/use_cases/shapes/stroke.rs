//! Use-Case: Linienstärke setzen.

use crate::app::{AppState, EditError, Rejection};
use crate::core::ShapeId;

/// Setzt die Linienstärke eines nicht gesperrten Shapes.
pub fn set_stroke_width(state: &mut AppState, shape_id: ShapeId, width: f32) -> Result<(), EditError> {
    if !width.is_finite() || width <= 0.0 {
        return Err(Rejection::InvalidStrokeWidth.into());
    }
    let index = state.shape_index_of(shape_id)?;
    state.unlocked_shape_at(index)?;

    if let Some(shape) = state.shape_mut(index) {
        shape.stroke_width = width;
    }
    state.commit();
    log::debug!("Shape {}: Linienstärke {}", shape_id, width);
    Ok(())
}
