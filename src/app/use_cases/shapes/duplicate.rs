//! Use-Case: Shape duplizieren.

use crate::app::{AppState, EditError};
use crate::core::ShapeId;
use std::sync::Arc;

/// Legt eine um `duplicate_offset` versetzte Kopie mit neuer ID an und selektiert sie.
///
/// Sichtbarkeit und Sperre werden mitkopiert.
pub fn duplicate_shape(state: &mut AppState, shape_id: ShapeId) -> Result<ShapeId, EditError> {
    let index = state.shape_index_of(shape_id)?;
    let mut copy = state.shape_at(index)?.clone();
    let offset = state.options.duplicate_offset_vec();

    copy.id = state.next_shape_id();
    copy.name = format!("{} (Copy)", copy.name);
    for p in copy.points.iter_mut() {
        *p += offset;
    }
    let new_id = copy.id;

    Arc::make_mut(&mut state.drawing).shapes.push(copy);
    state.selection.selected_shape = Some(new_id);
    state.commit();
    log::info!("Shape {} dupliziert als {}", shape_id, new_id);
    Ok(new_id)
}
