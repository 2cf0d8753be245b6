//! Use-Case: Selektierten Punkt präzise verschieben.

use crate::app::{AppState, EditError, NudgeDirection, Rejection};

/// Verschiebt den selektierten Punkt um die eingestellte Schrittweite.
///
/// Ohne Raster-Snap, damit auch Schritte unterhalb der Rastergröße möglich sind.
pub fn nudge_selected_point(
    state: &mut AppState,
    direction: NudgeDirection,
) -> Result<(), EditError> {
    let point = state
        .selection
        .selected_point
        .ok_or(Rejection::NothingSelected)?;
    let current = state.unlocked_point_at(point)?;
    let target = current + direction.delta(state.options.move_increment_units());

    if let Some(p) = state
        .shape_mut(point.shape_index)
        .and_then(|shape| shape.points.get_mut(point.point_index))
    {
        *p = target;
    }
    state.commit();
    log::debug!("Punkt {:?} → ({:.2}, {:.2})", direction, target.x, target.y);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, PointRef};

    #[test]
    fn nudges_by_move_increment() {
        let mut state = AppState::new();
        state.selection.selected_point = Some(PointRef::new(0, 0));
        state.options.move_increment_inches = 0.25;

        nudge_selected_point(&mut state, NudgeDirection::Up).expect("verschiebbar");
        nudge_selected_point(&mut state, NudgeDirection::Right).expect("verschiebbar");
        assert_eq!(state.drawing.shapes[0].points[0], Point::new(103.0, 97.0));
        assert_eq!(state.history.len(), 3);
    }

    #[test]
    fn requires_selected_point() {
        let mut state = AppState::new();
        let err = nudge_selected_point(&mut state, NudgeDirection::Down).unwrap_err();
        assert_eq!(err, EditError::Rejected(Rejection::NothingSelected));
    }
}
