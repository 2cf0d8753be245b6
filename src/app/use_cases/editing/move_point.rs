//! Use-Case: Punkt per Drag verschieben.

use super::snapped;
use crate::app::{AppState, EditError};
use crate::core::{Point, PointRef};

/// Setzt einen Punkt auf eine neue Position (Zwischenstand eines Drags).
///
/// Schreibt keinen History-Eintrag; die Messwerte werden live nachgeführt.
pub fn move_point(state: &mut AppState, point: PointRef, world_pos: Point) -> Result<(), EditError> {
    state.unlocked_point_at(point)?;
    let target = snapped(&state.options, world_pos);

    if let Some(p) = state
        .shape_mut(point.shape_index)
        .and_then(|shape| shape.points.get_mut(point.point_index))
    {
        *p = target;
    }
    state.refresh_measurements();
    Ok(())
}

/// Schließt einen Punkt-Drag ab: genau ein History-Eintrag, falls sich etwas geändert hat.
pub fn end_point_drag(state: &mut AppState) {
    if !state.has_uncommitted_changes() {
        log::debug!("Drag-Ende ohne Änderung");
        return;
    }
    state.commit();
    log::info!("Punkt verschoben");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Rejection;

    #[test]
    fn drag_commits_once_with_snap() {
        let mut state = AppState::new();
        let point = PointRef::new(0, 2);

        move_point(&mut state, point, Point::new(410.0, 305.0)).expect("verschiebbar");
        move_point(&mut state, point, Point::new(421.0, 313.0)).expect("verschiebbar");
        assert_eq!(state.history.len(), 1);
        // Raster 0.5 Zoll = 6 Einheiten
        assert_eq!(state.drawing.shapes[0].points[2], Point::new(420.0, 312.0));

        end_point_drag(&mut state);
        assert_eq!(state.history.len(), 2);
        end_point_drag(&mut state);
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn move_without_snap_keeps_exact_position() {
        let mut state = AppState::new();
        state.options.snap_to_grid = false;
        move_point(&mut state, PointRef::new(0, 0), Point::new(101.5, 99.25)).expect("verschiebbar");
        assert_eq!(state.drawing.shapes[0].points[0], Point::new(101.5, 99.25));
    }

    #[test]
    fn locked_shape_rejects_move() {
        let mut state = AppState::new();
        state.shape_mut(0).expect("Shape").locked = true;
        state.commit();
        let before = state.drawing.clone();

        let err = move_point(&mut state, PointRef::new(0, 1), Point::new(0.0, 0.0)).unwrap_err();
        assert_eq!(err, EditError::Rejected(Rejection::ShapeLocked));
        assert_eq!(*state.drawing, *before);
    }
}
