//! Use-Case: Punkt auf einer Kante einfügen.

use super::snapped;
use crate::app::{AppState, EditError};
use crate::core::Point;

/// Fügt einen Punkt direkt hinter dem Startpunkt der Kante `segment_index` ein.
///
/// Bei der Schlusskante eines geschlossenen Shapes wird der Punkt angehängt.
pub fn add_point(
    state: &mut AppState,
    shape_index: usize,
    segment_index: usize,
    world_pos: Point,
) -> Result<(), EditError> {
    let shape = state.unlocked_shape_at(shape_index)?;
    let segments = shape.segment_count();
    if segment_index >= segments {
        return Err(EditError::SegmentIndexOutOfRange {
            index: segment_index,
            count: segments,
        });
    }
    let pos = snapped(&state.options, world_pos);

    if let Some(shape) = state.shape_mut(shape_index) {
        shape.points.insert(segment_index + 1, pos);
    }
    state.commit();
    log::info!(
        "Punkt eingefügt: Shape {}, nach Punkt {}",
        shape_index,
        segment_index
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_after_segment_start() {
        let mut state = AppState::new();
        add_point(&mut state, 0, 0, Point::new(250.0, 100.0)).expect("einfügbar");

        let points = &state.drawing.shapes[0].points;
        assert_eq!(points.len(), 5);
        assert_eq!(points[1], Point::new(252.0, 102.0));
        assert_eq!(points[2], Point::new(400.0, 100.0));
        assert!(state.can_undo());
    }

    #[test]
    fn closing_segment_appends() {
        let mut state = AppState::new();
        state.options.snap_to_grid = false;
        add_point(&mut state, 0, 3, Point::new(100.0, 200.0)).expect("einfügbar");
        let points = &state.drawing.shapes[0].points;
        assert_eq!(points.last(), Some(&Point::new(100.0, 200.0)));
    }

    #[test]
    fn rejects_unknown_segment() {
        let mut state = AppState::new();
        let err = add_point(&mut state, 0, 4, Point::ZERO).unwrap_err();
        assert_eq!(err, EditError::SegmentIndexOutOfRange { index: 4, count: 4 });
        assert_eq!(state.history.len(), 1);
    }
}
