//! Use-Case: Punkt-Selektion umschalten.

use crate::app::{AppState, EditError};
use crate::core::PointRef;

/// Selektiert den Punkt bzw. hebt die Selektion auf, wenn er bereits gewählt ist.
pub fn toggle_point_selection(state: &mut AppState, point: PointRef) -> Result<(), EditError> {
    let shape = state.shape_at(point.shape_index)?;
    if point.point_index >= shape.point_count() {
        return Err(EditError::PointIndexOutOfRange {
            index: point.point_index,
            count: shape.point_count(),
        });
    }

    if state.selection.selected_point == Some(point) {
        state.selection.selected_point = None;
    } else {
        state.selection.selected_point = Some(point);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_click_deselects() {
        let mut state = AppState::new();
        let point = PointRef::new(0, 3);

        toggle_point_selection(&mut state, point).expect("gültig");
        assert_eq!(state.selection.selected_point, Some(point));
        toggle_point_selection(&mut state, PointRef::new(0, 1)).expect("gültig");
        assert_eq!(state.selection.selected_point, Some(PointRef::new(0, 1)));
        toggle_point_selection(&mut state, PointRef::new(0, 1)).expect("gültig");
        assert_eq!(state.selection.selected_point, None);
        assert_eq!(state.history.len(), 1);
    }
}
