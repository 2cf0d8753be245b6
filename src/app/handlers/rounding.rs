//! Handler für das Abrunden-Werkzeug.

use crate::app::use_cases;
use crate::app::{AppState, EditError};
use crate::core::{Point, PointRef};

/// Punkt für das Abrunden wählen.
pub fn pick_point(state: &mut AppState, point: PointRef) -> Result<(), EditError> {
    use_cases::rounding::pick_point(state, point).map(|_| ())
}

/// Griff-Drag starten.
pub fn begin_drag(state: &mut AppState) {
    use_cases::rounding::begin_drag(state);
}

/// Griff-Drag aktualisieren.
pub fn update_drag(state: &mut AppState, world_pos: Point) {
    use_cases::rounding::update_drag(state, world_pos);
}

/// Griff-Drag beenden und ggf. Bogen einfügen.
pub fn end_drag(state: &mut AppState) -> Result<(), EditError> {
    use_cases::rounding::end_drag(state).map(|_| ())
}
