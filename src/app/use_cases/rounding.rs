//! Use-Case-Funktionen des Abrunden-Werkzeugs.
//!
//! Das Werkzeug hält nur Auswahl und Drag-Zustand; eingefügt wird der Bogen hier.

use crate::app::tools::{round_edge, PickOutcome};
use crate::app::{AppState, EditError};
use crate::core::{Point, PointRef};

/// Leitet einen Punkt-Klick an das Abrunden-Werkzeug weiter.
pub fn pick_point(state: &mut AppState, point: PointRef) -> Result<PickOutcome, EditError> {
    let outcome = state.editor.rounding.on_point_click(&state.drawing, point)?;
    log::debug!("Abrunden: {:?} ({:?})", outcome, point);
    Ok(outcome)
}

/// Startet den Griff-Drag (nur mit zwei gewählten Punkten).
pub fn begin_drag(state: &mut AppState) {
    if !state.editor.rounding.on_drag_start() {
        log::debug!("Abrunden: Drag ohne Punktpaar ignoriert");
    }
}

/// Aktualisiert die Ausbuchtung während des Drags.
pub fn update_drag(state: &mut AppState, world_pos: Point) {
    state.editor.rounding.on_drag_update(&state.drawing, world_pos);
}

/// Beendet den Drag und ersetzt die Kante durch einen Bogen.
///
/// Unterhalb von `rounding_min_offset` bleibt die Sammlung unverändert und es
/// entsteht kein History-Eintrag. Gibt `true` zurück, wenn eingefügt wurde.
pub fn end_drag(state: &mut AppState) -> Result<bool, EditError> {
    let Some(release) = state.editor.rounding.on_drag_end() else {
        return Ok(false);
    };
    if release.offset.abs() < state.options.rounding_min_offset {
        log::debug!("Abrunden verworfen: Ausbuchtung {:.2}", release.offset);
        return Ok(false);
    }

    let shape_index = release.first.shape_index;
    let shape = state.unlocked_shape_at(shape_index)?;
    let Some(rounded) = round_edge(
        &shape.points,
        shape.closed,
        release.first.point_index,
        release.second.point_index,
        release.offset,
        state.options.arc_commit_segments,
    ) else {
        log::debug!("Abrunden: kein Bogen für {:?}", release);
        return Ok(false);
    };

    let added = rounded.len() - shape.point_count();
    if let Some(shape) = state.shape_mut(shape_index) {
        shape.points = rounded;
    }
    state.commit();
    log::info!(
        "Kante abgerundet: Shape {}, {} Bogenpunkte",
        shape_index,
        added
    );
    Ok(true)
}
