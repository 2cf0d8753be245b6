//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::{AppState, EditError, Rejection};

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) -> Result<(), EditError> {
    let Some(prev) = state.history.undo() else {
        log::debug!("Undo: nichts zu tun");
        return Err(Rejection::NothingToUndo.into());
    };
    restore(state, prev);
    log::info!("Undo ausgeführt");
    Ok(())
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) -> Result<(), EditError> {
    let Some(next) = state.history.redo() else {
        log::debug!("Redo: nichts zu tun");
        return Err(Rejection::NothingToRedo.into());
    };
    restore(state, next);
    log::info!("Redo ausgeführt");
    Ok(())
}

/// Übernimmt einen History-Stand und gleicht abgeleiteten Zustand an.
///
/// Punkt-Indizes können im wiederhergestellten Stand ungültig sein, daher werden
/// Punkt-Selektion und Abrunden-Auswahl verworfen.
fn restore(state: &mut AppState, snapshot: Snapshot) {
    snapshot.apply_to(state);
    if let Some(id) = state.selection.selected_shape {
        if state.drawing.index_of(id).is_none() {
            state.selection.selected_shape = None;
        }
    }
    state.selection.selected_point = None;
    state.editor.rounding.reset();
    state.refresh_measurements();
}
