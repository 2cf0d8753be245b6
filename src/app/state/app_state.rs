use crate::app::history::{EditHistory, Snapshot};
use crate::app::{CommandLog, EditError, Rejection};
use crate::core::{
    seed_rectangle, Drawing, Measurements, Point, PointRef, Shape, ShapeId, ShapeIdGenerator,
};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorToolState, SelectionState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Shape-Sammlung (Arc für O(1)-Snapshots)
    pub drawing: Arc<Drawing>,
    /// Gesamtfläche/-umfang, abgeleitet aus `drawing`
    pub measurements: Measurements,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Vergabe neuer Shape-IDs (außerhalb der History)
    pub ids: ShapeIdGenerator,
}

impl AppState {
    /// Erstellt den Startzustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt den Startzustand: ein Beispiel-Rechteck, History mit genau einem Eintrag.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut ids = ShapeIdGenerator::new();
        let drawing = Arc::new(Drawing::from_shapes(vec![seed_rectangle(ids.next_id())]));
        let mut history = EditHistory::new_with_capacity(options.history_depth);
        history.reset(Snapshot {
            drawing: drawing.clone(),
        });

        Self {
            measurements: Measurements::recompute(&drawing.shapes),
            drawing,
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            history,
            options,
            ids,
        }
    }

    /// Gibt die Anzahl der Shapes zurück (für UI-Anzeige)
    pub fn shape_count(&self) -> usize {
        self.drawing.shape_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Übernimmt den aktuellen Stand in die History und berechnet die Messwerte neu.
    pub fn commit(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.commit(snap);
        self.refresh_measurements();
        log::debug!(
            "Commit: {} Shapes, History {}/{}",
            self.drawing.shape_count(),
            self.history.cursor() + 1,
            self.history.len()
        );
    }

    /// Gibt `true` zurück, wenn `drawing` vom aktiven History-Stand abweicht
    /// (z.B. während eines Punkt-Drags).
    pub fn has_uncommitted_changes(&self) -> bool {
        self.history
            .current()
            .map_or(true, |snap| !Arc::ptr_eq(&snap.drawing, &self.drawing))
    }

    /// Berechnet die Messwerte aus der aktuellen Sammlung neu.
    pub fn refresh_measurements(&mut self) {
        self.measurements = Measurements::recompute(&self.drawing.shapes);
    }

    /// Ersetzt die komplette Sammlung (Import/Vorlage), setzt Selektion und
    /// Werkzeug-Zwischenstände zurück und übernimmt den neuen Stand.
    pub fn replace_drawing(&mut self, drawing: Drawing) {
        self.ids.reserve_existing(&drawing);
        self.drawing = Arc::new(drawing);
        self.selection.clear();
        self.editor.rounding.reset();
        self.commit();
    }

    /// Vergibt eine neue, nie verwendete Shape-ID.
    pub fn next_shape_id(&mut self) -> ShapeId {
        self.ids.next_id()
    }

    /// Shape am Index, sonst Invariantenfehler.
    pub fn shape_at(&self, shape_index: usize) -> Result<&Shape, EditError> {
        self.drawing
            .shapes
            .get(shape_index)
            .ok_or(EditError::ShapeIndexOutOfRange {
                index: shape_index,
                count: self.drawing.shape_count(),
            })
    }

    /// Wie [`Self::shape_at`], lehnt gesperrte Shapes zusätzlich ab.
    pub fn unlocked_shape_at(&self, shape_index: usize) -> Result<&Shape, EditError> {
        let shape = self.shape_at(shape_index)?;
        if shape.locked {
            return Err(Rejection::ShapeLocked.into());
        }
        Ok(shape)
    }

    /// Position eines Punkts eines nicht gesperrten Shapes.
    pub fn unlocked_point_at(&self, point: PointRef) -> Result<Point, EditError> {
        let shape = self.unlocked_shape_at(point.shape_index)?;
        shape
            .points
            .get(point.point_index)
            .copied()
            .ok_or(EditError::PointIndexOutOfRange {
                index: point.point_index,
                count: shape.point_count(),
            })
    }

    /// Index des Shapes mit der ID, sonst Invariantenfehler.
    pub fn shape_index_of(&self, id: ShapeId) -> Result<usize, EditError> {
        self.drawing.index_of(id).ok_or(EditError::UnknownShape(id))
    }

    /// Mutable Zugriff auf ein Shape (Copy-on-Write der Sammlung).
    ///
    /// Der Index muss vorher geprüft sein.
    pub(crate) fn shape_mut(&mut self, shape_index: usize) -> Option<&mut Shape> {
        Arc::make_mut(&mut self.drawing).shapes.get_mut(shape_index)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn new_state_holds_seed_rectangle() {
        let state = AppState::new();
        assert_eq!(state.shape_count(), 1);
        assert_eq!(state.drawing.shapes[0].name, "Sample Rectangle");
        assert_eq!(state.history.len(), 1);
        assert!(!state.can_undo());
        assert!(!state.can_redo());
        assert!(!state.has_uncommitted_changes());
        assert_abs_diff_eq!(state.measurements.total_area_sq_ft, 416.67, epsilon = 0.01);
        assert_abs_diff_eq!(state.measurements.total_perimeter_ft, 83.33, epsilon = 0.01);
    }

    #[test]
    fn shape_mut_detaches_from_history() {
        let mut state = AppState::new();
        state.shape_mut(0).expect("Shape vorhanden").closed = false;
        assert!(state.has_uncommitted_changes());
        assert!(state.history.current().expect("Eintrag").drawing.shapes[0].closed);

        state.commit();
        assert!(!state.has_uncommitted_changes());
        assert!(state.can_undo());
        assert_eq!(state.measurements.total_area_sq_ft, 0.0);
    }

    #[test]
    fn replace_drawing_never_reuses_ids() {
        let mut state = AppState::new();
        let seed_id = state.drawing.shapes[0].id;
        state.replace_drawing(Drawing::new());
        assert_ne!(state.next_shape_id(), seed_id);
        assert_eq!(state.history.len(), 2);
    }

    #[test]
    fn lookups_report_invariant_errors() {
        let mut state = AppState::new();
        assert_eq!(
            state.shape_at(3).unwrap_err(),
            EditError::ShapeIndexOutOfRange { index: 3, count: 1 }
        );
        assert_eq!(
            state.shape_index_of(ShapeId(99)).unwrap_err(),
            EditError::UnknownShape(ShapeId(99))
        );
        state.shape_mut(0).expect("Shape vorhanden").locked = true;
        assert_eq!(
            state.unlocked_shape_at(0).unwrap_err(),
            EditError::Rejected(Rejection::ShapeLocked)
        );
    }
}
