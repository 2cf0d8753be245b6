//! Phasen und Punktauswahl des Abrunden-Werkzeugs.

use crate::app::{EditError, Rejection};
use crate::core::{Drawing, PointRef};

/// Phasen des Abrunden-Werkzeugs
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RoundingPhase {
    /// Nichts gewählt
    #[default]
    Idle,
    /// Erster Punkt gewählt
    FirstPointSelected { first: PointRef },
    /// Zwei benachbarte Punkte gewählt, Griff bereit
    TwoPointsSelected { first: PointRef, second: PointRef },
    /// Griff wird gezogen
    Dragging {
        first: PointRef,
        second: PointRef,
        /// Vorzeichenbehafteter Abstand zur Sehne
        offset: f64,
    },
}

/// Ergebnis eines Punkt-Klicks im Abrunden-Werkzeug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Punkt ist jetzt der erste gewählte Punkt
    FirstSelected,
    /// Erneuter Klick auf den ersten Punkt hat die Auswahl aufgehoben
    Deselected,
    /// Zweiter, benachbarter Punkt gewählt
    PairSelected,
    /// Klick während des Ziehens, keine Wirkung
    Ignored,
}

/// Abrunden-Werkzeug
#[derive(Debug, Clone, Default)]
pub struct RoundingTool {
    pub(crate) phase: RoundingPhase,
}

impl RoundingTool {
    /// Erstellt ein Werkzeug im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft Auswahl, Drag und Vorschau.
    pub fn reset(&mut self) {
        self.phase = RoundingPhase::Idle;
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> RoundingPhase {
        self.phase
    }

    /// Gewählte Punkte in Klick-Reihenfolge (0, 1 oder 2).
    pub fn selected_points(&self) -> Vec<PointRef> {
        match self.phase {
            RoundingPhase::Idle => Vec::new(),
            RoundingPhase::FirstPointSelected { first } => vec![first],
            RoundingPhase::TwoPointsSelected { first, second }
            | RoundingPhase::Dragging { first, second, .. } => vec![first, second],
        }
    }

    /// Gewähltes Punktpaar, falls vollständig.
    pub fn pair(&self) -> Option<(PointRef, PointRef)> {
        match self.phase {
            RoundingPhase::TwoPointsSelected { first, second }
            | RoundingPhase::Dragging { first, second, .. } => Some((first, second)),
            _ => None,
        }
    }

    /// Gibt `true` zurück, solange der Griff gezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, RoundingPhase::Dragging { .. })
    }

    /// Verarbeitet einen Klick auf einen Punkt.
    ///
    /// Ein Punkt eines anderen Shapes wird abgelehnt, die Auswahl bleibt dabei
    /// erhalten. Ein nicht benachbarter Punkt desselben Shapes setzt die Auswahl
    /// zurück und wird ebenfalls abgelehnt.
    pub fn on_point_click(
        &mut self,
        drawing: &Drawing,
        point: PointRef,
    ) -> Result<PickOutcome, EditError> {
        if self.is_dragging() {
            return Ok(PickOutcome::Ignored);
        }

        let shape = drawing
            .shapes
            .get(point.shape_index)
            .ok_or(EditError::ShapeIndexOutOfRange {
                index: point.shape_index,
                count: drawing.shape_count(),
            })?;
        if point.point_index >= shape.point_count() {
            return Err(EditError::PointIndexOutOfRange {
                index: point.point_index,
                count: shape.point_count(),
            });
        }
        if shape.locked {
            return Err(Rejection::ShapeLocked.into());
        }

        match self.phase {
            RoundingPhase::FirstPointSelected { first } => {
                if first == point {
                    self.phase = RoundingPhase::Idle;
                    return Ok(PickOutcome::Deselected);
                }
                if first.shape_index != point.shape_index {
                    return Err(Rejection::DifferentShape.into());
                }
                if !shape.are_adjacent(first.point_index, point.point_index) {
                    self.phase = RoundingPhase::Idle;
                    return Err(Rejection::NotAdjacent.into());
                }
                self.phase = RoundingPhase::TwoPointsSelected {
                    first,
                    second: point,
                };
                Ok(PickOutcome::PairSelected)
            }
            // Idle oder vollständiges Paar: neuer Anfang
            _ => {
                self.phase = RoundingPhase::FirstPointSelected { first: point };
                Ok(PickOutcome::FirstSelected)
            }
        }
    }
}
