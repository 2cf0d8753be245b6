//! Fehlerklassen der Shape-Operationen.

use crate::core::{ShapeId, MIN_SHAPE_POINTS};

/// Abgelehnte Aktion: Zustand bleibt unverändert, der Aufrufer zeigt einen Hinweis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Punkt-Löschen würde unter die Mindestanzahl fallen
    #[error("Punkt kann nicht gelöscht werden: mindestens {} Punkte erforderlich", MIN_SHAPE_POINTS)]
    MinimumPoints,
    /// Kein Shape bzw. kein Punkt selektiert
    #[error("Bitte zuerst ein Shape oder einen Punkt auswählen")]
    NothingSelected,
    /// Zweiter Abrunden-Punkt liegt nicht neben dem ersten
    #[error("Die Punkte müssen benachbart sein")]
    NotAdjacent,
    /// Zweiter Abrunden-Punkt gehört zu einem anderen Shape
    #[error("Die Punkte müssen zum selben Shape gehören")]
    DifferentShape,
    /// Shape ist gesperrt
    #[error("Shape ist gesperrt")]
    ShapeLocked,
    /// Undo am Anfang der History
    #[error("Nichts zum Rückgängigmachen")]
    NothingToUndo,
    /// Redo am Ende der History
    #[error("Nichts zum Wiederherstellen")]
    NothingToRedo,
    /// DXF-Inhalt ohne lesbare Shapes
    #[error("Keine Shapes in der DXF-Datei gefunden")]
    NoShapesParsed,
    /// Unbekannte Vorlagen-ID
    #[error("Unbekannte Vorlage")]
    UnknownTemplate,
    /// Skalierungsfaktor nicht endlich oder null
    #[error("Ungültiger Skalierungsfaktor")]
    InvalidScaleFactor,
    /// Linienstärke nicht endlich oder nicht positiv
    #[error("Ungültige Linienstärke")]
    InvalidStrokeWidth,
}

/// Fehler einer Shape-Operation.
///
/// `Rejected` ist eine reguläre Ablehnung. Alle anderen Varianten sind
/// Programmierfehler des Aufrufers (ungültige Referenz); die Operation ändert
/// auch dann nichts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Abgelehnte Aktion
    #[error(transparent)]
    Rejected(#[from] Rejection),
    /// Shape-ID existiert nicht
    #[error("Unbekanntes Shape {0}")]
    UnknownShape(ShapeId),
    /// Shape-Index außerhalb der Sammlung
    #[error("Shape-Index {index} außerhalb (Anzahl: {count})")]
    ShapeIndexOutOfRange { index: usize, count: usize },
    /// Punkt-Index außerhalb des Shapes
    #[error("Punkt-Index {index} außerhalb (Punkte: {count})")]
    PointIndexOutOfRange { index: usize, count: usize },
    /// Kanten-Index außerhalb des Shapes
    #[error("Kanten-Index {index} außerhalb (Kanten: {count})")]
    SegmentIndexOutOfRange { index: usize, count: usize },
}

impl EditError {
    /// Gibt die Ablehnung zurück, falls es sich um eine handelt.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            EditError::Rejected(r) => Some(*r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_converts_into_edit_error() {
        let err: EditError = Rejection::NotAdjacent.into();
        assert_eq!(err.rejection(), Some(Rejection::NotAdjacent));
        assert_eq!(err.to_string(), "Die Punkte müssen benachbart sein");
    }

    #[test]
    fn invariant_errors_are_not_rejections() {
        let err = EditError::PointIndexOutOfRange { index: 9, count: 4 };
        assert!(err.rejection().is_none());
        assert_eq!(err.to_string(), "Punkt-Index 9 außerhalb (Punkte: 4)");
        assert_eq!(
            EditError::UnknownShape(ShapeId(3)).to_string(),
            "Unbekanntes Shape shape-3"
        );
    }
}
