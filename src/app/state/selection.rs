use crate::core::{PointRef, ShapeId};

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuell selektiertes Shape
    pub selected_shape: Option<ShapeId>,
    /// Selektierter Punkt (nur im Werkzeug "Punkt wählen")
    pub selected_point: Option<PointRef>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt Shape- und Punkt-Selektion auf.
    pub fn clear(&mut self) {
        self.selected_shape = None;
        self.selected_point = None;
    }
}
