//! Werkzeug-Modi des Editors (shared zwischen App und Renderer).

/// Aktives Editor-Werkzeug; bestimmt die Bedeutung von Punkt- und Kanten-Klicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Shapes selektieren, Punkte ziehen
    #[default]
    Select,
    /// Einzelnen Punkt selektieren (für Präzisions-Verschieben)
    SelectPoint,
    /// Punkt auf einer Kante einfügen
    AddPoint,
    /// Punkt löschen
    DeletePoint,
    /// Kante per Ziehen zu einem Bogen abrunden
    RoundByDrag,
}
