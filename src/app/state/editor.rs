use crate::app::tools::RoundingTool;
pub use crate::shared::EditorTool;

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Abrunden-Werkzeug (Punktauswahl und Drag)
    pub rounding: RoundingTool,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self {
            active_tool: EditorTool::Select,
            rounding: RoundingTool::new(),
        }
    }
}
