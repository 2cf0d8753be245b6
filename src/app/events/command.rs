use super::super::state::EditorTool;
use super::NudgeDirection;
use crate::core::{AreaUnit, Point, PointRef, ShapeId};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },

    /// Punkt live verschieben (ohne History-Eintrag)
    MovePoint { point: PointRef, world_pos: Point },
    /// Punkt-Drag abschließen (ein History-Eintrag)
    EndPointDrag,
    /// Punkt hinter einer Kante einfügen
    AddPoint {
        shape_index: usize,
        segment_index: usize,
        world_pos: Point,
    },
    /// Punkt löschen
    DeletePoint { point: PointRef },
    /// Punkt selektieren bzw. Selektion aufheben
    TogglePointSelection { point: PointRef },
    /// Selektierten Punkt verschieben
    NudgeSelectedPoint { direction: NudgeDirection },

    /// Shape selektieren
    SelectShape { shape_id: ShapeId },
    /// Selektion aufheben
    ClearSelection,
    /// Selektiertes Shape löschen
    DeleteSelectedShape,
    /// Selektiertes Shape duplizieren
    DuplicateSelectedShape,
    /// Selektiertes Shape skalieren
    ScaleSelectedShape { factor: f64 },
    /// Sichtbarkeit umschalten
    ToggleShapeVisibility { shape_id: ShapeId },
    /// Sperre umschalten
    ToggleShapeLock { shape_id: ShapeId },
    /// Linienstärke setzen
    SetStrokeWidth { shape_id: ShapeId, width: f32 },

    /// Undo
    Undo,
    /// Redo
    Redo,

    /// Sammlung durch eine Vorlage ersetzen
    LoadTemplate { template_id: String },
    /// Sammlung durch DXF-Inhalt ersetzen
    LoadDxfContent {
        source_name: String,
        content: String,
    },

    /// Abrunden: Punkt wählen
    RoundingPickPoint { point: PointRef },
    /// Abrunden: Drag starten
    BeginRoundingDrag,
    /// Abrunden: Drag-Position
    UpdateRoundingDrag { world_pos: Point },
    /// Abrunden: Drag beenden und ggf. Bogen einfügen
    EndRoundingDrag,

    /// Rastergröße setzen
    SetGridSize { inches: f64 },
    /// Raster-Snap umschalten
    ToggleSnapToGrid,
    /// Raster-Anzeige umschalten
    ToggleGridVisibility,
    /// Messwert-Anzeige umschalten
    ToggleMeasurementsVisibility,
    /// Schrittweite setzen
    SetMoveIncrement { inches: f64 },
    /// Anzeige-Einheit setzen
    SetAreaUnit { unit: AreaUnit },
    /// Optionen persistieren
    SaveOptions,
}
