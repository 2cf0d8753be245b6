use super::super::state::EditorTool;
use crate::core::{AreaUnit, Point, ShapeId};

/// Richtung für das Präzisions-Verschieben eines Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    /// −y
    Up,
    /// +y
    Down,
    /// −x
    Left,
    /// +x
    Right,
}

impl NudgeDirection {
    /// Verschiebungsvektor für eine Schrittweite.
    pub fn delta(self, step: f64) -> Point {
        match self {
            NudgeDirection::Up => Point::new(0.0, -step),
            NudgeDirection::Down => Point::new(0.0, step),
            NudgeDirection::Left => Point::new(-step, 0.0),
            NudgeDirection::Right => Point::new(step, 0.0),
        }
    }
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeiger-Treffer übersetzt der Aufrufer selbst in Punkt-, Kanten- und
/// Shape-Klicks; Koordinaten sind Zeichnungseinheiten.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Zeiger-Ereignisse ──
    /// Punkt eines Shapes angeklickt
    PointClicked {
        shape_index: usize,
        point_index: usize,
    },
    /// Punkt wird gezogen (Zwischenposition)
    PointDragMoved {
        shape_index: usize,
        point_index: usize,
        world_pos: Point,
    },
    /// Punkt-Drag beendet
    PointDragEnded,
    /// Shape angeklickt
    ShapeClicked { shape_id: ShapeId },
    /// Kante angeklickt
    SegmentClicked {
        shape_index: usize,
        segment_index: usize,
        world_pos: Point,
    },
    /// Klick ins Leere
    BackgroundClicked,
    /// Abrunden: Drag am Griff gestartet
    RoundingHandleDragStarted,
    /// Abrunden: Griff wird gezogen
    RoundingHandleDragMoved { world_pos: Point },
    /// Abrunden: Griff losgelassen
    RoundingHandleDragEnded,

    // ── Werkzeug & History ──
    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Undo
    UndoRequested,
    /// Redo
    RedoRequested,

    // ── Shape-Aktionen ──
    /// Selektiertes Shape löschen
    DeleteSelectedShapeRequested,
    /// Selektiertes Shape duplizieren
    DuplicateSelectedShapeRequested,
    /// Selektiertes Shape um seinen Schwerpunkt skalieren
    ScaleSelectedShapeRequested { factor: f64 },
    /// Sichtbarkeit umschalten
    ToggleVisibilityRequested { shape_id: ShapeId },
    /// Sperre umschalten
    ToggleLockRequested { shape_id: ShapeId },
    /// Selektierten Punkt um eine Schrittweite verschieben
    NudgeSelectedPointRequested { direction: NudgeDirection },
    /// Linienstärke ändern
    StrokeWidthChanged { shape_id: ShapeId, width: f32 },

    // ── Laden ──
    /// Vorlage gewählt
    TemplateSelected { template_id: String },
    /// DXF-Text wurde gelesen
    DxfContentLoaded {
        source_name: String,
        content: String,
    },

    // ── Einstellungen ──
    /// Rastergröße in Zoll
    GridSizeChanged { inches: f64 },
    /// Raster-Snap umschalten
    SnapToGridToggled,
    /// Raster-Anzeige umschalten
    GridVisibilityToggled,
    /// Messwert-Anzeige umschalten
    MeasurementsVisibilityToggled,
    /// Schrittweite für Präzisions-Verschieben in Zoll
    MoveIncrementChanged { inches: f64 },
    /// Anzeige-Einheit
    AreaUnitChanged { unit: AreaUnit },
    /// Aktuelle Einstellungen in die Optionen-Datei schreiben
    SaveOptionsRequested,
}
