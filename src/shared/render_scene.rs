//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Renderer sie konsumiert.

use super::EditorTool;
use crate::core::{AreaUnit, Bounds, Drawing, Point, PointRef, ShapeId};
use std::sync::Arc;

/// Darstellungsdaten des Abrunden-Werkzeugs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundingOverlay {
    /// Gewählte Punkte (0, 1 oder 2)
    pub selected_points: Vec<PointRef>,
    /// Ziehgriff auf dem Sehnenmittelpunkt (nur bei zwei gewählten Punkten)
    pub handle: Option<Point>,
    /// Aktuelle Ausbuchtung während des Ziehens
    pub drag_offset: f64,
    /// Vorschau-Bogen während des Ziehens (leer sonst)
    pub preview_arc: Vec<Point>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Die aktuelle Zeichnung
    pub drawing: Arc<Drawing>,
    /// Indizes der sichtbaren Shapes (bezogen auf die Gesamtsammlung)
    pub visible_shape_indices: Vec<usize>,
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Selektiertes Shape
    pub selected_shape: Option<ShapeId>,
    /// Selektierter Punkt (Werkzeug "Punkt wählen")
    pub selected_point: Option<PointRef>,
    /// Abrunden-Werkzeug
    pub rounding: RoundingOverlay,
    /// Bounding-Box des selektierten Shapes
    pub selection_bounds: Option<Bounds>,
    /// Bounding-Box aller sichtbaren Shapes (Einpassen der Ansicht)
    pub content_bounds: Option<Bounds>,
    /// Kantenlängen des selektierten Shapes in Fuß
    pub segment_lengths_ft: Vec<f64>,
    /// Gesamtfläche in `area_unit`
    pub total_area: f64,
    /// Gesamtumfang (Meter bei Quadratmetern, sonst Fuß)
    pub total_perimeter: f64,
    /// Anzeige-Einheit
    pub area_unit: AreaUnit,
    /// Raster-Schritt in Zeichnungseinheiten
    pub grid_step: f64,
    /// Raster sichtbar
    pub grid_visible: bool,
    /// Messwerte sichtbar
    pub show_measurements: bool,
    /// Letzte abgelehnte Aktion (Hinweistext)
    pub last_warning: Option<String>,
}

impl RenderScene {
    /// Gibt zurück, ob ein Shape selektiert ist.
    pub fn has_selection(&self) -> bool {
        self.selected_shape.is_some()
    }
}
