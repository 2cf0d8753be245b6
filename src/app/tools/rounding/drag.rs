//! Griff-Drag des Abrunden-Werkzeugs.

use super::state::{RoundingPhase, RoundingTool};
use crate::core::geometry::{arc_points, midpoint, signed_offset};
use crate::core::{Drawing, Point, PointRef};

/// Freigegebener Drag: Punktpaar und Ausbuchtung beim Loslassen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundingRelease {
    pub first: PointRef,
    pub second: PointRef,
    pub offset: f64,
}

impl RoundingTool {
    /// Sehne zwischen den gewählten Punkten in Klick-Reihenfolge.
    pub fn chord(&self, drawing: &Drawing) -> Option<(Point, Point)> {
        let (first, second) = self.pair()?;
        let shape = drawing.shapes.get(first.shape_index)?;
        let a = *shape.points.get(first.point_index)?;
        let b = *shape.points.get(second.point_index)?;
        Some((a, b))
    }

    /// Position des Ziehgriffs (Sehnenmittelpunkt).
    pub fn handle_position(&self, drawing: &Drawing) -> Option<Point> {
        self.chord(drawing).map(|(a, b)| midpoint(a, b))
    }

    /// Startet den Drag; nur mit vollständigem Paar möglich.
    pub fn on_drag_start(&mut self) -> bool {
        match self.phase {
            RoundingPhase::TwoPointsSelected { first, second } => {
                self.phase = RoundingPhase::Dragging {
                    first,
                    second,
                    offset: 0.0,
                };
                true
            }
            _ => false,
        }
    }

    /// Projiziert die Zeigerposition auf die Senkrechte durch den Sehnenmittelpunkt.
    pub fn on_drag_update(&mut self, drawing: &Drawing, pos: Point) {
        let Some((a, b)) = self.chord(drawing) else {
            return;
        };
        if let RoundingPhase::Dragging { offset, .. } = &mut self.phase {
            *offset = signed_offset(pos, a, b);
        }
    }

    /// Aktuelle Ausbuchtung (0 außerhalb des Drags).
    pub fn drag_offset(&self) -> f64 {
        match self.phase {
            RoundingPhase::Dragging { offset, .. } => offset,
            _ => 0.0,
        }
    }

    /// Vorschau-Bogen während des Drags.
    pub fn preview(&self, drawing: &Drawing, segments: usize) -> Vec<Point> {
        if !self.is_dragging() {
            return Vec::new();
        }
        match self.chord(drawing) {
            Some((a, b)) => arc_points(a, b, self.drag_offset(), segments),
            None => Vec::new(),
        }
    }

    /// Beendet den Drag. Liefert das Paar mit Ausbuchtung und kehrt nach `Idle` zurück.
    pub fn on_drag_end(&mut self) -> Option<RoundingRelease> {
        match self.phase {
            RoundingPhase::Dragging {
                first,
                second,
                offset,
            } => {
                self.phase = RoundingPhase::Idle;
                Some(RoundingRelease {
                    first,
                    second,
                    offset,
                })
            }
            _ => None,
        }
    }
}
