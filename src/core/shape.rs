//! Shape-Datenmodell: Punkte, IDs und Figuren.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Punkt in Zeichnungseinheiten (1 Einheit = 1 Zoll).
///
/// Punkte haben keine eigene Identität, Gleichheit ist rein positionsbasiert.
pub type Point = glam::DVec2;

/// Minimale Punktanzahl, unter die ein Shape per Punkt-Löschen nicht fallen darf.
pub const MIN_SHAPE_POINTS: usize = 3;

/// Standard-Farbe neuer Shapes (RGBA, #1890ff).
pub const SHAPE_COLOR_DEFAULT: [f32; 4] = [0.094, 0.565, 1.0, 1.0];

/// Standard-Linienstärke neuer Shapes.
pub const SHAPE_STROKE_WIDTH_DEFAULT: f32 = 2.0;

/// Eindeutige, nie wiederverwendete Shape-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape-{}", self.0)
    }
}

/// Beschreibende Art eines Shapes (nur Anzeige-Metadatum, keine eigene Logik).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Einzelne Linie (z.B. DXF `LINE`)
    Line,
    /// Offene oder geschlossene Polylinie
    #[default]
    Polyline,
    /// Rechteck (Start-Shape)
    Rectangle,
    /// Aus einer Vorlage erzeugt
    Template,
}

/// Positionsbasierte Referenz auf einen Punkt: i-ter Punkt des j-ten Shapes.
///
/// Verschiebt sich bei Einfügen/Löschen von Punkten, es gibt keine stabile Punkt-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointRef {
    /// Index des Shapes in der Sammlung
    pub shape_index: usize,
    /// Index des Punkts in `Shape::points`
    pub point_index: usize,
}

impl PointRef {
    /// Erstellt eine neue Punkt-Referenz.
    pub fn new(shape_index: usize, point_index: usize) -> Self {
        Self {
            shape_index,
            point_index,
        }
    }
}

/// Polygon oder Polylinie mit Attributen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Eindeutige ID (stabil über Mutationen)
    pub id: ShapeId,
    /// Beschreibende Art
    pub kind: ShapeKind,
    /// Geordnete Punktfolge (definiert die Kanten)
    pub points: Vec<Point>,
    /// Geschlossen: implizite Kante vom letzten zum ersten Punkt, trägt zur Fläche bei
    pub closed: bool,
    /// Unsichtbare Shapes fließen nicht in die Messwerte ein
    pub visible: bool,
    /// Gesperrte Shapes lehnen Selektion und Mutation ab
    pub locked: bool,
    /// Linienstärke (Darstellung)
    pub stroke_width: f32,
    /// Linienfarbe RGBA (Darstellung)
    pub color: [f32; 4],
    /// Anzeigename
    pub name: String,
}

impl Shape {
    /// Erstellt ein sichtbares, ungesperrtes Shape mit Standard-Darstellung.
    pub fn new(
        id: ShapeId,
        kind: ShapeKind,
        points: Vec<Point>,
        closed: bool,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            points,
            closed,
            visible: true,
            locked: false,
            stroke_width: SHAPE_STROKE_WIDTH_DEFAULT,
            color: SHAPE_COLOR_DEFAULT,
            name: name.into(),
        }
    }

    /// Anzahl der Punkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Anzahl der Kanten (inkl. Schlusskante bei geschlossenen Shapes).
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Gibt Start- und Endpunkt der Kante `segment_index` zurück.
    pub fn segment(&self, segment_index: usize) -> Option<(Point, Point)> {
        if segment_index >= self.segment_count() {
            return None;
        }
        let n = self.points.len();
        Some((
            self.points[segment_index],
            self.points[(segment_index + 1) % n],
        ))
    }

    /// Prüft, ob zwei Punkt-Indizes direkt benachbart sind.
    ///
    /// Benachbart heißt: aufeinanderfolgende Positionen, oder bei geschlossenen
    /// Shapes das Paar (0, letzter Index).
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        let n = self.points.len();
        if a >= n || b >= n || a == b {
            return false;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        hi - lo == 1 || (self.closed && lo == 0 && hi == n - 1)
    }
}
