//! Shape-Sammlung der Zeichnung und ID-Vergabe.

use super::geometry::{self, Bounds};
use super::shape::{Shape, ShapeId};
use serde::{Deserialize, Serialize};

/// Geordnete Sammlung aller Shapes.
///
/// Wird im `AppState` als `Arc<Drawing>` gehalten: History-Snapshots teilen sich
/// die Sammlung, bis ein Use-Case per `Arc::make_mut()` mutiert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Shapes in Einfüge-Reihenfolge (Index = Shape-Index für Punkt-Referenzen)
    pub shapes: Vec<Shape>,
}

impl Drawing {
    /// Erstellt eine leere Zeichnung.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Erstellt eine Zeichnung aus einer fertigen Shape-Liste.
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Gibt die Anzahl der Shapes zurück.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Gibt `true` zurück, wenn keine Shapes vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Sucht den Index eines Shapes anhand seiner ID.
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id == id)
    }

    /// Gibt das Shape mit der ID zurück.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Iteriert über alle sichtbaren Shapes samt Index in der Gesamtsammlung.
    pub fn visible_shapes(&self) -> impl Iterator<Item = (usize, &Shape)> {
        self.shapes.iter().enumerate().filter(|(_, s)| s.visible)
    }

    /// Bounding-Box aller Punkte sichtbarer Shapes.
    pub fn bounds(&self) -> Option<Bounds> {
        geometry::bounding_box(
            self.visible_shapes()
                .flat_map(|(_, s)| s.points.iter().copied()),
        )
    }
}

/// Vergibt monoton steigende Shape-IDs.
///
/// Liegt außerhalb der History: auch nach Undo wird keine ID erneut vergeben.
#[derive(Debug, Clone)]
pub struct ShapeIdGenerator {
    next: u64,
}

impl Default for ShapeIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeIdGenerator {
    /// Erstellt einen Generator, der bei 1 beginnt.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Gibt die nächste freie ID zurück.
    pub fn next_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next += 1;
        id
    }

    /// Stellt sicher, dass keine ID aus `drawing` erneut vergeben wird.
    pub fn reserve_existing(&mut self, drawing: &Drawing) {
        if let Some(max) = drawing.shapes.iter().map(|s| s.id.0).max() {
            self.next = self.next.max(max + 1);
        }
    }
}
