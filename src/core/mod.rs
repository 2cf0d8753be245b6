//! Core-Domänentypen: Shapes, Zeichnung, Geometrie-Kern, Messwerte, Vorlagen.

pub mod drawing;
pub mod geometry;
pub mod measurement;
/// Shape-Datenmodell
///
/// Definiert die Haupt-Datenstrukturen:
/// - Shape: Polygon/Polylinie mit Sichtbarkeit, Sperre und Darstellung
/// - PointRef: positionsbasierte Punkt-Referenz
/// - ShapeId: nie wiederverwendete ID
pub mod shape;
pub mod templates;
pub mod units;

pub use drawing::{Drawing, ShapeIdGenerator};
pub use geometry::Bounds;
pub use measurement::Measurements;
pub use shape::{
    Point, PointRef, Shape, ShapeId, ShapeKind, MIN_SHAPE_POINTS, SHAPE_COLOR_DEFAULT,
    SHAPE_STROKE_WIDTH_DEFAULT,
};
pub use templates::{all_templates, find_template, seed_rectangle, ShapeTemplate, TemplateGroup};
pub use units::AreaUnit;
