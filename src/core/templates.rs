//! Start-Shape und statische Shape-Vorlagen.

use super::shape::{Point, Shape, ShapeId, ShapeKind};
use std::f64::consts::PI;

/// Eckpunkte des Start-Rechtecks (300 × 200 Einheiten).
pub const SEED_RECTANGLE: [(f64, f64); 4] = [
    (100.0, 100.0),
    (400.0, 100.0),
    (400.0, 300.0),
    (100.0, 300.0),
];

/// Gruppe einer Vorlage in der Vorlagen-Auswahl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateGroup {
    /// Grundformen
    Basic,
    /// Häufig bestellte Arbeitsplatten
    MostOrdered,
}

/// Statische Vorlage, aus der ein neues Shape erzeugt wird.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeTemplate {
    /// Stabile Vorlagen-ID (z.B. `"l-shape"`)
    pub id: &'static str,
    /// Anzeigename, wird zum Shape-Namen
    pub name: &'static str,
    /// Kurzbeschreibung (nur bei Arbeitsplatten gesetzt)
    pub description: &'static str,
    /// Gruppe in der Auswahl
    pub group: TemplateGroup,
    /// Eckpunkte in Zeichnungseinheiten
    pub points: Vec<Point>,
    /// Geschlossen
    pub closed: bool,
}

impl ShapeTemplate {
    fn basic(id: &'static str, name: &'static str, points: Vec<Point>) -> Self {
        Self {
            id,
            name,
            description: "",
            group: TemplateGroup::Basic,
            points,
            closed: true,
        }
    }

    fn worktop(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        raw: &[(f64, f64)],
    ) -> Self {
        Self {
            id,
            name,
            description,
            group: TemplateGroup::MostOrdered,
            points: points_of(raw),
            closed: true,
        }
    }

    /// Erzeugt ein neues Shape aus der Vorlage (eigene Punktkopie).
    pub fn instantiate(&self, id: ShapeId) -> Shape {
        Shape::new(
            id,
            ShapeKind::Template,
            self.points.clone(),
            self.closed,
            self.name,
        )
    }
}

fn points_of(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Regelmäßiger Stern bzw. Vieleck um `center`; Radien werden zyklisch verwendet.
/// Der erste Punkt liegt senkrecht über dem Zentrum.
fn radial_points(center: Point, radii: &[f64], count: usize) -> Vec<Point> {
    let step = 2.0 * PI / count as f64;
    (0..count)
        .map(|i| {
            let r = radii[i % radii.len()];
            let angle = step * i as f64 - PI / 2.0;
            center + Point::new(angle.cos(), angle.sin()) * r
        })
        .collect()
}

/// Start-Shape des Editors.
pub fn seed_rectangle(id: ShapeId) -> Shape {
    Shape::new(
        id,
        ShapeKind::Rectangle,
        points_of(&SEED_RECTANGLE),
        true,
        "Sample Rectangle",
    )
}

/// Alle Vorlagen in Anzeige-Reihenfolge.
pub fn all_templates() -> Vec<ShapeTemplate> {
    let center = Point::new(350.0, 300.0);
    vec![
        ShapeTemplate::basic(
            "rectangle",
            "Rectangle",
            points_of(&[(200.0, 200.0), (500.0, 200.0), (500.0, 450.0), (200.0, 450.0)]),
        ),
        ShapeTemplate::basic(
            "l-shape",
            "L-Shape",
            points_of(&[
                (200.0, 150.0),
                (400.0, 150.0),
                (400.0, 300.0),
                (300.0, 300.0),
                (300.0, 450.0),
                (200.0, 450.0),
            ]),
        ),
        ShapeTemplate::basic(
            "t-shape",
            "T-Shape",
            points_of(&[
                (200.0, 150.0),
                (500.0, 150.0),
                (500.0, 250.0),
                (400.0, 250.0),
                (400.0, 450.0),
                (300.0, 450.0),
                (300.0, 250.0),
                (200.0, 250.0),
            ]),
        ),
        ShapeTemplate::basic(
            "u-shape",
            "U-Shape",
            points_of(&[
                (200.0, 150.0),
                (280.0, 150.0),
                (280.0, 350.0),
                (420.0, 350.0),
                (420.0, 150.0),
                (500.0, 150.0),
                (500.0, 450.0),
                (200.0, 450.0),
            ]),
        ),
        ShapeTemplate::basic("hexagon", "Hexagon", radial_points(center, &[120.0], 6)),
        ShapeTemplate::basic(
            "arrow",
            "Arrow",
            points_of(&[
                (200.0, 280.0),
                (350.0, 280.0),
                (350.0, 200.0),
                (500.0, 300.0),
                (350.0, 400.0),
                (350.0, 320.0),
                (200.0, 320.0),
            ]),
        ),
        ShapeTemplate::basic(
            "trapezoid",
            "Trapezoid",
            points_of(&[(250.0, 200.0), (450.0, 200.0), (500.0, 400.0), (200.0, 400.0)]),
        ),
        ShapeTemplate::basic(
            "star",
            "Star (5pt)",
            radial_points(center, &[120.0, 50.0], 10),
        ),
        ShapeTemplate::worktop(
            "worktop-basic",
            "Basic Worktop",
            "Standard rectangular countertop",
            &[(150.0, 200.0), (550.0, 200.0), (550.0, 400.0), (150.0, 400.0)],
        ),
        ShapeTemplate::worktop(
            "worktop-l",
            "L-Shaped Worktop",
            "Corner kitchen countertop",
            &[
                (150.0, 150.0),
                (550.0, 150.0),
                (550.0, 300.0),
                (350.0, 300.0),
                (350.0, 450.0),
                (150.0, 450.0),
            ],
        ),
        ShapeTemplate::worktop(
            "worktop-u",
            "U-Shaped Worktop",
            "Three-sided kitchen counter",
            &[
                (150.0, 150.0),
                (250.0, 150.0),
                (250.0, 350.0),
                (450.0, 350.0),
                (450.0, 150.0),
                (550.0, 150.0),
                (550.0, 450.0),
                (150.0, 450.0),
            ],
        ),
        ShapeTemplate::worktop(
            "island",
            "Kitchen Island",
            "Standalone island counter",
            &[(200.0, 220.0), (500.0, 220.0), (500.0, 380.0), (200.0, 380.0)],
        ),
        ShapeTemplate::worktop(
            "sink-cutout",
            "With Sink Cutout",
            "Worktop with sink area",
            &[
                (150.0, 200.0),
                (550.0, 200.0),
                (550.0, 400.0),
                (450.0, 400.0),
                (450.0, 320.0),
                (350.0, 320.0),
                (350.0, 400.0),
                (150.0, 400.0),
            ],
        ),
    ]
}

/// Sucht eine Vorlage anhand ihrer ID.
pub fn find_template(id: &str) -> Option<ShapeTemplate> {
    all_templates().into_iter().find(|t| t.id == id)
}
