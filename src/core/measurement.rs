//! Aggregation von Gesamtfläche und Gesamtumfang über alle sichtbaren Shapes.

use super::geometry::{shape_area, shape_perimeter};
use super::shape::{Shape, MIN_SHAPE_POINTS};
use super::units::{AreaUnit, SQUARE_UNITS_PER_SQUARE_FOOT, UNITS_PER_FOOT};

/// Abgeleitete Messwerte (werden nicht in der History gespeichert).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    /// Gesamtfläche in Quadratfuß
    pub total_area_sq_ft: f64,
    /// Gesamtumfang in Fuß
    pub total_perimeter_ft: f64,
}

impl Measurements {
    /// Berechnet die Summen über alle sichtbaren Shapes mit mindestens 3 Punkten.
    ///
    /// Geschlossene Shapes tragen Fläche und Umfang bei, offene nur den Umfang.
    pub fn recompute(shapes: &[Shape]) -> Self {
        let mut area = 0.0;
        let mut perimeter = 0.0;

        for shape in shapes
            .iter()
            .filter(|s| s.visible && s.points.len() >= MIN_SHAPE_POINTS)
        {
            if shape.closed {
                area += shape_area(shape);
            }
            perimeter += shape_perimeter(shape);
        }

        Self {
            total_area_sq_ft: area / SQUARE_UNITS_PER_SQUARE_FOOT,
            total_perimeter_ft: perimeter / UNITS_PER_FOOT,
        }
    }

    /// Fläche in der gewählten Anzeige-Einheit.
    pub fn area_in(&self, unit: AreaUnit) -> f64 {
        unit.from_square_feet(self.total_area_sq_ft)
    }

    /// Umfang in der zur Anzeige-Einheit passenden Längeneinheit.
    pub fn perimeter_in(&self, unit: AreaUnit) -> f64 {
        unit.perimeter_from_feet(self.total_perimeter_ft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::seed_rectangle;
    use crate::core::{Point, ShapeId, ShapeKind};
    use approx::assert_abs_diff_eq;

    fn shape(id: u64, raw: &[(f64, f64)], closed: bool) -> Shape {
        Shape::new(
            ShapeId(id),
            ShapeKind::Polyline,
            raw.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            closed,
            "Test",
        )
    }

    #[test]
    fn seed_rectangle_totals() {
        let m = Measurements::recompute(&[seed_rectangle(ShapeId(1))]);
        assert_abs_diff_eq!(m.total_area_sq_ft, 60000.0 / 144.0, epsilon = 1e-9);
        assert_abs_diff_eq!(m.total_area_sq_ft, 416.67, epsilon = 0.01);
        assert_abs_diff_eq!(m.total_perimeter_ft, 1000.0 / 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(m.total_perimeter_ft, 83.33, epsilon = 0.01);
    }

    #[test]
    fn open_shapes_add_perimeter_but_no_area() {
        let open = shape(1, &[(0.0, 0.0), (12.0, 0.0), (12.0, 12.0)], false);
        let m = Measurements::recompute(&[open]);
        assert_eq!(m.total_area_sq_ft, 0.0);
        assert_abs_diff_eq!(m.total_perimeter_ft, 2.0);
    }

    #[test]
    fn invisible_and_two_point_shapes_are_skipped() {
        let mut hidden = shape(1, &[(0.0, 0.0), (12.0, 0.0), (12.0, 12.0)], true);
        hidden.visible = false;
        let line = shape(2, &[(0.0, 0.0), (120.0, 0.0)], false);
        let m = Measurements::recompute(&[hidden, line]);
        assert_eq!(m, Measurements::default());
    }

    #[test]
    fn totals_sum_over_shapes() {
        let a = shape(1, &[(0.0, 0.0), (12.0, 0.0), (12.0, 12.0), (0.0, 12.0)], true);
        let b = shape(2, &[(0.0, 0.0), (24.0, 0.0), (24.0, 12.0), (0.0, 12.0)], true);
        let m = Measurements::recompute(&[a, b]);
        assert_abs_diff_eq!(m.total_area_sq_ft, 3.0);
        assert_abs_diff_eq!(m.total_perimeter_ft, 10.0);
        assert_abs_diff_eq!(m.area_in(AreaUnit::SquareInches), 432.0);
    }
}
