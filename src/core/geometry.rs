//! Geometrie-Kern: Fläche, Umfang, Schwerpunkt, Raster-Snap und Kreisbogen aus Sehne + Stichhöhe.
//!
//! Alle Funktionen sind rein und arbeiten auf Zeichnungseinheiten.

use super::shape::{Point, Shape};

/// Stichhöhen unter diesem Wert erzeugen keinen Bogen (gerade Kante bleibt).
pub const ARC_MIN_SAGITTA: f64 = 1.0;

/// Zeichnungseinheiten pro Raster-Zoll (Raster-Schritt = Rastergröße × Faktor).
pub const GRID_UNITS_PER_INCH: f64 = 12.0;

/// Achsenparallele Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimale Ecke
    pub min: Point,
    /// Maximale Ecke
    pub max: Point,
}

impl Bounds {
    /// Breite der Box.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Höhe der Box.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Euklidischer Abstand zweier Punkte.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Mittelpunkt zweier Punkte.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) * 0.5
}

/// Vorzeichenbehaftete Polygonfläche nach der Gaußschen Trapezformel (Shoelace).
///
/// Weniger als 3 Punkte ergeben 0. Das Vorzeichen hängt von der Umlaufrichtung ab.
pub fn polygon_signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y;
        sum -= points[j].x * points[i].y;
    }
    sum / 2.0
}

/// Absolute Polygonfläche.
pub fn polygon_area(points: &[Point]) -> f64 {
    polygon_signed_area(points).abs()
}

/// Fläche eines Shapes: nur geschlossene Shapes mit mindestens 3 Punkten haben eine Fläche.
pub fn shape_area(shape: &Shape) -> f64 {
    if shape.closed {
        polygon_area(&shape.points)
    } else {
        0.0
    }
}

/// Umfang einer Punktfolge; bei `closed` inkl. Schlusskante.
///
/// Die Schlusskante zählt erst ab 3 Punkten.
pub fn perimeter(points: &[Point], closed: bool) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    let open_length: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();

    if closed && points.len() > 2 {
        open_length + points[points.len() - 1].distance(points[0])
    } else {
        open_length
    }
}

/// Umfang eines Shapes (berücksichtigt `closed`).
pub fn shape_perimeter(shape: &Shape) -> f64 {
    perimeter(&shape.points, shape.closed)
}

/// Arithmetisches Mittel aller Punkte (kein flächengewichteter Schwerpunkt).
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::ZERO, |acc, p| acc + *p);
    Some(sum / points.len() as f64)
}

/// Skaliert Punkte um einen Fixpunkt: `center + (p − center) · factor`.
pub fn scale_about(points: &mut [Point], center: Point, factor: f64) {
    for p in points.iter_mut() {
        *p = center + (*p - center) * factor;
    }
}

/// Um 90° gedrehter Einheitsvektor der Sehne `a → b`: (−dy, dx) / |Sehne|.
///
/// Gibt `None` zurück, wenn beide Punkte zusammenfallen.
pub fn perpendicular(a: Point, b: Point) -> Option<Point> {
    let d = b - a;
    let len = d.length();
    if len <= f64::EPSILON {
        return None;
    }
    Some(Point::new(-d.y, d.x) / len)
}

/// Vorzeichenbehafteter Abstand von `pos` zur Sehne `a → b`, gemessen entlang der
/// Senkrechten durch den Sehnenmittelpunkt.
pub fn signed_offset(pos: Point, a: Point, b: Point) -> f64 {
    perpendicular(a, b).map_or(0.0, |perp| (pos - midpoint(a, b)).dot(perp))
}

/// Raster-Schritt in Zeichnungseinheiten für eine Rastergröße in Zoll.
#[inline]
pub fn grid_step(grid_size_inches: f64) -> f64 {
    grid_size_inches * GRID_UNITS_PER_INCH
}

/// Rundet beide Koordinaten auf das nächste Vielfache von `step`.
pub fn snap_to_grid(p: Point, step: f64) -> Point {
    if step <= 0.0 || !step.is_finite() {
        return p;
    }
    Point::new((p.x / step).round() * step, (p.y / step).round() * step)
}

/// Bounding-Box einer Punktmenge.
pub fn bounding_box(points: impl IntoIterator<Item = Point>) -> Option<Bounds> {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
    Some(Bounds { min, max })
}

/// Längen aller Kanten eines Shapes (inkl. Schlusskante bei geschlossenen Shapes).
pub fn segment_lengths(shape: &Shape) -> Vec<f64> {
    (0..shape.segment_count())
        .filter_map(|i| shape.segment(i))
        .map(|(a, b)| a.distance(b))
        .collect()
}

/// Kreisbogen von `p1` nach `p2` mit der Stichhöhe `sagitta` (Ausbuchtung).
///
/// Der Mittelpunkt liegt auf der Senkrechten durch den Sehnenmittelpunkt, um
/// `(r − h)` in Richtung `sign(sagitta) ·` [`perpendicular`]`(p1, p2)` versetzt.
/// Interpoliert wird über die direkte Winkeldifferenz der beiden `atan2`-Winkel,
/// ohne Korrektur auf den kürzeren Weg.
/// Die Stichhöhe wird auf `Sehne/2 − 1` begrenzt, damit der Radius größer als die
/// halbe Sehne bleibt. Unterhalb von [`ARC_MIN_SAGITTA`] wird nur `[p1, p2]` geliefert.
///
/// Ergebnis: `segments + 1` Punkte, erster und letzter Punkt sind exakt `p1` und `p2`.
pub fn arc_points(p1: Point, p2: Point, sagitta: f64, segments: usize) -> Vec<Point> {
    if sagitta.abs() < ARC_MIN_SAGITTA {
        return vec![p1, p2];
    }
    let Some(perp) = perpendicular(p1, p2) else {
        return vec![p1, p2];
    };

    let chord = p1.distance(p2);
    let h = sagitta.abs().min(chord / 2.0 - ARC_MIN_SAGITTA);
    if h < ARC_MIN_SAGITTA {
        return vec![p1, p2];
    }

    // r = h/2 + d²/(8h)
    let radius = h / 2.0 + chord * chord / (8.0 * h);
    let center = midpoint(p1, p2) + perp * ((radius - h) * sagitta.signum());

    let start_angle = (p1 - center).y.atan2((p1 - center).x);
    let end_angle = (p2 - center).y.atan2((p2 - center).x);
    let sweep = end_angle - start_angle;

    let segments = segments.max(1);
    let mut points = Vec::with_capacity(segments + 1);
    points.push(p1);
    for i in 1..segments {
        let angle = start_angle + sweep * (i as f64 / segments as f64);
        points.push(center + Point::new(angle.cos(), angle.sin()) * radius);
    }
    points.push(p2);
    points
}
