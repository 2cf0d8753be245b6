//! Einsetzen eines Kreisbogens anstelle einer Kante.

use crate::core::geometry::arc_points;
use crate::core::Point;

/// Ersetzt die Kante zwischen den benachbarten Punkten `first` und `second`
/// durch einen Bogen mit `segments` Abschnitten.
///
/// `offset` ist relativ zur Sehne `first → second` gemessen. Die Bogen-Endpunkte
/// fallen mit den vorhandenen Punkten zusammen und werden nicht eingefügt; alle
/// übrigen Punkte behalten ihre Reihenfolge. Bei der Schlusskante `(letzter, 0)`
/// eines geschlossenen Shapes landen die Bogenpunkte am Ende der Folge.
///
/// Gibt `None` zurück, wenn die Punkte nicht benachbart sind oder der Bogen
/// keine Zwischenpunkte liefert.
pub fn round_edge(
    points: &[Point],
    closed: bool,
    first: usize,
    second: usize,
    offset: f64,
    segments: usize,
) -> Option<Vec<Point>> {
    let n = points.len();
    if first >= n || second >= n || first == second {
        return None;
    }
    let (lo, hi) = if first < second {
        (first, second)
    } else {
        (second, first)
    };

    let wraps = if hi - lo == 1 {
        false
    } else if closed && lo == 0 && hi == n - 1 {
        true
    } else {
        return None;
    };
    // Kante in Folgen-Richtung: start → end
    let (start, end) = if wraps { (hi, lo) } else { (lo, hi) };
    // Gegen die Klick-Richtung gespiegelt: Mittelpunkt bleibt der der Vorschau
    let sagitta = if first == start { offset } else { -offset };

    let arc = arc_points(points[start], points[end], sagitta, segments);
    if arc.len() <= 2 {
        return None;
    }
    let interior = &arc[1..arc.len() - 1];

    let mut result = Vec::with_capacity(n + interior.len());
    if wraps {
        result.extend_from_slice(points);
        result.extend_from_slice(interior);
    } else {
        result.extend_from_slice(&points[..=start]);
        result.extend_from_slice(interior);
        result.extend_from_slice(&points[end..]);
    }
    Some(result)
}
