//! Best-Effort-Leser für DXF-Text: `LINE`, `LWPOLYLINE` und `POLYLINE`/`VERTEX`.
//!
//! DXF besteht aus Zeilenpaaren (Gruppencode, Wert). Gelesen wird nur die
//! `ENTITIES`-Sektion; unbekannte oder unvollständige Entities werden übersprungen.

use crate::core::{Point, ShapeKind};

/// Rohes Shape aus einer DXF-Datei (Koordinaten noch in Datei-Einheiten).
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDraft {
    /// `Line` für `LINE`, sonst `Polyline`
    pub kind: ShapeKind,
    /// Punktfolge (mindestens 2 Punkte)
    pub points: Vec<Point>,
    /// Geschlossen (Flag-Bit 1 in Gruppencode 70)
    pub closed: bool,
}

/// Ein (Gruppencode, Wert)-Paar.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GroupPair<'a> {
    code: i32,
    value: &'a str,
}

impl GroupPair<'_> {
    fn is_marker(&self, value: &str) -> bool {
        self.code == 0 && self.value == value
    }

    fn as_f64(&self) -> Option<f64> {
        self.value.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    fn as_flags(&self) -> Option<i32> {
        self.value.parse::<i32>().ok()
    }
}

/// Zerlegt den Text in Gruppencode/Wert-Paare. Paare mit nicht-numerischem Code
/// werden verworfen, ein unvollständiges letztes Paar ebenso.
fn read_pairs(content: &str) -> Vec<GroupPair<'_>> {
    let mut lines = content.lines().map(str::trim);
    let mut pairs = Vec::new();

    while let (Some(code), Some(value)) = (lines.next(), lines.next()) {
        match code.parse::<i32>() {
            Ok(code) => pairs.push(GroupPair { code, value }),
            Err(_) => log::debug!("DXF: ungültiger Gruppencode '{}' übersprungen", code),
        }
    }
    pairs
}

/// Index des ersten Paars hinter `0/SECTION` + `2/ENTITIES`.
fn entities_start(pairs: &[GroupPair<'_>]) -> Option<usize> {
    pairs
        .windows(2)
        .position(|w| w[0].is_marker("SECTION") && w[1].code == 2 && w[1].value == "ENTITIES")
        .map(|i| i + 2)
}

/// Index des nächsten Paars mit Gruppencode 0 ab `from`.
fn next_entity(pairs: &[GroupPair<'_>], from: usize) -> usize {
    pairs[from.min(pairs.len())..]
        .iter()
        .position(|p| p.code == 0)
        .map_or(pairs.len(), |offset| from + offset)
}

/// Liest alle Shapes aus der `ENTITIES`-Sektion.
///
/// Fehlt die Sektion oder enthält sie keine lesbaren Entities, ist das Ergebnis
/// leer. Fehlerhafte Entities brechen das Laden nie ab.
pub fn parse_dxf(content: &str) -> Vec<ShapeDraft> {
    let pairs = read_pairs(content);
    let Some(start) = entities_start(&pairs) else {
        log::warn!("DXF: ENTITIES-Sektion nicht gefunden");
        return Vec::new();
    };

    let mut drafts = Vec::new();
    let mut i = start;
    while i < pairs.len() {
        let pair = pairs[i];
        if pair.code != 0 {
            i += 1;
            continue;
        }

        let (draft, next) = match pair.value {
            "ENDSEC" => break,
            "LINE" => parse_line(&pairs, i + 1),
            "LWPOLYLINE" => parse_lwpolyline(&pairs, i + 1),
            "POLYLINE" => parse_polyline(&pairs, i + 1),
            other => {
                log::debug!("DXF: Entity '{}' übersprungen", other);
                (None, next_entity(&pairs, i + 1))
            }
        };
        drafts.extend(draft);
        i = next;
    }

    log::info!("DXF: {} Entities gelesen", drafts.len());
    drafts
}

/// `LINE`: Start (10/20) und Ende (11/21) müssen vollständig sein.
fn parse_line(pairs: &[GroupPair<'_>], from: usize) -> (Option<ShapeDraft>, usize) {
    let end = next_entity(pairs, from);
    let (mut x1, mut y1, mut x2, mut y2) = (None, None, None, None);

    for pair in &pairs[from..end] {
        match pair.code {
            10 => x1 = pair.as_f64(),
            20 => y1 = pair.as_f64(),
            11 => x2 = pair.as_f64(),
            21 => y2 = pair.as_f64(),
            _ => {}
        }
    }

    let draft = match (x1, y1, x2, y2) {
        (Some(x1), Some(y1), Some(x2), Some(y2)) => Some(ShapeDraft {
            kind: ShapeKind::Line,
            points: vec![Point::new(x1, y1), Point::new(x2, y2)],
            closed: false,
        }),
        _ => {
            log::debug!("DXF: unvollständige LINE übersprungen");
            None
        }
    };
    (draft, end)
}

/// `LWPOLYLINE`: Flag 70 (Bit 1 = geschlossen), Punkte als 10/20-Folgen.
fn parse_lwpolyline(pairs: &[GroupPair<'_>], from: usize) -> (Option<ShapeDraft>, usize) {
    let end = next_entity(pairs, from);
    let mut points = Vec::new();
    let mut closed = false;
    let mut pending_x: Option<f64> = None;

    for pair in &pairs[from..end] {
        match pair.code {
            70 => closed = pair.as_flags().is_some_and(|f| f & 1 == 1),
            10 => pending_x = pair.as_f64(),
            20 => {
                if let (Some(x), Some(y)) = (pending_x.take(), pair.as_f64()) {
                    points.push(Point::new(x, y));
                }
            }
            _ => {}
        }
    }

    (polyline_draft(points, closed), end)
}

/// `POLYLINE`: Kopf mit Flag 70, danach `VERTEX`-Entities bis `SEQEND`.
fn parse_polyline(pairs: &[GroupPair<'_>], from: usize) -> (Option<ShapeDraft>, usize) {
    let mut i = next_entity(pairs, from);
    let closed = pairs[from..i]
        .iter()
        .filter(|p| p.code == 70)
        .filter_map(GroupPair::as_flags)
        .last()
        .is_some_and(|f| f & 1 == 1);

    let mut points = Vec::new();
    while i < pairs.len() && pairs[i].is_marker("VERTEX") {
        let end = next_entity(pairs, i + 1);
        let mut x = None;
        let mut y = None;
        for pair in &pairs[i + 1..end] {
            match pair.code {
                10 => x = pair.as_f64(),
                20 => y = pair.as_f64(),
                _ => {}
            }
        }
        if let (Some(x), Some(y)) = (x, y) {
            points.push(Point::new(x, y));
        }
        i = end;
    }

    if i < pairs.len() && pairs[i].is_marker("SEQEND") {
        i = next_entity(pairs, i + 1);
    }

    (polyline_draft(points, closed), i)
}

fn polyline_draft(points: Vec<Point>, closed: bool) -> Option<ShapeDraft> {
    if points.len() < 2 {
        log::debug!("DXF: Polylinie mit {} Punkten übersprungen", points.len());
        return None;
    }
    Some(ShapeDraft {
        kind: ShapeKind::Polyline,
        points,
        closed,
    })
}
