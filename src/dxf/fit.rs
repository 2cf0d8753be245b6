//! Einpassen importierter DXF-Koordinaten in die Zeichenfläche.

use super::parser::ShapeDraft;
use crate::core::geometry::bounding_box;
use crate::shared::EditorOptions;

/// Zielfläche für das Einpassen (Zeichnungseinheiten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFit {
    /// Breite der Zeichenfläche
    pub width: f64,
    /// Höhe der Zeichenfläche
    pub height: f64,
    /// Rand auf allen Seiten
    pub padding: f64,
    /// Zusätzlicher Verkleinerungsfaktor auf den Maßstab
    pub factor: f64,
}

impl CanvasFit {
    /// Übernimmt die Zeichenflächen-Werte aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            width: options.dxf_canvas_width,
            height: options.dxf_canvas_height,
            padding: options.dxf_canvas_padding,
            factor: options.dxf_fit_factor,
        }
    }
}

/// Skaliert und verschiebt alle Drafts gemeinsam in die Zeichenfläche.
///
/// Maßstab = min(Achsen-Verhältnisse) × `factor`; die Y-Achse wird gespiegelt
/// (DXF: y nach oben, Zeichenfläche: y nach unten). Bei Breite oder Höhe 0
/// (oder nicht darstellbarer Ausdehnung) bleiben die Koordinaten unverändert.
pub fn fit_to_canvas(drafts: &mut [ShapeDraft], canvas: &CanvasFit) {
    let Some(bounds) = bounding_box(drafts.iter().flat_map(|d| d.points.iter().copied())) else {
        return;
    };

    let width = bounds.width();
    let height = bounds.height();
    if width == 0.0 || height == 0.0 || !width.is_finite() || !height.is_finite() {
        log::warn!(
            "DXF: degenerierte Ausdehnung ({} × {}), Koordinaten bleiben unverändert",
            width,
            height
        );
        return;
    }

    let scale_x = (canvas.width - 2.0 * canvas.padding) / width;
    let scale_y = (canvas.height - 2.0 * canvas.padding) / height;
    let scale = scale_x.min(scale_y) * canvas.factor;
    log::debug!("DXF: Einpass-Maßstab {:.4}", scale);

    for point in drafts.iter_mut().flat_map(|d| d.points.iter_mut()) {
        point.x = (point.x - bounds.min.x) * scale + canvas.padding;
        point.y = canvas.height - ((point.y - bounds.min.y) * scale + canvas.padding);
    }
}
