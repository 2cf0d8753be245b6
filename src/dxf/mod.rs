//! DXF-Import: liest Linien und Polylinien und passt sie in die Zeichenfläche ein.

pub mod fit;
pub mod parser;

pub use fit::{fit_to_canvas, CanvasFit};
pub use parser::{parse_dxf, ShapeDraft};
