//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod editor_tool;
pub mod options;
mod render_scene;

pub use editor_tool::EditorTool;
pub use options::EditorOptions;
pub use render_scene::{RenderScene, RoundingOverlay};
