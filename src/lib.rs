//! DXF Shape Editor Library.
//! Editor-Kern (Geometrie, Shape-Store, History, Abrundung) als Library exportiert
//! für Tests und Wiederverwendung durch eine beliebige UI-Schicht.

pub mod app;
pub mod core;
pub mod dxf;
pub mod shared;

pub use app::{
    build_render_scene, AppCommand, AppController, AppIntent, AppState, CommandOutcome, EditError,
    EditorTool, EditorToolState, NudgeDirection, Rejection, SelectionState, UiState,
};
pub use core::{
    AreaUnit, Bounds, Drawing, Measurements, Point, PointRef, Shape, ShapeId, ShapeKind,
    ShapeTemplate,
};
pub use dxf::{parse_dxf, ShapeDraft};
pub use shared::{EditorOptions, RenderScene};
