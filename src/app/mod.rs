//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod error;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Zeichnung, Selektion, Werkzeuge, History).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::{CommandEntry, CommandLog, CommandOutcome};
pub use controller::AppController;
pub use error::{EditError, Rejection};
pub use events::{AppCommand, AppIntent, NudgeDirection};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorTool, EditorToolState, SelectionState, UiState};
