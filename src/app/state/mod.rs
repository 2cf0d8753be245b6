//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod selection;
mod ui;

pub use app_state::AppState;
pub use editor::{EditorTool, EditorToolState};
pub use selection::SelectionState;
pub use ui::UiState;
