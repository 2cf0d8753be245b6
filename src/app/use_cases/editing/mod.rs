//! Use-Case-Funktionen für Punkt-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `move_point`: Punkt live verschieben, Drag abschließen
//! - `add_point`: Punkt auf einer Kante einfügen
//! - `delete_point`: Punkt löschen (Mindestanzahl beachten)
//! - `nudge_point`: Selektierten Punkt um eine Schrittweite verschieben
//! - `select_point`: Punkt-Selektion umschalten
mod add_point;
mod delete_point;
mod move_point;
mod nudge_point;
mod select_point;

pub use add_point::add_point;
pub use delete_point::delete_point;
pub use move_point::{end_point_drag, move_point};
pub use nudge_point::nudge_selected_point;
pub use select_point::toggle_point_selection;

use crate::core::geometry::snap_to_grid;
use crate::core::Point;
use crate::shared::EditorOptions;

/// Rastet eine Position ein, falls Snap aktiv ist.
fn snapped(options: &EditorOptions, pos: Point) -> Point {
    match options.snap_step() {
        Some(step) => snap_to_grid(pos, step),
        None => pos,
    }
}
