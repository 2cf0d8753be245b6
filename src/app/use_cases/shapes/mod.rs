//! Use-Case-Funktionen für ganze Shapes.
//!
//! Aufgeteilt nach Operation:
//! - `select`: Shape selektieren, Selektion aufheben
//! - `scale`: Um den Schwerpunkt skalieren
//! - `duplicate`: Versetzte Kopie anlegen
//! - `delete`: Shape entfernen
//! - `flags`: Sichtbarkeit und Sperre umschalten
//! - `stroke`: Linienstärke setzen
mod delete;
mod duplicate;
mod flags;
mod scale;
mod select;
mod stroke;

pub use delete::delete_shape;
pub use duplicate::duplicate_shape;
pub use flags::{toggle_lock, toggle_visibility};
pub use scale::scale_shape;
pub use select::{clear_selection, select_shape, selected_shape_id};
pub use stroke::set_stroke_width;
