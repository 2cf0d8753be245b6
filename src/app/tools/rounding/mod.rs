//! Abrunden-Werkzeug: ersetzt eine gerade Kante durch einen Kreisbogen.
//!
//! **Ablauf:** Punkt wählen → benachbarten Punkt desselben Shapes wählen →
//! Griff auf dem Sehnenmittelpunkt ziehen → loslassen. Die Ausbuchtung ist der
//! vorzeichenbehaftete Abstand des Zeigers zur Sehne.
//!
//! Aufgeteilt in:
//! - `state`: Phasen, Punktauswahl, Klick-Übergänge
//! - `drag`: Griff-Position, Drag-Ausbuchtung, Vorschau-Bogen
//! - `geometry`: Einsetzen des Bogens in die Punktfolge

mod drag;
mod geometry;
mod state;

pub use drag::RoundingRelease;
pub use geometry::round_edge;
pub use state::{PickOutcome, RoundingPhase, RoundingTool};
