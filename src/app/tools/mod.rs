//! Interaktive Werkzeuge mit eigenem Zwischenzustand.
//!
//! Werkzeuge erzeugen nur Daten (Auswahl, Vorschau, Freigabe); die Mutation
//! der Zeichnung erfolgt zentral in den Use-Cases.

/// Abrunden-Werkzeug: Kante zwischen zwei benachbarten Punkten per Drag zum Bogen machen.
pub mod rounding;

pub use rounding::{round_edge, PickOutcome, RoundingPhase, RoundingRelease, RoundingTool};
