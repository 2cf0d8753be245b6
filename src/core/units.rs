//! Anzeige-Einheiten für Fläche und Umfang.

use serde::{Deserialize, Serialize};

/// Zeichnungseinheiten pro Fuß (1 Einheit = 1 Zoll).
pub const UNITS_PER_FOOT: f64 = 12.0;
/// Quadrat-Zeichnungseinheiten pro Quadratfuß.
pub const SQUARE_UNITS_PER_SQUARE_FOOT: f64 = 144.0;
/// Fuß pro Meter-Umrechnung (1 ft = 0.3048 m).
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Einheit für die Flächenanzeige.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AreaUnit {
    /// Quadratfuß (Standard)
    #[default]
    SquareFeet,
    /// Quadratmeter
    SquareMeters,
    /// Quadratzoll
    SquareInches,
    /// Acres
    Acres,
}

impl AreaUnit {
    /// Rechnet eine Fläche in Quadratfuß in diese Einheit um.
    pub fn from_square_feet(self, sq_ft: f64) -> f64 {
        match self {
            AreaUnit::SquareFeet => sq_ft,
            AreaUnit::SquareMeters => sq_ft * 0.092903,
            AreaUnit::SquareInches => sq_ft * 144.0,
            AreaUnit::Acres => sq_ft / 43560.0,
        }
    }

    /// Rechnet einen Umfang in Fuß in die passende Längeneinheit um
    /// (Meter bei Quadratmetern, sonst Fuß).
    pub fn perimeter_from_feet(self, ft: f64) -> f64 {
        match self {
            AreaUnit::SquareMeters => ft * METERS_PER_FOOT,
            _ => ft,
        }
    }

    /// Kurzbezeichnung der Flächeneinheit.
    pub fn area_suffix(self) -> &'static str {
        match self {
            AreaUnit::SquareFeet => "sq ft",
            AreaUnit::SquareMeters => "sq m",
            AreaUnit::SquareInches => "sq in",
            AreaUnit::Acres => "acres",
        }
    }

    /// Kurzbezeichnung der Längeneinheit für den Umfang.
    pub fn perimeter_suffix(self) -> &'static str {
        match self {
            AreaUnit::SquareMeters => "m",
            _ => "ft",
        }
    }
}
