// src/types/point.rs

use crate::utils::comparison;

/// Eine 2D-Koordinate. Achsen-Reihenfolge ist immer `[longitude, latitude]`
/// für geografische CRS und `[x, y]` für projizierte CRS, niemals vertauscht.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Beide Komponenten endlich (kein NaN/Infinity)?
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Komponentenweiser Vergleich mit Toleranz
    pub fn nearly_equal(&self, other: Coord, epsilon: f64) -> bool {
        comparison::nearly_equal_eps(self.x, other.x, epsilon)
            && comparison::nearly_equal_eps(self.y, other.y, epsilon)
    }
}

impl From<[f64; 2]> for Coord {
    fn from(pair: [f64; 2]) -> Self {
        Self {
            x: pair[0],
            y: pair[1],
        }
    }
}

impl From<Coord> for [f64; 2] {
    fn from(coord: Coord) -> Self {
        [coord.x, coord.y]
    }
}
