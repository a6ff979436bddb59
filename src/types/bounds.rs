// src/types/bounds.rs

use crate::types::Coord;
use std::fmt;

/// Achsen-ausgerichtete Bounding Box, definiert über zwei Eckpunkte (min, max).
/// Die Koordinaten liegen im selben CRS wie die Abfrage, die sie verwendet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Coord,
    pub max: Coord,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::from_corners(Coord::new(min_x, min_y), Coord::new(max_x, max_y))
    }

    /// Erstellt eine Bounding Box aus zwei beliebigen Eckpunkten
    pub fn from_corners(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coord::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Prüft ob eine Koordinate innerhalb oder auf dem Rand liegt (inklusiv)
    pub fn contains_coord(&self, coord: Coord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
    }

    /// Erweitert die Bounding Box um einen Margin in alle Richtungen
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: Coord::new(self.min.x - margin, self.min.y - margin),
            max: Coord::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Die vier Eckpunkte gegen den Uhrzeigersinn, beginnend bei min
    pub fn corners(&self) -> [Coord; 4] {
        [
            self.min,
            Coord::new(self.max.x, self.min.y),
            self.max,
            Coord::new(self.min.x, self.max.y),
        ]
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox([{}, {}] to [{}, {}])",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_normalization() {
        let bbox = BoundingBox::from_corners(Coord::new(2.0, -1.0), Coord::new(-1.0, 2.0));
        assert_eq!(bbox.min, Coord::new(-1.0, -1.0));
        assert_eq!(bbox.max, Coord::new(2.0, 2.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert!(bbox.contains_coord(Coord::new(0.5, 0.5)));
        assert!(bbox.contains_coord(Coord::new(0.0, 0.0)));
        assert!(bbox.contains_coord(Coord::new(1.0, 0.0)));
        assert!(!bbox.contains_coord(Coord::new(1.0 + 1e-9, 0.5)));
    }

    #[test]
    fn test_expand() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0).expand(0.5);
        assert_eq!(bbox.min, Coord::new(-0.5, -0.5));
        assert_eq!(bbox.max, Coord::new(1.5, 1.5));
    }
}
