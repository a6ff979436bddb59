// src/geometry/ring.rs

use crate::error::{GeoError, GeoResult};
use crate::types::Coord;
use crate::utils::constants::CLOSURE_EPSILON;

/// Ein geschlossener Ring: geordnete Koordinatenfolge mit mindestens 4 Punkten,
/// deren erster und letzter Punkt exakt gleich sind.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    coords: Vec<Coord>,
}

impl Ring {
    /// Erstellt einen Ring und schließt ihn falls nötig: weicht der letzte
    /// Punkt um mehr als die Schluss-Toleranz vom ersten ab, wird der erste
    /// Punkt angehängt; liegt er innerhalb der Toleranz, wird er exakt auf
    /// den ersten geschnappt.
    pub fn closed(mut coords: Vec<Coord>) -> GeoResult<Self> {
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if coords.len() > 1 && first.nearly_equal(last, CLOSURE_EPSILON) {
                let end = coords.len() - 1;
                coords[end] = first;
            } else {
                coords.push(first);
            }
        }

        if coords.len() < 4 {
            return Err(GeoError::UnclosedRing {
                ring_index: 0,
                reason: format!("{} points after closing, need at least 4", coords.len()),
            });
        }

        Ok(Self::from_closed_coords(coords))
    }

    /// Interner Konstruktor für bereits geprüfte, exakt geschlossene Koordinaten
    pub(crate) fn from_closed_coords(coords: Vec<Coord>) -> Self {
        debug_assert!(coords.len() >= 4);
        debug_assert_eq!(coords.first(), coords.last());
        Self { coords }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Anzahl der Punkte inklusive des duplizierten Schlusspunkts
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Kopie mit umgekehrter Umlaufrichtung; der erste Punkt bleibt erhalten,
    /// damit der Ring geschlossen bleibt
    pub fn reversed(&self) -> Self {
        let mut coords = self.coords.clone();
        let len = coords.len();
        coords[1..len - 1].reverse();
        Self { coords }
    }

    /// Signierte planare Fläche (Shoelace-Formel); positiv gegen den
    /// Uhrzeigersinn, in Quadrat-Einheiten der Koordinaten
    pub fn signed_area(&self) -> f64 {
        let n = self.coords.len() - 1; // Schlusspunkt dupliziert den ersten
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.coords[i].x * self.coords[j].y;
            area -= self.coords[j].x * self.coords[i].y;
        }

        area * 0.5
    }

    /// Wendet eine Koordinaten-Transformation auf jeden Punkt an; Punktzahl
    /// und Schließung bleiben erhalten
    pub fn map_coords<F>(&self, f: F) -> Self
    where
        F: Fn(Coord) -> Coord,
    {
        Self {
            coords: self.coords.iter().map(|&c| f(c)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Ring {
        Ring::closed(vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_auto_close_appends_first_point() {
        let ring = unit_square();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.coords().first(), ring.coords().last());
    }

    #[test]
    fn test_snap_nearly_closed_ring() {
        let ring = Ring::closed(vec![
            Coord::new(0.0, 0.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 1.0),
            Coord::new(1e-12, -1e-12),
        ])
        .unwrap();

        assert_eq!(ring.len(), 5);
        assert_eq!(*ring.coords().last().unwrap(), Coord::new(0.0, 0.0));
    }

    #[test]
    fn test_too_few_points() {
        let result = Ring::closed(vec![Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)]);
        assert!(matches!(result, Err(GeoError::UnclosedRing { .. })));
    }

    #[test]
    fn test_signed_area_orientation() {
        let ccw = unit_square();
        assert!(ccw.signed_area() > 0.0);
        assert!(ccw.reversed().signed_area() < 0.0);
        assert_eq!(ccw.signed_area().abs(), ccw.reversed().signed_area().abs());
    }

    #[test]
    fn test_reversed_stays_closed() {
        let reversed = unit_square().reversed();
        assert_eq!(reversed.coords().first(), reversed.coords().last());
        assert_eq!(reversed.len(), 5);
    }
}
