// src/geometry/validation.rs

use crate::error::{GeoError, GeoResult};
use crate::geometry::{Polygon, RawGeometry, Ring};
use crate::types::Coord;
use crate::utils::constants::{CLOSURE_EPSILON, MAX_POLYGON_VERTICES};

/// Prüft eine rohe Geometrie und normalisiert sie zu einem `Polygon`.
///
/// Reihenfolge der Checks:
/// 1. deklarierter Typ muss `"Polygon"` sein,
/// 2. Gesamt-Vertexzahl unter der Obergrenze,
/// 3. jede Koordinaten-Komponente endlich,
/// 4. jeder Ring geschlossen (Toleranz 1e-9) mit mindestens 4 Punkten.
///
/// Fehlt der Schlusspunkt eines Rings, wird er durch Anhängen des ersten
/// Punkts ergänzt (akzeptierte Nachsicht, kein Fehler). Liegt der letzte Punkt
/// innerhalb der Toleranz am ersten, wird er exakt auf diesen geschnappt,
/// damit die Schluss-Invariante danach bitgenau gilt.
///
/// Reine Funktion, keine Seiteneffekte.
pub fn validate(raw: &RawGeometry) -> GeoResult<Polygon> {
    if raw.geometry_type != "Polygon" {
        return Err(GeoError::InvalidGeometryType {
            actual: raw.geometry_type.clone(),
        });
    }

    if raw.coordinates.is_empty() {
        return Err(GeoError::InvalidGeometryType {
            actual: "Polygon with no rings".to_string(),
        });
    }

    let count: usize = raw.coordinates.iter().map(Vec::len).sum();
    if count > MAX_POLYGON_VERTICES {
        return Err(GeoError::GeometryTooLarge {
            count,
            limit: MAX_POLYGON_VERTICES,
        });
    }

    let mut rings = Vec::with_capacity(raw.coordinates.len());
    for (ring_index, raw_ring) in raw.coordinates.iter().enumerate() {
        rings.push(validate_ring(ring_index, raw_ring)?);
    }

    Polygon::new(rings)
}

fn validate_ring(ring_index: usize, raw_ring: &[[f64; 2]]) -> GeoResult<Ring> {
    let mut coords: Vec<Coord> = Vec::with_capacity(raw_ring.len() + 1);

    for (point_index, &pair) in raw_ring.iter().enumerate() {
        let coord = Coord::from(pair);
        if !coord.is_finite() {
            return Err(GeoError::InvalidCoordinate {
                ring_index,
                point_index,
            });
        }
        coords.push(coord);
    }

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
            ring_index,
            reason: format!("{} points after closing, need at least 4", coords.len()),
        });
    }

    Ok(Ring::from_closed_coords(coords))
}
