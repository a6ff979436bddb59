// src/geometry/polygon.rs

use crate::error::{GeoError, GeoResult};
use crate::geometry::Ring;
use crate::types::{BoundingBox, Coord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ein Polygon aus einem äußeren Ring und optionalen Löchern.
/// Der erste Ring ist die äußere Grenze, alle weiteren sind Löcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> GeoResult<Self> {
        if rings.is_empty() {
            return Err(GeoError::InvalidGeometryType {
                actual: "Polygon with no rings".to_string(),
            });
        }
        Ok(Self { rings })
    }

    /// Leitet aus einer Bounding Box das geschlossene 5-Punkt-Rechteck ab
    pub fn from_bounding_box(bbox: &BoundingBox) -> Self {
        let [a, b, c, d] = bbox.corners();
        Self {
            rings: vec![Ring::from_closed_coords(vec![a, b, c, d, a])],
        }
    }

    /// Äußerer Grenzring
    pub fn outer(&self) -> &Ring {
        &self.rings[0]
    }

    /// Loch-Ringe (kann leer sein)
    pub fn holes(&self) -> &[Ring] {
        &self.rings[1..]
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Gesamtzahl der Punkte über alle Ringe
    pub fn coord_count(&self) -> usize {
        self.rings.iter().map(Ring::len).sum()
    }

    /// Wendet eine Koordinaten-Transformation auf jeden Punkt jedes Rings an;
    /// Ring-Anzahl und Punktzahl pro Ring bleiben exakt erhalten
    pub fn map_coords<F>(&self, f: F) -> Self
    where
        F: Fn(Coord) -> Coord,
    {
        Self {
            rings: self.rings.iter().map(|ring| ring.map_coords(&f)).collect(),
        }
    }

    /// Konvertiert zurück in die Speicher-/Draht-Form
    pub fn to_raw(&self) -> RawGeometry {
        RawGeometry {
            geometry_type: "Polygon".to_string(),
            coordinates: self
                .rings
                .iter()
                .map(|ring| ring.coords().iter().map(|&c| c.into()).collect())
                .collect(),
        }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon({} rings, {} points)",
            self.rings.len(),
            self.coord_count()
        )
    }
}

/// Rohe Geometrie, wie sie vom Feature-Store und der Präsentationsschicht
/// geliefert wird: `{ "type": "Polygon", "coordinates": [[[x, y], ...], ...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl RawGeometry {
    pub fn polygon(coordinates: Vec<Vec<[f64; 2]>>) -> Self {
        Self {
            geometry_type: "Polygon".to_string(),
            coordinates,
        }
    }
}
