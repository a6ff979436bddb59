//! Geometrie-Kern für mandanten-bezogene Site-Polygone: Validierung und
//! Normalisierung, CRS-Reprojektion, Flächenberechnung und Bounding-Box-
//! Containment. Alle Operationen sind reine Funktionen über unveränderliche
//! Eingaben; der einzige prozessweite Zustand ist das einmalig initialisierte
//! CRS-Registry.

pub mod area;
pub mod crs;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod query;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{GeoError, GeoResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        area::area,
        crs::{CrsDefinition, CrsKind, CrsRegistry, CrsUnit, EPSG_3857, EPSG_4326, reproject},
        error::{GeoError, GeoResult},
        feature::{EpochWindow, SiteFeature, bbox_query_geometry, feature_in_crs},
        geometry::{Polygon, RawGeometry, Ring, validate},
        query::{feature_within_bounding_box, within_bounding_box},
        types::*,
    };
}
