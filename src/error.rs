// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("Invalid geometry type: expected \"Polygon\", got \"{actual}\"")]
    InvalidGeometryType { actual: String },

    #[error("Ring {ring_index} is not closed: {reason}")]
    UnclosedRing { ring_index: usize, reason: String },

    #[error("Non-finite coordinate in ring {ring_index} at point {point_index}")]
    InvalidCoordinate {
        ring_index: usize,
        point_index: usize,
    },

    #[error("Unknown CRS: {id}")]
    UnknownCrs { id: String },

    #[error("No transform registered for {from} -> {to}")]
    UnsupportedTransformPair { from: String, to: String },

    #[error("CRS mismatch: geometry is in {stored}, query uses {requested}")]
    CrsMismatch { stored: String, requested: String },

    #[error("Geometry has {count} vertices, limit is {limit}")]
    GeometryTooLarge { count: usize, limit: usize },
}

pub type GeoResult<T> = Result<T, GeoError>;
