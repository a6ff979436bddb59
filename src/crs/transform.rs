// src/crs/transform.rs

use crate::types::Coord;
use crate::utils::angles::{deg_to_rad, rad_to_deg};
use crate::utils::constants::{MERCATOR_MAX_LAT_DEG, MERCATOR_RADIUS_M};
use std::f64::consts::PI;

/// Leaf-Transformation einer einzelnen Koordinate. Die Projektions-Engine
/// wendet sie uniform auf jeden Punkt an, unabhängig von der Verschachtelung.
pub type CoordTransform = fn(Coord) -> Coord;

/// Vorwärts-Transformation EPSG:4326 -> EPSG:3857 (sphärischer Mercator).
/// Der Breitengrad wird auf den gültigen Web-Mercator-Bereich geklemmt statt
/// an den Polen Unendlichkeiten zu erzeugen.
pub fn wgs84_to_web_mercator(coord: Coord) -> Coord {
    let lon = deg_to_rad(coord.x);
    let lat = deg_to_rad(coord.y.clamp(-MERCATOR_MAX_LAT_DEG, MERCATOR_MAX_LAT_DEG));

    Coord::new(
        MERCATOR_RADIUS_M * lon,
        MERCATOR_RADIUS_M * (PI / 4.0 + lat / 2.0).tan().ln(),
    )
}

/// Rück-Transformation EPSG:3857 -> EPSG:4326
pub fn web_mercator_to_wgs84(coord: Coord) -> Coord {
    let lon = rad_to_deg(coord.x / MERCATOR_RADIUS_M);
    let lat = rad_to_deg(2.0 * (coord.y / MERCATOR_RADIUS_M).exp().atan() - PI / 2.0);

    Coord::new(lon, lat)
}
