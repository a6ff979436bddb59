// src/utils.rs

/// Geodätische und numerische Konstanten
pub mod constants {
    /// Toleranz für den Ring-Schluss (erste == letzte Koordinate)
    pub const CLOSURE_EPSILON: f64 = 1e-9;
    /// Kugelradius der sphärischen Mercator-Projektion in Metern (EPSG:3857)
    pub const MERCATOR_RADIUS_M: f64 = 6_378_137.0;
    /// Gültiger Breitengrad-Bereich der Web-Mercator-Projektion
    pub const MERCATOR_MAX_LAT_DEG: f64 = 85.051129;
    /// Obergrenze der Gesamt-Vertexzahl pro Polygon (begrenzt CPU-Kosten pro Aufruf)
    pub const MAX_POLYGON_VERTICES: usize = 100_000;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() <= epsilon
    }
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use std::f64::consts::PI;

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * PI / 180.0
    }

    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * 180.0 / PI
    }
}
