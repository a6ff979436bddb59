// src/crs/definition.rs

/// Einheit der Koordinatenachsen eines CRS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrsUnit {
    Degrees,
    Meters,
}

/// Art des Referenzsystems
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrsKind {
    /// Geografisches System auf einer Kugel; Radius in Metern
    Geographic { sphere_radius_m: f64 },
    /// Projiziertes, metrisches System
    Projected,
}

/// Unveränderliche CRS-Definition, im Registry unter ihrem Identifier abgelegt
#[derive(Debug, Clone, PartialEq)]
pub struct CrsDefinition {
    pub id: String,
    pub unit: CrsUnit,
    pub kind: CrsKind,
}

impl CrsDefinition {
    pub fn geographic(id: &str, sphere_radius_m: f64) -> Self {
        Self {
            id: id.to_string(),
            unit: CrsUnit::Degrees,
            kind: CrsKind::Geographic { sphere_radius_m },
        }
    }

    pub fn projected(id: &str) -> Self {
        Self {
            id: id.to_string(),
            unit: CrsUnit::Meters,
            kind: CrsKind::Projected,
        }
    }

    pub fn is_geographic(&self) -> bool {
        matches!(self.kind, CrsKind::Geographic { .. })
    }
}
