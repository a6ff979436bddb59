// src/area.rs

use crate::crs::{CrsKind, CrsRegistry};
use crate::error::GeoResult;
use crate::geometry::{Polygon, Ring};
use crate::utils::angles::deg_to_rad;

/// Berechnet die Fläche eines Polygons in Quadratmetern, immer >= 0.
///
/// Geografische CRS (Grad) rechnen auf der Kugel der CRS-Definition mit der
/// geodätischen Shoelace-Formel nach Chamberlain & Duquette; projizierte,
/// metrische CRS rechnen planar per Shoelace. Pro Ring zählt `|signierte
/// Fläche|`, daher ist die Umlaufrichtung der Eingabe egal; Löcher werden vom
/// äußeren Ring abgezogen, das Ergebnis bei 0 geklemmt.
///
/// Degenerierte Ringe (weniger als 3 verschiedene Punkte) tragen 0 bei.
/// Selbstüberschneidungen werden nicht erkannt, die Summe wird arithmetisch
/// gebildet — dokumentierte Einschränkung. Eine 0 ist das Sentinel für
/// "Fläche nicht verfügbar", niemals ein Absturz.
pub fn area(polygon: &Polygon, crs_id: &str, registry: &CrsRegistry) -> GeoResult<f64> {
    let definition = registry.definition(crs_id)?;

    let ring_area = |ring: &Ring| -> f64 {
        match definition.kind {
            CrsKind::Geographic { sphere_radius_m } => {
                spherical_ring_area(ring, sphere_radius_m).abs()
            }
            CrsKind::Projected => ring.signed_area().abs(),
        }
    };

    let outer = ring_area(polygon.outer());
    let holes: f64 = polygon.holes().iter().map(|ring| ring_area(ring)).sum();

    Ok((outer - holes).max(0.0))
}

/// Signierte sphärische Ringfläche (Chamberlain & Duquette 2007):
/// `R²/2 * Σ (λ_{i+1} - λ_{i-1}) * sin(φ_i)` über die eindeutigen Punkte,
/// Koordinaten in Grad, Ergebnis in Quadratmetern
fn spherical_ring_area(ring: &Ring, sphere_radius_m: f64) -> f64 {
    let coords = ring.coords();
    let n = coords.len() - 1; // Schlusspunkt dupliziert den ersten
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let lower = coords[(i + n - 1) % n];
        let middle = coords[i];
        let upper = coords[(i + 1) % n];

        sum += (deg_to_rad(upper.x) - deg_to_rad(lower.x)) * deg_to_rad(middle.y).sin();
    }

    sum * sphere_radius_m * sphere_radius_m / 2.0
}
