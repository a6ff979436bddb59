// src/query.rs

use crate::error::{GeoError, GeoResult};
use crate::feature::SiteFeature;
use crate::geometry::{Polygon, validate};
use crate::types::BoundingBox;

/// Prüft ob ein Polygon vollständig innerhalb einer Bounding Box liegt:
/// true genau dann, wenn jeder Punkt jedes Rings innerhalb oder auf dem Rand
/// des Rechtecks liegt (inklusiv). Das ist Containment ("fully within"),
/// nicht Intersection — ein teilweise überlappendes Polygon ergibt false.
/// Es findet keine Reprojektion statt; Polygon und Box müssen im selben CRS
/// vorliegen.
pub fn within_bounding_box(polygon: &Polygon, bbox: &BoundingBox) -> bool {
    polygon
        .rings()
        .iter()
        .flat_map(|ring| ring.coords())
        .all(|&coord| bbox.contains_coord(coord))
}

/// Containment-Abfrage gegen ein gespeichertes Feature. Stimmt das CRS des
/// Features nicht mit dem der Abfrage überein, wird das als `CrsMismatch`
/// signalisiert statt stillschweigend falsch zu vergleichen.
pub fn feature_within_bounding_box(
    feature: &SiteFeature,
    bbox: &BoundingBox,
    query_crs: &str,
) -> GeoResult<bool> {
    if feature.crs != query_crs {
        return Err(GeoError::CrsMismatch {
            stored: feature.crs.clone(),
            requested: query_crs.to_string(),
        });
    }

    let polygon = validate(&feature.geometry)?;
    Ok(within_bounding_box(&polygon, bbox))
}
