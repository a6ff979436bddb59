// src/feature.rs

use crate::area::area;
use crate::crs::{CrsRegistry, EPSG_4326, reproject};
use crate::error::GeoResult;
use crate::geometry::{Polygon, RawGeometry, validate};
use crate::types::BoundingBox;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gespeichertes Site-Feature, wie es der Feature-Store liefert und annimmt.
/// Die Koordinaten der Geometrie liegen im deklarierten `crs`; `area_m2` wird
/// einmalig bei der Erstellung berechnet. Datensätze werden nie in-place
/// verändert, Updates sind neue Records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteFeature {
    pub tenant_id: String,
    pub epoch_id: DateTime<Utc>,
    pub feature_name: String,
    pub owner: String,
    pub geometry: RawGeometry,
    pub area_m2: f64,
    pub crs: String,
}

impl SiteFeature {
    /// Erstellt ein Feature aus einer rohen Geometrie. Die Fläche wird zur
    /// Speicher-Konsistenz immer in geografischen Grad berechnet: eine in
    /// einem projizierten CRS eingereichte Geometrie wird dafür nach
    /// EPSG:4326 reprojiziert, gespeichert wird sie im deklarierten CRS.
    pub fn create(
        tenant_id: &str,
        epoch_id: DateTime<Utc>,
        feature_name: &str,
        owner: &str,
        geometry: RawGeometry,
        crs: &str,
        registry: &CrsRegistry,
    ) -> GeoResult<Self> {
        let polygon = validate(&geometry)?;
        let geographic = reproject(&polygon, crs, EPSG_4326, registry)?;
        let area_m2 = area(&geographic, EPSG_4326, registry)?;

        Ok(Self {
            tenant_id: tenant_id.to_string(),
            epoch_id,
            feature_name: feature_name.to_string(),
            owner: owner.to_string(),
            geometry,
            area_m2,
            crs: crs.to_string(),
        })
    }
}

/// Liefert die Geometrie eines Features im gewünschten Ziel-CRS samt der dort
/// gültigen Fläche: in projizierten metrischen Systemen wird sie planar neu
/// berechnet, in geografischen gilt die gespeicherte Fläche weiter. Für nicht
/// registrierte Transformationspaare wird der Fehler propagiert statt eine
/// Formel zu raten.
pub fn feature_in_crs(
    feature: &SiteFeature,
    target_crs: &str,
    registry: &CrsRegistry,
) -> GeoResult<(RawGeometry, f64)> {
    if feature.crs == target_crs {
        registry.definition(target_crs)?;
        return Ok((feature.geometry.clone(), feature.area_m2));
    }

    let polygon = validate(&feature.geometry)?;
    let transformed = reproject(&polygon, &feature.crs, target_crs, registry)?;

    let area_m2 = if registry.definition(target_crs)?.is_geographic() {
        feature.area_m2
    } else {
        area(&transformed, target_crs, registry)?
    };

    Ok((transformed.to_raw(), area_m2))
}

/// Die Geometrie einer Bounding-Box-Abfrage in der Record-Form des Stores
/// (das geschlossene 5-Punkt-Rechteck)
pub fn bbox_query_geometry(bbox: &BoundingBox) -> RawGeometry {
    Polygon::from_bounding_box(bbox).to_raw()
}

/// Zeitfenster einer Epochen-Abfrage, an beiden Enden inklusiv
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EpochWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, epoch: DateTime<Utc>) -> bool {
        self.start <= epoch && epoch <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::EPSG_3857;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn registry() -> CrsRegistry {
        CrsRegistry::with_defaults()
    }

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
    }

    fn central_park_geometry() -> RawGeometry {
        RawGeometry::polygon(vec![vec![
            [-73.9819, 40.7681],
            [-73.9493, 40.7681],
            [-73.9493, 40.8006],
            [-73.9819, 40.8006],
            [-73.9819, 40.7681],
        ]])
    }

    #[test]
    fn test_create_computes_area_once() {
        let feature = SiteFeature::create(
            "tenant_1",
            epoch(),
            "Central Park",
            "City of New York",
            central_park_geometry(),
            EPSG_4326,
            &registry(),
        )
        .unwrap();

        assert!(feature.area_m2 > 8.0e6 && feature.area_m2 < 10.5e6);
        assert_eq!(feature.crs, EPSG_4326);
        // Geometrie bleibt im eingereichten CRS gespeichert
        assert_eq!(feature.geometry, central_park_geometry());
    }

    #[test]
    fn test_create_normalizes_projected_input_for_area() {
        // 100 m x 100 m Quadrat am Äquator in Web-Mercator-Metern;
        // die Fläche wird über EPSG:4326 sphärisch berechnet
        let feature = SiteFeature::create(
            "tenant_1",
            epoch(),
            "Equator Plot",
            "Survey",
            RawGeometry::polygon(vec![vec![
                [0.0, 0.0],
                [100.0, 0.0],
                [100.0, 100.0],
                [0.0, 100.0],
                [0.0, 0.0],
            ]]),
            EPSG_3857,
            &registry(),
        )
        .unwrap();

        assert_relative_eq!(feature.area_m2, 10_000.0, max_relative = 1e-3);
    }

    #[test]
    fn test_feature_in_crs_recomputes_metric_area() {
        let registry = registry();
        let feature = SiteFeature::create(
            "tenant_1",
            epoch(),
            "Central Park",
            "City of New York",
            central_park_geometry(),
            EPSG_4326,
            &registry,
        )
        .unwrap();

        let (geometry, area_m2) = feature_in_crs(&feature, EPSG_3857, &registry).unwrap();
        assert_eq!(geometry.coordinates.len(), 1);
        assert_eq!(geometry.coordinates[0].len(), 5);
        // Mercator streckt auf 40.8° N um ~1/cos²(lat)
        let lat_rad = 40.78_f64.to_radians();
        assert_relative_eq!(
            area_m2 / feature.area_m2,
            1.0 / (lat_rad.cos() * lat_rad.cos()),
            max_relative = 1e-2
        );
    }

    #[test]
    fn test_feature_in_same_crs_keeps_stored_values() {
        let registry = registry();
        let feature = SiteFeature::create(
            "tenant_1",
            epoch(),
            "Central Park",
            "City of New York",
            central_park_geometry(),
            EPSG_4326,
            &registry,
        )
        .unwrap();

        let (geometry, area_m2) = feature_in_crs(&feature, EPSG_4326, &registry).unwrap();
        assert_eq!(geometry, feature.geometry);
        assert_eq!(area_m2, feature.area_m2);
    }

    #[test]
    fn test_record_serde_shape() {
        let feature = SiteFeature::create(
            "tenant_1",
            epoch(),
            "Battery Park",
            "NYC Parks Department",
            RawGeometry::polygon(vec![vec![
                [-74.0166, 40.7030],
                [-74.0110, 40.7030],
                [-74.0110, 40.7075],
                [-74.0166, 40.7075],
                [-74.0166, 40.7030],
            ]]),
            EPSG_4326,
            &registry(),
        )
        .unwrap();

        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["tenant_id"], "tenant_1");
        assert_eq!(json["feature_name"], "Battery Park");
        assert_eq!(json["owner"], "NYC Parks Department");
        assert_eq!(json["geometry"]["type"], "Polygon");
        assert_eq!(json["crs"], "EPSG:4326");
        assert!(json["area_m2"].as_f64().unwrap() > 0.0);

        let back: SiteFeature = serde_json::from_value(json).unwrap();
        assert_eq!(back, feature);
    }

    #[test]
    fn test_bbox_query_geometry_is_closed_rectangle() {
        let raw = bbox_query_geometry(&BoundingBox::new(-74.1, 40.6, -73.8, 40.9));
        assert_eq!(raw.geometry_type, "Polygon");
        assert_eq!(raw.coordinates[0].len(), 5);
        assert_eq!(raw.coordinates[0][0], raw.coordinates[0][4]);
    }

    #[test]
    fn test_epoch_window_is_inclusive() {
        let window = EpochWindow::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        );

        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
        assert!(window.contains(epoch()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 1).unwrap()));
    }
}
