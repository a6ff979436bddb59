// src/crs/registry.rs

use crate::crs::definition::CrsDefinition;
use crate::crs::transform::{CoordTransform, web_mercator_to_wgs84, wgs84_to_web_mercator};
use crate::error::{GeoError, GeoResult};
use crate::geometry::Polygon;
use crate::utils::constants::MERCATOR_RADIUS_M;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const EPSG_4326: &str = "EPSG:4326";
pub const EPSG_3857: &str = "EPSG:3857";

/// Registry aller bekannten CRS-Definitionen und der direkten Transformationen
/// zwischen ihnen, per `(from, to)`-Schlüssel. Wird einmal befüllt und danach
/// nie mehr verändert; nur Lese-Zugriffe, daher ohne Synchronisation aus
/// beliebig vielen Threads nutzbar.
#[derive(Debug, Default)]
pub struct CrsRegistry {
    definitions: HashMap<String, CrsDefinition>,
    transforms: HashMap<(String, String), CoordTransform>,
}

impl CrsRegistry {
    /// Leeres Registry, für Tests und Erweiterung um eigene CRS
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry mit den Basis-Systemen EPSG:4326 und EPSG:3857 samt
    /// Transformationen in beide Richtungen
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();

        registry.register_definition(CrsDefinition::geographic(EPSG_4326, MERCATOR_RADIUS_M));
        registry.register_definition(CrsDefinition::projected(EPSG_3857));
        registry.register_transform(EPSG_4326, EPSG_3857, wgs84_to_web_mercator);
        registry.register_transform(EPSG_3857, EPSG_4326, web_mercator_to_wgs84);

        registry
    }

    /// Prozessweites Default-Registry, beim ersten Zugriff initialisiert
    /// und danach eingefroren
    pub fn global() -> &'static CrsRegistry {
        static REGISTRY: OnceLock<CrsRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let registry = CrsRegistry::with_defaults();
            log::debug!(
                "CRS registry initialized: {} definitions, {} transforms",
                registry.definitions.len(),
                registry.transforms.len()
            );
            registry
        })
    }

    pub fn register_definition(&mut self, definition: CrsDefinition) {
        self.definitions.insert(definition.id.clone(), definition);
    }

    pub fn register_transform(&mut self, from: &str, to: &str, transform: CoordTransform) {
        self.transforms
            .insert((from.to_string(), to.to_string()), transform);
    }

    pub fn definition(&self, id: &str) -> GeoResult<&CrsDefinition> {
        self.definitions
            .get(id)
            .ok_or_else(|| GeoError::UnknownCrs { id: id.to_string() })
    }

    /// Direkte Transformation zwischen zwei registrierten CRS. Kein Chaining
    /// über Zwischensysteme; fehlt das Paar, ist das ein Fehler.
    pub fn transform(&self, from: &str, to: &str) -> GeoResult<CoordTransform> {
        self.transforms
            .get(&(from.to_string(), to.to_string()))
            .copied()
            .ok_or_else(|| GeoError::UnsupportedTransformPair {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}

/// Projiziert ein Polygon von `from` nach `to`. Bei identischen Identifiern
/// wird die Eingabe unverändert zurückgegeben (kein Floating-Roundtrip);
/// ansonsten wird die registrierte Leaf-Transformation auf jeden Punkt
/// angewandt, Ring-Anzahl und Punktzahl pro Ring bleiben exakt erhalten.
pub fn reproject(
    polygon: &Polygon,
    from: &str,
    to: &str,
    registry: &CrsRegistry,
) -> GeoResult<Polygon> {
    registry.definition(from)?;
    registry.definition(to)?;

    if from == to {
        return Ok(polygon.clone());
    }

    let transform = registry.transform(from, to)?;
    Ok(polygon.map_coords(transform))
}
