//! World boundaries loaded from GeoJSON.
//!
//! Only area geometries are kept: each `Polygon` or `MultiPolygon` becomes one
//! [`Country`] holding all of its rings, which the renderer fills as a single
//! path. Geometry collections are flattened; points and lines are ignored.

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;

use geojson::{GeoJson, Geometry, Value};

use crate::camera::Point;
use crate::error::MapError;
use crate::projection::Projection;

/// One filled shape on the base map, as rings of (lon, lat).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Country {
    pub rings: Vec<Vec<(f64, f64)>>,
}

/// The base map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorldMap {
    pub countries: Vec<Country>,
}

impl WorldMap {
    /// Parse a GeoJSON document (FeatureCollection, Feature, or bare Geometry).
    ///
    /// # Errors
    ///
    /// Returns [`MapError::GeoJson`] if `text` is not valid GeoJSON.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let geojson: GeoJson = text.parse()?;
        let mut world = Self::default();
        match geojson {
            GeoJson::FeatureCollection(collection) => {
                for feature in collection.features {
                    if let Some(geometry) = feature.geometry {
                        world.push_geometry(&geometry);
                    }
                }
            }
            GeoJson::Feature(feature) => {
                if let Some(geometry) = feature.geometry {
                    world.push_geometry(&geometry);
                }
            }
            GeoJson::Geometry(geometry) => world.push_geometry(&geometry),
        }
        log::info!("parsed world map with {} shapes", world.countries.len());
        Ok(world)
    }

    fn push_geometry(&mut self, geometry: &Geometry) {
        match &geometry.value {
            Value::Polygon(polygon) => self.push_rings(polygon.iter()),
            Value::MultiPolygon(polygons) => self.push_rings(polygons.iter().flatten()),
            Value::GeometryCollection(children) => {
                for child in children {
                    self.push_geometry(child);
                }
            }
            _ => {}
        }
    }

    fn push_rings<'a>(&mut self, rings: impl Iterator<Item = &'a Vec<Vec<f64>>>) {
        let rings: Vec<Vec<(f64, f64)>> = rings
            .map(|ring| ring.iter().filter_map(|pos| Some((*pos.first()?, *pos.get(1)?))).collect::<Vec<_>>())
            .filter(|ring| ring.len() >= 3)
            .collect();
        if !rings.is_empty() {
            self.countries.push(Country { rings });
        }
    }

    /// Project every ring into world pixels.
    #[must_use]
    pub fn project(&self, projection: &Projection) -> Vec<ProjectedShape> {
        self.countries
            .iter()
            .map(|country| ProjectedShape {
                rings: country
                    .rings
                    .iter()
                    .map(|ring| ring.iter().map(|&(lon, lat)| projection.project(lon, lat)).collect())
                    .collect(),
            })
            .collect()
    }
}

/// A country's rings in world pixels, ready to draw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedShape {
    pub rings: Vec<Vec<Point>>,
}
