//! Runtime configuration read from the host page.
//!
//! The page may carry a JSON object in the `data-config` attribute of the map
//! element. Any field left out keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::PASTEL_COLORS;
use crate::error::MapError;

pub const DEFAULT_CSV_URL: &str = "data/reisekosten_cleaned.csv";
pub const DEFAULT_GEOJSON_URL: &str = "data/world_50m.geojson";
pub const DEFAULT_MAP_ELEMENT_ID: &str = "map";
pub const DEFAULT_TOOLTIP_ELEMENT_ID: &str = "tooltip";
pub const DEFAULT_CURRENCY: &str = "CHF";

/// Name of the attribute on the map element holding config overrides.
pub const CONFIG_ATTRIBUTE: &str = "data-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// URL of the expense CSV.
    pub csv_url: String,
    /// URL of the world boundaries GeoJSON.
    pub geojson_url: String,
    /// Id of the `<canvas>` element.
    pub map_element_id: String,
    /// Id of the tooltip container element.
    pub tooltip_element_id: String,
    /// Currency suffix shown in tooltips.
    pub currency: String,
    /// Category colors, assigned in order of first appearance.
    pub palette: Vec<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            csv_url: DEFAULT_CSV_URL.to_string(),
            geojson_url: DEFAULT_GEOJSON_URL.to_string(),
            map_element_id: DEFAULT_MAP_ELEMENT_ID.to_string(),
            tooltip_element_id: DEFAULT_TOOLTIP_ELEMENT_ID.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            palette: PASTEL_COLORS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl MapConfig {
    /// Build config from the raw `data-config` attribute, if present.
    ///
    /// A missing or blank attribute yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Config`] if the attribute is not a JSON object
    /// matching [`MapConfig`], or if it sets an empty palette.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, MapError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };
        let config: Self = serde_json::from_str(raw).map_err(|e| MapError::Config(e.to_string()))?;
        if config.palette.is_empty() {
            return Err(MapError::Config("palette must not be empty".into()));
        }
        Ok(config)
    }
}
