use crate::scraper::ParseError;
use serde::Deserialize;
use std::path::Path;

/// Declarative field -> CSS selector mapping for one site's markup.
///
/// ```toml
/// container = "div.search-list-item"
///
/// [fields]
/// price = "div.price"
/// ```
///
/// Anything left out of the file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectorMap {
    pub container: String,
    pub fields: FieldSelectors,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldSelectors {
    pub property_type: String,
    pub rooms: String,
    pub size: String,
    pub price: String,
    pub address: String,
    pub energy_mark: String,
    pub listing_date: String,
}

impl Default for SelectorMap {
    fn default() -> Self {
        Self {
            container: "div.search-list-item".to_string(),
            fields: FieldSelectors::default(),
        }
    }
}

impl Default for FieldSelectors {
    fn default() -> Self {
        Self {
            property_type: "div.property-type".to_string(),
            rooms: "div.rooms".to_string(),
            size: "div.size".to_string(),
            price: "div.price".to_string(),
            address: "div.address".to_string(),
            energy_mark: "div.energy-mark".to_string(),
            listing_date: "div.listing-date".to_string(),
        }
    }
}

impl FieldSelectors {
    /// `(field name, selector)` in record column order.
    pub fn ordered(&self) -> [(&'static str, &str); 7] {
        [
            ("property_type", &self.property_type),
            ("rooms", &self.rooms),
            ("size", &self.size),
            ("price", &self.price),
            ("address", &self.address),
            ("energy_mark", &self.energy_mark),
            ("listing_date", &self.listing_date),
        ]
    }
}

impl SelectorMap {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let file_err = |reason: String| ParseError::SelectorFile {
            path: path.display().to_string(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| file_err(e.to_string()))?;
        let map = Self::from_toml_str(&raw).map_err(|e| file_err(e.to_string()))?;

        tracing::info!(path = %path.display(), container = %map.container, "loaded selector map");
        Ok(map)
    }
}
