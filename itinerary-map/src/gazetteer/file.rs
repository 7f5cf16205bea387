//! Loading a gazetteer from a `stations.json` file.
//!
//! The file is a JSON array of `{"label": "...", "value": "lat,lon"}`
//! records, the format station pickers are fed with.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Coordinate;

use super::Gazetteer;
use super::error::GazetteerError;

/// One record of a `stations.json` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub label: String,
    /// `"lat,lon"` in decimal degrees.
    pub value: String,
}

impl StationRecord {
    /// Parse the `value` field into a coordinate.
    pub fn coordinate(&self) -> Result<Coordinate, GazetteerError> {
        let invalid = |reason| GazetteerError::InvalidEntry {
            label: self.label.clone(),
            reason,
        };

        let (lat, lon) = self
            .value
            .split_once(',')
            .ok_or_else(|| invalid("value must be \"lat,lon\""))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("latitude is not a number"))?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("longitude is not a number"))?;

        Ok(Coordinate::new(lat, lon))
    }
}

impl Gazetteer {
    /// Build a gazetteer from parsed station records, keeping file order.
    pub fn from_records(records: &[StationRecord]) -> Result<Self, GazetteerError> {
        let entries = records
            .iter()
            .map(|r| Ok((r.label.as_str(), r.coordinate()?)))
            .collect::<Result<Vec<_>, GazetteerError>>()?;
        Ok(Self::from_entries(entries))
    }

    /// Load a gazetteer from a `stations.json` file.
    ///
    /// Any malformed record fails the whole load.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, GazetteerError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| GazetteerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<StationRecord> =
            serde_json::from_str(&contents).map_err(|e| GazetteerError::Json {
                message: e.to_string(),
            })?;

        Self::from_records(&records)
    }
}
