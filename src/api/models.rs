use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matcher::SatellitePaths;
use crate::types::{CoordinateRecord, MatchResult, SatelliteDates};

#[derive(Debug, Serialize, Deserialize)]
pub struct LookupRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub mode: LookupMode,
}

/// Shape of the lookup response: dates nested per cell, or one
/// aggregated per-satellite list across all matched cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    #[default]
    Cells,
    Aggregate,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub cells: Vec<CellEntry>,
    /// Aggregated per-satellite dates; present in aggregate mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landsat_dates: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Serialize)]
pub struct CellEntry {
    pub path: i32,
    pub row: i32,
    #[serde(flatten)]
    pub coordinates: CoordinateRecord,
    /// Per-cell per-satellite dates; present in cells mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landsat_dates: Option<BTreeMap<String, Vec<String>>>,
}

impl CellEntry {
    /// Builds an entry from a match result; a missing coordinate record
    /// becomes ten null fields, never a dropped cell.
    pub fn from_match(result: MatchResult, include_dates: bool) -> Self {
        Self {
            path: result.cell.path,
            row: result.cell.row,
            coordinates: result.coordinates.unwrap_or_default(),
            landsat_dates: include_dates.then(|| label_satellites(result.landsat_dates)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: String,
    pub satellites: BTreeMap<String, Vec<i32>>,
}

impl TodayResponse {
    pub fn new(date: String, grouped: SatellitePaths) -> Self {
        Self {
            date,
            satellites: grouped
                .into_iter()
                .map(|(satellite, paths)| (satellite_label(satellite), paths))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Renders a satellite number back into its calendar label form
pub fn satellite_label(satellite: i32) -> String {
    format!("landsat_{}", satellite)
}

/// Re-keys a satellite-to-dates mapping with display labels
pub fn label_satellites(dates: SatelliteDates) -> BTreeMap<String, Vec<String>> {
    dates
        .into_iter()
        .map(|(satellite, list)| (satellite_label(satellite), list))
        .collect()
}
