//! Core data types for swathfinder

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A geographic point in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new point from latitude/longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both components are finite numbers
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// One WRS-2 grid cell returned by the spatial intersection query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwathCell {
    pub path: i32,
    pub row: i32,
}

impl SwathCell {
    pub fn new(path: i32, row: i32) -> Self {
        Self { path, row }
    }
}

/// Center and corner coordinates for one WRS-2 cell.
///
/// Every field is optional; a cell absent from the corner-point table
/// serializes with all ten fields null rather than being dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRecord {
    pub ctr_lat: Option<f64>,
    pub ctr_lon: Option<f64>,
    pub ul_lat: Option<f64>,
    pub ul_lon: Option<f64>,
    pub ur_lat: Option<f64>,
    pub ur_lon: Option<f64>,
    pub ll_lat: Option<f64>,
    pub ll_lon: Option<f64>,
    pub lr_lat: Option<f64>,
    pub lr_lon: Option<f64>,
}

/// One (satellite, date) entry from the acquisition cycle calendar.
///
/// The date stays in the calendar source's own `"M/D/YYYY"` string form
/// and is only ever compared by string equality, so a fact round-trips
/// bit-for-bit against the source keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleFact {
    pub satellite: i32,
    pub date: String,
    pub paths: BTreeSet<i32>,
}

/// Acquisition dates grouped by satellite number, first-seen order per list
pub type SatelliteDates = BTreeMap<i32, Vec<String>>;

/// Match outcome for a single swath cell
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub cell: SwathCell,
    pub coordinates: Option<CoordinateRecord>,
    pub landsat_dates: SatelliteDates,
}
