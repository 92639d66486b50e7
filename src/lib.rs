//! swathfinder - Landsat WRS-2 swath and acquisition-date lookup
//!
//! swathfinder answers two questions: which WRS-2 path/row swaths cover
//! a geographic point, and on which calendar dates each Landsat
//! satellite will image those swaths. It joins a spatial intersection
//! query against the published acquisition cycle calendar and enriches
//! each matched cell with its center and corner coordinates.
//!
//! # Examples
//!
//! ```
//! use swathfinder::calendar::parse_path_list;
//! use swathfinder::matcher::match_cells;
//! use swathfinder::{CycleFact, SwathCell};
//!
//! let fact = CycleFact {
//!     satellite: 9,
//!     date: "1/2/2024".to_string(),
//!     paths: parse_path_list("44, 45"),
//! };
//!
//! let results = match_cells(&[SwathCell::new(44, 34)], &[fact]);
//! assert_eq!(results[0].landsat_dates[&9], vec!["1/2/2024".to_string()]);
//! ```

pub mod api;
pub mod calendar;
pub mod coords;
pub mod error;
pub mod matcher;
pub mod types;
pub mod upstream;

pub use coords::CoordinateIndex;
pub use error::{Error, Result};
pub use types::{CoordinateRecord, CycleFact, GeoPoint, MatchResult, SatelliteDates, SwathCell};
pub use upstream::UpstreamClient;
