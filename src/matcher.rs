//! Swath matching
//!
//! Joins the cells returned by the spatial query against the parsed
//! cycle calendar, grouping acquisition dates by satellite. Dates keep
//! first-seen order and never repeat within one satellite's list.

use std::collections::BTreeMap;

use crate::types::{CycleFact, MatchResult, SatelliteDates, SwathCell};

/// Integer paths grouped by satellite number
pub type SatellitePaths = BTreeMap<i32, Vec<i32>>;

/// Per-cell match: each cell gets its own satellite-to-dates mapping.
///
/// A cell no calendar fact covers still appears in the result with an
/// empty mapping; absence of imagery dates is not an error.
pub fn match_cells(cells: &[SwathCell], facts: &[CycleFact]) -> Vec<MatchResult> {
    cells
        .iter()
        .map(|&cell| {
            let mut dates = SatelliteDates::new();
            for fact in facts {
                if fact.paths.contains(&cell.path) {
                    append_date(&mut dates, fact.satellite, &fact.date);
                }
            }
            MatchResult {
                cell,
                coordinates: None,
                landsat_dates: dates,
            }
        })
        .collect()
}

/// Aggregate match: one shared satellite-to-dates mapping across all
/// cells. A fact counts when its path set covers any of the cells.
pub fn match_cells_aggregate(cells: &[SwathCell], facts: &[CycleFact]) -> SatelliteDates {
    let mut dates = SatelliteDates::new();
    for fact in facts {
        if cells.iter().any(|cell| fact.paths.contains(&cell.path)) {
            append_date(&mut dates, fact.satellite, &fact.date);
        }
    }
    dates
}

/// Today mode: the paths each satellite images on the given date.
///
/// The date is compared by exact string equality against the calendar's
/// own `M/D/YYYY` keys. An empty result across all satellites signals a
/// stale calendar or out-of-range date; the caller treats it as not
/// found rather than an empty success.
pub fn paths_for_date(facts: &[CycleFact], date: &str) -> SatellitePaths {
    let mut grouped = SatellitePaths::new();
    for fact in facts {
        if fact.date == date {
            let paths = grouped.entry(fact.satellite).or_default();
            for &path in &fact.paths {
                if !paths.contains(&path) {
                    paths.push(path);
                }
            }
        }
    }
    grouped
}

fn append_date(dates: &mut SatelliteDates, satellite: i32, date: &str) {
    let list = dates.entry(satellite).or_default();
    if !list.iter().any(|d| d == date) {
        list.push(date.to_string());
    }
}
