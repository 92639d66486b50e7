//! Acquisition cycle calendar parsing
//!
//! The upstream calendar is a nested JSON object: satellite label
//! (`"landsat_8"`) to date string (`"1/2/2024"`, no zero padding) to an
//! entry whose `path` field is a comma-separated path list. This module
//! flattens that object into [`CycleFact`]s once per fetch, so the rest
//! of the crate never touches the key string conventions.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use tracing::warn;

use crate::types::CycleFact;

/// Raw calendar document as served upstream.
///
/// Both levels are ordered maps so that two deserializations of the
/// same snapshot always parse into the same fact sequence, which keeps
/// the first-seen date order downstream stable across identical
/// requests.
pub type RawCalendar = BTreeMap<String, BTreeMap<String, RawCycleEntry>>;

/// One raw calendar entry; `path` holds a comma-separated path list
#[derive(Debug, Clone, Deserialize)]
pub struct RawCycleEntry {
    #[serde(default)]
    pub path: String,
}

/// Flattens a raw calendar into one fact per (satellite, date) pair.
///
/// Satellite numbers are taken generically from the `landsat_<N>` key
/// suffix; keys in any other form are skipped. Facts come out in the
/// maps' key order, so the same snapshot always yields the same
/// sequence.
pub fn parse_calendar(raw: &RawCalendar) -> Vec<CycleFact> {
    let mut facts = Vec::new();

    for (label, dates) in raw {
        let satellite = match satellite_number(label) {
            Some(n) => n,
            None => {
                warn!(%label, "skipping unrecognized satellite key in cycle calendar");
                continue;
            }
        };

        for (date, entry) in dates {
            facts.push(CycleFact {
                satellite,
                date: date.clone(),
                paths: parse_path_list(&entry.path),
            });
        }
    }

    facts
}

/// Extracts the satellite number from a `landsat_<N>` label
pub fn satellite_number(label: &str) -> Option<i32> {
    label.strip_prefix("landsat_")?.parse().ok()
}

/// Splits a comma-separated path list into a set of path numbers.
///
/// Tokens are trimmed before parsing. An unparseable token is dropped
/// and logged; the rest of the list still parses. Duplicates collapse.
pub fn parse_path_list(list: &str) -> BTreeSet<i32> {
    let mut paths = BTreeSet::new();

    for token in list.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<i32>() {
            Ok(path) => {
                paths.insert(path);
            }
            Err(_) => {
                warn!(token, "dropping unparseable path token in cycle calendar entry");
            }
        }
    }

    paths
}

/// Formats a date the way the calendar source keys its entries:
/// `M/D/YYYY` with no leading zeros and a 4-digit year
pub fn calendar_date_string(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Today's date in calendar-key form, from the local clock
pub fn today_string() -> String {
    calendar_date_string(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, &[(&str, &str)])]) -> RawCalendar {
        entries
            .iter()
            .map(|(label, dates)| {
                let inner = dates
                    .iter()
                    .map(|(date, path)| {
                        (
                            date.to_string(),
                            RawCycleEntry {
                                path: path.to_string(),
                            },
                        )
                    })
                    .collect();
                (label.to_string(), inner)
            })
            .collect()
    }

    #[test]
    fn test_parse_entry_round_trip() {
        let calendar = raw(&[("landsat_9", &[("1/2/2024", " 12, 13,13")])]);
        let facts = parse_calendar(&calendar);

        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].satellite, 9);
        assert_eq!(facts[0].date, "1/2/2024");
        assert_eq!(facts[0].paths, BTreeSet::from([12, 13]));
    }

    #[test]
    fn test_malformed_token_is_dropped() {
        assert_eq!(parse_path_list("12, abc, 14"), BTreeSet::from([12, 14]));
    }

    #[test]
    fn test_empty_and_blank_tokens() {
        assert_eq!(parse_path_list(""), BTreeSet::new());
        assert_eq!(parse_path_list(" , ,"), BTreeSet::new());
    }

    #[test]
    fn test_satellite_number_is_generic() {
        assert_eq!(satellite_number("landsat_7"), Some(7));
        assert_eq!(satellite_number("landsat_10"), Some(10));
        assert_eq!(satellite_number("sentinel_2"), None);
        assert_eq!(satellite_number("landsat_x"), None);
    }

    #[test]
    fn test_unrecognized_keys_are_skipped() {
        let calendar = raw(&[
            ("landsat_8", &[("3/4/2024", "33")]),
            ("not_a_satellite", &[("3/4/2024", "44")]),
        ]);
        let facts = parse_calendar(&calendar);

        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].satellite, 8);
    }

    #[test]
    fn test_same_snapshot_parses_to_same_order() {
        let snapshot = r#"{
            "landsat_8": {
                "1/2/2024": {"path": "44"},
                "1/10/2024": {"path": "44"},
                "1/18/2024": {"path": "44"},
                "1/26/2024": {"path": "44"},
                "2/3/2024": {"path": "44"},
                "2/11/2024": {"path": "44"},
                "2/19/2024": {"path": "44"},
                "2/27/2024": {"path": "44"}
            }
        }"#;

        let baseline: RawCalendar = serde_json::from_str(snapshot).unwrap();
        let baseline_facts = parse_calendar(&baseline);

        for _ in 0..20 {
            let calendar: RawCalendar = serde_json::from_str(snapshot).unwrap();
            assert_eq!(parse_calendar(&calendar), baseline_facts);
        }
    }

    #[test]
    fn test_matched_date_order_is_stable_across_snapshots() {
        use crate::matcher::match_cells;
        use crate::types::SwathCell;

        let snapshot = r#"{
            "landsat_8": {
                "1/2/2024": {"path": "44"},
                "1/10/2024": {"path": "44"},
                "2/3/2024": {"path": "44"},
                "2/11/2024": {"path": "44"}
            },
            "landsat_9": {
                "1/6/2024": {"path": "44"},
                "1/14/2024": {"path": "44"}
            }
        }"#;

        let cells = [SwathCell::new(44, 34)];
        let calendar: RawCalendar = serde_json::from_str(snapshot).unwrap();
        let baseline = match_cells(&cells, &parse_calendar(&calendar));

        for _ in 0..20 {
            let calendar: RawCalendar = serde_json::from_str(snapshot).unwrap();
            let results = match_cells(&cells, &parse_calendar(&calendar));
            assert_eq!(results, baseline);
        }
    }

    #[test]
    fn test_calendar_date_string_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(calendar_date_string(date), "1/2/2024");

        let date = NaiveDate::from_ymd_opt(2024, 11, 28).unwrap();
        assert_eq!(calendar_date_string(date), "11/28/2024");
    }
}
