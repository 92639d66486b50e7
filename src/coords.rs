//! WRS-2 corner-point index
//!
//! Loads the static corner-point table once at startup and answers
//! O(1) lookups keyed by path and row. A missing cell is data, not an
//! error; a missing or malformed table is fatal.

use std::collections::HashMap;
use std::path::Path;

use csv::StringRecord;

use crate::error::{Error, Result};
use crate::types::CoordinateRecord;

const REQUIRED_COLUMNS: [&str; 12] = [
    "PATH", "ROW", "CTR LAT", "CTR LON", "UL LAT", "UL LON", "UR LAT", "UR LON", "LL LAT",
    "LL LON", "LR LAT", "LR LON",
];

/// Immutable index from a WRS-2 (path, row) pair to its reference coordinates
#[derive(Debug, Default)]
pub struct CoordinateIndex {
    records: HashMap<String, CoordinateRecord>,
}

/// Builds the lookup key for a cell.
///
/// The `"{path}-{row}"` format is a contract shared between index
/// construction and enrichment, which re-derive it independently.
pub fn cell_key(path: i32, row: i32) -> String {
    format!("{}-{}", path, row)
}

impl CoordinateIndex {
    /// Loads the index from a CSV corner-point table.
    ///
    /// Fails if the file is unreadable, any required column is absent,
    /// or a PATH/ROW value does not parse.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        let columns = column_positions(&headers)?;

        let mut records = HashMap::new();
        for row in reader.records() {
            let row = row?;
            let (key, record) = parse_row(&row, &columns)?;
            records.insert(key, record);
        }

        Ok(Self { records })
    }

    /// Looks up the coordinate record for a cell; `None` means no data
    pub fn lookup(&self, path: i32, row: i32) -> Option<&CoordinateRecord> {
        self.records.get(&cell_key(path, row))
    }

    /// Number of cells in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn column_positions(headers: &StringRecord) -> Result<[usize; 12]> {
    let mut positions = [0usize; 12];
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        positions[slot] = headers
            .iter()
            .position(|h| h.trim() == *name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))?;
    }
    Ok(positions)
}

fn parse_row(row: &StringRecord, columns: &[usize; 12]) -> Result<(String, CoordinateRecord)> {
    let path = parse_int(row, columns[0])?;
    let wrs_row = parse_int(row, columns[1])?;

    let record = CoordinateRecord {
        ctr_lat: parse_float(row, columns[2]),
        ctr_lon: parse_float(row, columns[3]),
        ul_lat: parse_float(row, columns[4]),
        ul_lon: parse_float(row, columns[5]),
        ur_lat: parse_float(row, columns[6]),
        ur_lon: parse_float(row, columns[7]),
        ll_lat: parse_float(row, columns[8]),
        ll_lon: parse_float(row, columns[9]),
        lr_lat: parse_float(row, columns[10]),
        lr_lon: parse_float(row, columns[11]),
    };

    Ok((cell_key(path, wrs_row), record))
}

fn parse_int(row: &StringRecord, index: usize) -> Result<i32> {
    let field = row.get(index).unwrap_or("").trim();
    field
        .parse()
        .map_err(|_| Error::InvalidTableRow(format!("bad integer field: {:?}", field)))
}

fn parse_float(row: &StringRecord, index: usize) -> Option<f64> {
    row.get(index).and_then(|f| f.trim().parse().ok())
}
