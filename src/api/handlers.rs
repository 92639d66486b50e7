use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

use crate::calendar::{parse_calendar, today_string};
use crate::error::Error;
use crate::matcher::{match_cells, match_cells_aggregate, paths_for_date};
use crate::types::{GeoPoint, MatchResult};

use super::models::*;
use super::AppState;

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn lookup(
    State(state): State<AppState>,
    Query(req): Query<LookupRequest>,
) -> Result<Json<LookupResponse>, ApiError> {
    let (latitude, longitude) = match (req.latitude, req.longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            return Err(error_response(Error::InvalidParams(
                "latitude and longitude are required".to_string(),
            )))
        }
    };

    // Reject before any upstream call is issued.
    if !GeoPoint::new(latitude, longitude).is_valid() {
        return Err(error_response(Error::InvalidParams(
            "latitude and longitude must be finite numbers".to_string(),
        )));
    }

    let (cells, raw_calendar) = tokio::try_join!(
        state.upstream.query_cells(latitude, longitude),
        state.upstream.fetch_calendar(),
    )
    .map_err(error_response)?;

    if cells.is_empty() {
        return Err(error_response(Error::NoMatch(
            "no WRS-2 cells intersect this point".to_string(),
        )));
    }
    info!(latitude, longitude, cells = cells.len(), "point lookup");

    let facts = parse_calendar(&raw_calendar);

    let response = match req.mode {
        LookupMode::Cells => {
            let results = enrich(match_cells(&cells, &facts), &state);
            LookupResponse {
                latitude,
                longitude,
                cells: results
                    .into_iter()
                    .map(|r| CellEntry::from_match(r, true))
                    .collect(),
                landsat_dates: None,
            }
        }
        LookupMode::Aggregate => {
            let dates = match_cells_aggregate(&cells, &facts);
            LookupResponse {
                latitude,
                longitude,
                cells: cells
                    .iter()
                    .map(|&cell| CellEntry {
                        path: cell.path,
                        row: cell.row,
                        coordinates: state
                            .index
                            .lookup(cell.path, cell.row)
                            .copied()
                            .unwrap_or_default(),
                        landsat_dates: None,
                    })
                    .collect(),
                landsat_dates: Some(label_satellites(dates)),
            }
        }
    };

    Ok(Json(response))
}

pub async fn today(State(state): State<AppState>) -> Result<Json<TodayResponse>, ApiError> {
    let raw_calendar = state
        .upstream
        .fetch_calendar()
        .await
        .map_err(error_response)?;

    let facts = parse_calendar(&raw_calendar);
    let date = today_string();
    let grouped = paths_for_date(&facts, &date);

    // A calendar with no entry for today anywhere means the source is
    // stale or the date is out of range, not a legitimate empty answer.
    if grouped.is_empty() {
        return Err(error_response(Error::NoMatch(
            "no acquisitions scheduled for today".to_string(),
        )));
    }

    Ok(Json(TodayResponse::new(date, grouped)))
}

fn enrich(mut results: Vec<MatchResult>, state: &AppState) -> Vec<MatchResult> {
    for result in &mut results {
        result.coordinates = state.index.lookup(result.cell.path, result.cell.row).copied();
    }
    results
}

/// Maps a crate error onto its status code and client-visible body.
/// Upstream details are logged here and never leak to the caller.
fn error_response(err: Error) -> ApiError {
    let (status, message) = match &err {
        Error::InvalidParams(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        Error::NoMatch(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        Error::Upstream(_) => {
            error!(%err, "upstream fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "external data unavailable".to_string(),
            )
        }
        _ => {
            error!(%err, "request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            )
        }
    };
    (status, Json(ErrorResponse { error: message }))
}
