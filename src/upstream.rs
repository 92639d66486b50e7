//! Upstream service clients
//!
//! Two opaque data providers back every request: the WRS-2 spatial
//! intersection service (point in, intersecting path/row features out)
//! and the acquisition cycle calendar. Both are fetched fresh per
//! request; any transport failure, non-2xx status, or unparseable body
//! surfaces as [`Error::Upstream`].

use serde::Deserialize;

use crate::calendar::RawCalendar;
use crate::error::{Error, Result};
use crate::types::SwathCell;

/// Default WRS-2 descending-path intersection endpoint (ArcGIS query API)
pub const DEFAULT_WRS_QUERY_URL: &str =
    "https://nimbus.cr.usgs.gov/arcgis/rest/services/LLook_Outlines/MapServer/1/query";

/// Default acquisition cycle calendar document
pub const DEFAULT_CALENDAR_URL: &str =
    "https://landsat.usgs.gov/sites/default/files/landsat_acq/assets/json/cycles_full.json";

/// Clients for the two upstream data sources
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    wrs_query_url: String,
    calendar_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    attributes: FeatureAttributes,
}

#[derive(Debug, Deserialize)]
struct FeatureAttributes {
    #[serde(rename = "PATH")]
    path: i32,
    #[serde(rename = "ROW")]
    row: i32,
}

impl UpstreamClient {
    pub fn new(
        wrs_query_url: impl Into<String>,
        calendar_url: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            wrs_query_url: wrs_query_url.into(),
            calendar_url: calendar_url.into(),
            token,
        }
    }

    /// Client against the production USGS endpoints
    pub fn production() -> Self {
        Self::new(DEFAULT_WRS_QUERY_URL, DEFAULT_CALENDAR_URL, None)
    }

    /// Queries the WRS-2 cells whose swath outline contains the point
    pub async fn query_cells(&self, latitude: f64, longitude: f64) -> Result<Vec<SwathCell>> {
        let geometry = format!("{},{}", longitude, latitude);
        let mut request = self.client.get(&self.wrs_query_url).query(&[
            ("geometry", geometry.as_str()),
            ("geometryType", "esriGeometryPoint"),
            ("inSR", "4326"),
            ("spatialRel", "esriSpatialRelIntersects"),
            ("outFields", "PATH,ROW"),
            ("returnGeometry", "false"),
            ("f", "json"),
        ]);
        if let Some(token) = &self.token {
            request = request.query(&[("token", token.as_str())]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "spatial query returned {}",
                response.status()
            )));
        }

        let collection: FeatureCollection = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("bad spatial query payload: {}", e)))?;

        Ok(collection
            .features
            .into_iter()
            .map(|f| SwathCell::new(f.attributes.path, f.attributes.row))
            .collect())
    }

    /// Fetches the raw cycle calendar document
    pub async fn fetch_calendar(&self) -> Result<RawCalendar> {
        let response = self.client.get(&self.calendar_url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "cycle calendar fetch returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("bad cycle calendar payload: {}", e)))
    }
}
