use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use swathfinder::api::{create_router, AppState};
use swathfinder::upstream::{DEFAULT_CALENDAR_URL, DEFAULT_WRS_QUERY_URL};
use swathfinder::{CoordinateIndex, UpstreamClient};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = env::var("SWATH_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()
        .expect("invalid SWATH_ADDR");
    let corners_csv =
        env::var("WRS_CORNERS_CSV").unwrap_or_else(|_| "wrs2_corner_points.csv".to_string());
    let wrs_query_url =
        env::var("WRS_QUERY_URL").unwrap_or_else(|_| DEFAULT_WRS_QUERY_URL.to_string());
    let calendar_url =
        env::var("CYCLE_CALENDAR_URL").unwrap_or_else(|_| DEFAULT_CALENDAR_URL.to_string());
    let token = env::var("WRS_QUERY_TOKEN").ok();

    // Startup is the one place a bad corner-point table may abort.
    let index = CoordinateIndex::from_csv_path(&corners_csv)
        .expect("failed to load WRS-2 corner-point table");
    info!(table = %corners_csv, cells = index.len(), "corner-point index loaded");

    let state = AppState::new(index, UpstreamClient::new(wrs_query_url, calendar_url, token));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind port");

    info!(%addr, "swathfinder API server listening");
    info!("  GET /api/lookup?latitude=<lat>&longitude=<lon>&mode=<cells|aggregate>");
    info!("  GET /api/today");

    axum::serve(listener, app).await.expect("Server error");
}
