//! HTTP API surface

use std::sync::Arc;

use crate::coords::CoordinateIndex;
use crate::upstream::UpstreamClient;

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;

/// Shared request-handling state: the immutable corner-point index and
/// the upstream clients
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<CoordinateIndex>,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(index: CoordinateIndex, upstream: UpstreamClient) -> Self {
        Self {
            index: Arc::new(index),
            upstream: Arc::new(upstream),
        }
    }
}
