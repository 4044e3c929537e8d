//! Citybus / NWFB real-time ETA client.
//!
//! This module provides an HTTP client for the Hong Kong government's
//! Citybus real-time arrival API, plus the route and stop endpoints
//! needed to discover stop IDs.
//!
//! Key characteristics of the API:
//! - ETA lookups are either by stop ID or by operator + route
//! - Unknown routes come back as `{"data": {}}` rather than a 404
//! - Every field of an ETA record may be missing
//! - ETA timestamps are ISO 8601 in Hong Kong local time (UTC+8)

mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod query;
mod stops;
mod types;

pub use client::{DEFAULT_BASE_URL, EtaClient, EtaConfig};
pub use error::{EtaError, QueryError};
pub use query::{Company, EtaQuery, StopListUrls};
pub use stops::{NamedStop, RouteStops, UNKNOWN_NAME_EN, UNKNOWN_NAME_TC, join_stop_names};
pub use types::{
    EtaRecord, EtaResponse, PLACEHOLDER, RouteInfo, RouteResponse, RouteStop, RouteStopResponse,
    StopInfo, StopResponse,
};
