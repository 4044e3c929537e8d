//! Citybus HTTP client.
//!
//! Issues plain GETs with transport-default timeouts and no retries. An
//! ETA lookup is a single request; listing a route's stops takes up to
//! three.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::EtaError;
use super::query::StopListUrls;
use super::stops::{RouteStops, join_stop_names};
use super::types::{EtaResponse, RouteInfo, RouteResponse, RouteStopResponse, StopResponse};

/// Default base URL for the Citybus/NWFB real-time API.
pub const DEFAULT_BASE_URL: &str = "https://rt.data.gov.hk/v2/transport/citybus";

/// Longest error body kept in an [`EtaError`].
const MAX_ERROR_BODY: usize = 500;

/// Configuration for the ETA client.
#[derive(Debug, Clone)]
pub struct EtaConfig {
    /// Base URL for the API (defaults to the public host)
    pub base_url: String,
}

impl EtaConfig {
    /// Create a new config pointing at the public API host.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for EtaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Citybus ETA and route endpoints.
#[derive(Debug, Clone)]
pub struct EtaClient {
    http: reqwest::Client,
    base_url: String,
}

impl EtaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: EtaConfig) -> Result<Self, EtaError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Base URL requests are built against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and decode the ETA envelope at `url`.
    pub async fn fetch(&self, url: &str) -> Result<EtaResponse, EtaError> {
        let eta: EtaResponse = self.get_json(url).await?;
        debug!(records = eta.records().len(), "decoded ETA response");
        Ok(eta)
    }

    /// List the stops of `route`, named from the stop directory.
    ///
    /// Fails with [`EtaError::RouteNotFound`] when the operator does not
    /// know the route. The stop directory is only fetched when the route
    /// has stops.
    pub async fn fetch_route_stops(
        &self,
        urls: &StopListUrls,
        route: &str,
    ) -> Result<RouteStops, EtaError> {
        let info: RouteInfo = self
            .get_json::<RouteResponse>(&urls.route)
            .await?
            .data
            .filter(RouteInfo::exists)
            .ok_or_else(|| EtaError::RouteNotFound {
                route: route.to_string(),
            })?;

        let route_stops = self
            .get_json::<RouteStopResponse>(&urls.route_stops)
            .await?
            .data
            .unwrap_or_default();

        if route_stops.is_empty() {
            return Ok(RouteStops {
                route: info,
                stops: Vec::new(),
            });
        }

        let directory = self
            .get_json::<StopResponse>(&urls.stops)
            .await?
            .data
            .unwrap_or_default();
        debug!(
            stops = route_stops.len(),
            directory = directory.len(),
            "joining stop names"
        );

        Ok(RouteStops {
            route: info,
            stops: join_stop_names(route_stops, &directory),
        })
    }

    /// GET `url` and decode its JSON body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, EtaError> {
        let response = self.http.get(url).send().await.inspect_err(|e| {
            debug!(%url, error = %e, "request failed");
        })?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EtaError::Api {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| EtaError::Json {
            message: e.to_string(),
        })
    }
}
