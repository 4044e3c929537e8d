//! Request construction.
//!
//! Turns user parameters into endpoint URLs. Identifiers are forwarded
//! verbatim; the remote API is left to reject malformed ones.

use std::fmt;

use tracing::debug;

use super::error::QueryError;
use super::types::non_empty;

/// Bus operator code used in route lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Company {
    /// Citybus Limited.
    Ctb,
    /// New World First Bus.
    Nwfb,
}

impl Company {
    /// Returns the operator code as it appears in API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Company::Ctb => "ctb",
            Company::Nwfb => "nwfb",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for a single ETA lookup.
///
/// At least one of `route` or `stop_id` must be set for a request to be
/// built. When both are set the stop lookup wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtaQuery {
    pub route: Option<String>,
    pub stop_id: Option<String>,
    pub company: Company,
}

impl EtaQuery {
    /// Create a query with no target for the given operator.
    pub fn new(company: Company) -> Self {
        Self {
            route: None,
            stop_id: None,
            company,
        }
    }

    /// Look up a route.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Look up a stop.
    pub fn with_stop_id(mut self, stop_id: impl Into<String>) -> Self {
        self.stop_id = Some(stop_id.into());
        self
    }

    /// Build the endpoint URL against `base_url`.
    ///
    /// Empty identifiers count as absent.
    pub fn url(&self, base_url: &str) -> Result<String, QueryError> {
        let base = base_url.trim_end_matches('/');

        let url = if let Some(stop_id) = non_empty(&self.stop_id) {
            format!("{base}/eta/stop/{stop_id}")
        } else if let Some(route) = non_empty(&self.route) {
            format!("{base}/eta/route/{}/{route}", self.company)
        } else {
            return Err(QueryError::MissingTarget);
        };

        debug!(%url, "built ETA request");
        Ok(url)
    }

    /// Build the URLs needed to list the stops of the query's route.
    ///
    /// Only the route and company are used; a stop ID is ignored.
    pub fn stop_list_urls(&self, base_url: &str) -> Result<StopListUrls, QueryError> {
        let base = base_url.trim_end_matches('/');
        let route = non_empty(&self.route).ok_or(QueryError::MissingRoute)?;

        let urls = StopListUrls {
            route: format!("{base}/route/{}/{route}", self.company),
            route_stops: format!("{base}/route-stop/{}/{route}", self.company),
            stops: format!("{base}/stop"),
        };

        debug!(?urls, "built stop list requests");
        Ok(urls)
    }
}

/// Endpoints consulted when listing a route's stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopListUrls {
    /// Route summary, used to check the route exists.
    pub route: String,
    /// Stops served by the route, in calling order.
    pub route_stops: String,
    /// Directory of stop names.
    pub stops: String,
}
