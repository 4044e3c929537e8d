//! One lookup from parameters to decoded response.

use tracing::debug;

use crate::citybus::{EtaClient, EtaError, EtaQuery, EtaResponse, QueryError, RouteStops};

/// Why a lookup produced no data.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The query named neither a route nor a stop; nothing was sent.
    #[error(transparent)]
    Usage(#[from] QueryError),

    /// The request was sent but failed.
    #[error(transparent)]
    Api(#[from] EtaError),
}

/// Build the request for `query` and fetch it with `client`.
pub async fn lookup(client: &EtaClient, query: &EtaQuery) -> Result<EtaResponse, LookupError> {
    let url = query.url(client.base_url())?;
    let response = client.fetch(&url).await?;
    debug!(records = response.records().len(), "lookup complete");
    Ok(response)
}

/// List the stops of the query's route, for finding a stop ID.
pub async fn list_stops(client: &EtaClient, query: &EtaQuery) -> Result<RouteStops, LookupError> {
    let urls = query.stop_list_urls(client.base_url())?;
    let route = query.route.as_deref().unwrap_or_default();
    let listing = client.fetch_route_stops(&urls, route).await?;
    debug!(stops = listing.stops.len(), "stop listing complete");
    Ok(listing)
}
