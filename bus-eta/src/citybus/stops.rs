//! Route stop listings with stop names filled in.

use std::collections::HashMap;

use super::types::{PLACEHOLDER, RouteInfo, RouteStop, StopInfo, non_empty};

/// Shown when the stop directory has no English name for a stop.
pub const UNKNOWN_NAME_EN: &str = "Unknown";

/// Shown when the stop directory has no Chinese name for a stop.
pub const UNKNOWN_NAME_TC: &str = "未知";

/// The stops served by one route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteStops {
    pub route: RouteInfo,
    pub stops: Vec<NamedStop>,
}

/// A stop on a route together with its names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedStop {
    pub seq: Option<String>,
    pub stop: Option<String>,
    pub dir: Option<String>,
    pub name_en: Option<String>,
    pub name_tc: Option<String>,
}

impl NamedStop {
    pub fn seq(&self) -> &str {
        non_empty(&self.seq).unwrap_or(PLACEHOLDER)
    }

    pub fn stop(&self) -> &str {
        non_empty(&self.stop).unwrap_or(PLACEHOLDER)
    }

    pub fn dir(&self) -> &str {
        non_empty(&self.dir).unwrap_or(PLACEHOLDER)
    }

    pub fn name_en(&self) -> &str {
        non_empty(&self.name_en).unwrap_or(UNKNOWN_NAME_EN)
    }

    pub fn name_tc(&self) -> &str {
        non_empty(&self.name_tc).unwrap_or(UNKNOWN_NAME_TC)
    }
}

/// Attach names from `directory` to each of `route_stops`, keeping route order.
pub fn join_stop_names(route_stops: Vec<RouteStop>, directory: &[StopInfo]) -> Vec<NamedStop> {
    let names: HashMap<&str, &StopInfo> = directory
        .iter()
        .filter_map(|info| Some((info.stop.as_deref()?, info)))
        .collect();

    route_stops
        .into_iter()
        .map(|rs| {
            let info = rs.stop.as_deref().and_then(|id| names.get(id));
            NamedStop {
                name_en: info.and_then(|i| i.name_en.clone()),
                name_tc: info.and_then(|i| i.name_tc.clone()),
                seq: rs.seq,
                stop: rs.stop,
                dir: rs.dir,
            }
        })
        .collect()
}
