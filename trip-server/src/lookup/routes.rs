//! Bus route to stop matching.

use std::fmt;
use std::str::FromStr;

use crate::domain::{BusRoute, StopId};

/// How a route is judged to serve a stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RouteMatchMode {
    /// The stop id is one of the route's parsed stop ids.
    #[default]
    Structural,

    /// The stop id occurs anywhere in the route's raw stop-sequence text.
    ///
    /// Legacy behaviour: id "12" also matches routes through stop "112".
    Substring,
}

/// Error returned when parsing an unknown match mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route match mode '{0}' (expected 'structural' or 'substring')")]
pub struct UnknownRouteMatchMode(String);

impl FromStr for RouteMatchMode {
    type Err = UnknownRouteMatchMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structural" => Ok(RouteMatchMode::Structural),
            "substring" | "legacy" => Ok(RouteMatchMode::Substring),
            _ => Err(UnknownRouteMatchMode(s.to_string())),
        }
    }
}

impl fmt::Display for RouteMatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteMatchMode::Structural => f.write_str("structural"),
            RouteMatchMode::Substring => f.write_str("substring"),
        }
    }
}

/// Every route serving `stop`, in table order.
pub fn routes_for_stop<'a>(
    routes: &'a [BusRoute],
    stop: &StopId,
    mode: RouteMatchMode,
) -> Vec<&'a BusRoute> {
    routes
        .iter()
        .filter(|route| match mode {
            RouteMatchMode::Structural => route.serves(stop),
            RouteMatchMode::Substring => route.mentions(stop),
        })
        .collect()
}
