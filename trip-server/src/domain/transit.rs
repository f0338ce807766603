//! Bus stops, bus routes and train stations.

use super::{Coordinate, StopId, parse_stop_sequence};

/// A bus stop.
#[derive(Debug, Clone, PartialEq)]
pub struct BusStop {
    pub id: StopId,
    pub name: String,
    pub location: Coordinate,
}

/// A bus route with its ordered stop sequence.
///
/// Both the raw sequence text and the parsed ids are kept: structural
/// matching uses `stops`, legacy substring matching uses `stop_sequence`.
#[derive(Debug, Clone, PartialEq)]
pub struct BusRoute {
    pub route_id: String,
    /// Human-readable bus service description.
    pub bus_details: String,
    /// The stop sequence exactly as stored in the route table.
    pub stop_sequence: String,
    pub stops: Vec<StopId>,
}

impl BusRoute {
    /// Create a route, parsing its stop sequence.
    pub fn new(
        route_id: impl Into<String>,
        bus_details: impl Into<String>,
        stop_sequence: impl Into<String>,
    ) -> Self {
        let stop_sequence = stop_sequence.into();
        let stops = parse_stop_sequence(&stop_sequence);

        Self {
            route_id: route_id.into(),
            bus_details: bus_details.into(),
            stop_sequence,
            stops,
        }
    }

    /// Whether the parsed stop list contains `stop` exactly.
    pub fn serves(&self, stop: &StopId) -> bool {
        self.stops.contains(stop)
    }

    /// Whether `stop` appears anywhere in the raw sequence text.
    ///
    /// Matches id "12" inside "112"; kept only for legacy compatibility.
    pub fn mentions(&self, stop: &StopId) -> bool {
        self.stop_sequence.contains(stop.as_str())
    }
}

/// A suburban/metro railway station.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainStation {
    pub name: String,
    pub location: Coordinate,
    pub line: Option<String>,
    /// Network or zone name.
    pub network: String,
}
