//! Recommendation configuration.

use crate::lookup::RouteMatchMode;

/// Tunable parameters for scoring and trip composition.
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Points awarded per matching vibe tag, budget or time bucket.
    pub match_points: u32,

    /// Attractions must score strictly above this to be recommended.
    pub min_score_exclusive: u32,

    /// Nearby attractions listed in a trip plan.
    pub nearby_attractions: usize,

    /// Food spots listed in a trip plan.
    pub food_spots: usize,

    /// Train stations listed in a trip plan.
    pub train_stations: usize,

    /// How bus routes are matched to the nearest stop.
    pub route_match: RouteMatchMode,
}

impl RecommendConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        match_points: u32,
        min_score_exclusive: u32,
        nearby_attractions: usize,
        food_spots: usize,
        train_stations: usize,
        route_match: RouteMatchMode,
    ) -> Self {
        Self {
            match_points,
            min_score_exclusive,
            nearby_attractions,
            food_spots,
            train_stations,
            route_match,
        }
    }

    /// Returns a copy using the given route match mode.
    pub fn with_route_match(mut self, route_match: RouteMatchMode) -> Self {
        self.route_match = route_match;
        self
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            match_points: 2,
            min_score_exclusive: 2,
            nearby_attractions: 3,
            food_spots: 3,
            train_stations: 3,
            route_match: RouteMatchMode::Structural,
        }
    }
}
