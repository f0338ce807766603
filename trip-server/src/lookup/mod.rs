//! Geographic and transit lookups around a point.
//!
//! Nearest stop, nearest train stations, nearby attractions and food, and
//! the join from a bus stop to the routes that serve it.

mod nearest;
mod routes;

pub use nearest::{
    FoodRecommendation, Located, Nearby, by_distance, nearest_attractions, nearest_stop,
    nearest_trains, recommend_food,
};
pub use routes::{RouteMatchMode, UnknownRouteMatchMode, routes_for_stop};
