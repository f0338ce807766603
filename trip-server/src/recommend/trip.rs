//! Trip composition around a chosen attraction.

use crate::data::ReferenceTables;
use crate::domain::{Attraction, BusRoute, BusStop, TrainStation};
use crate::lookup::{
    FoodRecommendation, Nearby, nearest_attractions, nearest_stop, nearest_trains,
    recommend_food, routes_for_stop,
};

use super::config::RecommendConfig;

/// The nearest bus stop and the routes that serve it.
#[derive(Debug, Clone)]
pub struct BusConnection<'a> {
    pub stop: Nearby<'a, BusStop>,
    /// Empty when no route serves the stop.
    pub routes: Vec<&'a BusRoute>,
}

/// A one-stop itinerary built around a starting attraction.
#[derive(Debug, Clone)]
pub struct TripPlan<'a> {
    pub start: &'a Attraction,
    pub nearby_attractions: Vec<Nearby<'a, Attraction>>,
    pub food: FoodRecommendation<'a>,
    /// `None` only if the stop table is empty.
    pub bus: Option<BusConnection<'a>>,
    pub trains: Vec<Nearby<'a, TrainStation>>,
}

/// Compose a trip plan starting at `chosen`.
///
/// Every distance is measured from the chosen attraction. Food is filtered
/// by `budget`, falling back to the whole food table when nothing matches.
pub fn compose_trip<'a>(
    tables: &'a ReferenceTables,
    chosen: &'a Attraction,
    budget: &str,
    config: &RecommendConfig,
) -> TripPlan<'a> {
    let from = chosen.location;

    let nearby_attractions =
        nearest_attractions(tables.attractions(), chosen, config.nearby_attractions);
    let food = recommend_food(tables.food(), &from, budget, config.food_spots);
    let bus = nearest_stop(tables.stops(), &from).map(|stop| BusConnection {
        stop,
        routes: routes_for_stop(tables.routes(), &stop.item.id, config.route_match),
    });
    let trains = nearest_trains(tables.trains(), &from, config.train_stations);

    tracing::debug!(
        attraction = %chosen.name,
        budget,
        food_fallback = food.budget_fallback,
        stop = bus.as_ref().map(|b| b.stop.item.id.as_str()),
        routes = bus.as_ref().map_or(0, |b| b.routes.len()),
        "composed trip"
    );

    TripPlan {
        start: chosen,
        nearby_attractions,
        food,
        bus,
        trains,
    }
}
