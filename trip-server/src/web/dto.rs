//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::data::PreferenceOptions;
use crate::domain::{Attraction, BusRoute, BusStop, FoodSpot, TrainStation};
use crate::lookup::Nearby;
use crate::recommend::{BusConnection, Preferences, ScoredAttraction, TripPlan};

/// Selectable preference values.
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub budgets: Vec<String>,
    pub time_buckets: Vec<String>,
    pub vibes: Vec<String>,
}

/// Request for ranked recommendations.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationsRequest {
    /// Budget level, e.g. "Low"
    pub budget: Option<String>,

    /// Time-needed bucket in hours, e.g. "2"
    pub time: Option<String>,

    /// Comma-separated vibe tags
    pub vibes: Option<String>,
}

/// A recommended attraction and its score.
#[derive(Debug, Serialize)]
pub struct RecommendationResult {
    pub score: u32,

    #[serde(flatten)]
    pub attraction: AttractionResult,
}

/// Response for recommendations.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Best first; empty when nothing scores above the threshold
    pub recommendations: Vec<RecommendationResult>,
}

/// Full attraction details.
#[derive(Debug, Serialize)]
pub struct AttractionResult {
    pub name: String,
    pub category: String,
    pub vibes: Vec<String>,
    pub budget_level: String,
    pub time_needed: String,
    pub description: String,
    pub best_time_to_visit: String,
    pub avg_expense: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Request for a trip plan.
#[derive(Debug, Default, Deserialize)]
pub struct TripRequest {
    /// Exact attraction name
    #[serde(default)]
    pub name: String,

    /// Food budget; empty means no filter matches
    #[serde(default)]
    pub budget: String,
}

/// Request for a manual name search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Case-insensitive name fragment
    #[serde(default)]
    pub q: String,

    /// Food budget for the composed trip
    #[serde(default)]
    pub budget: String,
}

/// Response for a manual search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub matches: Vec<AttractionResult>,

    /// Trip plan for the first match
    pub trip: Option<TripPlanResult>,
}

/// A trip plan.
#[derive(Debug, Serialize)]
pub struct TripPlanResult {
    pub start: AttractionResult,
    pub nearby_attractions: Vec<NearbyAttractionResult>,
    pub food: Vec<FoodResult>,

    /// True when no food spot matched the budget
    pub food_budget_fallback: bool,

    pub bus: Option<BusResult>,
    pub trains: Vec<TrainResult>,
}

/// An attraction near the starting point.
#[derive(Debug, Serialize)]
pub struct NearbyAttractionResult {
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

/// A food spot near the starting point.
#[derive(Debug, Serialize)]
pub struct FoodResult {
    pub name: String,
    pub cuisine: String,
    pub budget: String,
    pub rating: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

/// The nearest bus stop and its routes.
#[derive(Debug, Serialize)]
pub struct BusResult {
    pub stop_id: String,
    pub stop_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
    pub routes: Vec<RouteResult>,
}

/// A bus route serving a stop.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub route_id: String,
    pub bus_details: String,
    pub stops: Vec<String>,
}

/// A train station near the starting point.
#[derive(Debug, Serialize)]
pub struct TrainResult {
    pub name: String,
    pub line: Option<String>,
    pub network: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Conversion implementations

impl From<PreferenceOptions> for OptionsResponse {
    fn from(options: PreferenceOptions) -> Self {
        Self {
            budgets: options.budgets,
            time_buckets: options.time_buckets,
            vibes: options.vibes,
        }
    }
}

impl RecommendationsRequest {
    /// Convert into scoring preferences.
    ///
    /// Blank budget or time means "not selected".
    pub fn preferences(&self) -> Preferences {
        let vibes = self
            .vibes
            .as_deref()
            .map(crate::domain::parse_vibe_tags)
            .unwrap_or_default();

        Preferences::new(vibes, non_blank(&self.budget), non_blank(&self.time))
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl RecommendationResult {
    pub fn from_scored(scored: &ScoredAttraction<'_>) -> Self {
        Self {
            score: scored.score,
            attraction: AttractionResult::from_attraction(scored.attraction),
        }
    }
}

impl AttractionResult {
    pub fn from_attraction(attraction: &Attraction) -> Self {
        Self {
            name: attraction.name.clone(),
            category: attraction.category.clone(),
            vibes: attraction.vibes.clone(),
            budget_level: attraction.budget_level.clone(),
            time_needed: attraction.time_needed.clone(),
            description: attraction.description.clone(),
            best_time_to_visit: attraction.best_time_to_visit.clone(),
            avg_expense: attraction.avg_expense.clone(),
            latitude: attraction.location.latitude(),
            longitude: attraction.location.longitude(),
        }
    }
}

impl TripPlanResult {
    pub fn from_plan(plan: &TripPlan<'_>) -> Self {
        Self {
            start: AttractionResult::from_attraction(plan.start),
            nearby_attractions: plan
                .nearby_attractions
                .iter()
                .map(NearbyAttractionResult::from_nearby)
                .collect(),
            food: plan.food.spots.iter().map(FoodResult::from_nearby).collect(),
            food_budget_fallback: plan.food.budget_fallback,
            bus: plan.bus.as_ref().map(BusResult::from_connection),
            trains: plan.trains.iter().map(TrainResult::from_nearby).collect(),
        }
    }
}

impl NearbyAttractionResult {
    pub fn from_nearby(nearby: &Nearby<'_, Attraction>) -> Self {
        let a = nearby.item;
        Self {
            name: a.name.clone(),
            category: a.category.clone(),
            latitude: a.location.latitude(),
            longitude: a.location.longitude(),
            distance_km: nearby.distance_km,
        }
    }
}

impl FoodResult {
    pub fn from_nearby(nearby: &Nearby<'_, FoodSpot>) -> Self {
        let f = nearby.item;
        Self {
            name: f.name.clone(),
            cuisine: f.cuisine.clone(),
            budget: f.budget.clone(),
            rating: f.rating,
            latitude: f.location.latitude(),
            longitude: f.location.longitude(),
            distance_km: nearby.distance_km,
        }
    }
}

impl BusResult {
    pub fn from_connection(connection: &BusConnection<'_>) -> Self {
        let stop: &BusStop = connection.stop.item;
        Self {
            stop_id: stop.id.to_string(),
            stop_name: stop.name.clone(),
            latitude: stop.location.latitude(),
            longitude: stop.location.longitude(),
            distance_km: connection.stop.distance_km,
            routes: connection
                .routes
                .iter()
                .map(|r| RouteResult::from_route(r))
                .collect(),
        }
    }
}

impl RouteResult {
    pub fn from_route(route: &BusRoute) -> Self {
        Self {
            route_id: route.route_id.clone(),
            bus_details: route.bus_details.clone(),
            stops: route.stops.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TrainResult {
    pub fn from_nearby(nearby: &Nearby<'_, TrainStation>) -> Self {
        let t = nearby.item;
        Self {
            name: t.name.clone(),
            line: t.line.clone(),
            network: t.network.clone(),
            latitude: t.location.latitude(),
            longitude: t.location.longitude(),
            distance_km: nearby.distance_km,
        }
    }
}
