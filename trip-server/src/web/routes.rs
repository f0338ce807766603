//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::recommend::{compose_trip, rank_attractions, search_attractions};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/options", get(options))
        .route("/api/recommendations", get(recommendations))
        .route("/api/attractions/:name", get(attraction_details))
        .route("/api/trip", get(trip_plan))
        .route("/api/search", get(search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Budgets, time buckets and vibes users can pick from.
async fn options(State(state): State<AppState>) -> Json<OptionsResponse> {
    Json(state.tables.options().into())
}

/// Attractions ranked against the requested preferences.
async fn recommendations(
    State(state): State<AppState>,
    Query(req): Query<RecommendationsRequest>,
) -> Json<RecommendationsResponse> {
    let prefs = req.preferences();
    let ranked = rank_attractions(state.tables.attractions(), &prefs, &state.config);

    let recommendations = ranked
        .iter()
        .map(RecommendationResult::from_scored)
        .collect();

    Json(RecommendationsResponse { recommendations })
}

/// Details of one attraction by exact name.
async fn attraction_details(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<AttractionResult>, AppError> {
    let attraction = state
        .tables
        .find_attraction(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown attraction: {name}"),
        })?;

    Ok(Json(AttractionResult::from_attraction(attraction)))
}

/// Trip plan around an attraction chosen by exact name.
async fn trip_plan(
    State(state): State<AppState>,
    Query(req): Query<TripRequest>,
) -> Result<Json<TripPlanResult>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Missing attraction name".to_string(),
        });
    }

    let chosen = state
        .tables
        .find_attraction(&req.name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("Unknown attraction: {}", req.name),
        })?;

    let plan = compose_trip(&state.tables, chosen, &req.budget, &state.config);
    Ok(Json(TripPlanResult::from_plan(&plan)))
}

/// Name search, with a trip plan for the first match.
async fn search(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Json<SearchResponse> {
    let found = search_attractions(state.tables.attractions(), &req.q);

    let trip = found.first().map(|chosen| {
        let plan = compose_trip(&state.tables, chosen, &req.budget, &state.config);
        TripPlanResult::from_plan(&plan)
    });

    let matches = found
        .iter()
        .map(|a| AttractionResult::from_attraction(a))
        .collect();

    Json(SearchResponse { matches, trip })
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceTables;
    use crate::domain::{
        Attraction, BusRoute, BusStop, Coordinate, FoodSpot, StopId, TrainStation,
    };
    use crate::recommend::RecommendConfig;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn site(
        name: &str,
        category: &str,
        budget: &str,
        time: &str,
        lat: f64,
        lon: f64,
    ) -> Attraction {
        Attraction::new(name, category, budget, time, coord(lat, lon))
    }

    fn state() -> AppState {
        let tables = ReferenceTables::new(
            vec![
                site("Marina Beach", "Beach,Nature", "Low", "2", 13.050, 80.282),
                site("Elliot's Beach", "Beach", "Low", "1", 13.000, 80.272),
                site("Fort St. George", "Heritage", "Low", "2", 13.080, 80.287),
                site("Phoenix Mall", "Shopping", "High", "3", 12.991, 80.216),
            ],
            vec![
                FoodSpot::new("Ratna Cafe", "Tiffin", "Low", 4.3, coord(13.054, 80.276)),
                FoodSpot::new("Buhari", "Mughlai", "Medium", 4.1, coord(13.064, 80.264)),
            ],
            vec![
                BusStop {
                    id: StopId::parse("12").unwrap(),
                    name: "Light House".to_string(),
                    location: coord(13.049, 80.281),
                },
                BusStop {
                    id: StopId::parse("112").unwrap(),
                    name: "Mylapore".to_string(),
                    location: coord(13.033, 80.268),
                },
            ],
            vec![
                BusRoute::new("R1", "21G Broadway - Tambaram", "12,40,41"),
                BusRoute::new("R2", "12B Vadapalani - Mylapore", "112,7"),
            ],
            vec![TrainStation {
                name: "Thirumayilai".to_string(),
                location: coord(13.032, 80.268),
                line: Some("MRTS".to_string()),
                network: "MRTS".to_string(),
            }],
        )
        .unwrap();

        AppState::new(tables, RecommendConfig::default())
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn options_lists_values() {
        let Json(resp) = options(State(state())).await;

        assert_eq!(resp.budgets, vec!["Low", "High"]);
        assert_eq!(resp.time_buckets, vec!["2", "1", "3"]);
        assert_eq!(resp.vibes, vec!["Beach", "Heritage", "Nature", "Shopping"]);
    }

    #[tokio::test]
    async fn recommendations_ranked() {
        let req = RecommendationsRequest {
            budget: Some("Low".to_string()),
            time: Some("2".to_string()),
            vibes: Some("Beach".to_string()),
        };
        let Json(resp) = recommendations(State(state()), Query(req)).await;

        let names: Vec<&str> = resp
            .recommendations
            .iter()
            .map(|r| r.attraction.name.as_str())
            .collect();
        assert_eq!(names, vec!["Marina Beach", "Elliot's Beach", "Fort St. George"]);
        assert_eq!(resp.recommendations[0].score, 6);
    }

    #[tokio::test]
    async fn recommendations_empty_when_nothing_matches() {
        let req = RecommendationsRequest {
            budget: Some("Medium".to_string()),
            time: Some("5".to_string()),
            vibes: Some("Wildlife".to_string()),
        };
        let Json(resp) = recommendations(State(state()), Query(req)).await;
        assert!(resp.recommendations.is_empty());
    }

    #[tokio::test]
    async fn attraction_details_found() {
        let Json(resp) = attraction_details(State(state()), Path("Phoenix Mall".to_string()))
            .await
            .unwrap();
        assert_eq!(resp.budget_level, "High");
    }

    #[tokio::test]
    async fn attraction_details_unknown_is_not_found() {
        let err = attraction_details(State(state()), Path("Zoo".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn trip_plan_for_known_attraction() {
        let req = TripRequest {
            name: "Marina Beach".to_string(),
            budget: "low".to_string(),
        };
        let Json(plan) = trip_plan(State(state()), Query(req)).await.unwrap();

        assert_eq!(plan.start.name, "Marina Beach");
        assert_eq!(plan.nearby_attractions.len(), 3);
        assert!(plan.nearby_attractions.iter().all(|a| a.name != "Marina Beach"));
        assert!(!plan.food_budget_fallback);
        assert_eq!(plan.food.len(), 1);

        let bus = plan.bus.unwrap();
        assert_eq!(bus.stop_id, "12");
        assert_eq!(bus.routes.len(), 1);
        assert_eq!(plan.trains.len(), 1);
    }

    #[tokio::test]
    async fn trip_plan_empty_budget_falls_back() {
        let req = TripRequest {
            name: "Marina Beach".to_string(),
            budget: String::new(),
        };
        let Json(plan) = trip_plan(State(state()), Query(req)).await.unwrap();
        assert!(plan.food_budget_fallback);
        assert_eq!(plan.food.len(), 2);
    }

    #[tokio::test]
    async fn trip_plan_errors() {
        let missing = trip_plan(State(state()), Query(TripRequest::default()))
            .await
            .unwrap_err();
        assert!(matches!(missing, AppError::BadRequest { .. }));

        let req = TripRequest {
            name: "marina beach".to_string(),
            budget: "Low".to_string(),
        };
        let unknown = trip_plan(State(state()), Query(req)).await.unwrap_err();
        assert!(matches!(unknown, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn search_plans_first_match() {
        let req = SearchRequest {
            q: "beach".to_string(),
            budget: "Low".to_string(),
        };
        let Json(resp) = search(State(state()), Query(req)).await;

        let names: Vec<&str> = resp.matches.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Marina Beach", "Elliot's Beach"]);
        assert_eq!(resp.trip.unwrap().start.name, "Marina Beach");
    }

    #[tokio::test]
    async fn search_without_matches_has_no_trip() {
        let Json(resp) = search(State(state()), Query(SearchRequest::default())).await;
        assert!(resp.matches.is_empty());
        assert!(resp.trip.is_none());
    }

    #[test]
    fn error_status_codes() {
        let cases = [
            (
                AppError::BadRequest {
                    message: "bad".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::NotFound {
                    message: "missing".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }
}
