//! Web layer for the trip recommender.
//!
//! Provides JSON endpoints for preference options, recommendations,
//! attraction details, trip plans and name search.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
