//! Attraction recommendation and trip composition.
//!
//! This module turns user preferences into a ranked list of attractions and
//! builds a trip plan around the one the user picks.
//!
//! # Scoring
//!
//! An attraction earns points for every vibe tag it shares with the
//! selection, for an exact budget match and for an exact time bucket match.
//! Only attractions scoring above a threshold are recommended.
//!
//! # Trip plans
//!
//! A plan lists the nearest other attractions, food spots filtered by budget,
//! the nearest bus stop with its routes and the nearest train stations, all
//! measured from the chosen attraction.

mod config;
mod rank;
mod score;
mod search;
mod trip;

pub use config::RecommendConfig;
pub use rank::{ScoredAttraction, rank_attractions};
pub use score::{Preferences, score_attraction};
pub use search::search_attractions;
pub use trip::{BusConnection, TripPlan, compose_trip};
