//! Attraction ranking.
//!
//! Scores every attraction against the user's preferences and keeps the
//! ones worth showing, best first.

use crate::domain::Attraction;

use super::config::RecommendConfig;
use super::score::{Preferences, score_attraction};

/// An attraction with the score it earned for one set of preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredAttraction<'a> {
    pub attraction: &'a Attraction,
    pub score: u32,
}

/// Rank attractions by preference score.
///
/// Only attractions scoring strictly above `config.min_score_exclusive` are
/// kept. The result is sorted by score descending; the sort is stable, so
/// attractions with equal scores keep their table order.
pub fn rank_attractions<'a>(
    attractions: &'a [Attraction],
    prefs: &Preferences,
    config: &RecommendConfig,
) -> Vec<ScoredAttraction<'a>> {
    let mut ranked: Vec<ScoredAttraction<'a>> = attractions
        .iter()
        .map(|attraction| ScoredAttraction {
            attraction,
            score: score_attraction(attraction, prefs, config.match_points),
        })
        .filter(|scored| scored.score > config.min_score_exclusive)
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        candidates = attractions.len(),
        matches = ranked.len(),
        "ranked attractions"
    );

    ranked
}
