//! Preference scoring for attractions.

use std::collections::BTreeSet;

use crate::domain::Attraction;

/// What the user is looking for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    /// Selected vibe tags (case-sensitive).
    pub vibes: BTreeSet<String>,
    /// Selected budget level, compared exactly.
    pub budget: Option<String>,
    /// Selected time-needed bucket, compared exactly.
    pub time: Option<String>,
}

impl Preferences {
    pub fn new<I, S>(vibes: I, budget: Option<String>, time: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vibes: vibes.into_iter().map(Into::into).collect(),
            budget,
            time,
        }
    }
}

/// Score an attraction against the user's preferences.
///
/// Awards `points` for every distinct vibe tag the attraction shares with the
/// selection, plus `points` each for an exact budget match and an exact time
/// bucket match. Unset budget or time never match. The sum saturates at
/// `u32::MAX`.
pub fn score_attraction(attraction: &Attraction, prefs: &Preferences, points: u32) -> u32 {
    let tags: BTreeSet<&str> = attraction.vibes.iter().map(String::as_str).collect();
    let shared = tags
        .iter()
        .filter(|tag| prefs.vibes.contains(**tag))
        .count();

    let shared = u32::try_from(shared).unwrap_or(u32::MAX);
    let mut score = shared.saturating_mul(points);

    if prefs.budget.as_deref() == Some(attraction.budget_level.as_str()) {
        score = score.saturating_add(points);
    }
    if prefs.time.as_deref() == Some(attraction.time_needed.as_str()) {
        score = score.saturating_add(points);
    }

    score
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Coordinate;
    use proptest::prelude::*;

    const TAGS: [&str; 6] = ["Beach", "Heritage", "Culture", "Nature", "Shopping", "Spiritual"];

    fn tag_subset() -> impl Strategy<Value = Vec<&'static str>> {
        proptest::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len())
    }

    proptest! {
        /// Adding selected vibes never lowers the score.
        #[test]
        fn monotonic_in_shared_vibes(
            own in tag_subset(),
            selected in tag_subset(),
            extra in tag_subset(),
        ) {
            let here = Coordinate::new(13.0, 80.0).unwrap();
            let site = Attraction::new("Site", own.join(","), "Low", "2", here);

            let base = Preferences::new(selected.iter().copied(), None, None);
            let wider = Preferences::new(selected.iter().chain(extra.iter()).copied(), None, None);

            prop_assert!(score_attraction(&site, &wider, 2) >= score_attraction(&site, &base, 2));
        }

        /// Vibe contribution is exactly twice the intersection size.
        #[test]
        fn vibe_score_is_twice_intersection(own in tag_subset(), selected in tag_subset()) {
            let here = Coordinate::new(13.0, 80.0).unwrap();
            let site = Attraction::new("Site", own.join(","), "Low", "2", here);
            let shared = own.iter().filter(|t| selected.contains(*t)).count() as u32;

            let prefs = Preferences::new(selected.iter().copied(), None, None);
            prop_assert_eq!(score_attraction(&site, &prefs, 2), shared * 2);
        }
    }
}
