//! Nearest-entity lookups by great-circle distance.
//!
//! Every lookup computes distances into fresh result values. The reference
//! records are only borrowed, so concurrent queries never observe each
//! other's distances.

use std::fmt;

use crate::domain::{Attraction, BusStop, Coordinate, FoodSpot, TrainStation};

/// Records that sit at a single coordinate.
pub trait Located {
    fn location(&self) -> Coordinate;
}

impl Located for Attraction {
    fn location(&self) -> Coordinate {
        self.location
    }
}

impl Located for FoodSpot {
    fn location(&self) -> Coordinate {
        self.location
    }
}

impl Located for BusStop {
    fn location(&self) -> Coordinate {
        self.location
    }
}

impl Located for TrainStation {
    fn location(&self) -> Coordinate {
        self.location
    }
}

/// A borrowed record and its distance from the query point.
pub struct Nearby<'a, T> {
    pub item: &'a T,
    pub distance_km: f64,
}

impl<T> Clone for Nearby<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Nearby<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Nearby<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nearby")
            .field("item", self.item)
            .field("distance_km", &self.distance_km)
            .finish()
    }
}

/// Pair each item with its distance from `from`, nearest first.
///
/// The sort is stable: items at equal distance keep their table order.
pub fn by_distance<'a, T: Located>(
    items: impl IntoIterator<Item = &'a T>,
    from: &Coordinate,
) -> Vec<Nearby<'a, T>> {
    let mut nearby: Vec<Nearby<'a, T>> = items
        .into_iter()
        .map(|item| Nearby {
            item,
            distance_km: from.distance_km(&item.location()),
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}

/// The bus stop closest to `from`.
///
/// Ties go to the stop that comes first in the table. Returns `None` only for
/// an empty slice.
pub fn nearest_stop<'a>(stops: &'a [BusStop], from: &Coordinate) -> Option<Nearby<'a, BusStop>> {
    let mut best: Option<Nearby<'a, BusStop>> = None;

    for stop in stops {
        let distance_km = from.distance_km(&stop.location);
        if best.is_none_or(|b| distance_km < b.distance_km) {
            best = Some(Nearby {
                item: stop,
                distance_km,
            });
        }
    }

    best
}

/// The `count` train stations closest to `from`, nearest first.
///
/// Returns exactly `min(count, trains.len())` stations.
pub fn nearest_trains<'a>(
    trains: &'a [TrainStation],
    from: &Coordinate,
    count: usize,
) -> Vec<Nearby<'a, TrainStation>> {
    let mut nearby = by_distance(trains, from);
    nearby.truncate(count);
    nearby
}

/// Up to `count` other attractions closest to `chosen`, nearest first.
///
/// Every attraction sharing the chosen one's name is excluded.
pub fn nearest_attractions<'a>(
    attractions: &'a [Attraction],
    chosen: &Attraction,
    count: usize,
) -> Vec<Nearby<'a, Attraction>> {
    let others = attractions.iter().filter(|a| a.name != chosen.name);
    let mut nearby = by_distance(others, &chosen.location);
    nearby.truncate(count);
    nearby
}

/// Food spots recommended around a point.
#[derive(Debug, Clone)]
pub struct FoodRecommendation<'a> {
    pub spots: Vec<Nearby<'a, FoodSpot>>,
    /// True when no spot matched the budget and the whole table was used.
    pub budget_fallback: bool,
}

/// Up to `count` food spots near `from` for the given budget.
///
/// Spots are filtered by case-insensitive budget match; if none match, the
/// unfiltered table is used instead. Ordering is by distance ascending, then
/// rating descending, then table order.
pub fn recommend_food<'a>(
    food: &'a [FoodSpot],
    from: &Coordinate,
    budget: &str,
    count: usize,
) -> FoodRecommendation<'a> {
    let matching: Vec<&FoodSpot> = food.iter().filter(|f| f.matches_budget(budget)).collect();
    let budget_fallback = matching.is_empty();
    let candidates = if budget_fallback {
        food.iter().collect()
    } else {
        matching
    };

    let mut spots: Vec<Nearby<'a, FoodSpot>> = candidates
        .into_iter()
        .map(|item| Nearby {
            item,
            distance_km: from.distance_km(&item.location),
        })
        .collect();

    spots.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| b.item.rating.total_cmp(&a.item.rating))
    });
    spots.truncate(count);

    FoodRecommendation {
        spots,
        budget_fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn stop(id: &str, lat: f64, lon: f64) -> BusStop {
        BusStop {
            id: StopId::parse(id).unwrap(),
            name: format!("Stop {id}"),
            location: coord(lat, lon),
        }
    }

    fn station(name: &str, lat: f64, lon: f64) -> TrainStation {
        TrainStation {
            name: name.to_string(),
            location: coord(lat, lon),
            line: None,
            network: "Suburban".to_string(),
        }
    }

    fn attraction(name: &str, lat: f64, lon: f64) -> Attraction {
        Attraction::new(name, "Heritage", "Low", "2", coord(lat, lon))
    }

    fn food(name: &str, budget: &str, rating: f64, lat: f64, lon: f64) -> FoodSpot {
        FoodSpot::new(name, "South Indian", budget, rating, coord(lat, lon))
    }

    fn names<T>(nearby: &[Nearby<'_, T>], name: impl Fn(&T) -> String) -> Vec<String> {
        nearby.iter().map(|n| name(n.item)).collect()
    }

    #[test]
    fn nearest_stop_picks_minimum() {
        let stops = vec![
            stop("1", 13.10, 80.30),
            stop("2", 13.01, 80.20),
            stop("3", 13.20, 80.40),
        ];
        let found = nearest_stop(&stops, &coord(13.0, 80.2)).unwrap();
        assert_eq!(found.item.id.as_str(), "2");
        assert!(found.distance_km < 2.0);
    }

    #[test]
    fn nearest_stop_tie_goes_to_first() {
        let stops = vec![stop("A", 13.0, 80.3), stop("B", 13.0, 80.3)];
        let found = nearest_stop(&stops, &coord(13.0, 80.2)).unwrap();
        assert_eq!(found.item.id.as_str(), "A");
    }

    #[test]
    fn nearest_stop_empty_is_none() {
        assert!(nearest_stop(&[], &coord(13.0, 80.2)).is_none());
    }

    #[test]
    fn nearest_trains_sorted_and_truncated() {
        let trains = vec![
            station("Far", 13.5, 80.5),
            station("Near", 13.01, 80.2),
            station("Mid", 13.1, 80.3),
            station("Farther", 14.0, 81.0),
        ];
        let found = nearest_trains(&trains, &coord(13.0, 80.2), 3);
        assert_eq!(names(&found, |t| t.name.clone()), vec!["Near", "Mid", "Far"]);
    }

    #[test]
    fn nearest_trains_small_table() {
        let trains = vec![station("Only", 13.0, 80.2)];
        assert_eq!(nearest_trains(&trains, &coord(13.0, 80.2), 3).len(), 1);
        assert!(nearest_trains(&trains, &coord(13.0, 80.2), 0).is_empty());
    }

    #[test]
    fn nearest_attractions_excludes_chosen_by_name() {
        let attractions = vec![
            attraction("Home", 13.0, 80.2),
            attraction("A", 13.01, 80.2),
            attraction("Home", 13.001, 80.2),
            attraction("B", 13.02, 80.2),
            attraction("C", 13.03, 80.2),
            attraction("D", 13.04, 80.2),
        ];
        let chosen = attractions[0].clone();
        let found = nearest_attractions(&attractions, &chosen, 3);
        assert_eq!(names(&found, |a| a.name.clone()), vec!["A", "B", "C"]);
    }

    #[test]
    fn equal_distance_keeps_table_order() {
        let attractions = vec![
            attraction("Home", 13.0, 80.5),
            attraction("East", 13.0, 80.75),
            attraction("West", 13.0, 80.25),
        ];
        let chosen = attractions[0].clone();
        let found = nearest_attractions(&attractions, &chosen, 3);
        assert_eq!(names(&found, |a| a.name.clone()), vec!["East", "West"]);
    }

    #[test]
    fn food_filtered_by_budget_case_insensitive() {
        let spots = vec![
            food("Pricey", "High", 4.9, 13.0, 80.2),
            food("Cheap Far", "low", 4.0, 13.1, 80.2),
            food("Cheap Near", "Low", 3.5, 13.01, 80.2),
        ];
        let rec = recommend_food(&spots, &coord(13.0, 80.2), "LOW", 3);
        assert!(!rec.budget_fallback);
        assert_eq!(names(&rec.spots, |f| f.name.clone()), vec!["Cheap Near", "Cheap Far"]);
    }

    #[test]
    fn food_falls_back_when_budget_matches_nothing() {
        let spots = vec![
            food("One", "Low", 4.0, 13.02, 80.2),
            food("Two", "Medium", 4.0, 13.01, 80.2),
        ];
        let rec = recommend_food(&spots, &coord(13.0, 80.2), "Luxury", 3);
        assert!(rec.budget_fallback);
        assert_eq!(names(&rec.spots, |f| f.name.clone()), vec!["Two", "One"]);
    }

    #[test]
    fn food_equal_distance_prefers_rating() {
        let spots = vec![
            food("Okay", "Low", 3.9, 13.01, 80.2),
            food("Great", "Low", 4.8, 13.01, 80.2),
            food("Good", "Low", 4.2, 13.01, 80.2),
            food("Far", "Low", 5.0, 13.2, 80.2),
        ];
        let rec = recommend_food(&spots, &coord(13.0, 80.2), "Low", 3);
        assert_eq!(names(&rec.spots, |f| f.name.clone()), vec!["Great", "Good", "Okay"]);
    }

    #[test]
    fn lookups_do_not_touch_tables() {
        let stops = vec![stop("1", 13.1, 80.3)];
        let before = stops.clone();
        let _ = nearest_stop(&stops, &coord(13.0, 80.2));
        let _ = nearest_stop(&stops, &coord(12.0, 79.0));
        assert_eq!(stops, before);
    }
}
