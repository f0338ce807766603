//! Manual attraction search by name.

use crate::domain::Attraction;

/// Attractions whose name contains `query`, ignoring case, in table order.
///
/// The query is used as typed, surrounding spaces included. An empty query
/// matches nothing.
pub fn search_attractions<'a>(attractions: &'a [Attraction], query: &str) -> Vec<&'a Attraction> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    attractions
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    fn table() -> Vec<Attraction> {
        let here = Coordinate::new(13.05, 80.28).unwrap();
        vec![
            Attraction::new("Marina Beach", "Beach", "Low", "2", here),
            Attraction::new("Fort St. George", "Heritage", "Low", "2", here),
            Attraction::new("Elliot's Beach", "Beach", "Low", "1", here),
        ]
    }

    fn names(found: &[&Attraction]) -> Vec<String> {
        found.iter().map(|a| a.name.clone()).collect()
    }

    #[test]
    fn case_insensitive_in_table_order() {
        let attractions = table();
        let found = search_attractions(&attractions, "BEACH");
        assert_eq!(names(&found), vec!["Marina Beach", "Elliot's Beach"]);
    }

    #[test]
    fn query_is_not_trimmed() {
        let attractions = table();
        assert!(search_attractions(&attractions, "beach ").is_empty());
        assert!(search_attractions(&attractions, "  fort").is_empty());

        let found = search_attractions(&attractions, "fort ");
        assert_eq!(names(&found), vec!["Fort St. George"]);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let attractions = table();
        assert!(search_attractions(&attractions, "").is_empty());
    }

    #[test]
    fn space_matches_names_with_spaces() {
        let attractions = table();
        let found = search_attractions(&attractions, " ");
        assert_eq!(
            names(&found),
            vec!["Marina Beach", "Fort St. George", "Elliot's Beach"]
        );
    }

    #[test]
    fn unknown_name_matches_nothing() {
        let attractions = table();
        assert!(search_attractions(&attractions, "Zoo").is_empty());
    }
}
