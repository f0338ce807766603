//! Attraction records and vibe tags.

use super::Coordinate;

/// Split a comma-separated category list into trimmed, non-empty vibe tags.
///
/// Tags are case-sensitive and keep their original order; duplicates are
/// kept here and collapse only when compared as sets.
///
/// # Examples
///
/// ```
/// use trip_server::domain::parse_vibe_tags;
///
/// assert_eq!(parse_vibe_tags(" Heritage, Culture ,"), vec!["Heritage", "Culture"]);
/// ```
pub fn parse_vibe_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// A point of interest that can be recommended and planned around.
#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
    pub name: String,

    /// The category/vibe column as it appears in the table.
    pub category: String,

    /// Parsed vibe tags from `category`.
    pub vibes: Vec<String>,

    /// Budget level, e.g. "Low", "Medium", "High". Compared exactly.
    pub budget_level: String,

    /// Time-needed bucket in hours, as text. Compared exactly.
    pub time_needed: String,

    pub description: String,
    pub best_time_to_visit: String,
    pub avg_expense: String,
    pub location: Coordinate,
}

impl Attraction {
    /// Create an attraction with its vibe tags parsed from `category`.
    ///
    /// Descriptive fields start empty; set them directly.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        budget_level: impl Into<String>,
        time_needed: impl Into<String>,
        location: Coordinate,
    ) -> Self {
        let category = category.into();
        let vibes = parse_vibe_tags(&category);

        Self {
            name: name.into(),
            category,
            vibes,
            budget_level: budget_level.into(),
            time_needed: time_needed.into(),
            description: String::new(),
            best_time_to_visit: String::new(),
            avg_expense: String::new(),
            location,
        }
    }
}
