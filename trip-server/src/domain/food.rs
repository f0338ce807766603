//! Food spot records.

use super::Coordinate;

/// A place to eat near attractions.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodSpot {
    pub name: String,
    pub cuisine: String,
    /// Budget tier. Matched case-insensitively against the user's budget.
    pub budget: String,
    pub rating: f64,
    pub location: Coordinate,
}

impl FoodSpot {
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        budget: impl Into<String>,
        rating: f64,
        location: Coordinate,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            budget: budget.into(),
            rating,
            location,
        }
    }

    /// Case-insensitive budget comparison.
    pub fn matches_budget(&self, budget: &str) -> bool {
        self.budget.to_lowercase() == budget.to_lowercase()
    }
}
