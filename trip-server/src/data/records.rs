//! CSV row types for the reference tables.
//!
//! These map directly to the column headers of the source files. Header
//! spellings vary between exports, so common variants are accepted as
//! aliases. Conversion into domain types validates coordinates and ids.

use serde::Deserialize;

use crate::domain::{Attraction, BusRoute, BusStop, Coordinate, FoodSpot, StopId, TrainStation};

use super::error::RecordError;

/// A row of the attraction (point of interest) table.
#[derive(Debug, Clone, Deserialize)]
pub struct AttractionRow {
    #[serde(rename = "Place name", alias = "Place_Name", alias = "name")]
    pub name: String,

    #[serde(rename = "Category/Vibe", alias = "Category", alias = "Vibe")]
    pub category: String,

    #[serde(rename = "Budget_Level", alias = "Budget")]
    pub budget_level: String,

    #[serde(rename = "Time_Needed_hr", alias = "Time_Needed")]
    pub time_needed: String,

    #[serde(rename = "Description", default)]
    pub description: String,

    #[serde(rename = "Best_Time_to_Visit", default)]
    pub best_time_to_visit: String,

    #[serde(rename = "Avg_Expense", default)]
    pub avg_expense: String,

    #[serde(rename = "Latitude", alias = "latitude", alias = "Lat")]
    pub latitude: f64,

    #[serde(rename = "Longitude", alias = "longitude", alias = "Lng")]
    pub longitude: f64,
}

impl TryFrom<AttractionRow> for Attraction {
    type Error = RecordError;

    fn try_from(row: AttractionRow) -> Result<Self, Self::Error> {
        if row.name.is_empty() {
            return Err(RecordError::MissingField("Place name"));
        }
        let location = Coordinate::new(row.latitude, row.longitude)?;

        let mut attraction = Attraction::new(
            row.name,
            row.category,
            row.budget_level,
            row.time_needed,
            location,
        );
        attraction.description = row.description;
        attraction.best_time_to_visit = row.best_time_to_visit;
        attraction.avg_expense = row.avg_expense;
        Ok(attraction)
    }
}

/// A row of the food table.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodRow {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    #[serde(rename = "Cuisine", alias = "cuisine", default)]
    pub cuisine: String,

    #[serde(rename = "Budget", alias = "budget", alias = "Budget_Level")]
    pub budget: String,

    /// Unparseable, blank or non-finite ratings read as 0.
    #[serde(
        rename = "Rating",
        alias = "rating",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub rating: Option<f64>,

    #[serde(rename = "Latitude", alias = "latitude", alias = "Lat")]
    pub latitude: f64,

    #[serde(rename = "Longitude", alias = "longitude", alias = "Lng")]
    pub longitude: f64,
}

impl TryFrom<FoodRow> for FoodSpot {
    type Error = RecordError;

    fn try_from(row: FoodRow) -> Result<Self, Self::Error> {
        if row.name.is_empty() {
            return Err(RecordError::MissingField("Name"));
        }
        let location = Coordinate::new(row.latitude, row.longitude)?;

        Ok(FoodSpot::new(
            row.name,
            row.cuisine,
            row.budget,
            row.rating.filter(|r| r.is_finite()).unwrap_or(0.0),
            location,
        ))
    }
}

/// A row of the bus stop table.
#[derive(Debug, Clone, Deserialize)]
pub struct StopRow {
    #[serde(rename = "Stop_id", alias = "stop_id", alias = "Stop_Id")]
    pub stop_id: String,

    #[serde(rename = "Stop Name", alias = "stop_name", alias = "Stop_Name")]
    pub name: String,

    #[serde(rename = "Lat", alias = "lat", alias = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Lng", alias = "lng", alias = "Longitude")]
    pub longitude: f64,
}

impl TryFrom<StopRow> for BusStop {
    type Error = RecordError;

    fn try_from(row: StopRow) -> Result<Self, Self::Error> {
        Ok(BusStop {
            id: StopId::parse(&row.stop_id)?,
            name: row.name,
            location: Coordinate::new(row.latitude, row.longitude)?,
        })
    }
}

/// A row of the bus route table.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRow {
    #[serde(rename = "Route_Id", alias = "route_id", alias = "Route_ID")]
    pub route_id: String,

    #[serde(rename = "bus_details", alias = "Bus_Details", alias = "bus_detail")]
    pub bus_details: String,

    #[serde(rename = "route", alias = "Route", default)]
    pub route: String,
}

impl TryFrom<RouteRow> for BusRoute {
    type Error = RecordError;

    fn try_from(row: RouteRow) -> Result<Self, Self::Error> {
        if row.route_id.is_empty() {
            return Err(RecordError::MissingField("Route_Id"));
        }
        Ok(BusRoute::new(row.route_id, row.bus_details, row.route))
    }
}

/// A row of the train station table.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainRow {
    #[serde(rename = "station_name", alias = "Station_Name")]
    pub name: String,

    #[serde(rename = "latitude", alias = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "longitude", alias = "Longitude")]
    pub longitude: f64,

    #[serde(rename = "Line", alias = "line", default)]
    pub line: Option<String>,

    #[serde(rename = "network", alias = "Network", alias = "Zone", alias = "zone", default)]
    pub network: String,
}

impl TryFrom<TrainRow> for TrainStation {
    type Error = RecordError;

    fn try_from(row: TrainRow) -> Result<Self, Self::Error> {
        if row.name.is_empty() {
            return Err(RecordError::MissingField("station_name"));
        }
        Ok(TrainStation {
            name: row.name,
            location: Coordinate::new(row.latitude, row.longitude)?,
            line: row.line.filter(|l| !l.is_empty()),
            network: row.network,
        })
    }
}
