//! The in-memory reference tables.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::{Attraction, BusRoute, BusStop, FoodSpot, TrainStation};

use super::error::{DataError, RecordError};
use super::records::{AttractionRow, FoodRow, RouteRow, StopRow, TrainRow};

/// File names of the five reference tables inside the data directory.
#[derive(Debug, Clone)]
pub struct DataFiles {
    pub attractions: String,
    pub food: String,
    pub stops: String,
    pub routes: String,
    pub trains: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            attractions: "_poi_chennai.csv".to_string(),
            food: "chennaiFood.csv".to_string(),
            stops: "stopdata.csv".to_string(),
            routes: "routedata1.csv".to_string(),
            trains: "chennaiTrain.csv".to_string(),
        }
    }
}

/// The selectable preference values offered to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceOptions {
    /// Distinct budget levels, in first-seen table order.
    pub budgets: Vec<String>,
    /// Distinct time-needed buckets, in first-seen table order.
    pub time_buckets: Vec<String>,
    /// Distinct vibe tags, sorted.
    pub vibes: Vec<String>,
}

/// Immutable reference data for one process.
///
/// Every table is non-empty. Tables are read once at startup and shared
/// read-only afterwards; queries never modify them.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    attractions: Vec<Attraction>,
    food: Vec<FoodSpot>,
    stops: Vec<BusStop>,
    routes: Vec<BusRoute>,
    trains: Vec<TrainStation>,
}

impl ReferenceTables {
    /// Assemble tables from already-validated records.
    pub fn new(
        attractions: Vec<Attraction>,
        food: Vec<FoodSpot>,
        stops: Vec<BusStop>,
        routes: Vec<BusRoute>,
        trains: Vec<TrainStation>,
    ) -> Result<Self, DataError> {
        let empty = [
            ("attraction", attractions.is_empty()),
            ("food", food.is_empty()),
            ("bus stop", stops.is_empty()),
            ("bus route", routes.is_empty()),
            ("train", trains.is_empty()),
        ]
        .into_iter()
        .find_map(|(table, is_empty)| is_empty.then_some(table));

        if let Some(table) = empty {
            return Err(DataError::EmptyTable { table });
        }

        Ok(Self {
            attractions,
            food,
            stops,
            routes,
            trains,
        })
    }

    /// Load all five tables from CSV files in `dir`.
    pub fn load(dir: &Path, files: &DataFiles) -> Result<Self, DataError> {
        let attractions = load_table::<AttractionRow, Attraction>(&dir.join(&files.attractions))?;
        let food = load_table::<FoodRow, FoodSpot>(&dir.join(&files.food))?;
        let stops = load_table::<StopRow, BusStop>(&dir.join(&files.stops))?;
        let routes = load_table::<RouteRow, BusRoute>(&dir.join(&files.routes))?;
        let trains = load_table::<TrainRow, TrainStation>(&dir.join(&files.trains))?;

        tracing::info!(
            attractions = attractions.len(),
            food = food.len(),
            stops = stops.len(),
            routes = routes.len(),
            trains = trains.len(),
            dir = %dir.display(),
            "loaded reference tables"
        );

        Self::new(attractions, food, stops, routes, trains)
    }

    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    pub fn food(&self) -> &[FoodSpot] {
        &self.food
    }

    pub fn stops(&self) -> &[BusStop] {
        &self.stops
    }

    pub fn routes(&self) -> &[BusRoute] {
        &self.routes
    }

    pub fn trains(&self) -> &[TrainStation] {
        &self.trains
    }

    /// Find the first attraction with exactly this name.
    pub fn find_attraction(&self, name: &str) -> Option<&Attraction> {
        self.attractions.iter().find(|a| a.name == name)
    }

    /// The budget, time and vibe values users can choose from.
    pub fn options(&self) -> PreferenceOptions {
        let vibes: BTreeSet<&str> = self
            .attractions
            .iter()
            .flat_map(|a| a.vibes.iter().map(String::as_str))
            .collect();

        let budgets = self.attractions.iter().map(|a| a.budget_level.as_str());
        let times = self.attractions.iter().map(|a| a.time_needed.as_str());

        PreferenceOptions {
            budgets: distinct_in_order(budgets),
            time_buckets: distinct_in_order(times),
            vibes: vibes.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Keep the first occurrence of each value, preserving order.
fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Read one CSV file and convert every row into a domain record.
fn load_table<R, T>(path: &Path) -> Result<Vec<T>, DataError>
where
    R: DeserializeOwned,
    T: TryFrom<R, Error = RecordError>,
{
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<R>().enumerate() {
        let row = row.map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let record = T::try_from(row).map_err(|source| DataError::InvalidRecord {
            path: path.to_path_buf(),
            row: idx + 1,
            source,
        })?;
        records.push(record);
    }

    if records.is_empty() {
        return Err(DataError::EmptyFile {
            path: PathBuf::from(path),
        });
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "loaded table");
    Ok(records)
}
