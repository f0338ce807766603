//! Reference data loading.
//!
//! Reads the attraction, food, bus stop, bus route and train station tables
//! from flat CSV files once at startup and validates them into domain
//! records. Missing, empty or malformed tables are fatal.

mod error;
mod records;
mod tables;

pub use error::{DataError, RecordError};
pub use records::{AttractionRow, FoodRow, RouteRow, StopRow, TrainRow};
pub use tables::{DataFiles, PreferenceOptions, ReferenceTables};
