//! Domain types for the trip planner.
//!
//! These are the validated reference records the recommendation core works
//! over. Coordinates and stop ids enforce their invariants at construction
//! time, so code that receives them can trust their validity.

mod attraction;
mod coord;
mod food;
mod stop_id;
mod transit;

pub use attraction::{Attraction, parse_vibe_tags};
pub use coord::{Coordinate, EARTH_RADIUS_KM, InvalidCoordinate};
pub use food::FoodSpot;
pub use stop_id::{InvalidStopId, StopId, parse_stop_sequence};
pub use transit::{BusRoute, BusStop, TrainStation};
