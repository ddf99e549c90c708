// Model exports
pub mod domain;
pub mod provider;

pub use domain::{HeightTable, PreferenceMap, Recommendation, RideWait};
pub use provider::{Land, Park, ParkGroup, QueueTimesResponse, RideStatus};
