//! ThrillCompass - live ride recommendations for theme-park visitors
//!
//! This library provides the recommendation core used by the ThrillCompass
//! CLI: it filters a park's rides by the visitor's height, then ranks the
//! survivors by preference (descending) and current wait (ascending) to
//! pick the single best ride. Everything around the core - the Queue-Times
//! client, the preference prompt, rendering - is I/O plumbing.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{filter_by_height, pick_best_ride, Recommender, RideNowResult};
pub use self::models::{HeightTable, PreferenceMap, Recommendation, RideWait};
