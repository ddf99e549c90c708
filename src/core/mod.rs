// Core algorithm exports
pub mod eligibility;
pub mod ranking;
pub mod recommender;

pub use eligibility::{filter_by_height, meets_height_requirement};
pub use ranking::pick_best_ride;
pub use recommender::{Recommender, RideNowResult};
