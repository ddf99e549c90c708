// Service exports
pub mod queue_times;

pub use queue_times::{QueueTimesClient, QueueTimesError};
