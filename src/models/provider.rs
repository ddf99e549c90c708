use crate::models::RideWait;
use serde::{Deserialize, Serialize};

/// A park operator grouping on the Queue-Times park index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkGroup {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub parks: Vec<Park>,
}

/// A single park known to Queue-Times
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Park {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// One ride observation from a queue-times poll
///
/// `last_updated` is carried through untouched for display; the
/// recommendation core never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideStatus {
    pub id: u32,
    pub name: String,
    pub is_open: bool,
    pub wait_time: u32,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

impl RideStatus {
    /// Effective wait in minutes
    ///
    /// A closed ride's posted wait is meaningless, so it is normalized to 0
    /// here. This is the only place that normalization happens; everything
    /// downstream trusts the pair it is handed.
    pub fn effective_wait(&self) -> u32 {
        if self.is_open {
            self.wait_time
        } else {
            0
        }
    }
}

/// A themed land and the rides inside it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Land {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub rides: Vec<RideStatus>,
}

/// Response from `/parks/{id}/queue_times.json`
///
/// Most parks report every ride under a land; some also return a top-level
/// `rides` array, so both are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueTimesResponse {
    #[serde(default)]
    pub lands: Vec<Land>,
    #[serde(default)]
    pub rides: Vec<RideStatus>,
}

impl QueueTimesResponse {
    /// Iterate every ride observation in API order: lands first (in order,
    /// rides in order within each land), then any top-level rides.
    pub fn all_rides(&self) -> impl Iterator<Item = &RideStatus> {
        self.lands
            .iter()
            .flat_map(|land| land.rides.iter())
            .chain(self.rides.iter())
    }

    /// Flatten the nested response into the (ride, wait) pairs the
    /// recommendation core consumes, preserving API order and normalizing
    /// closed rides to a 0 wait via [`RideStatus::effective_wait`].
    pub fn flatten_waits(&self) -> Vec<RideWait> {
        self.all_rides()
            .map(|ride| RideWait::new(ride.name.clone(), ride.effective_wait()))
            .collect()
    }
}
