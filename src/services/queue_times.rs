use crate::models::{ParkGroup, QueueTimesResponse, RideWait};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to Queue-Times
#[derive(Debug, Error)]
pub enum QueueTimesError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Queue-Times API client
///
/// Handles all communication with queue-times.com:
/// - Listing park groups and their parks
/// - Fetching live queue times (lands and rides) for a park
///
/// No retries and no response caching; a failed poll surfaces to the caller.
pub struct QueueTimesClient {
    base_url: String,
    client: Client,
}

impl QueueTimesClient {
    /// Create a new Queue-Times client
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// List every park group Queue-Times tracks
    pub async fn list_parks(&self) -> Result<Vec<ParkGroup>, QueueTimesError> {
        let url = format!("{}/parks.json", self.base_url.trim_end_matches('/'));

        tracing::debug!("Fetching park list from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(QueueTimesError::ApiError(format!(
                "Failed to list parks: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json)
            .map_err(|e| QueueTimesError::InvalidResponse(format!("Failed to parse park list: {}", e)))
    }

    /// Fetch live queue times for a park
    pub async fn park_queue_times(&self, park_id: u32) -> Result<QueueTimesResponse, QueueTimesError> {
        let url = format!(
            "{}/parks/{}/queue_times.json",
            self.base_url.trim_end_matches('/'),
            park_id
        );

        tracing::debug!("Fetching queue times from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(QueueTimesError::ApiError(format!(
                "Failed to fetch queue times: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        serde_json::from_value(json).map_err(|e| {
            QueueTimesError::InvalidResponse(format!("Failed to parse queue times: {}", e))
        })
    }

    /// Fetch queue times for a park, flattened to the (ride, wait) pairs
    /// the recommendation core consumes
    ///
    /// Closed rides come back with their wait already normalized to 0; see
    /// [`QueueTimesResponse::flatten_waits`].
    pub async fn ride_waits(&self, park_id: u32) -> Result<Vec<RideWait>, QueueTimesError> {
        let response = self.park_queue_times(park_id).await?;
        let waits = response.flatten_waits();

        tracing::debug!("Flattened {} rides for park {}", waits.len(), park_id);

        Ok(waits)
    }
}
