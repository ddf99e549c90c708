use crate::core::{eligibility::filter_by_height, ranking::pick_best_ride};
use crate::models::{HeightTable, PreferenceMap, Recommendation, RideWait};

/// Result of a recommendation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideNowResult {
    pub recommendation: Option<Recommendation>,
    pub eligible_count: usize,
    pub total_rides: usize,
}

/// Recommendation orchestrator - eligibility filtering then ranking
///
/// # Pipeline stages
/// 1. Height eligibility filter against the injected table
/// 2. Preference/wait ranking over the survivors
///
/// Expects waits already normalized (closed rides at 0); the acquisition
/// side owns that, so the core never re-checks an open flag.
#[derive(Debug, Clone)]
pub struct Recommender {
    heights: HeightTable,
}

impl Recommender {
    pub fn new(heights: HeightTable) -> Self {
        Self { heights }
    }

    /// Filter by height, then pick the best remaining ride
    ///
    /// Pure apart from diagnostics: repeated calls with identical inputs
    /// return identical results, and the preference map is never mutated.
    pub fn recommend(
        &self,
        rides: Vec<RideWait>,
        visitor_height: u32,
        preferences: &PreferenceMap,
    ) -> RideNowResult {
        let total_rides = rides.len();

        let eligible = filter_by_height(rides, visitor_height, &self.heights);
        let eligible_count = eligible.len();

        tracing::debug!(
            "{} of {} rides eligible at height {} in",
            eligible_count,
            total_rides,
            visitor_height
        );

        let recommendation = pick_best_ride(&eligible, preferences);

        RideNowResult {
            recommendation,
            eligible_count,
            total_rides,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(HeightTable::default())
    }
}
