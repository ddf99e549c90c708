use crate::models::{PreferenceMap, Recommendation, RideWait};

/// Pick the single best ride: highest preference, shortest wait among ties
///
/// Rides absent from the preference map rank with preference 0; values
/// outside the usual 1-5 range are taken at face value (validating the map
/// is the preference collector's job). The sort is stable, so rides tied on
/// both keys keep their input order and identical inputs always produce the
/// identical pick.
///
/// Returns `None` when the eligible list is empty. Callers must branch on
/// that instead of reading ride fields; there is no sentinel ride.
pub fn pick_best_ride(rides: &[RideWait], preferences: &PreferenceMap) -> Option<Recommendation> {
    let mut ranked: Vec<Recommendation> = rides
        .iter()
        .map(|ride| Recommendation {
            ride: ride.name.clone(),
            wait_minutes: ride.wait_minutes,
            preference: preferences.rating_for(&ride.name),
        })
        .collect();

    // Preference descending, then wait ascending
    ranked.sort_by(|a, b| {
        b.preference
            .cmp(&a.preference)
            .then_with(|| a.wait_minutes.cmp(&b.wait_minutes))
    });

    ranked.into_iter().next()
}
