use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A ride paired with its current effective wait in minutes
///
/// This is the unit the recommendation core operates on. The wait is the
/// effective wait: closed rides have already been normalized to 0 on the
/// acquisition side, so the core never has to ask whether a ride is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideWait {
    pub name: String,
    #[serde(rename = "waitMinutes")]
    pub wait_minutes: u32,
}

impl RideWait {
    pub fn new(name: impl Into<String>, wait_minutes: u32) -> Self {
        Self {
            name: name.into(),
            wait_minutes,
        }
    }
}

/// The ride picked for the visitor, with the keys it won on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub ride: String,
    #[serde(rename = "waitMinutes")]
    pub wait_minutes: u32,
    pub preference: i32,
}

/// Per-ride preference ratings collected from the visitor
///
/// Ratings are expected in 1-5. Rides the visitor was never asked about are
/// simply absent; `rating_for` treats them as 0 (the lowest possible), so
/// unrated rides stay eligible but rank behind every rated one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceMap {
    ratings: HashMap<String, i32>,
}

impl PreferenceMap {
    pub fn new() -> Self {
        Self {
            ratings: HashMap::new(),
        }
    }

    pub fn insert(&mut self, ride: impl Into<String>, rating: i32) {
        self.ratings.insert(ride.into(), rating);
    }

    /// Lookup with default: rides absent from the map rate 0
    pub fn rating_for(&self, ride: &str) -> i32 {
        self.ratings.get(ride).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for PreferenceMap {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        Self {
            ratings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Minimum rider heights in inches, keyed by exact ride display name
///
/// Loaded once and read-only for the process lifetime; injected into the
/// eligibility filter rather than read as ambient global state. Rides
/// missing from the table are unrestricted (minimum height 0) - a
/// deliberate default, not a missing-data error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightTable {
    minimums: HashMap<String, u32>,
}

impl HeightTable {
    pub fn empty() -> Self {
        Self {
            minimums: HashMap::new(),
        }
    }

    /// Lookup with default: unknown rides have no height requirement
    pub fn minimum_height(&self, ride: &str) -> u32 {
        self.minimums.get(ride).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.minimums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minimums.is_empty()
    }

    /// Height requirements for Universal's Islands of Adventure
    pub fn islands_of_adventure() -> Self {
        [
            ("The Incredible Hulk Coaster", 54),
            ("Doctor Doom's Fearfall", 52),
            ("Storm Force Accelatron", 48),
            ("Jurassic Park River Adventure", 42),
            ("Skull Island: Reign of Kong", 36),
            ("The Cat in the Hat", 36),
            ("Hogwarts Express - Hogsmeade Station", 0),
            ("Camp Jurassic", 0),
            ("Jurassic Park Discovery Center", 0),
            ("Jurassic World Velocicoaster", 51),
            ("The Amazing Adventures of Spider-Man®", 40),
        ]
        .into_iter()
        .collect()
    }
}

impl Default for HeightTable {
    fn default() -> Self {
        Self::islands_of_adventure()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for HeightTable {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            minimums: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
