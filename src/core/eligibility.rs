use crate::models::{HeightTable, RideWait};

/// Check whether a visitor is tall enough for a single ride
///
/// Rides missing from the table are unrestricted (minimum height 0).
#[inline]
pub fn meets_height_requirement(ride: &RideWait, visitor_height: u32, heights: &HeightTable) -> bool {
    visitor_height >= heights.minimum_height(&ride.name)
}

/// Keep only the rides the visitor is tall enough for
///
/// The output is an order-preserving subset of the input, which keeps
/// downstream tie-breaking deterministic. A height of 0 admits only
/// unrestricted rides: when no trustworthy height is available the
/// restrictive outcome is the safe one, so a height-restricted ride is
/// never admitted by default.
pub fn filter_by_height(
    rides: Vec<RideWait>,
    visitor_height: u32,
    heights: &HeightTable,
) -> Vec<RideWait> {
    rides
        .into_iter()
        .filter(|ride| meets_height_requirement(ride, visitor_height, heights))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_table() -> HeightTable {
        [
            ("Hulk Coaster", 54),
            ("Cat in the Hat", 36),
            ("Carousel", 0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_filters_out_too_short() {
        let rides = vec![
            RideWait::new("Hulk Coaster", 30),
            RideWait::new("Cat in the Hat", 10),
        ];

        let eligible = filter_by_height(rides, 40, &test_table());

        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].name, "Cat in the Hat");
    }

    #[test]
    fn test_tall_visitor_keeps_everything() {
        let rides = vec![
            RideWait::new("Hulk Coaster", 30),
            RideWait::new("Cat in the Hat", 10),
            RideWait::new("Carousel", 5),
        ];

        let eligible = filter_by_height(rides.clone(), 72, &test_table());

        assert_eq!(eligible, rides);
    }

    #[test]
    fn test_zero_height_admits_only_unrestricted() {
        let rides = vec![
            RideWait::new("Hulk Coaster", 30),
            RideWait::new("Carousel", 5),
        ];

        let eligible = filter_by_height(rides, 0, &test_table());

        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].name, "Carousel");
    }

    #[test]
    fn test_unknown_ride_is_unrestricted() {
        let rides = vec![RideWait::new("Brand New Coaster", 45)];

        let eligible = filter_by_height(rides, 0, &test_table());

        assert_eq!(eligible.len(), 1);
    }

    #[test]
    fn test_preserves_input_order() {
        let rides = vec![
            RideWait::new("Carousel", 5),
            RideWait::new("Cat in the Hat", 10),
            RideWait::new("Hulk Coaster", 30),
        ];

        let eligible = filter_by_height(rides, 40, &test_table());

        let names: Vec<&str> = eligible.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Carousel", "Cat in the Hat"]);
    }

    #[test]
    fn test_exact_minimum_height_is_eligible() {
        let rides = vec![RideWait::new("Cat in the Hat", 10)];

        let eligible = filter_by_height(rides, 36, &test_table());

        assert_eq!(eligible.len(), 1);
    }
}
