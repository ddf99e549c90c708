use crate::cli::prompt::MAX_RATING;
use crate::core::RideNowResult;
use crate::models::{QueueTimesResponse, RideStatus};
use std::io::Write;

/// Print the live wait summary for a park, land by land
///
/// Shows the effective wait (closed rides read 0), the closed marker, and
/// the provider's last-updated timestamp as-is.
pub fn write_wait_summary<W: Write>(
    output: &mut W,
    response: &QueueTimesResponse,
) -> std::io::Result<()> {
    for land in &response.lands {
        writeln!(output)?;
        writeln!(output, "Land: {}", land.name)?;
        for ride in &land.rides {
            write_ride_line(output, ride)?;
        }
    }

    if !response.rides.is_empty() {
        writeln!(output)?;
        writeln!(output, "Other rides:")?;
        for ride in &response.rides {
            write_ride_line(output, ride)?;
        }
    }

    Ok(())
}

fn write_ride_line<W: Write>(output: &mut W, ride: &RideStatus) -> std::io::Result<()> {
    let closed = if ride.is_open { "" } else { " [closed]" };
    writeln!(
        output,
        "  {} - {} min{} (updated {})",
        ride.name,
        ride.effective_wait(),
        closed,
        ride.last_updated.format("%H:%M UTC")
    )
}

/// Render the final pick, or the no-rides message
///
/// The no-ride branch is a normal outcome, not an error: it simply means
/// nothing survived the height filter.
pub fn write_recommendation<W: Write>(
    output: &mut W,
    result: &RideNowResult,
) -> std::io::Result<()> {
    match &result.recommendation {
        Some(best) => {
            writeln!(output)?;
            writeln!(output, "--- RIDE NOW Recommendation ---")?;
            writeln!(output, "Ride: {}", best.ride)?;
            writeln!(output, "Your Preference: {} / {}", best.preference, MAX_RATING)?;
            writeln!(output, "Current Wait: {} minutes", best.wait_minutes)?;
        }
        None => {
            writeln!(output)?;
            writeln!(
                output,
                "No rides available for your height right now ({} checked).",
                result.total_rides
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recommendation;

    #[test]
    fn test_recommendation_rendering() {
        let result = RideNowResult {
            recommendation: Some(Recommendation {
                ride: "The Cat in the Hat".to_string(),
                wait_minutes: 10,
                preference: 3,
            }),
            eligible_count: 1,
            total_rides: 2,
        };

        let mut output = Vec::new();
        write_recommendation(&mut output, &result).unwrap();
        let rendered = String::from_utf8(output).unwrap();

        assert!(rendered.contains("RIDE NOW Recommendation"));
        assert!(rendered.contains("Ride: The Cat in the Hat"));
        assert!(rendered.contains("Your Preference: 3 / 5"));
        assert!(rendered.contains("Current Wait: 10 minutes"));
    }

    #[test]
    fn test_no_ride_message() {
        let result = RideNowResult {
            recommendation: None,
            eligible_count: 0,
            total_rides: 7,
        };

        let mut output = Vec::new();
        write_recommendation(&mut output, &result).unwrap();
        let rendered = String::from_utf8(output).unwrap();

        assert!(rendered.contains("No rides available"));
        assert!(!rendered.contains("Ride:"));
    }
}
