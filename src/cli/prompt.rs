use crate::models::PreferenceMap;
use std::io::{BufRead, Error, ErrorKind, Write};

/// Lowest accepted preference rating
pub const MIN_RATING: i32 = 1;
/// Highest accepted preference rating
pub const MAX_RATING: i32 = 5;

/// Collect a preference rating for every ride, re-prompting until each
/// entry is a valid integer in [1,5]
///
/// Every ride asked about ends up in the returned map, so the core only
/// ever sees validated ratings; rides never asked about are simply absent
/// and rank as preference 0 downstream. Invalid entries are retried, I/O
/// failures are not.
pub fn prompt_preferences<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    ride_names: &[String],
) -> std::io::Result<PreferenceMap> {
    writeln!(
        output,
        "Please rate each ride from {} (frown) to {} (happy).",
        MIN_RATING, MAX_RATING
    )?;

    let mut preferences = PreferenceMap::new();

    for name in ride_names {
        loop {
            writeln!(output)?;
            writeln!(output, "Ride: {}", name)?;
            write!(output, "Enter preference [{}-{}]: ", MIN_RATING, MAX_RATING)?;
            output.flush()?;

            let line = read_line(input)?;
            match line.trim().parse::<i32>() {
                Ok(rating) if (MIN_RATING..=MAX_RATING).contains(&rating) => {
                    preferences.insert(name.clone(), rating);
                    break;
                }
                Ok(_) => writeln!(
                    output,
                    "Please enter a number between {} and {}.",
                    MIN_RATING, MAX_RATING
                )?,
                Err(_) => writeln!(output, "Invalid input. Please enter a valid integer.")?,
            }
        }
    }

    Ok(preferences)
}

/// Ask for the visitor's height in inches, re-prompting until the entry
/// parses as a non-negative integer
///
/// The recommendation core expects an already-validated height, so this
/// loop is the only place raw height input is handled. A visitor really
/// measuring 0 inches would only be offered unrestricted rides, which is
/// the fail-safe the filter guarantees.
pub fn prompt_height<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> std::io::Result<u32> {
    loop {
        writeln!(output)?;
        write!(output, "Enter your height in inches (e.g. 60 for 5 feet): ")?;
        output.flush()?;

        let line = read_line(input)?;
        match line.trim().parse::<u32>() {
            Ok(height) => return Ok(height),
            Err(_) => writeln!(
                output,
                "Invalid input. Please enter your height as a whole number of inches."
            )?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(Error::new(
            ErrorKind::UnexpectedEof,
            "input closed before a valid entry",
        ));
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collects_rating_for_every_ride() {
        let mut input = Cursor::new("3\n5\n");
        let mut output = Vec::new();

        let preferences =
            prompt_preferences(&mut input, &mut output, &names(&["Hulk", "Cat"])).unwrap();

        assert_eq!(preferences.len(), 2);
        assert_eq!(preferences.rating_for("Hulk"), 3);
        assert_eq!(preferences.rating_for("Cat"), 5);
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let mut input = Cursor::new("lots\n4\n");
        let mut output = Vec::new();

        let preferences =
            prompt_preferences(&mut input, &mut output, &names(&["Hulk"])).unwrap();

        assert_eq!(preferences.rating_for("Hulk"), 4);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Invalid input"));
    }

    #[test]
    fn test_reprompts_on_out_of_range() {
        let mut input = Cursor::new("0\n6\n2\n");
        let mut output = Vec::new();

        let preferences =
            prompt_preferences(&mut input, &mut output, &names(&["Hulk"])).unwrap();

        assert_eq!(preferences.rating_for("Hulk"), 2);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("between 1 and 5"));
    }

    #[test]
    fn test_surrounding_whitespace_accepted() {
        let mut input = Cursor::new("  5  \n");
        let mut output = Vec::new();

        let preferences =
            prompt_preferences(&mut input, &mut output, &names(&["Hulk"])).unwrap();

        assert_eq!(preferences.rating_for("Hulk"), 5);
    }

    #[test]
    fn test_exhausted_input_is_an_error() {
        let mut input = Cursor::new("3\n");
        let mut output = Vec::new();

        let result = prompt_preferences(&mut input, &mut output, &names(&["Hulk", "Cat"]));

        assert_eq!(result.unwrap_err().kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_height_retries_until_valid() {
        let mut input = Cursor::new("tall\n-3\n54\n");
        let mut output = Vec::new();

        let height = prompt_height(&mut input, &mut output).unwrap();

        assert_eq!(height, 54);
    }

    #[test]
    fn test_height_accepts_zero() {
        let mut input = Cursor::new("0\n");
        let mut output = Vec::new();

        assert_eq!(prompt_height(&mut input, &mut output).unwrap(), 0);
    }
}
