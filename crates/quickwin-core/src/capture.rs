//! Plan intake and caller-side validation.
//!
//! The store trusts its input (see [`crate::store`]); these helpers are the
//! single gate the presentation layer runs raw input through first. Batch
//! capture takes one title per line and applies a shared duration to the
//! whole batch.

use crate::error::ValidationError;

/// Estimated durations offered as one-tap choices, in minutes.
pub const DURATION_PRESETS: [u32; 4] = [5, 15, 25, 45];

/// Split multi-line plan input into one title per non-blank line.
pub fn parse_titles(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate a title: trimmed and non-empty.
pub fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// Parse a duration string into a positive number of minutes.
pub fn parse_duration(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    let minutes: u32 = trimmed.parse().map_err(|_| ValidationError::InvalidDuration {
        value: trimmed.to_string(),
        message: "expected a whole number of minutes".to_string(),
    })?;
    validate_duration(minutes)
}

/// Check that a duration is positive.
pub fn validate_duration(minutes: u32) -> Result<u32, ValidationError> {
    if minutes == 0 {
        return Err(ValidationError::InvalidDuration {
            value: minutes.to_string(),
            message: "must be positive".to_string(),
        });
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_titles_splits_and_trims() {
        let titles = parse_titles("  Water plants \n\nReply to Ana\n   \nStretch\n");
        assert_eq!(titles, vec!["Water plants", "Reply to Ana", "Stretch"]);
    }

    #[test]
    fn parse_titles_empty_input() {
        assert!(parse_titles("").is_empty());
        assert!(parse_titles("   \n \n").is_empty());
    }

    #[test]
    fn validate_title_trims() {
        assert_eq!(validate_title("  Stretch  ").unwrap(), "Stretch");
    }

    #[test]
    fn validate_title_rejects_blank() {
        assert!(matches!(validate_title(""), Err(ValidationError::EmptyTitle)));
        assert!(matches!(validate_title("   "), Err(ValidationError::EmptyTitle)));
    }

    #[test]
    fn parse_duration_accepts_positive_numbers() {
        assert_eq!(parse_duration("25").unwrap(), 25);
        assert_eq!(parse_duration(" 5 ").unwrap(), 5);
    }

    #[test]
    fn parse_duration_rejects_junk() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("-5").is_err());
        assert!(parse_duration("2.5").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn zero_duration_rejected() {
        assert!(parse_duration("0").is_err());
        assert!(validate_duration(0).is_err());
        assert_eq!(validate_duration(1).unwrap(), 1);
    }

    #[test]
    fn presets_are_sorted_and_positive() {
        assert_eq!(DURATION_PRESETS, [5, 15, 25, 45]);
        assert!(DURATION_PRESETS.windows(2).all(|w| w[0] < w[1]));
    }
}
