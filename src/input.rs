//! Validation of interactive answers.
//!
//! Every function here is pure: it takes the raw line the user typed and
//! either normalizes it or says why it was rejected. Re-prompting is left to
//! the session loop.

use crate::error::InvalidInput;
use crate::models::{weekday_name, City, FILTER_MONTHS, WEEKDAYS};
use chrono::{Month, Weekday};

/// Keyword that disables a month or day filter.
pub const ALL_KEYWORD: &str = "all";

/// Outcome of the city prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitySelection {
    /// The full city name was typed.
    Exact(City),
    /// Only the initial matched; the user must confirm the guess.
    Guess(City),
}

/// Resolve the city prompt answer.
pub fn parse_city(input: &str) -> Result<CitySelection, InvalidInput> {
    let normalized = normalize(input)?;

    if let Some(city) = City::ALL.iter().find(|c| c.key() == normalized) {
        return Ok(CitySelection::Exact(*city));
    }

    let initial = normalized.chars().next();
    City::ALL
        .iter()
        .find(|c| c.key().chars().next() == initial)
        .map(|c| CitySelection::Guess(*c))
        .ok_or_else(|| InvalidInput::UnknownCity(input.trim().to_string()))
}

/// Resolve the month prompt answer. `None` means no month filter.
pub fn parse_month(input: &str) -> Result<Option<Month>, InvalidInput> {
    let normalized = normalize(input)?;
    if normalized == ALL_KEYWORD {
        return Ok(None);
    }

    FILTER_MONTHS
        .iter()
        .find(|m| m.name().eq_ignore_ascii_case(&normalized))
        .map(|m| Some(*m))
        .ok_or_else(|| InvalidInput::UnknownMonth(input.trim().to_string()))
}

/// Resolve the day prompt answer. `None` means no day filter.
pub fn parse_day(input: &str) -> Result<Option<Weekday>, InvalidInput> {
    let normalized = normalize(input)?;
    if normalized == ALL_KEYWORD {
        return Ok(None);
    }

    WEEKDAYS
        .iter()
        .find(|d| weekday_name(**d).eq_ignore_ascii_case(&normalized))
        .map(|d| Some(*d))
        .ok_or_else(|| InvalidInput::UnknownDay(input.trim().to_string()))
}

/// Whether a yes/no answer is a yes. Anything else counts as no.
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}

fn normalize(input: &str) -> Result<String, InvalidInput> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::Empty);
    }
    Ok(trimmed.to_lowercase())
}
