//! User type and demographic statistics.

use super::mode::{mode, value_counts};
use crate::data::Table;
use crate::models::CityCapabilities;

/// Statistics on the riders of the selected trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Trips per user type, most frequent first.
    pub user_types: Vec<(String, usize)>,
    /// Trips with no user type recorded.
    pub user_type_missing: usize,
    pub demographics: Demographics,
}

/// Gender and birth-year figures, when the city records them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demographics {
    /// The city's data has no gender or birth-year columns.
    NotAvailable,
    Available(DemographicStats),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemographicStats {
    /// Trips per gender, most frequent first. Missing values excluded.
    pub gender_counts: Vec<(String, usize)>,
    pub gender_missing: usize,
    /// `None` when no trip in the selection has a birth year.
    pub birth_years: Option<BirthYearStats>,
    pub birth_year_missing: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Compute user statistics; `None` when the table is empty.
///
/// Demographics are only looked at when `capabilities` says the city has
/// them.
pub fn compute(table: &Table, capabilities: CityCapabilities) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }

    let user_types = owned(value_counts(
        table.iter().filter_map(|r| r.record.user_type.as_deref()),
    ));
    let user_type_missing = table
        .iter()
        .filter(|r| r.record.user_type.is_none())
        .count();

    let demographics = if capabilities.has_demographics {
        Demographics::Available(demographic_stats(table))
    } else {
        Demographics::NotAvailable
    };

    Some(UserStats {
        user_types,
        user_type_missing,
        demographics,
    })
}

fn demographic_stats(table: &Table) -> DemographicStats {
    let gender_counts = owned(value_counts(
        table.iter().filter_map(|r| r.record.gender.as_deref()),
    ));
    let gender_missing = table.iter().filter(|r| r.record.gender.is_none()).count();

    let years: Vec<i32> = table.iter().filter_map(|r| r.record.birth_year).collect();
    let birth_year_missing = table.len() - years.len();

    let birth_years = match (years.iter().min(), years.iter().max(), mode(years.iter())) {
        (Some(&earliest), Some(&most_recent), Some(&most_common)) => Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        }),
        _ => None,
    };

    DemographicStats {
        gender_counts,
        gender_missing,
        birth_years,
        birth_year_missing,
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}
