//! Total and mean trip duration.

use crate::data::Table;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;
const HOURS_PER_DAY: f64 = 24.0;

/// Aggregate trip duration in human units.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_seconds: u64,
    /// Whole hours, truncated.
    pub total_hours: u64,
    /// `total_hours / 24`, rounded to one decimal place, halves to even.
    pub total_days: f64,
    /// Mean trip length in whole minutes, truncated.
    pub mean_minutes: u64,
}

/// Compute duration statistics; `None` when the table is empty.
pub fn compute(table: &Table) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }

    let trip_count = table.len();
    let total_seconds = table
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.record.trip_duration));
    let total_hours = total_seconds / SECONDS_PER_HOUR;
    let total_days = (total_hours as f64 / HOURS_PER_DAY * 10.0).round_ties_even() / 10.0;
    let mean_minutes = total_seconds / (SECONDS_PER_MINUTE * trip_count as u64);

    Some(DurationStats {
        total_seconds,
        total_hours,
        total_days,
        mean_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::test_support::trip;

    fn table_of(durations: &[u64]) -> Table {
        Table::from_records(
            durations
                .iter()
                .map(|d| trip("2017-01-02 08:05:00", *d, "A", "B"))
                .collect(),
        )
    }

    #[test]
    fn test_small_scenario() {
        let stats = compute(&table_of(&[60, 120, 180])).unwrap();
        assert_eq!(stats.total_seconds, 360);
        assert_eq!(stats.total_hours, 0);
        assert_eq!(stats.total_days, 0.0);
        assert_eq!(stats.mean_minutes, 2);
    }

    #[test]
    fn test_hours_and_days() {
        // 100 trips of 30 minutes: 50 hours, about 2.1 days.
        let stats = compute(&table_of(&[1800; 100])).unwrap();
        assert_eq!(stats.total_seconds, 180_000);
        assert_eq!(stats.total_hours, 50);
        assert_eq!(stats.total_days, 2.1);
        assert_eq!(stats.mean_minutes, 30);
    }

    #[test]
    fn test_days_round_half_to_even() {
        // 6 h is 0.25 days and 30 h is 1.25 days.
        assert_eq!(compute(&table_of(&[6 * 3600])).unwrap().total_days, 0.2);
        assert_eq!(compute(&table_of(&[30 * 3600])).unwrap().total_days, 1.2);
        assert_eq!(compute(&table_of(&[18 * 3600])).unwrap().total_days, 0.8);
    }

    #[test]
    fn test_sum_saturates_instead_of_overflowing() {
        let stats = compute(&table_of(&[u64::MAX, u64::MAX])).unwrap();
        assert_eq!(stats.total_seconds, u64::MAX);
    }

    #[test]
    fn test_totals_match_column_sum() {
        let durations = [600, 300, 1200, 900, 450, 750, 1800, 61];
        let stats = compute(&table_of(&durations)).unwrap();
        let sum: u64 = durations.iter().sum();
        assert_eq!(stats.total_seconds, sum);
        assert_eq!(stats.total_hours, sum / 3600);
        assert_eq!(stats.mean_minutes, sum / (60 * durations.len() as u64));
    }

    #[test]
    fn test_empty_table_has_no_duration_stats() {
        assert_eq!(compute(&Table::default()), None);
    }
}
