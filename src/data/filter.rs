//! Month and day-of-week filtering.

use super::table::{Table, TripRow};
use crate::models::City;
use chrono::{Month, Weekday};
use tracing::{debug, warn};

/// What the user asked to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    /// `None` keeps every month.
    pub month: Option<Month>,
    /// `None` keeps every day of the week.
    pub day: Option<Weekday>,
}

impl FilterCriteria {
    /// Whether a row passes both filters.
    pub fn matches(&self, row: &TripRow) -> bool {
        let month_ok = self
            .month
            .map_or(true, |m| row.month == m.number_from_month());
        let day_ok = self.day.map_or(true, |d| row.weekday == d);
        month_ok && day_ok
    }
}

/// Select the rows of `table` that match `criteria`.
///
/// Rows are copied, never altered, and keep their original order.
pub fn apply(table: &Table, criteria: &FilterCriteria) -> Table {
    if criteria.month.is_none() && criteria.day.is_none() {
        debug!("No month or day filter, keeping all {} rows", table.len());
        return table.clone();
    }

    let filtered: Table = table
        .iter()
        .filter(|row| criteria.matches(row))
        .cloned()
        .collect();

    debug!(
        "Filter {:?}/{:?} kept {} of {} rows",
        criteria.month,
        criteria.day,
        filtered.len(),
        table.len()
    );
    if filtered.is_empty() {
        warn!("No trips match the selected filters");
    }

    filtered
}
