//! Most frequent times of travel.

use super::mode::mode;
use crate::data::Table;
use crate::models::WEEKDAYS;
use chrono::{Month, NaiveTime, Weekday};

/// Popular month, day of week and start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub popular_month: Month,
    pub popular_day: Weekday,
    /// 0-23.
    pub popular_hour: u32,
}

impl TimeStats {
    /// The popular hour on a 12-hour clock, e.g. `08 AM`.
    pub fn hour_label(&self) -> String {
        format_hour(self.popular_hour)
    }
}

/// Compute time statistics; `None` when the table is empty.
pub fn compute(table: &Table) -> Option<TimeStats> {
    let month = mode(table.iter().map(|r| r.month))?;
    let day = mode(table.iter().map(|r| r.day_of_week()))?;
    let hour = mode(table.iter().map(|r| r.hour))?;

    Some(TimeStats {
        popular_month: Month::try_from(month as u8).ok()?,
        popular_day: *WEEKDAYS.get(day as usize)?,
        popular_hour: hour,
    })
}

/// Format an hour of day as `%I %p`.
pub fn format_hour(hour: u32) -> String {
    NaiveTime::from_hms_opt(hour, 0, 0)
        .map(|t| t.format("%I %p").to_string())
        .unwrap_or_else(|| format!("{:02}", hour))
}
