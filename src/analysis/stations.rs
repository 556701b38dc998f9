//! Most popular stations and trip.

use super::mode::mode;
use crate::data::Table;

/// Popular start station, end station and start/end combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub popular_start: String,
    pub popular_end: String,
    /// `(start, end)` of the most frequent trip.
    pub popular_trip: (String, String),
}

/// Compute station statistics; `None` when the table is empty.
pub fn compute(table: &Table) -> Option<StationStats> {
    let start = mode(table.iter().map(|r| r.record.start_station.as_str()))?;
    let end = mode(table.iter().map(|r| r.record.end_station.as_str()))?;
    // Keyed on the pair itself, so station names need no delimiter.
    let (trip_start, trip_end) = mode(
        table
            .iter()
            .map(|r| (r.record.start_station.as_str(), r.record.end_station.as_str())),
    )?;

    Some(StationStats {
        popular_start: start.to_string(),
        popular_end: end.to_string(),
        popular_trip: (trip_start.to_string(), trip_end.to_string()),
    })
}
