//! In-memory trip table with derived time columns.

use crate::models::TripRecord;
use chrono::{Datelike, Timelike, Weekday};

/// A trip plus the fields derived from its start timestamp.
///
/// The derived fields are computed once in [`TripRow::new`] and never
/// updated, so they always agree with `record.start_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    pub record: TripRecord,
    /// Calendar month, 1-12.
    pub month: u32,
    pub weekday: Weekday,
    /// Hour of day, 0-23.
    pub hour: u32,
}

impl TripRow {
    pub fn new(record: TripRecord) -> Self {
        let start = record.start_time;
        Self {
            month: start.month(),
            weekday: start.weekday(),
            hour: start.hour(),
            record,
        }
    }

    /// Day of week as a number, Monday = 0.
    pub fn day_of_week(&self) -> u32 {
        self.weekday.num_days_from_monday()
    }
}

/// Ordered collection of trip rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<TripRow>,
}

impl Table {
    /// Build a table, deriving the time columns of every record.
    pub fn from_records(records: Vec<TripRecord>) -> Self {
        records.into_iter().map(TripRow::new).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRow> {
        self.rows.iter()
    }

    /// Up to `size` rows starting at `offset`; empty once past the end.
    pub fn page(&self, offset: usize, size: usize) -> &[TripRow] {
        let start = offset.min(self.rows.len());
        let end = offset.saturating_add(size).min(self.rows.len());
        &self.rows[start..end]
    }
}

impl FromIterator<TripRow> for Table {
    fn from_iter<I: IntoIterator<Item = TripRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<usize> for Table {
    type Output = TripRow;

    fn index(&self, index: usize) -> &TripRow {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a TripRow;
    type IntoIter = std::slice::Iter<'a, TripRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::TripRecord;
    use chrono::NaiveDateTime;

    /// Build a record with only the fields most tests care about.
    pub fn trip(start: &str, duration: u64, from: &str, to: &str) -> TripRecord {
        TripRecord {
            start_time: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S")
                .expect("test timestamp"),
            end_time: None,
            trip_duration: duration,
            start_station: from.to_string(),
            end_station: to.to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::trip;
    use super::*;

    #[test]
    fn test_derived_columns_follow_start_time() {
        // 2017-06-23 was a Friday.
        let row = TripRow::new(trip("2017-06-23 17:20:00", 450, "A", "B"));
        assert_eq!(row.month, 6);
        assert_eq!(row.weekday, Weekday::Fri);
        assert_eq!(row.day_of_week(), 4);
        assert_eq!(row.hour, 17);
    }

    #[test]
    fn test_from_records_keeps_order() {
        let table = Table::from_records(vec![
            trip("2017-01-02 08:05:00", 600, "A", "B"),
            trip("2017-03-06 17:10:00", 1200, "C", "D"),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].record.start_station, "A");
        assert_eq!(table[1].month, 3);
    }

    #[test]
    fn test_page_bounds() {
        let table: Table = (0..7)
            .map(|i| TripRow::new(trip("2017-01-02 08:05:00", i, "A", "B")))
            .collect();

        assert_eq!(table.page(0, 5).len(), 5);
        assert_eq!(table.page(5, 5).len(), 2);
        assert_eq!(table.page(5, 5)[0].record.trip_duration, 5);
        assert!(table.page(7, 5).is_empty());
        assert!(table.page(100, 5).is_empty());
        assert!(Table::default().page(0, 5).is_empty());
    }
}
