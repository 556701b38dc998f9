//! Data models for the bikeshare explorer.
//!
//! This module contains the city registry, the trip record type, and the
//! fixed month/day name tables shared by the prompts and the reports.

use chrono::{Month, NaiveDateTime, Weekday};
use std::fmt;

/// A city with bikeshare data available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every supported city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase registry key, as typed at the prompt.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Title-case display name.
    pub fn title(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Default trip file name for the city.
    pub fn default_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Columns the city's data source is known to carry.
    pub fn capabilities(&self) -> CityCapabilities {
        match self {
            City::Chicago | City::NewYorkCity => CityCapabilities {
                has_demographics: true,
            },
            City::Washington => CityCapabilities {
                has_demographics: false,
            },
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Static description of what a city's trip file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityCapabilities {
    /// Whether `Gender` and `Birth Year` columns are present.
    pub has_demographics: bool,
}

/// One trip as read from a city file.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    /// Kept verbatim; only shown when paging through raw rows.
    pub end_time: Option<String>,
    /// Whole seconds.
    pub trip_duration: u64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

/// Months that can be selected as a filter.
/// Year covered by the city trip files.
pub const DATA_YEAR: i32 = 2017;

pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Days of the week, Monday first (index = day-of-week number).
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
