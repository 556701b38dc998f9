//! Plain-text report generation.
//!
//! This module turns the statistics of one selection into the text shown
//! on the terminal, section by section, plus the raw-row pages.

use crate::analysis::{Demographics, DurationStats, StationStats, TimeStats, UserStats};
use crate::data::{schema, FilterCriteria, TripRow};
use crate::models::{weekday_name, City, DATA_YEAR};
use std::time::Duration;

/// Rule printed between sections.
pub const RULE: &str = "----------------------------------------";

/// Shown in place of a section when no trips are selected.
pub const NO_DATA: &str = "No trips match the selected filters.";

/// Describe the selection that the following statistics cover.
pub fn generate_banner(criteria: &FilterCriteria) -> String {
    let city = criteria.city.title();
    let scope = match (criteria.month, criteria.day) {
        (Some(month), Some(day)) => {
            format!(
                "on {}s in {} {} in {}",
                weekday_name(day),
                month.name(),
                DATA_YEAR,
                city
            )
        }
        (None, Some(day)) => format!(
            "on {}s from January till June {} in {}",
            weekday_name(day),
            DATA_YEAR,
            city
        ),
        (Some(month), None) => format!("in {} {} in {}", month.name(), DATA_YEAR, city),
        (None, None) => format!("from January till June {} in {}", DATA_YEAR, city),
    };

    format!(
        "{RULE}\nHere you get some statistics on the bikeshare data {}.\n\n{RULE}\n",
        scope
    )
}

/// Generate the most-frequent-times section.
pub fn generate_time_section(
    city: City,
    stats: Option<&TimeStats>,
    elapsed: Option<Duration>,
) -> String {
    let mut section = section_header("Calculating The Most Frequent Times of Travel...");

    match stats {
        Some(stats) => section.push_str(&format!(
            "The most frequent times of travel in {} are in {}, on {}s, at {}.\n",
            city,
            stats.popular_month.name(),
            weekday_name(stats.popular_day),
            stats.hour_label()
        )),
        None => section.push_str(&no_data()),
    }

    section.push_str(&section_footer(elapsed));
    section
}

/// Generate the popular stations section.
pub fn generate_station_section(stats: Option<&StationStats>, elapsed: Option<Duration>) -> String {
    let mut section = section_header("Calculating The Most Popular Stations and Trip...");

    match stats {
        Some(stats) => {
            section.push_str(&format!(
                "The most commonly used start station is {}, the end station is {}.\n",
                stats.popular_start, stats.popular_end
            ));
            section.push_str(&format!(
                "The most frequent combination of start station and end station trip is from {} to {}.\n",
                stats.popular_trip.0, stats.popular_trip.1
            ));
        }
        None => section.push_str(&no_data()),
    }

    section.push_str(&section_footer(elapsed));
    section
}

/// Generate the trip duration section.
pub fn generate_duration_section(
    city: City,
    stats: Option<&DurationStats>,
    elapsed: Option<Duration>,
) -> String {
    let mut section = section_header("Calculating Trip Duration...");

    match stats {
        Some(stats) => {
            section.push_str(&format!(
                "The overall travel time in {} in this period is {} hours (about {:.1} days).\n",
                city, stats.total_hours, stats.total_days
            ));
            section.push_str(&format!(
                "The mean travel time in {} in this period is {} min.\n",
                city, stats.mean_minutes
            ));
        }
        None => section.push_str(&no_data()),
    }

    section.push_str(&section_footer(elapsed));
    section
}

/// Generate the user statistics section.
pub fn generate_user_section(
    city: City,
    stats: Option<&UserStats>,
    elapsed: Option<Duration>,
) -> String {
    let mut section = section_header("Calculating User Stats...");

    let Some(stats) = stats else {
        section.push_str(&no_data());
        section.push_str(&section_footer(elapsed));
        return section;
    };

    section.push_str(&generate_count_table(&stats.user_types));
    match stats.user_type_missing {
        0 => {}
        1 => section.push_str("1 trip has no user type recorded.\n"),
        n => section.push_str(&format!("{} trips have no user type recorded.\n", n)),
    }
    section.push('\n');

    match &stats.demographics {
        Demographics::NotAvailable => {
            section.push_str(&format!("There is no detailed user data in {}.\n", city));
        }
        Demographics::Available(demo) => {
            section.push_str(&generate_count_table(&demo.gender_counts));
            section.push_str(&format!(
                "{} users didn't provide information on their gender.\n\n",
                demo.gender_missing
            ));

            match &demo.birth_years {
                Some(years) => {
                    section.push_str(&format!(
                        "The oldest user is born in {}, the youngest user is born in {}.\n",
                        years.earliest, years.most_recent
                    ));
                    section.push_str(&format!("Most users are born in {}.\n", years.most_common));
                }
                None => section.push_str("No user provided a birth year.\n"),
            }
            section.push_str(&format!(
                "{} users didn't provide information on their birth year.\n",
                demo.birth_year_missing
            ));
        }
    }

    section.push_str(&section_footer(elapsed));
    section
}

/// Render raw trips, numbered from `offset + 1`.
///
/// Only columns read from the file are shown; demographic columns only when
/// the city has them.
pub fn generate_rows(rows: &[TripRow], offset: usize, with_demographics: bool) -> String {
    let mut output = String::new();

    for (i, row) in rows.iter().enumerate() {
        let record = &row.record;
        output.push_str(&format!("\nTrip #{}\n", offset + i + 1));

        let mut fields: Vec<(&str, String)> = vec![
            (schema::START_TIME, record.start_time.format(schema::TIMESTAMP_FORMAT).to_string()),
            (schema::END_TIME, or_dash(record.end_time.as_deref())),
            (schema::TRIP_DURATION, record.trip_duration.to_string()),
            (schema::START_STATION, record.start_station.clone()),
            (schema::END_STATION, record.end_station.clone()),
            (schema::USER_TYPE, or_dash(record.user_type.as_deref())),
        ];
        if with_demographics {
            fields.push((schema::GENDER, or_dash(record.gender.as_deref())));
            fields.push((
                schema::BIRTH_YEAR,
                record
                    .birth_year
                    .map(|y| y.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ));
        }

        for (label, value) in fields {
            output.push_str(&format!("  {:<15}{}\n", format!("{}:", label), value));
        }
    }

    output
}

/// Two-column value/count listing, most frequent first.
fn generate_count_table(counts: &[(String, usize)]) -> String {
    let width = counts
        .iter()
        .map(|(value, _)| value.chars().count())
        .max()
        .unwrap_or(0);

    // `{:<width$}` pads by char count, matching the width above.
    counts
        .iter()
        .map(|(value, count)| format!("{:<width$}    {}\n", value, count, width = width))
        .collect()
}

fn section_header(title: &str) -> String {
    format!("\n{}\n\n", title)
}

fn section_footer(elapsed: Option<Duration>) -> String {
    match elapsed {
        Some(elapsed) => format!("\nThis took {:.4} seconds.\n{RULE}\n", elapsed.as_secs_f64()),
        None => format!("{RULE}\n"),
    }
}

fn no_data() -> String {
    format!("{}\n", NO_DATA)
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
