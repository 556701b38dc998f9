//! Reading city trip files.
//!
//! Each city has one CSV file. The reader is strict: a row that cannot be
//! parsed aborts the load, since every statistic depends on the full set.

use super::schema;
use super::table::Table;
use crate::config::DataConfig;
use crate::error::DataError;
use crate::models::{City, CityCapabilities, TripRecord};
use chrono::NaiveDateTime;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Longest trip accepted, in seconds.
const MAX_TRIP_SECONDS: f64 = u32::MAX as f64;

/// Accepted range of birth years.
const BIRTH_YEARS: std::ops::RangeInclusive<f64> = 1.0..=9999.0;

/// One CSV row before type conversion.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Locates and loads the trip file of each city.
#[derive(Debug, Clone)]
pub struct RecordSource {
    data_dir: PathBuf,
    chicago: String,
    new_york_city: String,
    washington: String,
}

impl From<&DataConfig> for RecordSource {
    fn from(config: &DataConfig) -> Self {
        Self {
            data_dir: config.dir.clone(),
            chicago: config.chicago.clone(),
            new_york_city: config.new_york_city.clone(),
            washington: config.washington.clone(),
        }
    }
}

impl RecordSource {
    /// Path of the trip file for `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        let file = match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        };
        self.data_dir.join(file)
    }

    /// Load every trip of `city` into a table.
    pub fn load(&self, city: City, show_progress: bool) -> Result<Table, DataError> {
        let path = self.path_for(city);
        info!("Loading {} trips from {}", city, path.display());

        let file = File::open(&path).map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;

        let spinner = show_progress.then(|| loading_spinner(city));
        let result = read_trips(file, &path, city.capabilities());
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let records = result?;
        info!("Loaded {} trips for {}", records.len(), city);
        Ok(Table::from_records(records))
    }
}

fn loading_spinner(city: City) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Loading {} trip data...", city));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Parse trip rows from any CSV reader.
///
/// `path` is only used in error messages.
pub fn read_trips<R: Read>(
    reader: R,
    path: &Path,
    capabilities: CityCapabilities,
) -> Result<Vec<TripRecord>, DataError> {
    let csv_error = |source: csv::Error| DataError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?.clone();
    let mut expected: Vec<&'static str> = schema::REQUIRED.to_vec();
    if capabilities.has_demographics {
        expected.extend(schema::DEMOGRAPHIC);
    }
    for column in expected {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }
    debug!("Header of {}: {:?}", path.display(), headers);

    let mut records = Vec::new();
    for (index, row) in rdr.deserialize::<RawTrip>().enumerate() {
        let raw = row.map_err(csv_error)?;
        // Line 1 is the header.
        let line = index as u64 + 2;
        records.push(convert(raw, path, line, capabilities)?);
    }

    Ok(records)
}

fn convert(
    raw: RawTrip,
    path: &Path,
    line: u64,
    capabilities: CityCapabilities,
) -> Result<TripRecord, DataError> {
    let start_time = NaiveDateTime::parse_from_str(&raw.start_time, schema::TIMESTAMP_FORMAT)
        .map_err(|_| DataError::InvalidTimestamp {
            path: path.to_path_buf(),
            line,
            value: raw.start_time.clone(),
        })?;

    let trip_duration = parse_number(&raw.trip_duration)
        .filter(|secs| (0.0..=MAX_TRIP_SECONDS).contains(secs))
        .map(|secs| secs.round() as u64)
        .ok_or_else(|| DataError::InvalidNumber {
            path: path.to_path_buf(),
            line,
            column: schema::TRIP_DURATION,
            value: raw.trip_duration.clone(),
        })?;

    let (gender, birth_year) = if capabilities.has_demographics {
        let birth_year = match present(raw.birth_year) {
            Some(text) => Some(
                parse_number(&text)
                    .map(f64::round)
                    .filter(|year| BIRTH_YEARS.contains(year))
                    .map(|year| year as i32)
                    .ok_or_else(|| DataError::InvalidNumber {
                        path: path.to_path_buf(),
                        line,
                        column: schema::BIRTH_YEAR,
                        value: text.clone(),
                    })?,
            ),
            None => None,
        };
        (present(raw.gender), birth_year)
    } else {
        (None, None)
    };

    Ok(TripRecord {
        start_time,
        end_time: present(raw.end_time),
        trip_duration,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: present(raw.user_type),
        gender,
        birth_year,
    })
}

/// Treat blank cells as missing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Integers and decimals both occur in numeric columns (`600`, `1561.683`,
/// `1985.0`).
fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn fixtures_source() -> RecordSource {
        RecordSource::from(&DataConfig {
            dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures")),
            chicago: "chicago_sample.csv".to_string(),
            new_york_city: "missing_nyc.csv".to_string(),
            washington: "washington_sample.csv".to_string(),
        })
    }

    fn read_str(csv: &str, capabilities: CityCapabilities) -> Result<Vec<TripRecord>, DataError> {
        read_trips(csv.as_bytes(), Path::new("inline.csv"), capabilities)
    }

    const WITH_DEMOGRAPHICS: CityCapabilities = CityCapabilities {
        has_demographics: true,
    };
    const WITHOUT_DEMOGRAPHICS: CityCapabilities = CityCapabilities {
        has_demographics: false,
    };

    #[test]
    fn test_path_for_uses_configured_names() {
        let source = fixtures_source();
        assert!(source
            .path_for(City::Chicago)
            .ends_with("fixtures/chicago_sample.csv"));
        assert!(source
            .path_for(City::Washington)
            .ends_with("fixtures/washington_sample.csv"));
    }

    #[test]
    fn test_load_chicago_fixture() {
        let table = fixtures_source().load(City::Chicago, false).unwrap();
        assert_eq!(table.len(), 8);

        let first = &table[0].record;
        assert_eq!(first.start_station, "Clark St & Lake St");
        assert_eq!(first.end_station, "Wells St & Elm St");
        assert_eq!(first.trip_duration, 600);
        assert_eq!(first.end_time.as_deref(), Some("2017-01-02 08:15:00"));
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1985));

        let customer = &table[2].record;
        assert_eq!(customer.user_type.as_deref(), Some("Customer"));
        assert_eq!(customer.gender, None);
        assert_eq!(customer.birth_year, None);
    }

    #[test]
    fn test_load_washington_fixture_rounds_durations() {
        let table = fixtures_source().load(City::Washington, false).unwrap();
        let durations: Vec<u64> = table.iter().map(|r| r.record.trip_duration).collect();
        assert_eq!(durations, vec![1562, 359, 1200, 600]);
        assert!(table.iter().all(|r| r.record.gender.is_none()));
        assert!(table.iter().all(|r| r.record.birth_year.is_none()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = fixtures_source().load(City::NewYorkCity, false).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains("missing_nyc.csv"));
    }

    #[test]
    fn test_missing_demographic_column() {
        let csv = "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
                   2017-01-02 08:05:00,2017-01-02 08:15:00,600,A,B,Subscriber\n";

        let err = read_str(csv, WITH_DEMOGRAPHICS).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingColumn {
                column: "Gender",
                ..
            }
        ));

        let records = read_str(csv, WITHOUT_DEMOGRAPHICS).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Start Time,Start Station,End Station,User Type\n\
                   2017-01-02 08:05:00,A,B,Subscriber\n";
        let err = read_str(csv, WITHOUT_DEMOGRAPHICS).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingColumn {
                column: "Trip Duration",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_timestamp_reports_line() {
        let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                   2017-01-02 08:05:00,600,A,B,Subscriber\n\
                   not a time,600,A,B,Subscriber\n";
        let err = read_str(csv, WITHOUT_DEMOGRAPHICS).unwrap_err();
        match err {
            DataError::InvalidTimestamp { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "not a time");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_duration() {
        let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                   2017-01-02 08:05:00,ten,A,B,Subscriber\n";
        let err = read_str(csv, WITHOUT_DEMOGRAPHICS).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidNumber {
                column: "Trip Duration",
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_numbers_are_rejected() {
        let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
                   2017-01-02 08:05:00,600,A,B,Customer\n\
                   2017-01-02 09:05:00,1e300,A,B,Customer\n";
        let err = read_str(csv, WITHOUT_DEMOGRAPHICS).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidNumber {
                column: "Trip Duration",
                line: 3,
                ..
            }
        ));

        let csv = "Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n\
                   2017-01-02 08:05:00,600,A,B,Subscriber,Male,1e12\n";
        let err = read_str(csv, WITH_DEMOGRAPHICS).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidNumber {
                column: "Birth Year",
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_blank_cells_are_missing_values() {
        let csv = "Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n\
                   2017-01-02 08:05:00,600,A,B,,,\n\
                   2017-01-02 09:05:00,600,A,B,Customer,Female,1984.0\n";
        let records = read_str(csv, WITH_DEMOGRAPHICS).unwrap();
        assert_eq!(records[0].user_type, None);
        assert_eq!(records[0].gender, None);
        assert_eq!(records[0].birth_year, None);
        assert_eq!(records[0].end_time, None);
        assert_eq!(records[1].birth_year, Some(1984));
    }

    #[test]
    fn test_load_from_temp_dir() {
        let dir = TempDir::new().unwrap();
        let mut file = File::create(dir.path().join("dc.csv")).unwrap();
        writeln!(file, "Start Time,Trip Duration,Start Station,End Station,User Type").unwrap();
        writeln!(file, "2017-04-01 10:00:00,61.5,X,Y,Customer").unwrap();

        let source = RecordSource::from(&DataConfig {
            dir: dir.path().to_path_buf(),
            washington: "dc.csv".to_string(),
            ..DataConfig::default()
        });
        let table = source.load(City::Washington, false).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].record.trip_duration, 62);
        assert_eq!(table[0].hour, 10);
    }
}
