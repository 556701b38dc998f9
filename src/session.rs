//! Interactive session.
//!
//! Asks for the city and filters, prints every statistics section, offers
//! to page through the raw trips and to start over. Invalid answers are
//! re-asked without limit; end of input ends the session quietly.

use crate::analysis;
use crate::config::DisplayConfig;
use crate::data::{self, FilterCriteria, RecordSource, Table};
use crate::error::InvalidInput;
use crate::input::{self, CitySelection};
use crate::models::City;
use crate::report;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

const CITY_PROMPT: &str = "Please select a city: Chicago, New York City or Washington.\n";
const MONTH_PROMPT: &str =
    "Please select a month: january, february, march, april, may, june or all.\n";
const DAY_PROMPT: &str =
    "Please select a day: monday, tuesday, wednesday, thursday, friday, saturday, sunday or all.\n";
const FIRST_PAGE_PROMPT: &str = "\nWould you like to see some of the data? Enter yes or no.\n";
const NEXT_PAGE_PROMPT: &str = "\nWould you like to see more data? Enter yes or no.\n";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

/// One interactive run over an input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    source: RecordSource,
    display: DisplayConfig,
    show_progress: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
        source: RecordSource,
        display: DisplayConfig,
        show_progress: bool,
    ) -> Self {
        Self {
            input,
            output,
            source,
            display,
            show_progress,
        }
    }

    /// Run until the user declines to restart or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\nHello! Let's explore some US bikeshare data!")?;

        loop {
            let Some(criteria) = self.ask_filters()? else {
                return Ok(());
            };
            info!("Selected {:?}", criteria);

            let raw = self.source.load(criteria.city, self.show_progress)?;
            let table = data::apply(&raw, &criteria);

            self.write_report(&table, &criteria)?;

            if !self.page_rows(&table, criteria.city)? {
                return Ok(());
            }

            match self.ask(RESTART_PROMPT)? {
                Some(answer) if input::is_affirmative(&answer) => debug!("Restarting session"),
                _ => return Ok(()),
            }
        }
    }

    /// Ask for city, month and day, then print the selection banner.
    fn ask_filters(&mut self) -> Result<Option<FilterCriteria>> {
        let Some(city) = self.ask_city()? else {
            return Ok(None);
        };
        let Some(month) = self.ask_until_valid(MONTH_PROMPT, input::parse_month)? else {
            return Ok(None);
        };
        let Some(day) = self.ask_until_valid(DAY_PROMPT, input::parse_day)? else {
            return Ok(None);
        };

        let criteria = FilterCriteria { city, month, day };
        write!(self.output, "{}", report::generate_banner(&criteria))?;
        Ok(Some(criteria))
    }

    fn ask_city(&mut self) -> Result<Option<City>> {
        loop {
            let Some(answer) = self.ask(CITY_PROMPT)? else {
                return Ok(None);
            };

            match input::parse_city(&answer) {
                Ok(CitySelection::Exact(city)) => return Ok(Some(city)),
                Ok(CitySelection::Guess(city)) => {
                    let question =
                        format!("Do you want to see bikeshare data from {}? yes or no?\n", city);
                    let Some(confirmation) = self.ask(&question)? else {
                        return Ok(None);
                    };
                    if input::is_affirmative(&confirmation) {
                        return Ok(Some(city));
                    }
                    writeln!(self.output, "\nNo valid input!\n")?;
                }
                Err(e) => self.reject(&e)?,
            }
        }
    }

    /// Re-ask `prompt` until `parse` accepts the answer.
    fn ask_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T, InvalidInput>,
    ) -> Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.reject(&e)?,
            }
        }
    }

    fn reject(&mut self, reason: &InvalidInput) -> Result<()> {
        debug!("Rejected input: {:?}", reason);
        writeln!(self.output, "{}", reason)?;
        Ok(())
    }

    /// Print every statistics section for the filtered table.
    fn write_report(&mut self, table: &Table, criteria: &FilterCriteria) -> Result<()> {
        let city = criteria.city;

        let (time_stats, elapsed) = timed(|| analysis::time::compute(table));
        let section =
            report::generate_time_section(city, time_stats.as_ref(), self.timing(elapsed));
        write!(self.output, "{}", section)?;

        let (station_stats, elapsed) = timed(|| analysis::stations::compute(table));
        let section =
            report::generate_station_section(station_stats.as_ref(), self.timing(elapsed));
        write!(self.output, "{}", section)?;

        let (duration_stats, elapsed) = timed(|| analysis::duration::compute(table));
        let section =
            report::generate_duration_section(city, duration_stats.as_ref(), self.timing(elapsed));
        write!(self.output, "{}", section)?;

        let (user_stats, elapsed) =
            timed(|| analysis::users::compute(table, city.capabilities()));
        let section = report::generate_user_section(city, user_stats.as_ref(), self.timing(elapsed));
        write!(self.output, "{}", section)?;

        Ok(())
    }

    /// Offer the raw rows page by page.
    ///
    /// Returns `false` when input ended while paging.
    fn page_rows(&mut self, table: &Table, city: City) -> Result<bool> {
        let page_size = self.display.page_size.max(1);
        let with_demographics = city.capabilities().has_demographics;
        let mut prompt = FIRST_PAGE_PROMPT;
        let mut offset = 0;

        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(false);
            };
            if !input::is_affirmative(&answer) {
                return Ok(true);
            }

            let page = table.page(offset, page_size);
            write!(
                self.output,
                "{}",
                report::generate_rows(page, offset, with_demographics)
            )?;
            offset += page.len();

            if offset >= table.len() {
                writeln!(self.output, "\nYou have seen all of the data!")?;
                return Ok(true);
            }
            prompt = NEXT_PAGE_PROMPT;
        }
    }

    /// Show `prompt` and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn timing(&self, elapsed: Duration) -> Option<Duration> {
        self.display.show_timings.then_some(elapsed)
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
