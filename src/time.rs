use crate::error::StatsError;
use chrono::{NaiveDate, NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 1440;

const DATE_FORMAT: &str = "%d.%m.%y";
const TIME_FORMAT: &str = "%H:%M";

/// Elapsed flight time in whole minutes.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct Minutes(pub u64);

impl std::fmt::Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours = self.0 / 60;
        let mins = self.0 % 60;
        write!(f, "{}h {:02}m", hours, mins)
    }
}

fn invalid(field: &'static str, value: &str) -> StatsError {
    StatsError::InvalidTimestamp {
        field,
        value: value.to_string(),
    }
}

// chrono skips whitespace ahead of numeric items, so padding is rejected up front.
fn is_padded(value: &str) -> bool {
    value.trim() != value
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, StatsError> {
    if is_padded(value) {
        return Err(invalid(field, value));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid(field, value))
}

fn parse_clock(field: &'static str, value: &str) -> Result<i64, StatsError> {
    if is_padded(value) {
        return Err(invalid(field, value));
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map(|t| i64::from(t.num_seconds_from_midnight() / 60))
        .map_err(|_| invalid(field, value))
}

/// Minutes between a departure and an arrival given as `dd.mm.yy` dates and `HH:MM` clocks.
///
/// The day offset comes from the dates alone. An arrival clock earlier than the departure
/// clock on the same date is an [`StatsError::InvalidInterval`], not an overnight flight.
pub fn duration(
    departure_date: &str,
    departure_time: &str,
    arrival_date: &str,
    arrival_time: &str,
) -> Result<Minutes, StatsError> {
    let dep_date = parse_date("departure_date", departure_date)?;
    let arr_date = parse_date("arrival_date", arrival_date)?;
    let dep_minutes = parse_clock("departure_time", departure_time)?;
    let arr_minutes = parse_clock("arrival_time", arrival_time)?;

    let days_between = (arr_date - dep_date).num_days();
    let total = arr_minutes + days_between * MINUTES_PER_DAY - dep_minutes;

    u64::try_from(total)
        .map(Minutes)
        .map_err(|_| StatsError::InvalidInterval {
            departure: format!("{} {}", departure_date, departure_time),
            arrival: format!("{} {}", arrival_date, arrival_time),
        })
}
