use std::error::Error;
use std::fmt::Display;

use datetime::{DatePiece, LocalDate, Month};
use regex::Regex;

#[derive(Debug)]
pub struct DateParseError {
    reason: String,
}

impl Error for DateParseError {}
impl Display for DateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Left-pads a calendar field with a single `0` when it renders as one digit.
/// Anything wider comes back unchanged.
pub fn pad(value: usize) -> String {
    let digits = value.to_string();
    if digits.len() == 1 {
        return String::from("0") + digits.as_str();
    }
    return digits;
}

pub fn to_iso_date_string(date: &LocalDate) -> String {
    return format!(
        "{}-{}-{}",
        date.year(),
        pad(date.month().months_from_january() + 1),
        pad(date.day() as usize)
    );
}

// Keeps LocalDate::ymd clear of its day-count overflow.
pub const MAX_YEAR: i64 = 999_999;

/// Parses `YYYY-M-D`, with or without zero padding on month and day.
pub fn parse_date(input: &str) -> anyhow::Result<LocalDate> {
    let shape = Regex::new(r"^([0-9]{4,})-([0-9]{1,2})-([0-9]{1,2})$")?;
    let captures = match shape.captures(input.trim()) {
        Some(c) => c,
        None => {
            return Err(anyhow::Error::new(DateParseError {
                reason: format!("expected a date like 2024-01-05, got {:?}", input),
            }));
        }
    };

    let not_a_date = || {
        anyhow::Error::new(DateParseError {
            reason: format!("{:?} is not a calendar date", input),
        })
    };
    let year: i64 = captures[1].parse().map_err(|_| not_a_date())?;
    let month: i8 = captures[2].parse().map_err(|_| not_a_date())?;
    let day: i8 = captures[3].parse().map_err(|_| not_a_date())?;

    if year > MAX_YEAR {
        return Err(not_a_date());
    }
    let month = Month::from_one(month).map_err(|_| not_a_date())?;
    return LocalDate::ymd(year, month, day).map_err(|_| not_a_date());
}
