//! Errors returned by conversions.

/// Everything that can go wrong while converting a date.
///
/// Conversions are pure, so errors are never transient: the same input always
/// fails the same way, and no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is not a well-formed Gregorian date or time of day.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The year lies outside the supported tables.
    #[error("year {year} out of supported range {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },

    /// A leap month was requested for a month that is not leap in that year.
    #[error("month {month} of {year} is not a leap month (leap month: {leap_month})")]
    AmbiguousLeapMonth { year: i32, month: u32, leap_month: u32 },

    /// The lunar month or day does not exist.
    #[error("invalid lunar date {year}-{month}-{day}")]
    InvalidLunarDate { year: i32, month: u32, day: u32 },

    /// Solar terms are numbered `0..24`.
    #[error("solar term {0} not in 0..24")]
    InvalidSolarTerm(u32),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
