//! Calendar-independant date, and the Gregorian input type built on it.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{Error, Result};

/// A calendar-independant date.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub const fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc. The fields are not validated; use [`SolarDate`] for
    /// checked input.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        let (y, m, d) = (year, month, day);
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = i64::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn % 7 + 1) as i32
    }
    /// Returns the position of the date in the sexagenary day cycle, numbered
    /// from 0 (甲子) to 59 (癸亥).
    ///
    /// 1900-01-01 is 甲戌 (10); every other day follows from that anchor.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(54, date.sexagenary()); // 戊午
    /// ```
    pub fn sexagenary(&self) -> u32 {
        (self.jdn + 49) % 60
    }
}

impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(if rhs >= 0 {
            self.jdn + rhs as u32
        } else {
            self.jdn - rhs.wrapping_neg() as u32
        })
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Wall-clock time of day, second precision.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    /// Checks and creates a time of day.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(23, 59, 59).is_ok());
    /// assert!(TimeOfDay::new(24, 0, 0).is_err());
    /// ```
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self::from)
            .ok_or_else(|| {
                Error::InvalidDate(format!("{:02}:{:02}:{:02}", hour, minute, second))
            })
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// A checked Gregorian date with an optional time of day.
///
/// Every `SolarDate` names a day that exists in the proleptic Gregorian
/// calendar; malformed input is rejected with [`Error::InvalidDate`] when the
/// value is built.
///
/// # Example
///
/// ```
/// use nongli::SolarDate;
///
/// let a = SolarDate::with_time(2023, 12, 25, 23, 30, 0).unwrap();
/// let b: SolarDate = "2023-12-25 23:30".parse().unwrap();
/// assert_eq!(a, b);
///
/// assert!(SolarDate::new(2023, 2, 29).is_err());
/// assert!("yesterday".parse::<SolarDate>().is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolarDate {
    year: i32,
    month: u32,
    day: u32,
    time: Option<TimeOfDay>,
}

impl SolarDate {
    /// Creates a date without time of day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or_else(|| Error::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))
    }
    /// Creates a date with time of day.
    pub fn with_time(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        Ok(Self::new(year, month, day)?.at(TimeOfDay::new(hour, minute, second)?))
    }
    /// Creates a `SolarDate` on the Gregorian day of `date`.
    pub fn from_date(date: Date, time: Option<TimeOfDay>) -> Self {
        let (year, month, day) = date.gregorian();
        Self {
            year,
            month: month as u32,
            day: day as u32,
            time,
        }
    }
    /// Replaces the time of day.
    pub fn at(self, time: TimeOfDay) -> Self {
        Self {
            time: Some(time),
            ..self
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn day(&self) -> u32 {
        self.day
    }
    pub fn time(&self) -> Option<TimeOfDay> {
        self.time
    }
    /// The calendar day as a [`Date`].
    ///
    /// Returns `None` before January 1, 4713 BC (Julian).
    pub fn date(&self) -> Option<Date> {
        Date::from_gregorian(self.year, self.month as i32, self.day as i32)
    }
}

impl From<NaiveDate> for SolarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            time: None,
        }
    }
}

impl From<NaiveDateTime> for SolarDate {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from(dt.date()).at(dt.time().into())
    }
}

impl FromStr for SolarDate {
    type Err = Error;

    /// Accepts `YYYY-MM-DD`, optionally followed by ` HH:MM[:SS]` or
    /// `THH:MM[:SS]`.
    fn from_str(s: &str) -> Result<Self> {
        const DATE_TIME_FORMATS: &[&str] = &[
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%d %H:%M",
            "%Y-%m-%dT%H:%M",
        ];
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(date.into());
        }
        DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self::from)
            .ok_or_else(|| Error::InvalidDate(format!("cannot parse {:?}", s)))
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if let Some(time) = self.time {
            write!(f, " {}", time)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let date = Date::from_jdn(2440588);
        assert_eq!(2440588, date.jdn());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(2440588, date.jdn());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(2459466, date.jdn());
        let date = Date::from_gregorian(1900, 1, 31).unwrap();
        assert_eq!(2415051, date.jdn());
    }

    #[test]
    fn to_gregorian() {
        let date = Date::from_jdn(2440588);
        assert_eq!((1970, 1, 1), date.gregorian());
        let date = Date::from_jdn(2459466);
        assert_eq!((2021, 9, 8), date.gregorian());
        let date = Date::from_jdn(2451545);
        assert_eq!((2000, 1, 1), date.gregorian());
    }

    #[test]
    fn to_day_of_week() {
        let date = Date::from_gregorian(1970, 1, 1).unwrap();
        assert_eq!(4, date.day_of_week());
        let date = Date::from_gregorian(2021, 9, 8).unwrap();
        assert_eq!(3, date.day_of_week());
    }

    #[test]
    fn to_sexagenary() {
        for (std, (y, m, d)) in [
            (10, (1900, 1, 1)),
            (17, (1970, 1, 1)),
            (55, (2021, 9, 8)),
            (3, (2020, 1, 25)),
            (29, (1980, 3, 21)),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(std, date.sexagenary(), "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2020, 2, 28).unwrap();
        assert_eq!("2020-03-01", (date + 2).iso_gregorian());
        assert_eq!("2019-12-31", (date + -59).iso_gregorian());
        assert_eq!(59, date - Date::from_gregorian(2019, 12, 31).unwrap());
    }

    #[test]
    fn solar_date_checks_fields() {
        assert!(SolarDate::new(2024, 2, 29).is_ok());
        for (y, m, d) in [(2023, 2, 29), (2024, 13, 1), (2024, 0, 1), (2024, 4, 31)] {
            assert!(
                matches!(SolarDate::new(y, m, d), Err(Error::InvalidDate(_))),
                "{y}-{m}-{d}"
            );
        }
        assert!(matches!(
            SolarDate::with_time(2024, 1, 1, 24, 0, 0),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn solar_date_parse() {
        let time = |h, m, s| Some(TimeOfDay::new(h, m, s).unwrap());
        for (std, s) in [
            ((2020, 1, 25, None), "2020-01-25"),
            ((2020, 1, 25, time(12, 30, 0)), "2020-01-25 12:30"),
            ((2020, 1, 25, time(12, 30, 15)), "2020-01-25T12:30:15"),
            ((1980, 3, 21, time(23, 30, 35)), " 1980-03-21 23:30:35 "),
        ] {
            let date: SolarDate = s.parse().unwrap();
            assert_eq!(std, (date.year(), date.month(), date.day(), date.time()));
        }
        for s in ["", "invalid", "2020-02-30", "2020-01-25 25:00"] {
            assert!(matches!(s.parse::<SolarDate>(), Err(Error::InvalidDate(_))), "{s:?}");
        }
    }

    #[test]
    fn solar_date_display() {
        let date = SolarDate::new(2012, 4, 7).unwrap();
        assert_eq!("2012-04-07", date.to_string());
        let date = SolarDate::with_time(2012, 4, 7, 9, 5, 0).unwrap();
        assert_eq!("2012-04-07 09:05:00", date.to_string());
    }

    #[test]
    fn from_chrono() {
        let dt = NaiveDate::from_ymd_opt(2024, 12, 28)
            .unwrap()
            .and_hms_opt(15, 45, 30)
            .unwrap();
        let date = SolarDate::from(dt);
        assert_eq!(
            Some(TimeOfDay {
                hour: 15,
                minute: 45,
                second: 30
            }),
            date.time()
        );
        assert_eq!("2024-12-28", date.date().unwrap().iso_gregorian());
    }
}
