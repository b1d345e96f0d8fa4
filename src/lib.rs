//! Conversion between Gregorian dates and the Chinese lunisolar calendar.
//!
//! Lunar dates are computed from a precompiled month-length table covering
//! lunar years 1900 to 2100. Alongside the lunar date, every conversion
//! derives the sexagenary year, month, day and hour pillars (八字), the
//! two-hour time period (时辰), festivals and the solar term of the day.
//!
//! Solar terms are estimated with a closed-form approximation rather than an
//! ephemeris, so the year and month pillars of a day adjacent to a solar term
//! may be off by one. See [`chinese::solar_term`].
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Gregorian to lunar:
//!
//! ```
//! use nongli::chinese::Month::*;
//!
//! let almanac = nongli::solar_to_lunar("2017-07-23 08:00".parse().unwrap()).unwrap();
//!
//! assert_eq!(Leap(6), almanac.lunar.date.month);
//! assert_eq!("闰六月初一", almanac.lunar.month_name + &almanac.lunar.day_name);
//! assert_eq!("丁酉", almanac.pillars.year.name());
//! assert_eq!(Some("辰时"), almanac.time_period.map(|p| p.name));
//! ```
//!
//! Lunar to Gregorian:
//!
//! ```
//! use nongli::LunarDate;
//!
//! let almanac = nongli::lunar_to_solar(LunarDate::new(2020, 8, 15, false), None).unwrap();
//!
//! assert_eq!((2020, 10, 1), (almanac.solar.year, almanac.solar.month, almanac.solar.day));
//! assert_eq!(Some("中秋节"), almanac.festivals.lunar.map(|f| f.name));
//! ```

pub mod calendar;
pub mod chinese;
pub mod date;
pub mod error;

pub use calendar::{Almanac, Calendar, CalendarBuilder, LunarInfo, SolarInfo};
pub use chinese::{LunarDate, Month};
pub use date::{Date, SolarDate, TimeOfDay};
pub use error::{Error, Result};

/// Converts with the built-in tables. See [`Calendar::solar_to_lunar`].
pub fn solar_to_lunar(solar: SolarDate) -> Result<Almanac> {
    Calendar::default().solar_to_lunar(solar)
}

/// Converts with the built-in tables. See [`Calendar::lunar_to_solar`].
pub fn lunar_to_solar(lunar: LunarDate, time: Option<TimeOfDay>) -> Result<Almanac> {
    Calendar::default().lunar_to_solar(lunar, time)
}
