//! Conversion entry points and the almanac they produce.

use tracing::debug;

use crate::chinese::festival::{self, Festivals};
use crate::chinese::sexagenary::{self, FourPillars};
use crate::chinese::solar_term::SolarTermTable;
use crate::chinese::table::LunarYearTable;
use crate::chinese::time_period::{self, TIME_PERIODS, TimePeriod};
use crate::chinese::{LunarDate, convert, fmt};
use crate::date::{Date, SolarDate, TimeOfDay};
use crate::error::{Error, Result};

/// Gregorian side of an [`Almanac`].
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolarInfo {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 日, 一 … 六
    pub week_day: &'static str,
    pub time: Option<TimeOfDay>,
}

impl SolarInfo {
    /// The Gregorian instant this describes.
    pub fn solar_date(&self) -> Result<SolarDate> {
        let date = SolarDate::new(self.year, self.month, self.day)?;
        Ok(match self.time {
            Some(time) => date.at(time),
            None => date,
        })
    }
}

/// Lunar side of an [`Almanac`].
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunarInfo {
    pub date: LunarDate,
    pub month_name: String,
    pub day_name: String,
    pub zodiac: &'static str,
}

impl TryFrom<LunarDate> for LunarInfo {
    type Error = Error;

    fn try_from(date: LunarDate) -> Result<Self> {
        Ok(Self {
            date,
            month_name: date.month_name()?,
            day_name: date.day_name()?,
            zodiac: date.zodiac(),
        })
    }
}

/// Everything known about one instant.
///
/// From [`Calendar::solar_to_lunar`], `solar` is the Gregorian day as given.
/// When the time of day falls at 23:00 or later, `lunar` and `pillars` belong
/// to the following day, as the 子 period starts the new day.
///
/// From [`Calendar::lunar_to_solar`], `solar` is the computed Gregorian day of
/// `lunar` and `pillars` are those of that day, whatever the time.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Almanac {
    pub solar: SolarInfo,
    pub lunar: LunarInfo,
    pub pillars: FourPillars,
    /// `None` when no time of day was given.
    pub time_period: Option<TimePeriod>,
    pub festivals: Festivals,
    /// Name of the solar term falling on the Gregorian day, if any.
    pub solar_term: Option<&'static str>,
}

/// Converter holding the tables it computes with.
///
/// All tables are `'static` and read-only, so a `Calendar` is `Copy` and can
/// be shared freely between threads.
///
/// # Example
///
/// ```
/// use nongli::{Calendar, SolarDate};
///
/// let calendar = Calendar::default();
/// let almanac = calendar
///     .solar_to_lunar(SolarDate::with_time(2020, 1, 25, 12, 30, 0).unwrap())
///     .unwrap();
///
/// assert_eq!("正月", almanac.lunar.month_name);
/// assert_eq!("初一", almanac.lunar.day_name);
/// assert_eq!("鼠", almanac.lunar.zodiac);
/// assert_eq!("丙午", almanac.pillars.hour.unwrap().name());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Calendar {
    years: LunarYearTable,
    terms: SolarTermTable,
    periods: &'static [TimePeriod; 12],
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            years: LunarYearTable::default(),
            terms: SolarTermTable::default(),
            periods: &TIME_PERIODS,
        }
    }
}

/// Builds a [`Calendar`] with replacement tables. Unset tables keep the
/// built-in defaults.
#[derive(Debug, Copy, Clone, Default)]
pub struct CalendarBuilder {
    calendar: Calendar,
}

impl CalendarBuilder {
    pub fn year_table(mut self, years: LunarYearTable) -> Self {
        self.calendar.years = years;
        self
    }
    pub fn solar_terms(mut self, terms: SolarTermTable) -> Self {
        self.calendar.terms = terms;
        self
    }
    pub fn time_periods(mut self, periods: &'static [TimePeriod; 12]) -> Self {
        self.calendar.periods = periods;
        self
    }
    pub fn build(self) -> Calendar {
        self.calendar
    }
}

impl Calendar {
    pub fn builder() -> CalendarBuilder {
        CalendarBuilder::default()
    }

    pub fn year_table(&self) -> &LunarYearTable {
        &self.years
    }
    pub fn solar_terms(&self) -> &SolarTermTable {
        &self.terms
    }

    /// Converts a Gregorian date, with optional time of day, to its almanac.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the (rolled-over) day is not within lunar
    /// years covered by the year table.
    pub fn solar_to_lunar(&self, solar: SolarDate) -> Result<Almanac> {
        let given = solar
            .date()
            .ok_or_else(|| Error::InvalidDate(solar.to_string()))?;
        let date = time_period::effective_date(&solar).unwrap_or(given);
        if date != given {
            debug!(%solar, next_day = %date.iso_gregorian(), "late 子 hour, rolling over");
        }

        let lunar = convert::solar_to_lunar(&self.years, date)?;
        debug!(%solar, %lunar, "solar_to_lunar");
        self.almanac(solar, given, date, lunar)
    }

    /// Converts a lunar date, with optional time of day, to its almanac.
    ///
    /// `almanac.solar` is the Gregorian day of `lunar` whatever the time, and
    /// the pillars are those of that day. See
    /// [`lunar_to_solar_instant`](Self::lunar_to_solar_instant) for placing a
    /// 23:xx time on the previous evening instead.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::{Calendar, LunarDate, TimeOfDay};
    ///
    /// let calendar = Calendar::default();
    /// let almanac = calendar
    ///     .lunar_to_solar(LunarDate::new(2012, 4, 7, true), None)
    ///     .unwrap();
    /// assert_eq!((2012, 5, 27), (almanac.solar.year, almanac.solar.month, almanac.solar.day));
    ///
    /// let late = TimeOfDay::new(23, 15, 0).unwrap();
    /// let almanac = calendar
    ///     .lunar_to_solar(LunarDate::new(2012, 4, 7, true), Some(late))
    ///     .unwrap();
    /// assert_eq!((5, 27), (almanac.solar.month, almanac.solar.day));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::AmbiguousLeapMonth`] if `lunar` is marked leap but its month
    /// is not the leap month of that year, [`Error::InvalidLunarDate`] if the
    /// month or day does not exist, [`Error::OutOfRange`] if the year is not
    /// in the year table.
    pub fn lunar_to_solar(&self, lunar: LunarDate, time: Option<TimeOfDay>) -> Result<Almanac> {
        let date = convert::lunar_to_solar(&self.years, lunar)?;
        let solar = SolarDate::from_date(date, time);
        debug!(%lunar, %solar, "lunar_to_solar");
        self.almanac(solar, date, date, lunar)
    }

    /// Like [`lunar_to_solar`](Self::lunar_to_solar), but a time at 23:00 or
    /// later is placed on the evening of the previous Gregorian day, the
    /// instant at which the 子 period of `lunar` begins. Converting
    /// `almanac.solar` back with [`solar_to_lunar`](Self::solar_to_lunar)
    /// yields the same almanac.
    ///
    /// # Example
    ///
    /// ```
    /// use nongli::{Calendar, LunarDate, TimeOfDay};
    ///
    /// let calendar = Calendar::default();
    /// let late = TimeOfDay::new(23, 15, 0).unwrap();
    /// let almanac = calendar
    ///     .lunar_to_solar_instant(LunarDate::new(2012, 4, 7, true), Some(late))
    ///     .unwrap();
    /// assert_eq!((5, 26), (almanac.solar.month, almanac.solar.day));
    ///
    /// let back = calendar.solar_to_lunar(almanac.solar.solar_date().unwrap()).unwrap();
    /// assert_eq!(almanac, back);
    /// ```
    ///
    /// # Errors
    ///
    /// As [`lunar_to_solar`](Self::lunar_to_solar).
    pub fn lunar_to_solar_instant(
        &self,
        lunar: LunarDate,
        time: Option<TimeOfDay>,
    ) -> Result<Almanac> {
        let date = convert::lunar_to_solar(&self.years, lunar)?;
        let given = match time {
            Some(t) if t.hour == 23 => date + -1,
            _ => date,
        };
        let solar = SolarDate::from_date(given, time);
        debug!(%lunar, %solar, "lunar_to_solar_instant");
        self.almanac(solar, given, date, lunar)
    }

    /// The time period containing `hour`, looked up in this calendar's table.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDate`] if `hour` is past 23 or no period of the table
    /// contains it.
    pub fn time_period(&self, hour: u32) -> Result<&'static TimePeriod> {
        time_period::resolve(self.periods, hour)
            .ok_or_else(|| Error::InvalidDate(format!("no time period contains hour {hour}")))
    }

    /// `given` is the Gregorian day reported in `solar`, `date` the day the
    /// lunar date and pillars are computed for.
    fn almanac(
        &self,
        solar: SolarDate,
        given: Date,
        date: Date,
        lunar: LunarDate,
    ) -> Result<Almanac> {
        let time_period = solar
            .time()
            .map(|t| self.time_period(t.hour).copied())
            .transpose()?;
        let pillars =
            sexagenary::four_pillars(&self.terms, date, time_period.map(|p| p.branch))?;
        let festivals = festival::festivals(&self.years, solar.month(), solar.day(), lunar)?;
        let solar_term = self
            .terms
            .term_on(solar.year(), solar.month(), solar.day())?
            .map(fmt::solar_term);

        Ok(Almanac {
            solar: SolarInfo {
                year: solar.year(),
                month: solar.month(),
                day: solar.day(),
                week_day: fmt::week_day(given.day_of_week()),
                time: solar.time(),
            },
            lunar: lunar.try_into()?,
            pillars,
            time_period,
            festivals,
            solar_term,
        })
    }
}
