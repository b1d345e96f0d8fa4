//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序採用預製的農曆年表（見 [`table`]）推算 1900 至 2100 年的夏曆日期，
//! 並以近似公式估算節氣（見 [`solar_term`]），據以排定八字四柱（見 [`sexagenary`]）。

pub mod convert;
pub mod festival;
pub mod fmt;
pub mod sexagenary;
pub mod solar_term;
pub mod table;
pub mod time_period;

use crate::error::{Error, Result};

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，正月、腊月等特稱見 [`fmt::month`]；月序號不在 `1..=12` 間者為 `None`。
    pub fn name(&self) -> Option<String> {
        (1..=12).contains(&self.num()).then(|| fmt::month(*self))
    }
}

/// 農曆日期。
///
/// 構造時不作檢查；是否為實際存在的日期由 [`convert::validate`] 判定。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{LunarDate, Month::*};
///
/// let date = LunarDate::new(2012, 4, 7, true);
/// assert_eq!(Leap(4), date.month);
/// assert_eq!(Ok("闰四月".to_owned()), date.month_name());
/// assert_eq!(Ok("初七".to_owned()), date.day_name());
/// assert_eq!("龙", date.zodiac());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunarDate {
    pub year: i32,
    pub month: Month,
    pub day: u32,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, is_leap: bool) -> Self {
        let month = if is_leap {
            Month::Leap(month)
        } else {
            Month::Common(month)
        };
        Self { year, month, day }
    }

    pub fn is_leap_month(&self) -> bool {
        self.month.is_leap()
    }

    /// 月名。
    ///
    /// # Errors
    ///
    /// 若月序號不在 `1..=12` 間則返回 [`Error::InvalidLunarDate`]；
    /// 經 [`convert`] 得到或檢查過的日期不會出現此情況。
    pub fn month_name(&self) -> Result<String> {
        self.month.name().ok_or_else(|| self.invalid())
    }

    /// 日名。
    ///
    /// # Errors
    ///
    /// 若日序號不在 `1..=30` 間則返回 [`Error::InvalidLunarDate`]。
    pub fn day_name(&self) -> Result<String> {
        if !(1..=30).contains(&self.day) {
            return Err(self.invalid());
        }
        Ok(fmt::day(self.day))
    }

    fn invalid(&self) -> Error {
        Error::InvalidLunarDate {
            year: self.year,
            month: self.month.num(),
            day: self.day,
        }
    }

    /// 該年生肖，1900 年為鼠。
    pub fn zodiac(&self) -> &'static str {
        fmt::ZODIAC[(self.year - table::FIRST_YEAR).rem_euclid(12) as usize]
    }

    /// 以預設年表檢查日期是否存在。
    pub fn validate(&self) -> Result<()> {
        convert::validate(&table::LunarYearTable::default(), *self)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month() { "闰" } else { "" };
        write!(f, "{}-{}{:02}-{:02}", self.year, leap, self.month.num(), self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months() {
        use Month::*;
        assert_eq!((4, false), (Common(4).num(), Common(4).is_leap()));
        assert_eq!((6, true), (Leap(6).num(), Leap(6).is_leap()));
        assert_eq!(Some("腊月".to_owned()), Common(12).name());
        assert_eq!(None, Common(13).name());
        assert_eq!(None, Leap(0).name());
    }

    #[test]
    fn names_of_nonexistent_dates() {
        let err = |month, day| Err(Error::InvalidLunarDate { year: 2020, month, day });
        for (std, date) in [
            (err(13, 1), LunarDate::new(2020, 13, 1, false)),
            (err(0, 1), LunarDate::new(2020, 0, 1, true)),
        ] {
            assert_eq!(std, date.month_name(), "{date}");
        }
        for (std, date) in [
            (err(1, 31), LunarDate::new(2020, 1, 31, false)),
            (err(1, 0), LunarDate::new(2020, 1, 0, false)),
        ] {
            assert_eq!(std, date.day_name(), "{date}");
        }
        assert_eq!(Ok("三十".to_owned()), LunarDate::new(2020, 13, 30, false).day_name());
    }

    #[test]
    fn zodiac() {
        for (std, year) in [
            ("鼠", 1900),
            ("猴", 1980),
            ("龙", 2000),
            ("鼠", 2020),
            ("牛", 2021),
            ("蛇", 2025),
            ("猴", 2100),
        ] {
            assert_eq!(std, LunarDate::new(year, 1, 1, false).zodiac(), "{year}");
        }
    }

    #[test]
    fn display() {
        assert_eq!("2020-01-01", LunarDate::new(2020, 1, 1, false).to_string());
        assert_eq!("2017-闰06-01", LunarDate::new(2017, 6, 1, true).to_string());
    }

    #[test]
    fn validate() {
        assert!(LunarDate::new(2012, 4, 29, true).validate().is_ok());
        assert!(LunarDate::new(2012, 5, 1, true).validate().is_err());
    }
}
