//! 干支與八字
//!
//! 年柱以立春為界，月柱以十二「節」為界（節氣序號 0, 2, …, 22，每公曆月一個），
//! 日柱逐日循環，時柱由日干及時辰地支推得（五鼠遁）。
//!
//! 立春及各節的日期取自 [`super::solar_term`] 的近似估算，交節當日前後的年柱、月柱或有一日之差。

use std::fmt;

use crate::date::Date;
use crate::error::Result;

use super::fmt::{BRANCHES, STEMS};
use super::solar_term::{self, SolarTermTable};

/// 一柱干支，以六十甲子序號表示，0 為甲子。
///
/// # 用例
///
/// ```
/// use nongli::chinese::sexagenary::Pillar;
///
/// let p = Pillar::from_cycle(36);
/// assert_eq!((6, 0), (p.stem(), p.branch()));
/// assert_eq!("庚子", p.name());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pillar {
    cycle: u32,
}

impl Pillar {
    /// 以任意整數取模 60 得到干支。
    pub fn from_cycle(cycle: i64) -> Self {
        Self {
            cycle: cycle.rem_euclid(60) as u32,
        }
    }
    /// 由天干、地支序號組合；兩者奇偶不同則無此干支，返回 `None`。
    pub fn from_stem_branch(stem: u32, branch: u32) -> Option<Self> {
        if stem >= 10 || branch >= 12 || stem % 2 != branch % 2 {
            return None;
        }
        let k = (5 * (branch as i64 - stem as i64) / 2).rem_euclid(6);
        Some(Self::from_cycle(stem as i64 + 10 * k))
    }

    /// 六十甲子序號，`0..60`
    pub fn cycle(&self) -> u32 {
        self.cycle
    }
    /// 天干序號，`0..10`
    pub fn stem(&self) -> u32 {
        self.cycle % 10
    }
    /// 地支序號，`0..12`
    pub fn branch(&self) -> u32 {
        self.cycle % 12
    }
    pub fn stem_name(&self) -> &'static str {
        STEMS[self.stem() as usize]
    }
    pub fn branch_name(&self) -> &'static str {
        BRANCHES[self.branch() as usize]
    }
    /// 兩字干支名
    pub fn name(&self) -> String {
        super::fmt::sexagenary(self.cycle)
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem_name(), self.branch_name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pillar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Pillar", 3)?;
        s.serialize_field("stem", self.stem_name())?;
        s.serialize_field("branch", self.branch_name())?;
        s.serialize_field("name", &self.name())?;
        s.end()
    }
}

/// 八字四柱；未給時刻者無時柱。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

/// 1900 年（立春後）為庚子，序號 36。
const YEAR_ANCHOR: i64 = 36;
/// 1900 年正月（立春至惊蛰）為戊寅，序號 14；`(年−1900)×12 + 公曆月序(0 起) + 13` 在二月交節後即得此值。
const MONTH_ANCHOR: i64 = 13;

/// 年柱。一月及二月立春前屬上一年。
pub fn year_pillar(terms: &SolarTermTable, year: i32, month: u32, day: u32) -> Result<Pillar> {
    let before_li_chun = month == 1 || month == 2 && day < terms.term_day(year, 2)?;
    let year = if before_li_chun { year - 1 } else { year };
    Ok(Pillar::from_cycle(year as i64 - 1900 + YEAR_ANCHOR))
}

/// 月柱。交節前屬上一個節月。
pub fn month_pillar(terms: &SolarTermTable, year: i32, month: u32, day: u32) -> Result<Pillar> {
    let m0 = month as i64 - 1;
    let jie = terms.term_day(year, solar_term::jie(month)?)?;
    let before_jie = (day < jie) as i64;
    Ok(Pillar::from_cycle(
        (year as i64 - 1900) * 12 + m0 + MONTH_ANCHOR - before_jie,
    ))
}

/// 日柱，1900-01-01 為甲戌。
pub fn day_pillar(date: Date) -> Pillar {
    Pillar::from_cycle(date.sexagenary() as i64)
}

/// 時柱：時干 = (日干 mod 5 × 2 + 時支) mod 10。
pub fn hour_pillar(day: Pillar, branch: u32) -> Pillar {
    let stem = (day.stem() % 5 * 2 + branch) % 10;
    Pillar::from_stem_branch(stem, branch % 12)
        .unwrap_or_else(|| unreachable!("hour stem {stem} and branch {branch} differ in parity"))
}

/// 計算 `date` 的年、月、日柱，並在給出時辰地支時加上時柱。
///
/// `date` 應為已按子時換日調整後的日期。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::sexagenary::four_pillars;
/// use nongli::chinese::solar_term::SolarTermTable;
///
/// let date = Date::from_gregorian(1980, 3, 21).unwrap();
/// let pillars = four_pillars(&SolarTermTable::default(), date, None).unwrap();
/// assert_eq!(
///     ["庚申", "己卯", "癸巳"],
///     [pillars.year.name(), pillars.month.name(), pillars.day.name()]
/// );
/// ```
pub fn four_pillars(
    terms: &SolarTermTable,
    date: Date,
    hour_branch: Option<u32>,
) -> Result<FourPillars> {
    let (y, m, d) = date.gregorian();
    let (m, d) = (m as u32, d as u32);
    let day = day_pillar(date);
    Ok(FourPillars {
        year: year_pillar(terms, y, m, d)?,
        month: month_pillar(terms, y, m, d)?,
        day,
        hour: hour_branch.map(|branch| hour_pillar(day, branch)),
    })
}
