//! 節氣日期估算
//!
//! 採用通行的「壽星公式」：`[Y×D+C]−L`，其中 `Y` 為年份末兩位，`D = 0.2422`，
//! `C` 為各世紀擬合常數，`L = [Y/4]` 為閏年修正。
//!
//! 注意：此為近似算法，並非天文曆算，誤差可達一日（尤以小寒至雨水、世紀交替前後為甚）。
//! 依此所得的年柱、月柱在交節當日前後或有一日之差，需要與天文曆書逐日吻合者不應依賴本模塊。

use crate::error::{Error, Result};

/// 可估算的最末公曆年。農曆 2100 年延至公曆 2101 年一月，故多支持一年。
pub const LAST_YEAR: i32 = 2101;

const FIRST_YEAR: i32 = 1900;

/// 內置常數 `C`，每世紀一行，自 1900 年起。`0..24` 依次為小寒至冬至。
pub static TERM_CONSTANTS: [[f64; 24]; 2] = [
    // 1900-1999
    [
        5.4055, 20.12, 3.87, 18.73, 5.63, 20.646, 4.81, 20.1, 5.52, 21.04, 5.678, 21.37, 7.108,
        22.83, 7.5, 23.13, 7.646, 23.042, 8.318, 23.438, 7.438, 22.36, 7.18, 21.94,
    ],
    // 2000-2099，其後沿用
    [
        5.4055, 20.12, 4.15, 18.73, 5.63, 20.646, 5.11, 20.1, 5.52, 21.04, 5.678, 21.37, 7.108,
        22.83, 7.5, 23.13, 7.646, 23.042, 8.318, 23.438, 7.438, 22.36, 7.18, 21.94,
    ],
];

/// 節氣常數表。超出表末的世紀沿用最後一行。
///
/// # 用例
///
/// ```
/// use nongli::chinese::solar_term::SolarTermTable;
///
/// let terms = SolarTermTable::default();
/// assert_eq!(5, terms.term_day(1980, 4).unwrap()); // 1980 年惊蛰在三月五日
/// ```
#[derive(Debug, Copy, Clone)]
pub struct SolarTermTable {
    centuries: &'static [[f64; 24]],
}

impl Default for SolarTermTable {
    fn default() -> Self {
        Self::new(&TERM_CONSTANTS)
    }
}

impl SolarTermTable {
    /// 以自 1900 年起、每世紀一行的常數建表。
    pub const fn new(centuries: &'static [[f64; 24]]) -> Self {
        Self { centuries }
    }

    /// 估算 `year` 年第 `term` 個節氣（0 為小寒）落在當月幾日。
    ///
    /// 節氣 `2m` 與 `2m+1` 均落在公曆第 `m+1` 月。
    pub fn term_day(&self, year: i32, term: u32) -> Result<u32> {
        if term >= 24 {
            return Err(Error::InvalidSolarTerm(term));
        }
        let out_of_range = Error::OutOfRange {
            year,
            min: FIRST_YEAR,
            max: LAST_YEAR,
        };
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(out_of_range);
        }
        let row = (((year - FIRST_YEAR) / 100) as usize).min(self.centuries.len().saturating_sub(1));
        let c = self.centuries.get(row).ok_or(out_of_range)?[term as usize];

        let y = year % 100;
        let day = (y as f64 * 0.2422 + c).floor() as i32 - y / 4;
        Ok(day as u32)
    }

    /// 若 `year` 年 `month` 月 `day` 日為交節日，返回該節氣序號。
    pub fn term_on(&self, year: i32, month: u32, day: u32) -> Result<Option<u32>> {
        let first = jie(month)?;
        for term in [first, first + 1] {
            if self.term_day(year, term)? == day {
                return Ok(Some(term));
            }
        }
        Ok(None)
    }
}

/// 公曆 `month` 月的「節」，即該月第一個節氣的序號。
pub fn jie(month: u32) -> Result<u32> {
    match month {
        1..=12 => Ok((month - 1) * 2),
        _ => Err(Error::InvalidDate(format!("month {month}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_days() {
        let terms = SolarTermTable::default();
        // 與曆書相符者標 ✓，差一日者標 ≈
        for (std, (year, term)) in [
            (5, (1980, 4)),   // 惊蛰 ✓
            (21, (1980, 23)), // 冬至 ✓
            (4, (2000, 2)),   // 立春 ✓
            (3, (2020, 2)),   // 立春 ≈ 實為二月四日
            (5, (2020, 0)),   // 小寒 ≈ 實為一月六日
            (5, (2024, 8)),   // 立夏 ✓
            (6, (2024, 22)),  // 大雪 ✓
            (21, (2024, 23)), // 冬至 ✓
            (3, (1900, 2)),   // 立春 ≈ 實為二月四日
        ] {
            assert_eq!(Ok(std), terms.term_day(year, term), "{year} term {term}");
        }
    }

    #[test]
    fn later_centuries_reuse_last_row() {
        let terms = SolarTermTable::default();
        // 2100 年 Y = 0，等同 2000 年
        for term in 0..24 {
            assert_eq!(terms.term_day(2000, term), terms.term_day(2100, term));
        }
    }

    #[test]
    fn errors() {
        let terms = SolarTermTable::default();
        assert_eq!(Err(Error::InvalidSolarTerm(24)), terms.term_day(2000, 24));
        for year in [1899, 2102] {
            assert!(matches!(
                terms.term_day(year, 0),
                Err(Error::OutOfRange { .. })
            ));
        }
        let empty = SolarTermTable::new(&[]);
        assert!(empty.term_day(2000, 0).is_err());
    }

    #[test]
    fn every_term_in_its_month() {
        let terms = SolarTermTable::default();
        for year in FIRST_YEAR..=LAST_YEAR {
            for term in 0..24 {
                let day = terms.term_day(year, term).unwrap();
                assert!((1..=28).contains(&day), "{year} term {term}: {day}");
            }
        }
    }

    #[test]
    fn term_on() {
        let terms = SolarTermTable::default();
        assert_eq!(Ok(Some(4)), terms.term_on(1980, 3, 5));
        assert_eq!(Ok(Some(23)), terms.term_on(2024, 12, 21));
        assert_eq!(Ok(None), terms.term_on(2024, 12, 20));
        assert!(matches!(terms.term_on(2024, 0, 1), Err(Error::InvalidDate(_))));
    }
}
