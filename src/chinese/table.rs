//! 農曆年表：每年一個 20 位整數，記錄各月大小及閏月。
//!
//! 編碼方式（位序自 1 起，由低至高）：
//!
//! - 第 1–4 位：閏月月序，0 為無閏月，1–12 為閏在該月之後；
//! - 第 5–16 位：十二個平月大小，第 16 位為正月，第 5 位為十二月，1 為大月（30 日）、0 為小月（29 日）；
//! - 第 17 位：閏月大小，1 為大月，僅在有閏月時有意義。
//!
//! 例：1980 年為 `0x095b0`，無閏月，正月至十二月分別為 30、29、29、30、29、30、29、30、30、29、30、30 日。

use crate::error::{Error, Result};

/// 年表首年。換算以公曆 1900-01-31（該年正月初一）為零點。
pub const FIRST_YEAR: i32 = 1900;

/// 內置年表，1900 至 2100 年。
pub static LUNAR_INFO: [u32; 201] = [
    // 1900-1909
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    // 1910-1919
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    // 1920-1929
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    // 1930-1939
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    // 1940-1949
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    // 1950-1959
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5d0, 0x14573, 0x052d0, 0x0a9a8, 0x0e950, 0x06aa0,
    // 1960-1969
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    // 1970-1979
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6,
    // 1980-1989
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    // 1990-1999
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0,
    // 2000-2009
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    // 2010-2019
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    // 2020-2029
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    // 2030-2039
    0x05aa0, 0x076a3, 0x096d0, 0x04bd7, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    // 2040-2049
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    // 2050-2059
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    // 2060-2069
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    // 2070-2079
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    // 2080-2089
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d260,
    // 2090-2099
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a4d0, 0x0d150, 0x0f252,
    // 2100
    0x0d520,
];

/// 農曆年表，自 [`FIRST_YEAR`] 起逐年排列。
///
/// 表為只讀資料，可在多線程間共享；測試時可傳入截短的表以檢驗邊界。
///
/// # 用例
///
/// ```
/// use nongli::chinese::table::LunarYearTable;
///
/// let table = LunarYearTable::default();
/// assert_eq!(4, table.leap_month(2012).unwrap());
/// assert_eq!(384, table.year_days(2012).unwrap());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct LunarYearTable {
    info: &'static [u32],
}

impl Default for LunarYearTable {
    fn default() -> Self {
        Self::new(&LUNAR_INFO)
    }
}

impl LunarYearTable {
    /// 以自 1900 年起的編碼建表。
    pub const fn new(info: &'static [u32]) -> Self {
        Self { info }
    }

    pub fn first_year(&self) -> i32 {
        FIRST_YEAR
    }
    /// 表內最末一年；空表時小於首年。
    pub fn last_year(&self) -> i32 {
        FIRST_YEAR + self.info.len() as i32 - 1
    }

    /// 取得該年編碼，超出年表則回報 [`Error::OutOfRange`]。
    fn info(&self, year: i32) -> Result<u32> {
        usize::try_from(year - FIRST_YEAR)
            .ok()
            .and_then(|i| self.info.get(i))
            .copied()
            .ok_or(Error::OutOfRange {
                year,
                min: self.first_year(),
                max: self.last_year(),
            })
    }

    /// 閏月月序，無閏月為 0。
    pub fn leap_month(&self, year: i32) -> Result<u32> {
        Ok(self.info(year)? & 0xf)
    }

    /// 閏月日數，無閏月為 0。
    pub fn leap_month_days(&self, year: i32) -> Result<u32> {
        let info = self.info(year)?;
        Ok(match (info & 0xf, info & 0x10000) {
            (0, _) => 0,
            (_, 0) => 29,
            _ => 30,
        })
    }

    /// 平月 `month`（`1..=12`）的日數。
    pub fn month_days(&self, year: i32, month: u32) -> Result<u32> {
        let info = self.info(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidLunarDate {
                year,
                month,
                day: 0,
            });
        }
        Ok(if info & (0x10000 >> month) != 0 { 30 } else { 29 })
    }

    /// 全年日數，含閏月。
    pub fn year_days(&self, year: i32) -> Result<u32> {
        let big_months = (self.info(year)? & 0xfff0).count_ones();
        Ok(12 * 29 + big_months + self.leap_month_days(year)?)
    }
}
