//! 公曆與農曆互換
//!
//! 兩個方向均以 [`EPOCH`]（公曆 1900-01-31，即農曆 1900 年正月初一）為零點，
//! 依年表逐年、逐月累加或扣減日數。

use tracing::trace;

use crate::date::Date;
use crate::error::{Error, Result};

use super::table::{FIRST_YEAR, LunarYearTable};
use super::{LunarDate, Month};

/// 換算零點：公曆 1900-01-31，農曆 1900 年正月初一。
pub const EPOCH: Date = Date::from_jdn(2_415_051);

/// 由公曆日推農曆日期時的掃描狀態。
///
/// 先逐年扣減，再於所得年內逐月扣減；扣完閏月所在的平月後轉入閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Scan {
    Years { year: i32, remaining: u32 },
    Ordinary { year: i32, month: u32, remaining: u32 },
    Leap { year: i32, month: u32, remaining: u32 },
    Done(LunarDate),
}

impl Scan {
    fn step(self, table: &LunarYearTable) -> Result<Self> {
        use Scan::*;
        Ok(match self {
            Years { year, remaining } => {
                let len = table.year_days(year)?;
                if remaining >= len {
                    Years {
                        year: year + 1,
                        remaining: remaining - len,
                    }
                } else {
                    Ordinary {
                        year,
                        month: 1,
                        remaining,
                    }
                }
            }
            Ordinary {
                year,
                month,
                remaining,
            } => {
                let len = table.month_days(year, month)?;
                if remaining < len {
                    Done(LunarDate {
                        year,
                        month: Month::Common(month),
                        day: remaining + 1,
                    })
                } else if table.leap_month(year)? == month {
                    // 餘數恰為 0 時落在閏月初一
                    Leap {
                        year,
                        month,
                        remaining: remaining - len,
                    }
                } else {
                    Ordinary {
                        year,
                        month: month + 1,
                        remaining: remaining - len,
                    }
                }
            }
            Leap {
                year,
                month,
                remaining,
            } => {
                let len = table.leap_month_days(year)?;
                if remaining < len {
                    Done(LunarDate {
                        year,
                        month: Month::Leap(month),
                        day: remaining + 1,
                    })
                } else {
                    Ordinary {
                        year,
                        month: month + 1,
                        remaining: remaining - len,
                    }
                }
            }
            done @ Done(_) => done,
        })
    }
}

/// 公曆日轉農曆日期。
///
/// `date` 應為已按子時換日調整後的日期，見 [`super::time_period::adjust_for_rollover`]。
///
/// 早於 [`EPOCH`] 或超出年表者回報 [`Error::OutOfRange`]。
///
/// # 用例
///
/// ```
/// use nongli::Date;
/// use nongli::chinese::convert::solar_to_lunar;
/// use nongli::chinese::table::LunarYearTable;
/// use nongli::chinese::{LunarDate, Month::*};
///
/// let table = LunarYearTable::default();
/// let date = Date::from_gregorian(2017, 7, 23).unwrap();
///
/// assert_eq!(
///     Ok(LunarDate { year: 2017, month: Leap(6), day: 1 }),
///     solar_to_lunar(&table, date)
/// );
/// ```
pub fn solar_to_lunar(table: &LunarYearTable, date: Date) -> Result<LunarDate> {
    let offset = u32::try_from(date - EPOCH).map_err(|_| Error::OutOfRange {
        year: date.gregorian().0,
        min: table.first_year(),
        max: table.last_year(),
    })?;

    let mut scan = Scan::Years {
        year: FIRST_YEAR,
        remaining: offset,
    };
    loop {
        match scan {
            Scan::Done(lunar) => return Ok(lunar),
            _ => {
                let next = scan.step(table)?;
                if !matches!((scan, next), (Scan::Years { .. }, Scan::Years { .. })) {
                    trace!(from = ?scan, to = ?next, "scan");
                }
                scan = next;
            }
        }
    }
}

/// 檢查農曆日期是否存在。
///
/// - 年份超出年表：[`Error::OutOfRange`]
/// - 月序號不在 `1..=12`，或日數為 0、超過該月日數：[`Error::InvalidLunarDate`]
/// - 所標閏月並非該年閏月：[`Error::AmbiguousLeapMonth`]
pub fn validate(table: &LunarYearTable, date: LunarDate) -> Result<()> {
    let LunarDate { year, month, day } = date;
    let num = month.num();
    let invalid = Error::InvalidLunarDate {
        year,
        month: num,
        day,
    };

    let leap_month = table.leap_month(year)?;
    if !(1..=12).contains(&num) {
        return Err(invalid);
    }
    let len = match month {
        Month::Common(m) => table.month_days(year, m)?,
        Month::Leap(m) if m == leap_month => table.leap_month_days(year)?,
        Month::Leap(m) => {
            return Err(Error::AmbiguousLeapMonth {
                year,
                month: m,
                leap_month,
            });
        }
    };
    if !(1..=len).contains(&day) {
        return Err(invalid);
    }
    Ok(())
}

/// 農曆日期距 [`EPOCH`] 的日數。
pub fn day_offset(table: &LunarYearTable, date: LunarDate) -> Result<u32> {
    validate(table, date)?;
    let LunarDate { year, month, day } = date;
    let leap_month = table.leap_month(year)?;

    let mut offset = (FIRST_YEAR..year)
        .map(|y| table.year_days(y))
        .sum::<Result<u32>>()?;
    for m in 1..month.num() {
        offset += table.month_days(year, m)?;
        if m == leap_month {
            offset += table.leap_month_days(year)?;
        }
    }
    if month.is_leap() {
        offset += table.month_days(year, month.num())?;
    }
    Ok(offset + day - 1)
}

/// 農曆日期轉公曆日。
///
/// # 用例
///
/// ```
/// use nongli::chinese::convert::lunar_to_solar;
/// use nongli::chinese::table::LunarYearTable;
/// use nongli::chinese::LunarDate;
///
/// let table = LunarYearTable::default();
/// let date = lunar_to_solar(&table, LunarDate::new(2012, 4, 7, true)).unwrap();
/// assert_eq!("2012-05-27", date.iso_gregorian());
/// ```
pub fn lunar_to_solar(table: &LunarYearTable, date: LunarDate) -> Result<Date> {
    let offset = day_offset(table, date)?;
    Ok(EPOCH + offset as i32)
}
