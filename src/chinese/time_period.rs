//! 十二時辰
//!
//! 一日分為十二時辰，每時辰兩小時，以地支命名。子時跨越午夜（23:00–01:00），
//! 且屬於次日：23 時起的日期須先調整為次日，再換算農曆及日柱、時柱。

use std::fmt;

use crate::date::{Date, SolarDate};

/// 時辰
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimePeriod {
    /// 名稱，如「子时」
    pub name: &'static str,
    /// 生肖
    pub zodiac: &'static str,
    /// 地支序號，子為 0
    pub branch: u32,
    /// 起始時（含）
    pub start_hour: u32,
    /// 終止時（不含），子時為 1
    pub end_hour: u32,
    /// 別稱
    pub description: &'static str,
}

impl TimePeriod {
    /// 地支文字
    pub fn branch_name(&self) -> &'static str {
        super::fmt::BRANCHES[self.branch as usize]
    }

    /// `"HH:00-HH:00"` 形式的時段。
    pub fn period(&self) -> String {
        format!("{:02}:00-{:02}:00", self.start_hour, self.end_hour)
    }

    /// 該時辰是否包含 `hour` 時。
    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour < self.end_hour {
            (self.start_hour..self.end_hour).contains(&hour)
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.period())
    }
}

macro_rules! period {
    ($branch:expr, $name:expr, $zodiac:expr, $start:expr, $end:expr, $desc:expr) => {
        TimePeriod {
            name: $name,
            zodiac: $zodiac,
            branch: $branch,
            start_hour: $start,
            end_hour: $end,
            description: $desc,
        }
    };
}

/// 內置時辰表，以地支序號排列。
pub static TIME_PERIODS: [TimePeriod; 12] = [
    period!(0, "子时", "鼠", 23, 1, "夜半，又名子夜、中夜"),
    period!(1, "丑时", "牛", 1, 3, "鸡鸣，又名荒鸡"),
    period!(2, "寅时", "虎", 3, 5, "平旦，又称黎明、早晨、日旦"),
    period!(3, "卯时", "兔", 5, 7, "日出，又名日始、破晓、旭日"),
    period!(4, "辰时", "龙", 7, 9, "食时，又名早食"),
    period!(5, "巳时", "蛇", 9, 11, "隅中，又名日禺"),
    period!(6, "午时", "马", 11, 13, "日中，又名日正、中午"),
    period!(7, "未时", "羊", 13, 15, "日昳，又名日跌、日央"),
    period!(8, "申时", "猴", 15, 17, "晡时，又名日铺、夕食"),
    period!(9, "酉时", "鸡", 17, 19, "日入，又名日落、日沉、傍晚"),
    period!(10, "戌时", "狗", 19, 21, "黄昏，又名日夕、日暮、日晚"),
    period!(11, "亥时", "猪", 21, 23, "人定，又名定昏"),
];

/// 在給定時辰表中查找包含 `hour` 時的時辰；表中無一包含者返回 `None`。
///
/// 按各時辰的起止時查找，與表中次序無關。
///
/// # 用例
///
/// ```
/// use nongli::chinese::time_period::{resolve, TIME_PERIODS};
///
/// assert_eq!(Some("午时"), resolve(&TIME_PERIODS, 12).map(|p| p.name));
/// assert_eq!(Some("子时"), resolve(&TIME_PERIODS, 23).map(|p| p.name));
/// assert_eq!(None, resolve(&TIME_PERIODS, 24));
/// ```
pub fn resolve(periods: &[TimePeriod], hour: u32) -> Option<&TimePeriod> {
    if hour > 23 {
        return None;
    }
    periods.iter().find(|p| p.contains(hour))
}

/// 子時換日：23 時起算作次日，返回用於換算農曆及干支的日期。
pub fn adjust_for_rollover(date: Date, hour: u32) -> Date {
    if hour == 23 { date + 1 } else { date }
}

/// 同 [`adjust_for_rollover`]，無時刻者不調整。
pub fn effective_date(solar: &SolarDate) -> Option<Date> {
    let date = solar.date()?;
    Some(match solar.time() {
        Some(time) => adjust_for_rollover(date, time.hour),
        None => date,
    })
}
