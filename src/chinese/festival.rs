//! 節日
//!
//! 公曆節日按公曆月日查找，農曆節日按農曆月日查找。除夕為腊月最末日，隨腊月大小而定；
//! 閏月無農曆節日。

use crate::error::Result;

use super::LunarDate;
use super::table::LunarYearTable;

/// 節日
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Festival {
    pub name: &'static str,
    pub english: &'static str,
    /// 是否為法定假日
    pub is_holiday: bool,
    /// 同日的其他紀念
    pub extra: Option<&'static str>,
}

macro_rules! festival {
    ($month:expr, $day:expr, $name:expr, $english:expr, $holiday:expr) => {
        festival!($month, $day, $name, $english, $holiday, None)
    };
    ($month:expr, $day:expr, $name:expr, $english:expr, $holiday:expr, $extra:expr) => {
        (
            $month,
            $day,
            Festival {
                name: $name,
                english: $english,
                is_holiday: $holiday,
                extra: $extra,
            },
        )
    };
}

/// 公曆節日，`(月, 日, 節日)`。
pub static SOLAR_FESTIVALS: &[(u32, u32, Festival)] = &[
    festival!(1, 1, "元旦", "New Year's Day", true),
    festival!(2, 14, "情人节", "Valentine's Day", false),
    festival!(3, 8, "妇女节", "Women's Day", false),
    festival!(3, 12, "植树节", "Arbor Day", false),
    festival!(4, 1, "愚人节", "April Fool's Day", false),
    festival!(4, 22, "地球日", "Earth Day", false),
    festival!(5, 1, "劳动节", "Labor Day", true),
    festival!(5, 4, "青年节", "Youth Day", false),
    festival!(6, 1, "儿童节", "Children's Day", false),
    festival!(9, 10, "教师节", "Teachers' Day", false),
    festival!(10, 1, "国庆节", "National Day", true),
    festival!(12, 24, "平安夜", "Christmas Eve", false),
    festival!(12, 25, "圣诞节", "Christmas Day", false),
];

/// 農曆節日，`(月, 日, 節日)`，不含除夕。
pub static LUNAR_FESTIVALS: &[(u32, u32, Festival)] = &[
    festival!(1, 1, "春节", "Spring Festival", true, Some("元始天尊圣旦 四始吉日")),
    festival!(1, 4, "迎神日", "Welcoming Gods Day", false),
    festival!(1, 5, "接财神", "Welcoming God of Wealth", false),
    festival!(1, 9, "玉皇大帝诞", "Jade Emperor Birthday", false),
    festival!(1, 15, "元宵节", "Lantern Festival", false, Some("上元节")),
    festival!(2, 2, "龙抬头", "Dragon Raises Head", false, Some("福德正神圣旦")),
    festival!(2, 3, "文昌圣旦", "Wenchang Birthday", false),
    festival!(2, 15, "释迦牟尼涅槃", "Buddha Nirvana Day", false, Some("太上老君圣旦")),
    festival!(2, 16, "头牙", "First Ya Festival", false, Some("祭拜地主日")),
    festival!(2, 19, "观世音菩萨圣旦", "Guanyin Birthday", false),
    festival!(3, 3, "上巳节", "Shangsi Festival", false, Some("玄天上帝诞")),
    festival!(3, 23, "妈祖圣旦", "Mazu Birthday", false),
    festival!(4, 1, "四始吉日", "Auspicious Day", false),
    festival!(4, 8, "释迦牟尼佛诞", "Buddha Birthday", false, Some("浴佛节")),
    festival!(5, 5, "端午节", "Dragon Boat Festival", true),
    festival!(5, 13, "关公磨刀日", "Guan Yu Sword Day", false),
    festival!(6, 19, "观世音菩萨成道日", "Guanyin Enlightenment", false),
    festival!(6, 24, "关公圣旦", "Guan Yu Birthday", false),
    festival!(7, 1, "四始吉日", "Auspicious Day", false),
    festival!(7, 7, "七夕", "Qixi Festival", false, Some("Chinese Valentine's Day")),
    festival!(7, 15, "中元节", "Ghost Festival", false, Some("盂兰盆节")),
    festival!(7, 19, "值年太岁圣旦", "Tai Sui Birthday", false),
    festival!(7, 30, "地藏王菩萨诞", "Dizang Bodhisattva Birthday", false),
    festival!(8, 15, "中秋节", "Mid-Autumn Festival", true),
    festival!(9, 9, "重阳节", "Double Ninth Festival", false),
    festival!(9, 19, "观世音菩萨出家日", "Guanyin Renunciation Day", false),
    festival!(10, 1, "寒衣节", "Cold Clothes Festival", false, Some("祭祖节")),
    festival!(10, 15, "下元节", "Lower Yuan Festival", false, Some("水官大帝诞")),
    festival!(11, 19, "观世音菩萨诞", "Guanyin Day", false, Some("南海观音入海日")),
    festival!(12, 8, "腊八节", "Laba Festival", false),
    festival!(12, 16, "尾牙", "Last Ya Festival", false, Some("谢地主日")),
    festival!(12, 23, "小年", "Little New Year", false),
    festival!(12, 24, "送神日", "Sending Gods Day", false),
    festival!(12, 25, "天官巡人间", "Heaven Official Inspection", false),
];

/// 除夕，腊月最末日。
pub static NEW_YEARS_EVE: Festival = Festival {
    name: "除夕",
    english: "New Year's Eve",
    is_holiday: true,
    extra: None,
};

/// 三娘煞日，每月逢此數日不宜嫁娶。
pub const SANNIANG_SHA_DAYS: [u32; 6] = [3, 7, 13, 18, 22, 27];

/// 某日的節日信息
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Festivals {
    pub solar: Option<Festival>,
    pub lunar: Option<Festival>,
    pub sanniang_sha: bool,
}

fn lookup(table: &[(u32, u32, Festival)], month: u32, day: u32) -> Option<Festival> {
    table
        .iter()
        .find(|(m, d, _)| (*m, *d) == (month, day))
        .map(|(_, _, f)| *f)
}

/// 公曆節日
pub fn solar_festival(month: u32, day: u32) -> Option<Festival> {
    lookup(SOLAR_FESTIVALS, month, day)
}

/// 農曆節日。腊月最末日為除夕，閏月無節日。
///
/// # 用例
///
/// ```
/// use nongli::chinese::LunarDate;
/// use nongli::chinese::festival::lunar_festival;
/// use nongli::chinese::table::LunarYearTable;
///
/// let table = LunarYearTable::default();
/// // 2023 年腊月大，三十為除夕
/// let eve = lunar_festival(&table, LunarDate::new(2023, 12, 30, false)).unwrap();
/// assert_eq!(Some("除夕"), eve.map(|f| f.name));
/// ```
pub fn lunar_festival(table: &LunarYearTable, date: LunarDate) -> Result<Option<Festival>> {
    if date.is_leap_month() {
        return Ok(None);
    }
    let month = date.month.num();
    if month == 12 && date.day == table.month_days(date.year, 12)? {
        return Ok(Some(NEW_YEARS_EVE));
    }
    Ok(lookup(LUNAR_FESTIVALS, month, date.day))
}

pub fn is_sanniang_sha(day: u32) -> bool {
    SANNIANG_SHA_DAYS.contains(&day)
}

/// 匯總某日的公曆、農曆節日及三娘煞。
pub fn festivals(
    table: &LunarYearTable,
    solar_month: u32,
    solar_day: u32,
    lunar: LunarDate,
) -> Result<Festivals> {
    Ok(Festivals {
        solar: solar_festival(solar_month, solar_day),
        lunar: lunar_festival(table, lunar)?,
        sanniang_sha: is_sanniang_sha(lunar.day),
    })
}
