use nongli::chinese::convert::{self, EPOCH};
use nongli::chinese::table::LunarYearTable;
use nongli::{Calendar, Error, LunarDate, Month, SolarDate, TimeOfDay};

fn solar(s: &str) -> nongli::Almanac {
    nongli::solar_to_lunar(s.parse().unwrap()).unwrap()
}

#[test]
fn new_years() {
    for (std, input) in [
        ((2020, 1, 1, "鼠"), "2020-01-25"),
        ((2021, 1, 1, "牛"), "2021-02-12"),
        ((2024, 1, 1, "龙"), "2024-02-10"),
        ((1900, 1, 1, "鼠"), "1900-01-31"),
    ] {
        let a = solar(input);
        let lunar = a.lunar.date;
        assert_eq!(
            std,
            (lunar.year, lunar.month.num(), lunar.day, a.lunar.zodiac),
            "{input}"
        );
        assert!(!lunar.is_leap_month());
        assert_eq!(Some("春节"), a.festivals.lunar.map(|f| f.name));
    }
}

#[test]
fn mid_autumn() {
    for (year, std) in [
        (1980, "1980-09-23"),
        (2000, "2000-09-12"),
        (2020, "2020-10-01"),
        (2099, "2099-09-29"),
    ] {
        let a = nongli::lunar_to_solar(LunarDate::new(year, 8, 15, false), None).unwrap();
        let date = SolarDate::new(a.solar.year, a.solar.month, a.solar.day).unwrap();
        assert_eq!(std, date.to_string());

        let back = solar(std).lunar.date;
        assert_eq!(LunarDate::new(year, 8, 15, false), back);
    }
}

#[test]
fn leap_fourth_month_2012() {
    let common = nongli::lunar_to_solar(LunarDate::new(2012, 4, 7, false), None).unwrap();
    let leap = nongli::lunar_to_solar(LunarDate::new(2012, 4, 7, true), None).unwrap();
    assert_eq!((4, 27), (common.solar.month, common.solar.day));
    assert_eq!((5, 27), (leap.solar.month, leap.solar.day));
    assert_eq!("四月", common.lunar.month_name);
    assert_eq!("闰四月", leap.lunar.month_name);

    assert_eq!(Month::Leap(4), solar("2012-05-27").lunar.date.month);

    // 給出 23 時仍報告同一公曆日
    let late = TimeOfDay::new(23, 15, 0).ok();
    let common = nongli::lunar_to_solar(LunarDate::new(2012, 4, 7, false), late).unwrap();
    assert_eq!("2012-04-27 23:15:00", common.solar.solar_date().unwrap().to_string());
}

#[test]
fn bazi() {
    for (std, input) in [
        (["己亥", "丁丑", "丁卯", "丙午"], "2020-01-25 12:30"),
        (["庚申", "己卯", "癸巳", "壬子"], "1980-03-21 00:10"),
    ] {
        let p = solar(input).pillars;
        let names = [
            p.year.name(),
            p.month.name(),
            p.day.name(),
            p.hour.map(|h| h.name()).unwrap_or_default(),
        ];
        assert_eq!(std, names, "{input}");
    }
}

#[test]
fn time_period_boundaries() {
    for (std, input) in [
        (("子时", "子"), "2024-06-01 00:00"),
        (("丑时", "丑"), "2024-06-01 01:00"),
        (("午时", "午"), "2024-06-01 12:00"),
        (("亥时", "亥"), "2024-06-01 22:59:59"),
        (("子时", "子"), "2024-06-01 23:00"),
    ] {
        let period = solar(input).time_period.unwrap();
        assert_eq!(std, (period.name, period.branch_name()), "{input}");
    }
}

#[test]
fn late_zi_hour_is_next_day() {
    let before = solar("2024-06-01 22:59");
    let after = solar("2024-06-01 23:00");
    let midnight = solar("2024-06-02 00:00");

    assert_eq!(before.lunar.date.day + 1, after.lunar.date.day);
    assert_eq!(midnight.lunar.date, after.lunar.date);
    assert_eq!(midnight.pillars.day, after.pillars.day);
    assert_eq!(midnight.pillars.hour, after.pillars.hour);
    assert_eq!(
        (before.pillars.day.cycle() + 1) % 60,
        after.pillars.day.cycle()
    );
    // 公曆日期不變
    assert_eq!((6, 1), (after.solar.month, after.solar.day));
}

#[test]
fn day_names() {
    let table = LunarYearTable::default();
    for (std, day) in [("初一", 1), ("初十", 10), ("二十", 20), ("三十", 30)] {
        // 2023 年正月小，二月大
        let date = LunarDate::new(2023, 2, day, false);
        assert!(convert::validate(&table, date).is_ok());
        assert_eq!(Ok(std.to_owned()), date.day_name());
    }
}

#[test]
fn invalid_input() {
    assert!(matches!(SolarDate::new(2023, 2, 30), Err(Error::InvalidDate(_))));
    assert!(matches!(SolarDate::new(2023, 13, 1), Err(Error::InvalidDate(_))));
    assert!(matches!(
        SolarDate::with_time(2023, 1, 1, 24, 0, 0),
        Err(Error::InvalidDate(_))
    ));
    assert!(matches!(
        "2023-02-30".parse::<SolarDate>(),
        Err(Error::InvalidDate(_))
    ));

    assert!(matches!(
        nongli::solar_to_lunar(SolarDate::new(1899, 12, 31).unwrap()),
        Err(Error::OutOfRange { .. })
    ));
    assert!(matches!(
        nongli::lunar_to_solar(LunarDate::new(2021, 6, 1, true), None),
        Err(Error::AmbiguousLeapMonth { .. })
    ));
    assert!(matches!(
        nongli::lunar_to_solar(LunarDate::new(2021, 6, 31, false), None),
        Err(Error::InvalidLunarDate { .. })
    ));
    assert!(matches!(
        LunarDate::new(2020, 13, 1, false).month_name(),
        Err(Error::InvalidLunarDate { month: 13, .. })
    ));
    assert!(matches!(
        LunarDate::new(2020, 1, 31, false).day_name(),
        Err(Error::InvalidLunarDate { day: 31, .. })
    ));
}

#[test]
fn every_day_round_trips() {
    let table = LunarYearTable::default();
    let calendar = Calendar::default();
    let last = convert::lunar_to_solar(&table, LunarDate::new(2100, 12, 29, false)).unwrap();
    assert_eq!("2101-01-28", last.iso_gregorian());

    let mut previous: Option<LunarDate> = None;
    for n in 0..=(last - EPOCH) {
        let date = EPOCH + n;
        let lunar = convert::solar_to_lunar(&table, date).unwrap();
        assert_eq!(Ok(date), convert::lunar_to_solar(&table, lunar));
        if let Some(prev) = previous {
            assert!(lunar.day == prev.day + 1 || lunar.day == 1, "{prev} -> {lunar}");
        }
        previous = Some(lunar);
    }
    assert!(convert::solar_to_lunar(&table, last + 1).is_err());
    assert!(calendar.solar_to_lunar(SolarDate::from_date(last, None)).is_ok());
}

#[test]
fn festivals_and_terms() {
    let a = solar("2020-10-01");
    assert_eq!(Some("国庆节"), a.festivals.solar.map(|f| f.name));
    assert_eq!(Some("中秋节"), a.festivals.lunar.map(|f| f.name));

    // 腊月三十除夕
    let eve = solar("2024-02-09");
    assert_eq!(Some("除夕"), eve.festivals.lunar.map(|f| f.name));
    assert_eq!("五", eve.solar.week_day);

    assert_eq!(Some("惊蛰"), solar("1980-03-05").solar_term);
    // 二月初三、初四
    assert!(solar("2024-03-12").festivals.sanniang_sha);
    assert!(!solar("2024-03-13").festivals.sanniang_sha);
}
