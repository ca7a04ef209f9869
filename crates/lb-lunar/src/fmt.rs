//! Chinese names for lunar months, days, and years.
//!
//! The month and day tables are both 0-based: [`month_name`] takes
//! `month - 1` and [`day_name`] takes `day - 1`. Callers apply the two
//! offsets independently.

use crate::lunar_date::LunarDate;

/// Month names, indexed by `month - 1`. Months 11 and 12 are 冬月 and 腊月.
pub const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

/// Day names, indexed by `day - 1`.
pub const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Marks an intercalary month, e.g. 闰二月.
pub const LEAP_MARKER: &str = "闰";

const HEAVENLY_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Name of the month at 0-based `index`, with the leap marker when
/// `is_leap`.
///
/// ```
/// use lb_lunar::fmt::month_name;
///
/// assert_eq!(month_name(0, false).as_deref(), Some("正月"));
/// assert_eq!(month_name(1, true).as_deref(), Some("闰二月"));
/// assert_eq!(month_name(12, false), None);
/// ```
pub fn month_name(index: usize, is_leap: bool) -> Option<String> {
    let name = MONTH_NAMES.get(index)?;
    Some(if is_leap {
        format!("{LEAP_MARKER}{name}")
    } else {
        (*name).to_owned()
    })
}

/// Name of the day at 0-based `index`.
///
/// ```
/// use lb_lunar::fmt::day_name;
///
/// assert_eq!(day_name(9), Some("初十"));
/// assert_eq!(day_name(29), Some("三十"));
/// assert_eq!(day_name(30), None);
/// ```
pub fn day_name(index: usize) -> Option<&'static str> {
    DAY_NAMES.get(index).copied()
}

/// Stem-branch name of a lunar year, e.g. `"甲辰"` for 2024.
pub fn sexagenary_year(year: i32) -> String {
    let cycle = (year - 4).rem_euclid(60) as usize;
    format!("{}{}", HEAVENLY_STEMS[cycle % 10], EARTHLY_BRANCHES[cycle % 12])
}

/// Long form of a lunar date, led by the Gregorian number of its year,
/// e.g. `"2023癸卯年冬月十五"`.
///
/// Returns `None` when the month or day has no name.
pub fn lunar_date_string(lunar: &LunarDate) -> Option<String> {
    let month = month_name(lunar.month() as usize - 1, lunar.is_leap_month())?;
    let day = day_name(lunar.day() as usize - 1)?;
    Some(format!(
        "{}{}年{month}{day}",
        lunar.year(),
        sexagenary_year(lunar.year())
    ))
}

/// Drop leading ASCII digits, turning `"2023癸卯年冬月十五"` into
/// `"癸卯年冬月十五"`.
pub fn strip_leading_digits(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_digit())
}
