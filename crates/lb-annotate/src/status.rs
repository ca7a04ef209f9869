//! Status-bar title and tooltip text.

use lb_core::errors::{Error, Result};
use lb_lunar::fmt::{lunar_date_string, strip_leading_digits};
use lb_lunar::LunarSolarConverter;
use lb_time::SolarDate;

/// Compact title, e.g. `"10月25日 周六"`.
pub fn menu_bar_title(date: SolarDate) -> String {
    let (_, m, d) = date.ymd();
    format!("{m}月{d}日 {}", date.weekday().short_chinese_name())
}

/// Full date, a blank line, then the lunar date without its leading year
/// number.
pub fn tooltip(date: SolarDate, converter: &LunarSolarConverter) -> Result<String> {
    let lunar = converter.to_lunar(date)?;
    let text = lunar_date_string(&lunar)
        .ok_or_else(|| Error::MissingComponent(format!("lunar date of {date}")))?;
    Ok(format!(
        "{} {}\n\n{}",
        date.to_chinese_string(),
        date.weekday().chinese_name(),
        strip_leading_digits(&text)
    ))
}
