//! Library settings.
//!
//! [`Settings`] is a plain value handed to the services that need it rather
//! than a process-wide singleton, so tests can construct whatever
//! combination they need. It deserializes from JSON with every field
//! optional.

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// UTC offset of China Standard Time, in minutes.
pub const CHINA_STANDARD_OFFSET_MINUTES: i32 = 480;

/// Tunable behaviour shared by the calendar services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Civil time zone (minutes east of UTC) in which solar-term instants
    /// are turned into calendar dates.
    pub utc_offset_minutes: i32,

    /// Prefix first-day month labels with a thin space (U+2009) so the
    /// trailing "月" glyph looks centred.
    pub optical_month_spacing: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: CHINA_STANDARD_OFFSET_MINUTES,
            optical_month_spacing: true,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document. Missing fields keep their
    /// defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        crate::ensure!(
            (-720..=840).contains(&settings.utc_offset_minutes),
            "utc offset {} minutes is not a real time zone",
            settings.utc_offset_minutes
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn defaults_are_china_standard_time() {
        let s = Settings::default();
        assert_eq!(s.utc_offset_minutes, 480);
        assert!(s.optical_month_spacing);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "opticalMonthSpacing": false }"#).unwrap();
        assert_eq!(s.utc_offset_minutes, 480);
        assert!(!s.optical_month_spacing);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let e = Settings::from_json(r#"{ "theme": "dark" }"#).unwrap_err();
        assert!(matches!(e, Error::Parse(_)));
    }

    #[test]
    fn absurd_offsets_are_rejected() {
        let e = Settings::from_json(r#"{ "utcOffsetMinutes": 5000 }"#).unwrap_err();
        assert!(matches!(e, Error::Precondition(_)));
    }
}
