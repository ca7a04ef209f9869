//! The 24 solar terms and the per-lunar-year term table.
//!
//! [`LunarYearInfo`] maps solar `MMDD` keys to the terms falling inside one
//! lunar year. Tables are produced through the [`SolarTermSource`] trait;
//! [`SolarTermCache`] computes them from the Sun's position on first use and
//! keeps them for the life of the cache.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use lb_core::errors::Result;
use lb_core::Settings;
use lb_time::{MonthDay, SolarDate};
use parking_lot::RwLock;
use tracing::debug;

use crate::astronomy::{civil_serial, solar_longitude_crossing};
use crate::converter::LunarSolarConverter;

// ── SolarTerm ─────────────────────────────────────────────────────────────────

/// One of the 24 solar terms, ordered by solar longitude from the March
/// equinox (0°) in steps of 15°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SolarTerm {
    /// 春分, 0°.
    VernalEquinox,
    /// 清明, 15°.
    ClearAndBright,
    /// 谷雨, 30°.
    GrainRain,
    /// 立夏, 45°.
    StartOfSummer,
    /// 小满, 60°.
    GrainBuds,
    /// 芒种, 75°.
    GrainInEar,
    /// 夏至, 90°.
    SummerSolstice,
    /// 小暑, 105°.
    MinorHeat,
    /// 大暑, 120°.
    MajorHeat,
    /// 立秋, 135°.
    StartOfAutumn,
    /// 处暑, 150°.
    EndOfHeat,
    /// 白露, 165°.
    WhiteDew,
    /// 秋分, 180°.
    AutumnalEquinox,
    /// 寒露, 195°.
    ColdDew,
    /// 霜降, 210°.
    FrostDescent,
    /// 立冬, 225°.
    StartOfWinter,
    /// 小雪, 240°.
    MinorSnow,
    /// 大雪, 255°.
    MajorSnow,
    /// 冬至, 270°.
    WinterSolstice,
    /// 小寒, 285°.
    MinorCold,
    /// 大寒, 300°.
    MajorCold,
    /// 立春, 315°.
    StartOfSpring,
    /// 雨水, 330°.
    RainWater,
    /// 惊蛰, 345°.
    AwakeningOfInsects,
}

const TERM_NAMES: [&str; 24] = [
    "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑", "白露",
    "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒", "立春", "雨水", "惊蛰",
];

impl SolarTerm {
    /// All terms in longitude order.
    pub const ALL: [SolarTerm; 24] = [
        SolarTerm::VernalEquinox,
        SolarTerm::ClearAndBright,
        SolarTerm::GrainRain,
        SolarTerm::StartOfSummer,
        SolarTerm::GrainBuds,
        SolarTerm::GrainInEar,
        SolarTerm::SummerSolstice,
        SolarTerm::MinorHeat,
        SolarTerm::MajorHeat,
        SolarTerm::StartOfAutumn,
        SolarTerm::EndOfHeat,
        SolarTerm::WhiteDew,
        SolarTerm::AutumnalEquinox,
        SolarTerm::ColdDew,
        SolarTerm::FrostDescent,
        SolarTerm::StartOfWinter,
        SolarTerm::MinorSnow,
        SolarTerm::MajorSnow,
        SolarTerm::WinterSolstice,
        SolarTerm::MinorCold,
        SolarTerm::MajorCold,
        SolarTerm::StartOfSpring,
        SolarTerm::RainWater,
        SolarTerm::AwakeningOfInsects,
    ];

    /// The term at position `index` (0 = 春分).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position in [`SolarTerm::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Apparent solar longitude of the term, in degrees.
    pub fn longitude(self) -> f64 {
        15.0 * self.index() as f64
    }

    /// Chinese name, e.g. `"清明"`.
    pub fn chinese_name(self) -> &'static str {
        TERM_NAMES[self.index()]
    }

    /// Civil date of this term in Gregorian `year`, in a zone
    /// `utc_offset_minutes` east of UTC.
    pub fn date_in(self, year: i32, utc_offset_minutes: i32) -> Result<SolarDate> {
        let jde = solar_longitude_crossing(year, self.longitude());
        SolarDate::from_serial(civil_serial(jde, utc_offset_minutes))
    }
}

impl fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.chinese_name())
    }
}

// ── LunarYearInfo ─────────────────────────────────────────────────────────────

/// The solar terms falling inside one lunar year, keyed by solar `MMDD`.
///
/// A lunar year overlaps two Gregorian years, so a term such as 立春 can
/// appear twice; both occurrences share one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarYearInfo {
    lunar_year: i32,
    terms: BTreeMap<MonthDay, SolarTerm>,
}

impl LunarYearInfo {
    /// Compute the table for `lunar_year`.
    pub fn compute(
        lunar_year: i32,
        converter: &LunarSolarConverter,
        utc_offset_minutes: i32,
    ) -> Result<Self> {
        let (first, last) = converter.lunar_year_span(lunar_year)?;
        let mut terms = BTreeMap::new();
        for year in [lunar_year, lunar_year + 1] {
            for term in SolarTerm::ALL {
                let date = term.date_in(year, utc_offset_minutes)?;
                if first <= date && date <= last {
                    terms.entry(date.month_day()).or_insert(term);
                }
            }
        }
        Ok(Self { lunar_year, terms })
    }

    /// Build a table from explicit entries, e.g. for a fixture.
    pub fn from_entries<I>(lunar_year: i32, entries: I) -> Self
    where
        I: IntoIterator<Item = (MonthDay, SolarTerm)>,
    {
        Self {
            lunar_year,
            terms: entries.into_iter().collect(),
        }
    }

    /// The lunar year this table covers.
    pub fn lunar_year(&self) -> i32 {
        self.lunar_year
    }

    /// The term on solar `key`, if any.
    pub fn term_on(&self, key: MonthDay) -> Option<SolarTerm> {
        self.terms.get(&key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// `true` if no term falls in the year.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Entries in `MMDD` order.
    pub fn iter(&self) -> impl Iterator<Item = (MonthDay, SolarTerm)> + '_ {
        self.terms.iter().map(|(k, v)| (*k, *v))
    }
}

// ── SolarTermSource ───────────────────────────────────────────────────────────

/// Something that can hand out the term table of a lunar year.
pub trait SolarTermSource: fmt::Debug + Send + Sync {
    /// The table for `lunar_year`. Calls for the same year return equal
    /// tables.
    fn terms_for(&self, lunar_year: i32) -> Result<Arc<LunarYearInfo>>;
}

/// Lazily computed, process-lifetime term tables.
///
/// Tables are computed outside the lock. When two threads race on the same
/// year, the first table stored is the one every caller sees afterwards.
#[derive(Debug)]
pub struct SolarTermCache {
    converter: LunarSolarConverter,
    utc_offset_minutes: i32,
    years: RwLock<HashMap<i32, Arc<LunarYearInfo>>>,
}

impl SolarTermCache {
    /// A cache resolving term dates in the zone configured by `settings`.
    pub fn new(settings: &Settings) -> Self {
        Self::with_utc_offset(settings.utc_offset_minutes)
    }

    /// A cache resolving term dates `utc_offset_minutes` east of UTC.
    pub fn with_utc_offset(utc_offset_minutes: i32) -> Self {
        Self {
            converter: LunarSolarConverter::new(),
            utc_offset_minutes,
            years: RwLock::new(HashMap::new()),
        }
    }

    /// Number of years computed so far.
    pub fn cached_years(&self) -> usize {
        self.years.read().len()
    }
}

impl Default for SolarTermCache {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl SolarTermSource for SolarTermCache {
    fn terms_for(&self, lunar_year: i32) -> Result<Arc<LunarYearInfo>> {
        if let Some(info) = self.years.read().get(&lunar_year) {
            return Ok(Arc::clone(info));
        }
        let computed = LunarYearInfo::compute(lunar_year, &self.converter, self.utc_offset_minutes)?;
        debug!(lunar_year, terms = computed.len(), "computed solar terms");
        let mut years = self.years.write();
        let stored = years.entry(lunar_year).or_insert_with(|| Arc::new(computed));
        Ok(Arc::clone(stored))
    }
}
