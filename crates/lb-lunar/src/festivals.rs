//! Traditional festivals fixed to a lunar month and day.

use std::fmt;

use lb_time::MonthDay;

/// A festival celebrated on the same lunar day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Festival {
    /// 春节, 1/1.
    SpringFestival,
    /// 元宵节, 1/15.
    Lantern,
    /// 龙抬头, 2/2.
    DragonRaisesHead,
    /// 端午节, 5/5.
    DragonBoat,
    /// 七夕节, 7/7.
    Qixi,
    /// 中元节, 7/15.
    GhostFestival,
    /// 中秋节, 8/15.
    MidAutumn,
    /// 重阳节, 9/9.
    DoubleNinth,
    /// 腊八节, 12/8.
    Laba,
    /// 小年, 12/23.
    LittleNewYear,
}

impl Festival {
    /// Chinese name, e.g. `"中秋节"`.
    pub fn chinese_name(self) -> &'static str {
        match self {
            Festival::SpringFestival => "春节",
            Festival::Lantern => "元宵节",
            Festival::DragonRaisesHead => "龙抬头",
            Festival::DragonBoat => "端午节",
            Festival::Qixi => "七夕节",
            Festival::GhostFestival => "中元节",
            Festival::MidAutumn => "中秋节",
            Festival::DoubleNinth => "重阳节",
            Festival::Laba => "腊八节",
            Festival::LittleNewYear => "小年",
        }
    }
}

impl fmt::Display for Festival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.chinese_name())
    }
}

/// Static lunar `MMDD` → festival lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct FestivalTable;

impl FestivalTable {
    /// The festival on lunar `key`, if any. The key carries no leap flag,
    /// so days of a leap month match too.
    pub fn festival_for(&self, key: MonthDay) -> Option<Festival> {
        Some(match (key.month(), key.day()) {
            (1, 1) => Festival::SpringFestival,
            (1, 15) => Festival::Lantern,
            (2, 2) => Festival::DragonRaisesHead,
            (5, 5) => Festival::DragonBoat,
            (7, 7) => Festival::Qixi,
            (7, 15) => Festival::GhostFestival,
            (8, 15) => Festival::MidAutumn,
            (9, 9) => Festival::DoubleNinth,
            (12, 8) => Festival::Laba,
            (12, 23) => Festival::LittleNewYear,
            _ => return None,
        })
    }
}
