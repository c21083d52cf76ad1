//! Heavenly stems (천간), the 10-cycle half of the sexagenary system.
//!
//! Each stem carries an element and a polarity: stems pair up by element
//! (갑/을 Wood, 병/정 Fire, 무/기 Earth, 경/신 Metal, 임/계 Water), the first
//! of each pair yang and the second yin.
//!
//! The five-tiger (오호둔, 五虎遁) and five-rat (오서둔, 五鼠遁) rules are also
//! defined here since both key off a stem and yield a stem.

use serde::{Deserialize, Serialize};

use crate::element::{Element, YinYang};

/// The 10 heavenly stems starting from 갑 (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (0 = 갑, 9 = 계).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

impl HeavenlyStem {
    /// Korean glyph.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    /// Classical (Hanja) glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// Revised-romanization name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Element of the stem.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    /// Polarity of the stem.
    pub const fn yin_yang(self) -> YinYang {
        match self {
            Self::Gap | Self::Byeong | Self::Mu | Self::Gyeong | Self::Im => YinYang::Yang,
            Self::Eul | Self::Jeong | Self::Gi | Self::Sin | Self::Gye => YinYang::Yin,
        }
    }

    /// Create from a 0-based index; `None` outside 0..=9.
    pub const fn from_index(i: u8) -> Option<Self> {
        if i < 10 {
            Some(ALL_STEMS[i as usize])
        } else {
            None
        }
    }

    /// Stem at any position of the endless cycle (position 0 = 갑, negatives wrap).
    pub const fn from_cycle(position: i64) -> Self {
        ALL_STEMS[position.rem_euclid(10) as usize]
    }

    /// Stem `steps` positions further along the cycle.
    pub const fn advance(self, steps: i64) -> Self {
        Self::from_cycle(self.index() as i64 + steps)
    }

    /// Five-tiger rule: stem of the 寅 (Tiger) month, i.e. month index 0,
    /// for a year with this stem.
    pub const fn five_tiger_start(self) -> Self {
        match self {
            Self::Gap | Self::Gi => Self::Byeong,
            Self::Eul | Self::Gyeong => Self::Mu,
            Self::Byeong | Self::Sin => Self::Gyeong,
            Self::Jeong | Self::Im => Self::Im,
            Self::Mu | Self::Gye => Self::Gap,
        }
    }

    /// Five-rat rule: stem of the 子 (Rat) hour for a day with this stem.
    pub const fn five_rat_start(self) -> Self {
        match self {
            Self::Gap | Self::Gi => Self::Gap,
            Self::Eul | Self::Gyeong => Self::Byeong,
            Self::Byeong | Self::Sin => Self::Mu,
            Self::Jeong | Self::Im => Self::Gyeong,
            Self::Mu | Self::Gye => Self::Im,
        }
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [HeavenlyStem; 10] {
        &ALL_STEMS
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hangul())
    }
}
