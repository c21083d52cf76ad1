//! Earthly branches (지지), the 12-cycle half of the sexagenary system.
//!
//! Branch 0 is 자 (子, Rat). Branches also name the twelve two-hour
//! periods of the day (자시 .. 해시) and the zodiac animals (띠).

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// The 12 earthly branches starting from 자 (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (0 = 자, 11 = 해).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ja,
    EarthlyBranch::Chuk,
    EarthlyBranch::In,
    EarthlyBranch::Myo,
    EarthlyBranch::Jin,
    EarthlyBranch::Sa,
    EarthlyBranch::O,
    EarthlyBranch::Mi,
    EarthlyBranch::Sin,
    EarthlyBranch::Yu,
    EarthlyBranch::Sul,
    EarthlyBranch::Hae,
];

impl EarthlyBranch {
    /// Korean glyph.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    /// Classical (Hanja) glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Revised-romanization name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Ja | Self::Hae => Element::Water,
        }
    }

    /// Korean name of the zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "쥐",
            Self::Chuk => "소",
            Self::In => "호랑이",
            Self::Myo => "토끼",
            Self::Jin => "용",
            Self::Sa => "뱀",
            Self::O => "말",
            Self::Mi => "양",
            Self::Sin => "원숭이",
            Self::Yu => "닭",
            Self::Sul => "개",
            Self::Hae => "돼지",
        }
    }

    /// English name of the zodiac animal.
    pub const fn animal_name(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Sin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }

    /// Create from a 0-based index; `None` outside 0..=11.
    pub const fn from_index(i: u8) -> Option<Self> {
        if i < 12 {
            Some(ALL_BRANCHES[i as usize])
        } else {
            None
        }
    }

    /// Branch at any position of the endless cycle (position 0 = 자, negatives wrap).
    pub const fn from_cycle(position: i64) -> Self {
        ALL_BRANCHES[position.rem_euclid(12) as usize]
    }

    /// Branch `steps` positions further along the cycle.
    pub const fn advance(self, steps: i64) -> Self {
        Self::from_cycle(self.index() as i64 + steps)
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hangul())
    }
}
