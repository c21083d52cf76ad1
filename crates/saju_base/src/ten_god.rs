//! Ten gods (십신): how another stem relates to the day stem.
//!
//! The relation is looked up by the forward distance from the day stem to
//! the other stem around the 10-cycle. Distance 0 is the day stem's own peer.

use serde::{Deserialize, Serialize};

use crate::stem::HeavenlyStem;

/// The 10 relational labels, ordered by forward stem distance from the day stem.
///
/// Serialized by Korean label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// 비견 (比肩)
    #[serde(rename = "비견")]
    Peer,
    /// 겁재 (劫財)
    #[serde(rename = "겁재")]
    RobWealth,
    /// 식신 (食神)
    #[serde(rename = "식신")]
    EatingGod,
    /// 상관 (傷官)
    #[serde(rename = "상관")]
    HurtingOfficer,
    /// 편재 (偏財)
    #[serde(rename = "편재")]
    IndirectWealth,
    /// 정재 (正財)
    #[serde(rename = "정재")]
    DirectWealth,
    /// 편관 (偏官)
    #[serde(rename = "편관")]
    IndirectOfficer,
    /// 정관 (正官)
    #[serde(rename = "정관")]
    DirectOfficer,
    /// 편인 (偏印)
    #[serde(rename = "편인")]
    IndirectResource,
    /// 정인 (正印)
    #[serde(rename = "정인")]
    DirectResource,
}

/// All 10 relations indexed by forward stem distance (0 = 비견).
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Peer,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::IndirectOfficer,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    /// Korean label (비견, 겁재, ...).
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Peer => "비견",
            Self::RobWealth => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::IndirectOfficer => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }

    /// Classical label (比肩, 劫財, ...).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Peer => "比肩",
            Self::RobWealth => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::IndirectOfficer => "偏官",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    /// English label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "Peer",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::IndirectOfficer => "Indirect Officer",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    /// Forward stem distance this relation is keyed on (0..=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Peer => 0,
            Self::RobWealth => 1,
            Self::EatingGod => 2,
            Self::HurtingOfficer => 3,
            Self::IndirectWealth => 4,
            Self::DirectWealth => 5,
            Self::IndirectOfficer => 6,
            Self::DirectOfficer => 7,
            Self::IndirectResource => 8,
            Self::DirectResource => 9,
        }
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hangul())
    }
}

/// Relation of `other` to the day stem `day`.
///
/// Equal stems are always [`TenGod::Peer`].
pub const fn ten_god(day: HeavenlyStem, other: HeavenlyStem) -> TenGod {
    let diff = (other.index() + 10 - day.index()) % 10;
    ALL_TEN_GODS[diff as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn self_relation_is_peer() {
        for s in ALL_STEMS {
            assert_eq!(ten_god(s, s), TenGod::Peer);
        }
    }

    #[test]
    fn gap_day_covers_table_in_order() {
        for (i, other) in ALL_STEMS.iter().enumerate() {
            assert_eq!(ten_god(HeavenlyStem::Gap, *other), ALL_TEN_GODS[i]);
        }
    }

    #[test]
    fn wraps_backwards() {
        // 계(9) seen from 갑(0) is 9 steps forward
        assert_eq!(ten_god(HeavenlyStem::Gap, HeavenlyStem::Gye), TenGod::DirectResource);
        // 갑(0) seen from 계(9) is 1 step forward
        assert_eq!(ten_god(HeavenlyStem::Gye, HeavenlyStem::Gap), TenGod::RobWealth);
    }

    #[test]
    fn indices_sequential() {
        for (i, g) in ALL_TEN_GODS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(TenGod::Peer.to_string(), "비견");
        assert_eq!(TenGod::DirectOfficer.hanja(), "正官");
    }

    #[test]
    fn serializes_as_korean_label() {
        for g in ALL_TEN_GODS {
            let json = serde_json::to_string(&g).unwrap();
            assert_eq!(json, format!("\"{}\"", g.hangul()));
            let back: TenGod = serde_json::from_str(&json).unwrap();
            assert_eq!(back, g);
        }
    }
}
