//! Pillar (주): one stem paired with one branch.
//!
//! Stems cycle every 10 and branches every 12, so stepping both together
//! walks the 60-position sexagenary cycle (60갑자). Only stem/branch pairs of
//! equal parity ever occur on that cycle.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::Element;
use crate::stem::HeavenlyStem;

/// Length of the sexagenary cycle, lcm(10, 12).
pub const SEXAGENARY_CYCLE: u8 = 60;

/// A stem + branch pair naming one year, month, day, hour or decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at any position of the sexagenary cycle (0 = 갑자, negatives wrap).
    pub const fn from_sexagenary(position: i64) -> Self {
        Self {
            stem: HeavenlyStem::from_cycle(position),
            branch: EarthlyBranch::from_cycle(position),
        }
    }

    /// 0-based position on the sexagenary cycle (갑자=0 .. 계해=59).
    ///
    /// Returns `None` for a mixed-parity pair such as 갑축, which never
    /// occurs on the cycle.
    pub const fn sexagenary_index(self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        let mut k = 0;
        while k < 6 {
            let n = s + 10 * k;
            if n % 12 == b {
                return Some(n);
            }
            k += 1;
        }
        None
    }

    /// Pillar `steps` positions further along the sexagenary cycle.
    pub const fn advance(self, steps: i64) -> Self {
        Self {
            stem: self.stem.advance(steps),
            branch: self.branch.advance(steps),
        }
    }

    /// Element of the stem, the dominant element of the pillar.
    pub const fn element(self) -> Element {
        self.stem.element()
    }

    /// Korean form, e.g. "갑자".
    pub fn hangul(self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }

    /// Classical form, e.g. "甲子".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hangul(), self.branch.hangul())
    }
}
