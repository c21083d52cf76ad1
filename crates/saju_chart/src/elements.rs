//! Five-element tally over the stems and branches of a chart.

use saju_base::{ALL_ELEMENTS, Element, Pillar};
use serde::{Deserialize, Serialize};

/// Count of each element across every stem and branch present.
///
/// The counts always sum to twice the number of pillars tallied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementBalance {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementBalance {
    /// Tally the stem element and branch element of each pillar.
    pub fn from_pillars(pillars: &[Pillar]) -> Self {
        let mut balance = Self::default();
        for p in pillars {
            balance.add(p.stem.element());
            balance.add(p.branch.element());
        }
        balance
    }

    fn add(&mut self, element: Element) {
        *self.slot_mut(element) += 1;
    }

    fn slot_mut(&mut self, element: Element) -> &mut u8 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// Count for one element.
    pub const fn count(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub const fn total(&self) -> u8 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }

    /// Element with the highest count; the later element wins a tie.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.count(e) >= self.count(best) {
                best = e;
            }
        }
        best
    }

    /// Element with the lowest count; the earlier element wins a tie.
    pub fn lacking(&self) -> Element {
        let mut worst = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.count(e) < self.count(worst) {
                worst = e;
            }
        }
        worst
    }

    /// `(element, count)` pairs in Wood→Water order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.into_iter().map(move |e| (e, self.count(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{EarthlyBranch, HeavenlyStem};

    #[test]
    fn empty_chart_is_zero() {
        let b = ElementBalance::from_pillars(&[]);
        assert_eq!(b.total(), 0);
        assert_eq!(b, ElementBalance::default());
    }

    #[test]
    fn stem_and_branch_counted_separately() {
        // 병자: fire stem over water branch
        let b = ElementBalance::from_pillars(&[Pillar::new(HeavenlyStem::Byeong, EarthlyBranch::Ja)]);
        assert_eq!(b.fire, 1);
        assert_eq!(b.water, 1);
        assert_eq!(b.total(), 2);
    }

    #[test]
    fn sum_is_twice_pillar_count() {
        for n in 0..60 {
            let pillars: Vec<Pillar> = (0..4).map(|k| Pillar::from_sexagenary(n + k * 7)).collect();
            assert_eq!(ElementBalance::from_pillars(&pillars[..3]).total(), 6);
            assert_eq!(ElementBalance::from_pillars(&pillars).total(), 8);
        }
    }

    #[test]
    fn dominant_tie_goes_to_later() {
        let b = ElementBalance { wood: 2, fire: 0, earth: 2, metal: 1, water: 1 };
        assert_eq!(b.dominant(), Element::Earth);
        let flat = ElementBalance { wood: 1, fire: 1, earth: 1, metal: 1, water: 1 };
        assert_eq!(flat.dominant(), Element::Water);
    }

    #[test]
    fn lacking_tie_keeps_earlier() {
        let b = ElementBalance { wood: 2, fire: 0, earth: 2, metal: 0, water: 2 };
        assert_eq!(b.lacking(), Element::Fire);
        let flat = ElementBalance { wood: 1, fire: 1, earth: 1, metal: 1, water: 1 };
        assert_eq!(flat.lacking(), Element::Wood);
    }

    #[test]
    fn iter_in_cycle_order() {
        let b = ElementBalance { wood: 1, fire: 2, earth: 3, metal: 4, water: 5 };
        let counts: Vec<u8> = b.iter().map(|(_, c)| c).collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 5]);
    }
}
