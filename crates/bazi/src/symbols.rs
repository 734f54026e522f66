//! Stem and branch lookup tables.
//!
//! Both tables are cyclic: any integer reduces into them with
//! [`i64::rem_euclid`], so every lookup resolves to exactly one record.

use serde::Serialize;

use crate::element::Element::{Earth, Fire, Metal, Water, Wood};
use crate::element::Polarity::{Yang, Yin};
use crate::element::{Element, Polarity};

/// One of the ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Stem {
    /// Position in [`STEMS`] (0..=9).
    pub index: u8,
    pub id: &'static str,
    pub name: &'static str,
    /// Script label, e.g. `甲木`.
    pub script: &'static str,
    pub element: Element,
    pub polarity: Polarity,
}

/// One of the twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Branch {
    /// Position in [`BRANCHES`] (0..=11).
    pub index: u8,
    pub id: &'static str,
    pub name: &'static str,
    /// Script label, e.g. `子`.
    pub script: &'static str,
    pub element: Element,
}

const fn stem(
    index: u8,
    id: &'static str,
    name: &'static str,
    script: &'static str,
    element: Element,
    polarity: Polarity,
) -> Stem {
    Stem {
        index,
        id,
        name,
        script,
        element,
        polarity,
    }
}

const fn branch(
    index: u8,
    id: &'static str,
    name: &'static str,
    script: &'static str,
    element: Element,
) -> Branch {
    Branch {
        index,
        id,
        name,
        script,
        element,
    }
}

/// The ten stems in cyclic order, Yang Wood first.
#[rustfmt::skip]
pub static STEMS: [Stem; 10] = [
    stem(0, "jia",  "Yang Wood",  "甲木", Wood,  Yang),
    stem(1, "yi",   "Yin Wood",   "乙木", Wood,  Yin),
    stem(2, "bing", "Yang Fire",  "丙火", Fire,  Yang),
    stem(3, "ding", "Yin Fire",   "丁火", Fire,  Yin),
    stem(4, "wu",   "Yang Earth", "戊土", Earth, Yang),
    stem(5, "ji",   "Yin Earth",  "己土", Earth, Yin),
    stem(6, "geng", "Yang Metal", "庚金", Metal, Yang),
    stem(7, "xin",  "Yin Metal",  "辛金", Metal, Yin),
    stem(8, "ren",  "Yang Water", "壬水", Water, Yang),
    stem(9, "gui",  "Yin Water",  "癸水", Water, Yin),
];

/// The twelve branches in cyclic order, Rat first.
#[rustfmt::skip]
pub static BRANCHES: [Branch; 12] = [
    branch(0,  "zi",   "Rat",     "子", Water),
    branch(1,  "chou", "Ox",      "丑", Earth),
    branch(2,  "yin",  "Tiger",   "寅", Wood),
    branch(3,  "mao",  "Rabbit",  "卯", Wood),
    branch(4,  "chen", "Dragon",  "辰", Earth),
    branch(5,  "si",   "Snake",   "巳", Fire),
    branch(6,  "wu",   "Horse",   "午", Fire),
    branch(7,  "wei",  "Goat",    "未", Earth),
    branch(8,  "shen", "Monkey",  "申", Metal),
    branch(9,  "you",  "Rooster", "酉", Metal),
    branch(10, "xu",   "Dog",     "戌", Earth),
    branch(11, "hai",  "Pig",     "亥", Water),
];

impl Stem {
    /// Returns the stem at `n mod 10`.
    pub fn cyclic(n: i64) -> &'static Stem {
        &STEMS[n.rem_euclid(STEMS.len() as i64) as usize]
    }

    /// `"<name> (<script>)"`, e.g. `Yang Wood (甲木)`.
    pub fn full_name(&self) -> String {
        format!("{} ({})", self.name, self.script)
    }
}

impl Branch {
    /// Returns the branch at `n mod 12`.
    pub fn cyclic(n: i64) -> &'static Branch {
        &BRANCHES[n.rem_euclid(BRANCHES.len() as i64) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_match_positions() {
        for (i, s) in STEMS.iter().enumerate() {
            assert_eq!(s.index as usize, i, "stem {} out of place", s.id);
        }
    }

    #[test]
    fn branch_indices_match_positions() {
        for (i, b) in BRANCHES.iter().enumerate() {
            assert_eq!(b.index as usize, i, "branch {} out of place", b.id);
        }
    }

    #[test]
    fn stems_pair_by_element_yang_first() {
        for pair in STEMS.chunks(2) {
            assert_eq!(pair[0].element, pair[1].element);
            assert_eq!(pair[0].polarity, Polarity::Yang);
            assert_eq!(pair[1].polarity, Polarity::Yin);
        }
    }

    #[test]
    fn cyclic_wraps_both_directions() {
        assert_eq!(Stem::cyclic(10).id, "jia");
        assert_eq!(Stem::cyclic(-1).id, "gui");
        assert_eq!(Branch::cyclic(12).id, "zi");
        assert_eq!(Branch::cyclic(-1).id, "hai");
        assert_eq!(Branch::cyclic(-13).id, "hai");
    }

    #[test]
    fn full_name_format() {
        assert_eq!(STEMS[0].full_name(), "Yang Wood (甲木)");
        assert_eq!(STEMS[9].full_name(), "Yin Water (癸水)");
    }

    #[test]
    fn branch_element_counts() {
        let count = |e: Element| BRANCHES.iter().filter(|b| b.element == e).count();
        assert_eq!(count(Earth), 4);
        assert_eq!(count(Wood), 2);
        assert_eq!(count(Fire), 2);
        assert_eq!(count(Metal), 2);
        assert_eq!(count(Water), 2);
    }
}
