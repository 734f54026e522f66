//! The five elements, polarity, and the two fixed cycles between elements.

use serde::Serialize;

/// One of the five elemental categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// Stem polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Element {
    /// All elements in histogram order.
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Returns the 0-based position of this element in [`Element::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the element that generates `self` in the production cycle
    /// Water → Wood → Fire → Earth → Metal → Water.
    pub fn producer(self) -> Element {
        match self {
            Element::Wood => Element::Water,
            Element::Fire => Element::Wood,
            Element::Earth => Element::Fire,
            Element::Metal => Element::Earth,
            Element::Water => Element::Metal,
        }
    }

    /// Returns the element that controls `self` in the dominance cycle.
    pub fn controller(self) -> Element {
        match self {
            Element::Wood => Element::Metal,
            Element::Fire => Element::Water,
            Element::Earth => Element::Wood,
            Element::Metal => Element::Fire,
            Element::Water => Element::Earth,
        }
    }

    /// Lower-case name, as used in archetype identifiers.
    pub fn as_str(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }
}

impl Polarity {
    /// Lower-case name, as used in archetype identifiers.
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Yang => "yang",
            Polarity::Yin => "yin",
        }
    }
}
