use std::collections::HashMap;

use crate::normalize_text;

lazy_static::lazy_static! {
    static ref ELEMENT_BY_ALIAS: HashMap<&'static str, Element> = HashMap::from([
        ("fire", Element::Fire),
        ("tuz", Element::Fire),
        ("water", Element::Water),
        ("viz", Element::Water),
        ("earth", Element::Earth),
        ("fold", Element::Earth),
        ("air", Element::Air),
        ("levego", Element::Air),
    ]);
}

pub const STRONG_MODIFIER: f64 = 2.0;
pub const WEAK_MODIFIER: f64 = 0.5;
pub const NEUTRAL_MODIFIER: f64 = 1.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

    /// The element this one deals double damage to.
    pub fn strong_against(&self) -> Element {
        match self {
            Element::Air => Element::Earth,
            Element::Earth => Element::Fire,
            Element::Fire => Element::Water,
            Element::Water => Element::Air,
        }
    }

    /// The element this one deals half damage to. Always the inverse of
    /// [`Element::strong_against`].
    pub fn weak_against(&self) -> Element {
        match self {
            Element::Earth => Element::Air,
            Element::Fire => Element::Earth,
            Element::Water => Element::Fire,
            Element::Air => Element::Water,
        }
    }

    pub fn modifier_against(&self, defender: Element) -> f64 {
        if self.strong_against() == defender {
            STRONG_MODIFIER
        } else if self.weak_against() == defender {
            WEAK_MODIFIER
        } else {
            NEUTRAL_MODIFIER
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Air => "air",
        }
    }
}

pub fn type_modifier(attacker: Element, defender: Element) -> f64 {
    attacker.modifier_against(defender)
}

impl TryFrom<&str> for Element {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = normalize_text(value);
        ELEMENT_BY_ALIAS
            .get(normalized.as_str())
            .copied()
            .ok_or(anyhow::anyhow!("invalid element {value:?}"))
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
