use models::Card;

use crate::BattleEvent;

/// Receives every event a battle emits, synchronously from inside `step`.
pub type EventSink<'a> = Box<dyn FnMut(&BattleEvent) + 'a>;

/// The state of a card at the moment an event was emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSummary {
    pub name: String,
    pub base_damage: i64,
    pub current_hp: i64,
    pub max_hp: i64,
    pub element_label: String,
}

impl CardSummary {
    pub fn displayed_hp(&self) -> i64 {
        self.current_hp.max(0)
    }
}

impl std::fmt::Display for CardSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Card<name={}, dmg={}, hp={}/{}, type={}>",
            self.name,
            self.base_damage,
            self.displayed_hp(),
            self.max_hp,
            self.element_label
        )
    }
}

impl From<&Card> for CardSummary {
    fn from(value: &Card) -> Self {
        Self {
            name: value.name.clone(),
            base_damage: value.base_damage,
            current_hp: value.current_hp(),
            max_hp: value.max_hp(),
            element_label: value.element_label.clone(),
        }
    }
}

impl From<&mut Card> for CardSummary {
    fn from(value: &mut Card) -> Self {
        Self::from(&*value)
    }
}
