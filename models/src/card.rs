use crate::{Element, Health, RewardType};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub base_damage: i64,
    pub health: Health,
    pub element: Element,
    /// The type exactly as it was written when the card was defined.
    pub element_label: String,
    pub leader: bool,
}

impl Card {
    pub fn new(
        name: impl Into<String>,
        base_damage: i64,
        max_hp: i64,
        element_label: &str,
    ) -> anyhow::Result<Self> {
        let name = name.into();
        let element = Element::try_from(element_label)
            .map_err(|error| anyhow::anyhow!("unable to create card {name:?}: {error}"))?;
        Ok(Self {
            name,
            base_damage,
            health: Health::full(max_hp),
            element,
            element_label: element_label.trim().to_string(),
            leader: false,
        })
    }

    pub fn into_leader(mut self) -> Self {
        self.leader = true;
        self
    }

    /// Builds a leader named `name` on top of this card. A keyword naming the
    /// damage reward doubles the damage, one naming vitality doubles the
    /// health, anything else keeps the base stats.
    pub fn leader_variant(&self, name: impl Into<String>, keyword: &str) -> anyhow::Result<Card> {
        let name = name.into();
        let (mut base_damage, mut max_hp) = (self.base_damage, self.health.max());
        match RewardType::find_in(keyword) {
            Some(RewardType::Damage) => {
                base_damage = base_damage
                    .checked_mul(2)
                    .ok_or(anyhow::anyhow!("damage of leader {name:?} overflows"))?;
            }
            Some(RewardType::Vitality) => {
                max_hp = max_hp
                    .checked_mul(2)
                    .ok_or(anyhow::anyhow!("health of leader {name:?} overflows"))?;
            }
            None => {}
        }
        Ok(Card {
            name,
            base_damage,
            health: Health::full(max_hp),
            element: self.element,
            element_label: self.element_label.clone(),
            leader: true,
        })
    }

    /// A copy with full health, used when a template enters a collection or
    /// a battle roster.
    pub fn fresh_copy(&self) -> Card {
        let mut card = self.clone();
        card.health.restore();
        card
    }

    pub fn max_hp(&self) -> i64 {
        self.health.max()
    }

    pub fn current_hp(&self) -> i64 {
        self.health.current()
    }

    pub fn take_damage(&mut self, amount: i64) {
        self.health -= amount;
    }

    pub fn heal(&mut self, amount: i64) {
        self.health += amount;
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_depleted()
    }

    pub fn increase_damage(&mut self, amount: i64) {
        self.base_damage = self.base_damage.saturating_add(amount);
    }

    /// Raises the maximum health and heals the card to full.
    pub fn increase_vitality(&mut self, amount: i64) {
        self.health.raise_max(amount);
        self.health.restore();
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} (DMG: {} | HP: {})",
            self.element_label.to_uppercase(),
            self.name,
            self.base_damage,
            self.health.max()
        )
    }
}
