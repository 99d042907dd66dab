use indexmap::IndexMap;

use crate::{Card, normalize_text};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DungeonTier {
    Simple,
    Small,
    Large,
}

impl DungeonTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DungeonTier::Simple => "simple",
            DungeonTier::Small => "small",
            DungeonTier::Large => "large",
        }
    }

    /// Simple and small dungeons improve a card, large ones award a new card.
    pub fn awards_new_card(&self) -> bool {
        matches!(self, DungeonTier::Large)
    }
}

impl TryFrom<&str> for DungeonTier {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize_text(value).as_str() {
            "simple" | "egyszeru" => Ok(DungeonTier::Simple),
            "small" | "kis" => Ok(DungeonTier::Small),
            "large" | "nagy" => Ok(DungeonTier::Large),
            _ => anyhow::bail!("invalid dungeon tier {value:?}"),
        }
    }
}

impl std::fmt::Display for DungeonTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RewardType {
    Damage,
    Vitality,
}

impl RewardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardType::Damage => "damage",
            RewardType::Vitality => "vitality",
        }
    }

    /// Looks for a reward keyword anywhere in `text`. Damage wins when both
    /// appear.
    pub fn find_in(text: &str) -> Option<RewardType> {
        let normalized = normalize_text(text);
        if normalized.contains("damage") || normalized.contains("sebzes") {
            Some(RewardType::Damage)
        } else if normalized.contains("vitality") || normalized.contains("eletero") {
            Some(RewardType::Vitality)
        } else {
            None
        }
    }
}

impl TryFrom<&str> for RewardType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize_text(value).as_str() {
            "damage" | "sebzes" => Ok(RewardType::Damage),
            "vitality" | "eletero" => Ok(RewardType::Vitality),
            _ => anyhow::bail!("invalid reward type {value:?}"),
        }
    }
}

impl std::fmt::Display for RewardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    pub tier: DungeonTier,
    pub name: String,
    /// Names of the world cards fought in order.
    pub cards: Vec<String>,
    /// Name of the world card fought after every other card.
    pub leader: Option<String>,
    pub reward: Option<RewardType>,
    /// The tier as it was written, when that differs from its canonical name.
    pub tier_label: Option<String>,
    /// The reward as it was written, when that differs from its canonical name.
    pub reward_label: Option<String>,
}

impl Dungeon {
    pub fn new(tier: DungeonTier, name: impl Into<String>, cards: Vec<String>) -> Self {
        Self {
            tier,
            name: name.into(),
            cards,
            leader: None,
            reward: None,
            tier_label: None,
            reward_label: None,
        }
    }

    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = Some(leader.into());
        self
    }

    pub fn with_reward(mut self, reward: RewardType) -> Self {
        self.reward = Some(reward);
        self.reward_label = None;
        self
    }

    pub fn with_tier_label(mut self, label: &str) -> Self {
        let label = label.trim();
        self.tier_label = (label != self.tier.as_str()).then(|| label.to_string());
        self
    }

    /// Keeps the written form of the reward set by [`Dungeon::with_reward`].
    pub fn with_reward_label(mut self, label: &str) -> Self {
        let label = label.trim();
        self.reward_label = self
            .reward
            .filter(|reward| label != reward.as_str())
            .map(|_| label.to_string());
        self
    }

    /// The tier as it is shown in exports and saves.
    pub fn tier_text(&self) -> &str {
        self.tier_label.as_deref().unwrap_or(self.tier.as_str())
    }

    pub fn reward_text(&self) -> Option<&str> {
        self.reward
            .map(|reward| self.reward_label.as_deref().unwrap_or(reward.as_str()))
    }

    pub fn roster_names(&self) -> impl Iterator<Item = &str> {
        self.cards
            .iter()
            .map(String::as_str)
            .chain(self.leader.as_deref())
    }

    /// Fresh copies of the enemy cards followed by the leader. Names missing
    /// from `world` are skipped.
    pub fn enemy_roster(&self, world: &IndexMap<String, Card>) -> Vec<Card> {
        self.roster_names()
            .filter_map(|name| world.get(name))
            .map(Card::fresh_copy)
            .collect()
    }
}
