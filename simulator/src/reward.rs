use models::{DungeonTier, GameState, RewardType};

use crate::{BattleResult, DAMAGE_REWARD, VITALITY_REWARD};

/// What a finished battle did to the player's collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RewardOutcome {
    /// The named card gained base damage.
    Damage(String),
    /// The named card gained maximum health and was healed to full.
    Vitality(String),
    /// A simple or small dungeon without a reward type was cleared by the named card.
    Unrewarded(String),
    /// A large dungeon added a copy of the named world card to the collection.
    NewCard(String),
    /// A large dungeon had nothing left to award.
    NoNewCard,
    /// The battle was lost, or nobody was left to reward.
    NotAwarded,
}

impl std::fmt::Display for RewardOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewardOutcome::Damage(card) => write!(f, "{card} gained +{} damage", *DAMAGE_REWARD),
            RewardOutcome::Vitality(card) => {
                write!(f, "{card} gained +{} health", *VITALITY_REWARD)
            }
            RewardOutcome::Unrewarded(card) => write!(f, "{card} won without a reward"),
            RewardOutcome::NewCard(card) => write!(f, "{card} joined the collection"),
            RewardOutcome::NoNewCard => write!(f, "no new card left to award"),
            RewardOutcome::NotAwarded => write!(f, "no reward"),
        }
    }
}

/// Applies the dungeon's reward to the collection after a victory. Defeats
/// leave the state untouched.
pub fn apply_reward(state: &mut GameState, result: &BattleResult) -> RewardOutcome {
    let BattleResult::Victory(inner) = result else {
        return RewardOutcome::NotAwarded;
    };
    let Some(card_name) = inner.rewarded_card.clone() else {
        tracing::warn!(dungeon = %inner.dungeon.name, "victory without a player card");
        return RewardOutcome::NotAwarded;
    };

    let outcome = match inner.dungeon.tier {
        DungeonTier::Simple | DungeonTier::Small => {
            let original = state.collection_card_mut(&card_name);
            if original.is_none() {
                tracing::warn!(card = %card_name, "rewarded card is no longer in the collection");
            }
            match inner.dungeon.reward {
                Some(RewardType::Damage) => {
                    if let Some(card) = original {
                        card.increase_damage(*DAMAGE_REWARD);
                    }
                    RewardOutcome::Damage(card_name)
                }
                Some(RewardType::Vitality) => {
                    if let Some(card) = original {
                        card.increase_vitality(*VITALITY_REWARD);
                    }
                    RewardOutcome::Vitality(card_name)
                }
                None => RewardOutcome::Unrewarded(card_name),
            }
        }
        DungeonTier::Large => match state.new_base_element_card() {
            Some(template) => {
                let card = template.fresh_copy();
                let name = card.name.clone();
                state.collection.push(card);
                RewardOutcome::NewCard(name)
            }
            None => RewardOutcome::NoNewCard,
        },
    };
    tracing::info!(dungeon = %inner.dungeon.name, %outcome, "reward applied");
    outcome
}
