use models::{Card, Dungeon};

use crate::BattleEvent;

#[derive(Clone, Debug)]
pub struct BattleResultInner {
    pub dungeon: Dungeon,
    pub events: Vec<BattleEvent>,
    /// Turn counter when the battle ended.
    pub turns: u32,
    pub player_cards: Vec<Card>,
    pub enemy_cards: Vec<Card>,
    /// Name of the player card a victory rewards.
    pub rewarded_card: Option<String>,
}

impl BattleResultInner {
    pub fn surviving_player_cards(&self) -> usize {
        self.player_cards.iter().filter(|c| !c.is_defeated()).count()
    }
}

#[derive(Clone, Debug)]
pub enum BattleResult {
    Victory(BattleResultInner),
    Defeat(BattleResultInner),
}

impl BattleResult {
    pub fn inner_ref(&self) -> &BattleResultInner {
        match self {
            BattleResult::Victory(r) | BattleResult::Defeat(r) => r,
        }
    }

    pub fn is_victory(&self) -> bool {
        matches!(self, BattleResult::Victory(..))
    }

    pub fn short_str(&self) -> String {
        match self {
            BattleResult::Victory(..) => "Victory".to_string(),
            BattleResult::Defeat(..) => "Defeat".to_string(),
        }
    }
}

impl std::fmt::Display for BattleResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner_ref();
        let mut res = format!(
            "[{}] {} after {} turn(s)\n",
            inner.dungeon.name,
            self.short_str(),
            inner.turns
        );
        for event in &inner.events {
            res.push_str(&format!("  {event}\n"));
        }
        write!(f, "{res}")
    }
}
