use indexmap::IndexMap;

use crate::{Card, Dungeon, DungeonTier};

pub const MAX_DIFFICULTY: u8 = 10;

/// The whole world: card templates, dungeons and the player's cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    /// World card templates keyed by name, in definition order.
    pub cards: IndexMap<String, Card>,
    pub dungeons: Vec<Dungeon>,
    /// Cards the player owns. Rewards mutate these copies, never the templates.
    pub collection: Vec<Card>,
    /// Names of collection cards taken into battle, in fighting order.
    pub deck: Vec<String>,
    pub difficulty: u8,
}

impl GameState {
    /// Adds or replaces a world card template.
    pub fn add_card(&mut self, card: Card) {
        self.cards.insert(card.name.clone(), card);
    }

    pub fn card(&self, name: &str) -> Option<&Card> {
        self.cards.get(name)
    }

    pub fn add_dungeon(&mut self, dungeon: Dungeon) {
        self.dungeons.push(dungeon);
    }

    pub fn dungeon(&self, name: &str) -> Option<&Dungeon> {
        self.dungeons.iter().find(|d| d.name == name)
    }

    pub fn enemy_roster(&self, dungeon: &Dungeon) -> Vec<Card> {
        dungeon.enemy_roster(&self.cards)
    }

    /// Clears the collection and the deck.
    pub fn reset_player(&mut self) {
        self.collection.clear();
        self.deck.clear();
    }

    /// Appends a fresh copy of the world template `name` to the collection.
    pub fn add_to_collection(&mut self, name: &str) -> anyhow::Result<()> {
        let card = self
            .cards
            .get(name)
            .ok_or(anyhow::anyhow!("unknown card {name:?}"))?
            .fresh_copy();
        self.collection.push(card);
        Ok(())
    }

    pub fn owns(&self, name: &str) -> bool {
        self.collection.iter().any(|c| c.name == name)
    }

    pub fn collection_card(&self, name: &str) -> Option<&Card> {
        self.collection.iter().find(|c| c.name == name)
    }

    pub fn collection_card_mut(&mut self, name: &str) -> Option<&mut Card> {
        self.collection.iter_mut().find(|c| c.name == name)
    }

    pub fn deck_limit(&self) -> usize {
        self.collection.len().div_ceil(2)
    }

    /// Appends a collection card to the deck. Rejected without touching the
    /// deck when it is already full or the card is not owned.
    pub fn add_to_deck(&mut self, name: &str) -> anyhow::Result<()> {
        let limit = self.deck_limit();
        if self.deck.len() >= limit {
            anyhow::bail!("deck is full ({}/{limit}), cannot add {name:?}", self.deck.len());
        }
        if !self.owns(name) {
            anyhow::bail!("{name:?} is not in the collection");
        }
        self.deck.push(name.to_string());
        Ok(())
    }

    pub fn remove_from_deck(&mut self, index: usize) -> Option<String> {
        (index < self.deck.len()).then(|| self.deck.remove(index))
    }

    /// Collection cards named by the deck, in deck order.
    pub fn deck_cards(&self) -> Vec<Card> {
        self.deck
            .iter()
            .filter_map(|name| self.collection_card(name))
            .cloned()
            .collect()
    }

    /// The first world template, in definition order, the player does not own
    /// yet. This is what a large dungeon awards.
    pub fn new_base_element_card(&self) -> Option<&Card> {
        self.cards.values().find(|c| !self.owns(&c.name))
    }

    /// Whether a battle against `dungeon` may start. Large dungeons are closed
    /// once there is no card left for them to award.
    pub fn can_enter(&self, dungeon: &Dungeon) -> bool {
        if self.deck.is_empty() {
            return false;
        }
        match dungeon.tier {
            DungeonTier::Large => self.new_base_element_card().is_some(),
            DungeonTier::Simple | DungeonTier::Small => true,
        }
    }

    pub fn set_difficulty(&mut self, difficulty: u8) {
        self.difficulty = difficulty.min(MAX_DIFFICULTY);
    }
}
