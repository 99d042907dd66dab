use std::path::Path;

use models::{Card, Dungeon, DungeonTier, GameState, RewardType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub dmg: i64,
    pub hp: i64,
    #[serde(rename = "type")]
    pub element: String,
    #[serde(default)]
    pub leader: bool,
}

impl From<&Card> for CardRecord {
    fn from(value: &Card) -> Self {
        Self {
            name: value.name.clone(),
            dmg: value.base_damage,
            hp: value.max_hp(),
            element: value.element_label.clone(),
            leader: value.leader,
        }
    }
}

impl TryFrom<&CardRecord> for Card {
    type Error = anyhow::Error;

    fn try_from(value: &CardRecord) -> Result<Self, Self::Error> {
        let card = Card::new(value.name.as_str(), value.dmg, value.hp, &value.element)?;
        Ok(if value.leader { card.into_leader() } else { card })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonRecord {
    pub type_id: String,
    pub name: String,
    pub cards: Vec<String>,
    #[serde(default)]
    pub leader: Option<String>,
    #[serde(default)]
    pub reward_type: Option<String>,
}

impl From<&Dungeon> for DungeonRecord {
    fn from(value: &Dungeon) -> Self {
        Self {
            type_id: value.tier_text().to_string(),
            name: value.name.clone(),
            cards: value.cards.clone(),
            leader: value.leader.clone(),
            reward_type: value.reward_text().map(str::to_string),
        }
    }
}

/// A collection card is saved by name while it still matches its world
/// template, and in full once a reward has changed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectionEntry {
    Name(String),
    Card(CardRecord),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub world_cards: Vec<CardRecord>,
    pub dungeons: Vec<DungeonRecord>,
    pub player_collection: Vec<CollectionEntry>,
    pub player_deck: Vec<String>,
    #[serde(default)]
    pub difficulty: u8,
}

impl From<&GameState> for SaveFile {
    fn from(state: &GameState) -> Self {
        let player_collection = state
            .collection
            .iter()
            .map(|card| match state.card(&card.name) {
                Some(template) if template.fresh_copy() == card.fresh_copy() => {
                    CollectionEntry::Name(card.name.clone())
                }
                _ => CollectionEntry::Card(CardRecord::from(card)),
            })
            .collect();

        Self {
            world_cards: state.cards.values().map(CardRecord::from).collect(),
            dungeons: state.dungeons.iter().map(DungeonRecord::from).collect(),
            player_collection,
            player_deck: state.deck.clone(),
            difficulty: state.difficulty,
        }
    }
}

impl TryFrom<&SaveFile> for GameState {
    type Error = anyhow::Error;

    fn try_from(save: &SaveFile) -> Result<Self, Self::Error> {
        let mut state = GameState::default();
        for record in save.world_cards.iter() {
            state.add_card(Card::try_from(record)?);
        }

        for record in save.dungeons.iter() {
            let tier = DungeonTier::try_from(record.type_id.as_str())?;
            let cards = record
                .cards
                .iter()
                .filter(|name| state.card(name).is_some())
                .cloned()
                .collect();
            let mut dungeon =
                Dungeon::new(tier, record.name.as_str(), cards).with_tier_label(&record.type_id);
            if let Some(leader) = record.leader.as_deref().filter(|l| state.card(l).is_some()) {
                dungeon = dungeon.with_leader(leader);
            }
            if let Some(reward) = record.reward_type.as_deref() {
                dungeon = dungeon
                    .with_reward(RewardType::try_from(reward)?)
                    .with_reward_label(reward);
            }
            state.add_dungeon(dungeon);
        }

        for entry in save.player_collection.iter() {
            match entry {
                CollectionEntry::Name(name) => {
                    if let Err(error) = state.add_to_collection(name) {
                        tracing::warn!(%error, "dropping collection entry");
                    }
                }
                CollectionEntry::Card(record) => {
                    if state.card(&record.name).is_none() {
                        tracing::warn!(card = %record.name, "dropping collection card missing from the world");
                        continue;
                    }
                    state.collection.push(Card::try_from(record)?);
                }
            }
        }

        state.deck = save
            .player_deck
            .iter()
            .filter(|name| state.owns(name))
            .cloned()
            .collect();
        state.set_difficulty(save.difficulty);
        Ok(state)
    }
}

/// Writes the world as pretty-printed JSON.
pub fn save_world(state: &GameState, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&SaveFile::from(state))?;
    std::fs::write(path, json)
        .map_err(|error| anyhow::anyhow!("unable to write save {path:?}: {error}"))?;
    tracing::info!(?path, "world saved");
    Ok(())
}

pub fn load_world(path: impl AsRef<Path>) -> anyhow::Result<GameState> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|error| anyhow::anyhow!("unable to read save {path:?}: {error}"))?;
    let save: SaveFile = serde_json::from_str(&json)
        .map_err(|error| anyhow::anyhow!("invalid save {path:?}: {error}"))?;
    let state = GameState::try_from(&save)?;
    tracing::info!(?path, cards = state.cards.len(), dungeons = state.dungeons.len(), "world loaded");
    Ok(state)
}

/// Replaces `state` with the save at `path`. On failure the error is logged,
/// `state` is left as it was and `false` is returned.
pub fn reload_world(state: &mut GameState, path: impl AsRef<Path>) -> bool {
    match load_world(path.as_ref()) {
        Ok(loaded) => {
            *state = loaded;
            true
        }
        Err(error) => {
            tracing::error!(%error, "unable to load world");
            false
        }
    }
}
