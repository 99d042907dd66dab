use models::{Card, Dungeon, DungeonTier, GameState, RewardType};
use simulator::{Battle, BattleEvent, FixedRoll};

#[allow(unused)]
pub fn simple_dungeon(enemies: &[Card]) -> Dungeon {
    Dungeon::new(
        DungeonTier::Simple,
        "Test Dungeon",
        enemies.iter().map(|c| c.name.clone()).collect(),
    )
}

#[allow(unused)]
pub fn deterministic_battle<'a>(player: &[Card], enemies: &[Card]) -> Battle<'a, FixedRoll> {
    Battle::new(player, &simple_dungeon(enemies), enemies, 0, false, FixedRoll(0.0))
}

#[allow(unused)]
pub fn drain(battle: &mut Battle<'_, FixedRoll>) -> Vec<BattleEvent> {
    let mut events = Vec::new();
    while !battle.is_over() {
        if let Some(event) = battle.step() {
            events.push(event);
        }
    }
    events
}

/// A world holding `cards` as templates, `owned` in the collection, `deck`
/// in the deck and one dungeon named "Test Dungeon" fighting `enemies`.
#[allow(unused)]
pub fn world_with(
    cards: &[Card],
    owned: &[&str],
    deck: &[&str],
    tier: DungeonTier,
    enemies: &[&str],
    reward: Option<RewardType>,
) -> GameState {
    let mut state = GameState::default();
    for card in cards {
        state.add_card(card.clone());
    }
    for name in owned {
        state.add_to_collection(name).expect("owned card exists");
    }
    for name in deck {
        state.add_to_deck(name).expect("deck card fits");
    }
    let mut dungeon = Dungeon::new(
        tier,
        "Test Dungeon",
        enemies.iter().map(|n| n.to_string()).collect(),
    );
    dungeon.reward = reward;
    state.add_dungeon(dungeon);
    state
}
