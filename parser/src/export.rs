use models::{Card, Dungeon, GameState};

fn card_line(card: &Card) -> String {
    let tag = if card.leader { "leader" } else { "card" };
    format!(
        "{tag}; {};{};{};{}",
        card.name,
        card.base_damage,
        card.max_hp(),
        card.element_label
    )
}

fn dungeon_line(dungeon: &Dungeon) -> String {
    let mut line = format!(
        "dungeon; {}; {}; {}",
        dungeon.tier_text(),
        dungeon.name,
        dungeon.cards.join(", ")
    );
    if let Some(leader) = &dungeon.leader {
        line.push_str(&format!("; {leader}"));
    }
    if let Some(reward) = dungeon.reward_text() {
        line.push_str(&format!("; {reward}"));
    }
    line
}

/// World cards in definition order, then every dungeon.
pub fn export_world(state: &GameState) -> String {
    state
        .cards
        .values()
        .map(card_line)
        .chain(state.dungeons.iter().map(dungeon_line))
        .collect::<Vec<String>>()
        .join("\n")
}

/// The collection with current stats, then the deck.
pub fn export_player(state: &GameState) -> String {
    state
        .collection
        .iter()
        .map(|card| {
            format!(
                "collection; {}; {};{};{}",
                card.name,
                card.base_damage,
                card.max_hp(),
                card.element_label
            )
        })
        .chain(state.deck.iter().map(|name| format!("deck; {name}")))
        .collect::<Vec<String>>()
        .join("\n")
}
