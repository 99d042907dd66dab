use models::RewardType;
use simulator::{BattleEvent, BattleResult, RewardOutcome};

/// A single line of a battle log.
pub fn event_line(event: &BattleEvent) -> String {
    match event {
        BattleEvent::Play { turn, owner, card } => format!(
            "{turn}.turn; {};plays; {};{};{}; {}",
            owner.tag(),
            card.name,
            card.base_damage,
            card.max_hp,
            card.element_label
        ),
        BattleEvent::Attack {
            turn,
            owner,
            attacker,
            defender,
            damage,
        } => format!(
            "{turn}.turn; {};attacks; {}; {damage}; {}; {}",
            owner.tag(),
            attacker.name,
            defender.name,
            defender.displayed_hp()
        ),
    }
}

pub fn result_line(result: &BattleResult, outcome: &RewardOutcome) -> String {
    if !result.is_victory() {
        return "player lost".to_string();
    }
    // The reward is named the way the dungeon was defined.
    let written = result.inner_ref().dungeon.reward_text();
    match outcome {
        RewardOutcome::Damage(card) => format!(
            "player won; {}; {card}",
            written.unwrap_or(RewardType::Damage.as_str())
        ),
        RewardOutcome::Vitality(card) => format!(
            "player won; {}; {card}",
            written.unwrap_or(RewardType::Vitality.as_str())
        ),
        RewardOutcome::Unrewarded(card) => format!("player won; none; {card}"),
        RewardOutcome::NewCard(card) => format!("player won; {card}"),
        RewardOutcome::NoNewCard => "player won; no new card".to_string(),
        RewardOutcome::NotAwarded => "player won".to_string(),
    }
}

/// The full log of a finished battle, lines joined by `\n` with no trailing
/// newline.
pub fn battle_log(result: &BattleResult, outcome: &RewardOutcome) -> String {
    let inner = result.inner_ref();
    std::iter::once(format!("battle starts; {}", inner.dungeon.name))
        .chain(inner.events.iter().map(event_line))
        .chain(std::iter::once(result_line(result, outcome)))
        .collect::<Vec<String>>()
        .join("\n")
}
