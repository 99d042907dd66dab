use gamedata::{ATTACK_QUIPS, BATTLE_OVER_QUIP, PLAY_QUIPS};
use models::{GameState, Owner};
use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use simulator::{apply_reward, create_rng, seeded_rng, Battle, BattleEvent, RewardOutcome};

pub struct PlayOptions {
    pub seed: Option<u64>,
    pub difficulty: u8,
    pub commentary: bool,
}

/// Fights `dungeon_name` in game mode, narrating every step, and applies the
/// reward to `state`.
pub fn play(
    state: &mut GameState,
    dungeon_name: &str,
    options: &PlayOptions,
) -> anyhow::Result<RewardOutcome> {
    let dungeon = state
        .dungeon(dungeon_name)
        .cloned()
        .ok_or(anyhow::anyhow!("unknown dungeon {dungeon_name:?}"))?;
    if state.deck.is_empty() {
        anyhow::bail!("the deck is empty, add cards with `damareen deck add`");
    }
    if !state.can_enter(&dungeon) {
        anyhow::bail!("{:?} has nothing left to award", dungeon.name);
    }

    let (rng, mut quip_rng) = match options.seed {
        Some(seed) => (seeded_rng(seed), StdRng::seed_from_u64(seed.wrapping_add(1))),
        None => (create_rng(), create_rng()),
    };
    let player_cards = state.deck_cards();
    let enemy_cards = state.enemy_roster(&dungeon);
    let mut battle = Battle::new(
        &player_cards,
        &dungeon,
        &enemy_cards,
        options.difficulty,
        true,
        rng,
    );

    println!("=== {} ({}) ===", dungeon.name, dungeon.tier);
    while !battle.is_over() {
        let Some(event) = battle.step() else {
            continue;
        };
        println!("{}", narrate(&event));
        if options.commentary {
            let pool: &[&str] = match &event {
                BattleEvent::Play { .. } => &PLAY_QUIPS,
                BattleEvent::Attack { .. } => &ATTACK_QUIPS,
            };
            if let Some(quip) = pool.choose(&mut quip_rng) {
                println!("    kobold: \"{quip}\"");
            }
        }
    }
    if options.commentary {
        println!("    kobold: \"{BATTLE_OVER_QUIP}\"");
    }

    let result = battle.run_to_completion();
    println!("{} after {} turn(s)", result.short_str(), result.inner_ref().turns);
    let outcome = apply_reward(state, &result);
    println!("Reward: {outcome}");
    Ok(outcome)
}

fn narrate(event: &BattleEvent) -> String {
    let side = match event.owner() {
        Owner::Dungeon => "Dungeon",
        Owner::Player => "You",
    };
    match event {
        BattleEvent::Play { turn, card, .. } => {
            format!("[turn {turn}] {side} play {card}")
        }
        BattleEvent::Attack {
            turn,
            attacker,
            defender,
            damage,
            ..
        } => format!(
            "[turn {turn}] {side}: {} hits {} for {damage} ({}/{} hp)",
            attacker.name,
            defender.name,
            defender.displayed_hp(),
            defender.max_hp
        ),
    }
}
