use std::path::Path;

use clap::Parser;
use models::GameState;
use tracing_subscriber::EnvFilter;

mod args;
mod odds;
mod play;
mod settings;

use args::{Args, Command, DeckAction};
use odds::{estimate_odds, Matchup};
use play::{play, PlayOptions};
use settings::Settings;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let settings = Settings::load(&args.config)?;
    let save_path = args.save.clone().unwrap_or(settings.save_path.clone());
    tracing::info!(?save_path, command = ?args.command, "launch");

    match args.command {
        Command::Batch { input } => {
            let state = parser::run_batch(&input)?;
            println!(
                "batch done: {} card(s), {} dungeon(s), {} in the collection",
                state.cards.len(),
                state.dungeons.len(),
                state.collection.len()
            );
        }
        Command::NewWorld => {
            let state = gamedata::default_world()?;
            parser::save_world(&state, &save_path)?;
            println!("new world saved to {}", save_path.display());
        }
        Command::Show => show(&load_or_create(&save_path)?),
        Command::Deck { action } => {
            let mut state = load_or_create(&save_path)?;
            match action {
                DeckAction::Add { cards } => {
                    for card in cards {
                        match state.add_to_deck(&card) {
                            Ok(()) => println!("added {card}"),
                            Err(error) => println!("{error}"),
                        }
                    }
                }
                DeckAction::Remove { position } => {
                    match position.checked_sub(1).and_then(|i| state.remove_from_deck(i)) {
                        Some(card) => println!("removed {card}"),
                        None => anyhow::bail!("no card at deck position {position}"),
                    }
                }
                DeckAction::Clear => state.deck.clear(),
            }
            parser::save_world(&state, &save_path)?;
            print_deck(&state);
        }
        Command::Difficulty { level } => {
            let mut state = load_or_create(&save_path)?;
            state.set_difficulty(level);
            parser::save_world(&state, &save_path)?;
            println!("difficulty set to {}", state.difficulty);
        }
        Command::Play {
            dungeon,
            seed,
            difficulty,
        } => {
            let mut state = load_or_create(&save_path)?;
            let options = PlayOptions {
                seed: seed.or(settings.seed),
                difficulty: difficulty.or(settings.difficulty).unwrap_or(state.difficulty),
                commentary: settings.commentary,
            };
            play(&mut state, &dungeon, &options)?;
            parser::save_world(&state, &save_path)?;
        }
        Command::Odds { dungeon, runs } => {
            let state = load_or_create(&save_path)?;
            let dungeon = state
                .dungeon(&dungeon)
                .cloned()
                .ok_or(anyhow::anyhow!("unknown dungeon {dungeon:?}"))?;
            let matchup = Matchup {
                player_cards: state.deck_cards(),
                enemy_cards: state.enemy_roster(&dungeon),
                dungeon,
                difficulty: settings.difficulty.unwrap_or(state.difficulty),
            };
            println!("{}", estimate_odds(matchup, runs));
        }
    }
    Ok(())
}

/// The saved world, or the default one when nothing was saved yet.
fn load_or_create(save_path: &Path) -> anyhow::Result<GameState> {
    if save_path.exists() {
        parser::load_world(save_path)
    } else {
        tracing::info!(?save_path, "no save found, starting a new world");
        gamedata::default_world()
    }
}

fn show(state: &GameState) {
    println!("World cards:");
    for card in state.cards.values() {
        println!("  {card}");
    }
    println!("Dungeons:");
    for dungeon in state.dungeons.iter() {
        let roster: Vec<&str> = dungeon.roster_names().collect();
        let reward = dungeon
            .reward
            .map(|r| r.to_string())
            .unwrap_or_else(|| if dungeon.tier.awards_new_card() { "new card" } else { "none" }.to_string());
        let status = if state.can_enter(dungeon) { "" } else { " (closed)" };
        println!(
            "  {} [{}] {} -> {reward}{status}",
            dungeon.name,
            dungeon.tier,
            roster.join(", ")
        );
    }
    println!("Collection:");
    for card in state.collection.iter() {
        println!("  {card}");
    }
    print_deck(state);
    println!("Difficulty: {}", state.difficulty);
}

fn print_deck(state: &GameState) {
    println!("Deck ({}/{}):", state.deck.len(), state.deck_limit());
    for (i, name) in state.deck.iter().enumerate() {
        println!("  {}. {name}", i + 1);
    }
}
