use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Damareen card battles
#[derive(Parser, Debug)]
#[command(name = "damareen")]
#[command(about = "Collect cards, build a deck and raid dungeons")]
#[command(version)]
pub struct Args {
    /// Settings file
    #[arg(long, global = true, value_name = "FILE", default_value = "damareen.toml")]
    pub config: PathBuf,

    /// Save file, overrides the one named in the settings
    #[arg(long, global = true, value_name = "FILE")]
    pub save: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a batch command file, or the in.txt inside a directory
    Batch {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
    /// Start over from the default world
    NewWorld,
    /// Print the world, the collection and the deck
    Show,
    /// Edit the deck
    Deck {
        #[command(subcommand)]
        action: DeckAction,
    },
    /// Set the difficulty used by game mode battles
    Difficulty {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=10))]
        level: u8,
    },
    /// Fight a dungeon with the saved deck
    Play {
        dungeon: String,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
        difficulty: Option<u8>,
    },
    /// Estimate the chance of beating a dungeon with the saved deck
    Odds {
        dungeon: String,
        #[arg(long, default_value = "1000")]
        runs: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum DeckAction {
    /// Append collection cards to the deck
    Add { cards: Vec<String> },
    /// Remove the card at a 1-based deck position
    Remove { position: usize },
    /// Empty the deck
    Clear,
}
