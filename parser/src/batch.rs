use std::path::{Path, PathBuf};

use models::{Card, Dungeon, GameState, RewardType};
use simulator::{apply_reward, Battle, FixedRoll};

use crate::{battle_log, export_player, export_world, Command};

pub const BATCH_INPUT_FILE: &str = "in.txt";

/// Resolves a batch input: a file is used as-is, a directory means the
/// `in.txt` inside it.
pub fn resolve_input(input: &Path) -> PathBuf {
    if input.is_dir() {
        input.join(BATCH_INPUT_FILE)
    } else {
        input.to_path_buf()
    }
}

/// Replays batch commands against a world that starts out empty. Output
/// files are written into `output_dir`.
pub struct BatchRunner {
    pub state: GameState,
    pub output_dir: PathBuf,
}

impl BatchRunner {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            state: GameState::default(),
            output_dir: output_dir.into(),
        }
    }

    /// Runs every line of `script`. Lines that fail to parse or to apply are
    /// logged and skipped.
    pub fn run(&mut self, script: &str) {
        for (index, line) in script.lines().enumerate() {
            let line_no = index + 1;
            match Command::parse(line) {
                Ok(Some(command)) => {
                    if let Err(error) = self.execute(command) {
                        tracing::warn!(line_no, %error, "skipping command");
                    }
                }
                Ok(None) => {}
                Err(error) => tracing::warn!(line_no, %error, line, "skipping line"),
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        tracing::debug!(?command, "executing");
        match command {
            Command::NewCard {
                name,
                damage,
                health,
                element,
            } => {
                self.state
                    .add_card(Card::new(name, damage, health, &element)?);
            }
            Command::NewLeader {
                name,
                base,
                keyword,
            } => {
                let leader = self
                    .state
                    .card(&base)
                    .ok_or(anyhow::anyhow!("unknown base card {base:?} for leader {name:?}"))?
                    .leader_variant(name, &keyword)?;
                self.state.add_card(leader);
            }
            Command::NewDungeon {
                tier,
                tier_label,
                name,
                cards,
                leader,
                reward,
            } => {
                let cards: Vec<String> = cards
                    .into_iter()
                    .filter(|card| {
                        let known = self.state.card(card).is_some();
                        if !known {
                            tracing::warn!(dungeon = %name, %card, "unknown dungeon card");
                        }
                        known
                    })
                    .collect();
                let mut dungeon = Dungeon::new(tier, name, cards).with_tier_label(&tier_label);
                if let Some(leader) = leader.filter(|l| self.state.card(l).is_some()) {
                    dungeon = dungeon.with_leader(leader);
                }
                if let Some(reward) = reward {
                    match RewardType::try_from(reward.as_str()) {
                        Ok(parsed) => dungeon = dungeon.with_reward(parsed).with_reward_label(&reward),
                        Err(error) => tracing::warn!(dungeon = %dungeon.name, %error, "ignoring reward"),
                    }
                }
                self.state.add_dungeon(dungeon);
            }
            Command::NewPlayer => self.state.reset_player(),
            Command::AddToCollection { name } => self.state.add_to_collection(&name)?,
            Command::NewDeck { cards } => {
                // The deck limit applies here as everywhere else, so an
                // oversized list keeps only the cards that fit.
                self.state.deck.clear();
                for card in cards {
                    if let Err(error) = self.state.add_to_deck(&card) {
                        tracing::warn!(%error, "card left out of the deck");
                    }
                }
            }
            Command::Battle { dungeon, output } => {
                let dungeon = self
                    .state
                    .dungeon(&dungeon)
                    .cloned()
                    .ok_or(anyhow::anyhow!("unknown dungeon {dungeon:?}"))?;
                let log = self.battle(&dungeon);
                self.write_output(&output, &log);
            }
            Command::ExportWorld { output } => {
                let contents = export_world(&self.state);
                self.write_output(&output, &contents);
            }
            Command::ExportPlayer { output } => {
                let contents = export_player(&self.state);
                self.write_output(&output, &contents);
            }
        }
        Ok(())
    }

    /// Fights `dungeon` deterministically, applies the reward and returns
    /// the log.
    pub fn battle(&mut self, dungeon: &Dungeon) -> String {
        let player_cards = self.state.deck_cards();
        let enemy_cards = self.state.enemy_roster(dungeon);
        let result = Battle::new(&player_cards, dungeon, &enemy_cards, 0, false, FixedRoll(0.0))
            .run_to_completion();
        let outcome = apply_reward(&mut self.state, &result);
        battle_log(&result, &outcome)
    }

    fn write_output(&self, file: &str, contents: &str) {
        let path = self.output_dir.join(file);
        match std::fs::write(&path, contents) {
            Ok(()) => tracing::info!(?path, "output written"),
            Err(error) => tracing::error!(?path, %error, "unable to write output"),
        }
    }
}

/// Runs the batch file at `input` (or `input/in.txt`) and returns the final
/// world.
pub fn run_batch(input: impl AsRef<Path>) -> anyhow::Result<GameState> {
    let path = resolve_input(input.as_ref());
    let script = std::fs::read_to_string(&path)
        .map_err(|error| anyhow::anyhow!("unable to read batch input {path:?}: {error}"))?;
    let output_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    tracing::info!(?path, "running batch");

    let mut runner = BatchRunner::new(output_dir);
    runner.run(&script);
    Ok(runner.state)
}
