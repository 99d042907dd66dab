use std::sync::{mpsc::Sender, Arc};

use models::{Card, Dungeon};
use simulator::{create_rng, Battle, BattleResult, BattleSummary};

lazy_static::lazy_static! {
    pub static ref OPTIMAL_THREAD_COUNT: usize = num_cpus::get().max(1);
}

pub struct Matchup {
    pub player_cards: Vec<Card>,
    pub dungeon: Dungeon,
    pub enemy_cards: Vec<Card>,
    pub difficulty: u8,
}

pub fn spawn_battle_worker(
    chunk: usize,
    matchup: Arc<Matchup>,
    result_tx: Sender<BattleResult>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let mut rng = create_rng();
        for _ in 0..chunk {
            let result = Battle::new(
                &matchup.player_cards,
                &matchup.dungeon,
                &matchup.enemy_cards,
                matchup.difficulty,
                true,
                &mut rng,
            )
            .run_to_completion();
            if let Err(error) = result_tx.send(result) {
                tracing::error!(?error, "error sending battle result");
                break;
            }
        }
    })
}

/// Runs `runs` game mode battles spread over the available cores.
pub fn estimate_odds(matchup: Matchup, runs: usize) -> BattleSummary {
    let (result_tx, result_rx) = std::sync::mpsc::channel();
    let matchup = Arc::new(matchup);
    let base_chunk = runs / *OPTIMAL_THREAD_COUNT;
    let remainder = runs % *OPTIMAL_THREAD_COUNT;

    let workers: Vec<_> = (0..*OPTIMAL_THREAD_COUNT)
        .map(|i| {
            let chunk = base_chunk + if i < remainder { 1 } else { 0 };
            spawn_battle_worker(chunk, matchup.clone(), result_tx.clone())
        })
        .collect();
    drop(result_tx);

    let results: Vec<BattleResult> = result_rx.iter().collect();
    for worker in workers {
        if worker.join().is_err() {
            tracing::error!("battle worker panicked");
        }
    }
    BattleSummary::from(&results)
}
