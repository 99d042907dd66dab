mod aux;

use aux::{arin, card, nerun, simple_dungeon};
use rstest::rstest;
use simulator::{Battle, BattleResult, BattleSummary, seeded_rng};

#[rstest]
fn test_summary_counts_outcomes() {
    let enemies = vec![nerun()];
    let dungeon = simple_dungeon(&enemies);
    let mut results: Vec<BattleResult> = (0..10)
        .map(|seed| {
            Battle::new(&[arin()], &dungeon, &enemies, 5, true, seeded_rng(seed)).run_to_completion()
        })
        .collect();
    let brute = vec![card("Brute", 10, 20, "earth")];
    results.push(
        Battle::new(&[arin()], &simple_dungeon(&brute), &brute, 0, false, seeded_rng(0))
            .run_to_completion(),
    );

    let summary = BattleSummary::from(&results);
    assert_eq!(summary.total_runs, 11);
    assert_eq!(summary.victories + summary.defeats, 11);
    assert!(summary.defeats >= 1);
    assert!(summary.average_turns >= 1.0);
    assert!(summary.win_rate() <= 1.0);
}

#[rstest]
fn test_empty_summary() {
    let summary = BattleSummary::from(&Vec::<BattleResult>::new());
    assert_eq!(summary.total_runs, 0);
    assert_eq!(summary.win_rate(), 0.0);
    assert_eq!(summary.average_turns, 0.0);
}
