use crate::BattleResult;

/// Aggregate of many game-mode runs of the same matchup.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleSummary {
    pub total_runs: usize,
    pub victories: usize,
    pub defeats: usize,
    pub average_turns: f32,
    pub average_surviving_cards: f32,
}

impl BattleSummary {
    pub fn win_rate(&self) -> f32 {
        if self.total_runs > 0 {
            self.victories as f32 / self.total_runs as f32
        } else {
            0.0
        }
    }
}

impl From<&Vec<BattleResult>> for BattleSummary {
    fn from(results: &Vec<BattleResult>) -> Self {
        let total_runs = results.len();
        let mut victories = 0;
        let mut defeats = 0;
        let mut sum_turns = 0f64;
        let mut sum_surviving = 0f64;

        for res in results.iter() {
            match res {
                BattleResult::Victory(..) => victories += 1,
                BattleResult::Defeat(..) => defeats += 1,
            }
            let inner = res.inner_ref();
            sum_turns += inner.turns as f64;
            sum_surviving += inner.surviving_player_cards() as f64;
        }

        let average_turns = if total_runs > 0 {
            (sum_turns / total_runs as f64) as f32
        } else {
            0.0
        };

        let average_surviving_cards = if total_runs > 0 {
            (sum_surviving / total_runs as f64) as f32
        } else {
            0.0
        };

        BattleSummary {
            total_runs,
            victories,
            defeats,
            average_turns,
            average_surviving_cards,
        }
    }
}

impl std::fmt::Display for BattleSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} run(s): {} victories, {} defeats ({:.1}% win rate), {:.1} turns and {:.2} surviving card(s) on average",
            self.total_runs,
            self.victories,
            self.defeats,
            self.win_rate() * 100.0,
            self.average_turns,
            self.average_surviving_cards
        )
    }
}
