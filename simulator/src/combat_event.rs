use models::Owner;

use crate::CardSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// A card was announced and enters the fight.
    Play {
        turn: u32,
        owner: Owner,
        card: CardSummary,
    },
    /// `attacker` hit `defender`; the defender summary already reflects the damage.
    Attack {
        turn: u32,
        owner: Owner,
        attacker: CardSummary,
        defender: CardSummary,
        damage: i64,
    },
}

impl BattleEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            BattleEvent::Play { .. } => "play",
            BattleEvent::Attack { .. } => "attack",
        }
    }

    pub fn turn(&self) -> u32 {
        match self {
            BattleEvent::Play { turn, .. } | BattleEvent::Attack { turn, .. } => *turn,
        }
    }

    pub fn owner(&self) -> Owner {
        match self {
            BattleEvent::Play { owner, .. } | BattleEvent::Attack { owner, .. } => *owner,
        }
    }

    /// The card that acted.
    pub fn card(&self) -> &CardSummary {
        match self {
            BattleEvent::Play { card, .. } => card,
            BattleEvent::Attack { attacker, .. } => attacker,
        }
    }
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::Play { turn, owner, card } => {
                write!(f, "[{turn}] {owner}: {} enters the fight", card.name)
            }
            BattleEvent::Attack {
                turn,
                owner,
                attacker,
                defender,
                damage,
            } => write!(
                f,
                "[{turn}] {owner}: {} attacks {} for {damage} ({} hp left)",
                attacker.name,
                defender.name,
                defender.displayed_hp()
            ),
        }
    }
}
