use std::sync::mpsc::Sender;

use models::{Card, Dungeon, Element, GameState, MAX_DIFFICULTY, Owner, type_modifier};
use rand::rngs::StdRng;

use crate::{
    BattleEvent, BattleResult, BattleResultInner, CardSummary, DamageRoll, ENEMY_VARIANCE_DIVISOR,
    EventSink, FIRST_TURN, KILL_HEAL, PLAYER_VARIANCE_DIVISOR,
};

/// Damage before any difficulty spread: base damage times the type modifier,
/// rounded down.
pub fn typed_damage(base_damage: i64, attacker: Element, defender: Element) -> i64 {
    (base_damage as f64 * type_modifier(attacker, defender)).floor() as i64
}

/// One fight between the player's deck and a dungeon roster. Every call to
/// [`Battle::step`] performs exactly one action.
pub struct Battle<'a, R: DamageRoll = StdRng> {
    pub player_cards: Vec<Card>,
    pub enemy_cards: Vec<Card>,
    pub dungeon: Dungeon,
    pub difficulty: u8,
    pub is_game_mode: bool,
    pub turn: u32,
    pub player_index: usize,
    pub enemy_index: usize,
    pub player_played: bool,
    pub enemy_played: bool,
    pub next_actor: Owner,
    pub over: bool,
    pub winner: Option<Owner>,
    pub events: Vec<BattleEvent>,
    roll: R,
    sink: Option<EventSink<'a>>,
    event_sender: Option<Sender<BattleEvent>>,
}

impl<'a, R: DamageRoll> Battle<'a, R> {
    /// Both rosters are copied; the caller's cards are never touched by the fight.
    pub fn new(
        player_cards: &[Card],
        dungeon: &Dungeon,
        enemy_cards: &[Card],
        difficulty: u8,
        is_game_mode: bool,
        roll: R,
    ) -> Self {
        Self {
            player_cards: player_cards.iter().map(Card::fresh_copy).collect(),
            enemy_cards: enemy_cards.iter().map(Card::fresh_copy).collect(),
            dungeon: dungeon.clone(),
            difficulty: difficulty.min(MAX_DIFFICULTY),
            is_game_mode,
            turn: *FIRST_TURN,
            player_index: 0,
            enemy_index: 0,
            player_played: false,
            enemy_played: false,
            next_actor: Owner::Dungeon,
            over: false,
            winner: None,
            events: Vec::new(),
            roll,
            sink: None,
            event_sender: None,
        }
    }

    /// The saved deck against `dungeon`, at the world's difficulty.
    pub fn from_world(state: &GameState, dungeon: &Dungeon, is_game_mode: bool, roll: R) -> Self {
        let player_cards = state.deck_cards();
        let enemy_cards = state.enemy_roster(dungeon);
        Self::new(
            &player_cards,
            dungeon,
            &enemy_cards,
            state.difficulty,
            is_game_mode,
            roll,
        )
    }

    pub fn with_sink(mut self, sink: impl FnMut(&BattleEvent) + 'a) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn with_channel(mut self, sender: Sender<BattleEvent>) -> Self {
        self.event_sender = Some(sender);
        self
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn winner(&self) -> Option<Owner> {
        self.winner
    }

    pub fn active_player_card(&self) -> Option<&Card> {
        self.player_cards.get(self.player_index)
    }

    pub fn active_enemy_card(&self) -> Option<&Card> {
        self.enemy_cards.get(self.enemy_index)
    }

    /// The player card the cursor rests on, clamped to the roster. This is
    /// the card a victory rewards.
    pub fn last_player_card(&self) -> Option<&Card> {
        let last = self.player_cards.len().checked_sub(1)?;
        self.player_cards.get(self.player_index.min(last))
    }

    pub fn calculate_damage(&mut self, attacker: &Card, defender: &Card, owner: Owner) -> i64 {
        self.roll_damage(attacker.base_damage, attacker.element, defender.element, owner)
    }

    fn roll_damage(
        &mut self,
        base_damage: i64,
        attacker: Element,
        defender: Element,
        owner: Owner,
    ) -> i64 {
        let damage = typed_damage(base_damage, attacker, defender);
        if !self.is_game_mode || self.difficulty == 0 {
            return damage;
        }

        let spread = self.roll.roll() * self.difficulty as f64;
        let scaled = match owner {
            Owner::Dungeon => damage as f64 * (1.0 + spread / *ENEMY_VARIANCE_DIVISOR),
            Owner::Player => damage as f64 * (1.0 - spread / *PLAYER_VARIANCE_DIVISOR),
        };
        tracing::trace!(damage, spread, scaled, %owner, "damage spread");
        scaled.round_ties_even() as i64
    }

    fn dispatch(&mut self, event: BattleEvent) -> BattleEvent {
        tracing::debug!(%event, "battle event");
        if let Some(sink) = self.sink.as_mut() {
            sink(&event);
        }
        if let Some(ref tx) = self.event_sender {
            let _ = tx.send(event.clone());
        }
        self.events.push(event.clone());
        event
    }

    fn finish(&mut self, winner: Owner) {
        tracing::info!(
            dungeon = %self.dungeon.name,
            %winner,
            turn = self.turn,
            "battle over"
        );
        self.over = true;
        self.winner = Some(winner);
    }

    /// Neither active card can lower the other's health. The difficulty
    /// spread only scales damage, so this holds in game mode as well.
    fn is_stalemate(&self) -> bool {
        let player = &self.player_cards[self.player_index];
        let enemy = &self.enemy_cards[self.enemy_index];
        typed_damage(player.base_damage, player.element, enemy.element) <= 0
            && typed_damage(enemy.base_damage, enemy.element, player.element) <= 0
    }

    fn combatants_mut(&mut self, attacker_owner: Owner) -> (&mut Card, &mut Card) {
        let player = &mut self.player_cards[self.player_index];
        let enemy = &mut self.enemy_cards[self.enemy_index];
        match attacker_owner {
            Owner::Dungeon => (enemy, player),
            Owner::Player => (player, enemy),
        }
    }

    /// Advances the fight by a single action and returns the event it
    /// produced, if any. Does nothing once the battle is over.
    pub fn step(&mut self) -> Option<BattleEvent> {
        if self.over {
            return None;
        }
        if self.player_index >= self.player_cards.len() {
            self.finish(Owner::Dungeon);
            return None;
        }
        if self.enemy_index >= self.enemy_cards.len() {
            self.finish(Owner::Player);
            return None;
        }
        if !self.enemy_played {
            self.enemy_played = true;
            let card = CardSummary::from(&self.enemy_cards[self.enemy_index]);
            return Some(self.dispatch(BattleEvent::Play {
                turn: self.turn,
                owner: Owner::Dungeon,
                card,
            }));
        }
        if !self.player_played {
            self.player_played = true;
            let card = CardSummary::from(&self.player_cards[self.player_index]);
            return Some(self.dispatch(BattleEvent::Play {
                turn: self.turn,
                owner: Owner::Player,
                card,
            }));
        }

        if self.is_stalemate() {
            tracing::warn!(turn = self.turn, dungeon = %self.dungeon.name, "stalemate");
            self.finish(Owner::Dungeon);
            return None;
        }

        let attacker_owner = self.next_actor;
        let (base_damage, attacker_element, defender_element) = {
            let (attacker, defender) = self.combatants_mut(attacker_owner);
            (attacker.base_damage, attacker.element, defender.element)
        };
        let damage = self.roll_damage(base_damage, attacker_element, defender_element, attacker_owner);

        let (attacker, defender) = self.combatants_mut(attacker_owner);
        defender.take_damage(damage);
        let defender_down = defender.is_defeated();
        let defender_summary = CardSummary::from(&*defender);
        let attacker_summary = CardSummary::from(&*attacker);

        if defender_down {
            if attacker_owner == Owner::Player && attacker.current_hp() > 0 {
                attacker.heal(*KILL_HEAL);
            }
            match attacker_owner {
                Owner::Dungeon => {
                    self.player_index += 1;
                    self.player_played = false;
                }
                Owner::Player => {
                    self.enemy_index += 1;
                    self.enemy_played = false;
                }
            }
            self.next_actor = Owner::Dungeon;
        } else {
            self.next_actor = attacker_owner.inverse();
        }

        let event = self.dispatch(BattleEvent::Attack {
            turn: self.turn,
            owner: attacker_owner,
            attacker: attacker_summary,
            defender: defender_summary,
            damage,
        });
        if defender_down || attacker_owner == Owner::Player {
            self.turn += 1;
        }
        Some(event)
    }

    /// Steps until the battle is over.
    pub fn run_to_completion(&mut self) -> BattleResult {
        loop {
            if let Some(result) = self.result() {
                return result;
            }
            self.step();
        }
    }

    /// The outcome, once the battle is over.
    pub fn result(&self) -> Option<BattleResult> {
        let winner = self.winner?;
        let inner = BattleResultInner {
            dungeon: self.dungeon.clone(),
            events: self.events.clone(),
            turns: self.turn,
            player_cards: self.player_cards.clone(),
            enemy_cards: self.enemy_cards.clone(),
            rewarded_card: self.last_player_card().map(|c| c.name.clone()),
        };
        Some(match winner {
            Owner::Player => BattleResult::Victory(inner),
            Owner::Dungeon => BattleResult::Defeat(inner),
        })
    }
}
