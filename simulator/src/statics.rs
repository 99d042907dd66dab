lazy_static::lazy_static! {
    /// Health a player card regains when it finishes off an enemy.
    pub static ref KILL_HEAL: i64 = 1;
    pub static ref DAMAGE_REWARD: i64 = 1;
    pub static ref VITALITY_REWARD: i64 = 2;
    /// At difficulty 10 enemies hit up to twice as hard...
    pub static ref ENEMY_VARIANCE_DIVISOR: f64 = 10.0;
    /// ...and player cards lose up to half of their damage.
    pub static ref PLAYER_VARIANCE_DIVISOR: f64 = 20.0;
    pub static ref FIRST_TURN: u32 = 1;
}
