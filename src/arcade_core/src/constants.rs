/// Number of entrants in a weekly tournament
pub const PLAYER_COUNT: usize = 5;

/// Games each entrant plays
pub const GAMES_PER_PLAYER: usize = 2;

/// Players younger than this receive the age bonus
pub const JUNIOR_AGE_LIMIT: u32 = 16;

/// Players older than this receive the age bonus
pub const SENIOR_AGE_LIMIT: u32 = 50;

/// Fractional bonus added to every game score of an eligible player
pub const AGE_BONUS_RATE: f64 = 0.05;

/// A player is disqualified when every game score is strictly below this
pub const DISQUALIFY_THRESHOLD: f64 = 40.0;

/// Targets a shooting run can hit (inclusive bounds)
pub const SHOOTING_TARGETS: (u32, u32) = (3, 20);

/// Points per target hit
pub const SHOOTING_POINTS_PER_TARGET: f64 = 4.0;

/// Checkpoints a race can clear (inclusive bounds)
pub const RACING_CHECKPOINTS: (u32, u32) = (10, 40);

/// Points per checkpoint cleared
pub const RACING_POINTS_PER_CHECKPOINT: f64 = 2.25;

/// Prize tiers handed out in leaderboard order to qualified players
pub const PRIZE_TIERS: usize = 3;

/// Multiplier applied to a raw score when the age bonus is in effect
pub fn bonus_multiplier() -> f64 {
    1.0 + AGE_BONUS_RATE
}
