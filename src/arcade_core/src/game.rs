use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::constants::{
    RACING_CHECKPOINTS, RACING_POINTS_PER_CHECKPOINT, SHOOTING_POINTS_PER_TARGET,
    SHOOTING_TARGETS,
};

/// The closed set of arcade cabinets in the tournament.
///
/// Ordering follows declaration order, which is also the order games are
/// played in and the order they are reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GameKind {
    Shooting,
    Racing,
}

impl GameKind {
    /// Every game, in play order.
    pub const ALL: [GameKind; 2] = [GameKind::Shooting, GameKind::Racing];

    /// Display name, used as the score key in reports.
    pub fn name(self) -> &'static str {
        match self {
            GameKind::Shooting => "Shooting",
            GameKind::Racing => "Racing",
        }
    }

    /// Simulate one play of this game and return the score.
    ///
    /// Always non-negative. The RNG is the only source of variation.
    pub fn play<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        match self {
            GameKind::Shooting => shooting_score(rng),
            GameKind::Racing => racing_score(rng),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shooting gallery: every target hit is worth a fixed number of points.
///
/// # Returns
/// Score in `[12.0, 80.0]`, always a multiple of the per-target value
pub fn shooting_score<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let (lo, hi) = SHOOTING_TARGETS;
    let hits = rng.gen_range(lo..=hi);
    hits as f64 * SHOOTING_POINTS_PER_TARGET
}

/// Racing: points for every checkpoint cleared before the timer runs out.
///
/// # Returns
/// Score in `[22.5, 90.0]`
pub fn racing_score<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let (lo, hi) = RACING_CHECKPOINTS;
    let checkpoints = rng.gen_range(lo..=hi);
    checkpoints as f64 * RACING_POINTS_PER_CHECKPOINT
}
