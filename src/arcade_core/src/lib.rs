//! Arcade Core - weekly arcade tournament simulation.
//!
//! Five players each play a shooting and a racing game. Scores get an
//! age-based bonus, then the crate derives the leaderboard, category winners,
//! disqualifications and prize placements. Python bindings are available
//! behind the `python` feature.

pub mod bonus;
pub mod constants;
pub mod error;
pub mod game;
pub mod logging;
pub mod player;
pub mod report;
pub mod simulation;
pub mod standings;

#[cfg(feature = "python")]
mod python;

pub use bonus::{apply_age_bonus, is_bonus_eligible};
pub use constants::{
    AGE_BONUS_RATE, DISQUALIFY_THRESHOLD, GAMES_PER_PLAYER, JUNIOR_AGE_LIMIT, PLAYER_COUNT,
    SENIOR_AGE_LIMIT,
};
pub use error::{Result, TournamentError};
pub use game::GameKind;
pub use player::{Player, ScoreCard};
pub use report::{render_json, render_text};
pub use simulation::{default_roster, play_round, run_default, run_tournament, TournamentReport};
pub use standings::{
    category_winner, category_winners, compute_standings, field_stats, is_disqualified,
    leaderboard, top_scorer, total_score, CategoryWinner, FieldStats, Prize, Standing, Standings,
    Status,
};
