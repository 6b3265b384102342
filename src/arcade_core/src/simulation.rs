use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::bonus::apply_age_bonus;
use crate::constants::PLAYER_COUNT;
use crate::error::{Result, TournamentError};
use crate::game::GameKind;
use crate::player::Player;
use crate::standings::{compute_standings, Standings};

/// Outcome of one tournament run.
#[derive(Clone, Debug)]
pub struct TournamentReport {
    /// Seed the scores were drawn with; rerunning with it reproduces the report
    pub seed: u64,
    pub standings: Standings,
}

/// The weekly entrants, in roster order.
pub fn default_roster() -> Vec<Player> {
    let roster = vec![
        Player::new("Amy", 17),
        Player::new("Leo", 14),
        Player::new("Maya", 34),
        Player::new("Ravi", 52),
        Player::new("Sofia", 28),
    ];
    debug_assert_eq!(roster.len(), PLAYER_COUNT);
    roster
}

/// Have every player play every game once, recording raw scores.
///
/// Players go in roster order; each plays the games in `GameKind::ALL` order.
pub fn play_round<R: Rng + ?Sized>(players: &mut [Player], rng: &mut R) -> Result<()> {
    for player in players.iter_mut() {
        for game in GameKind::ALL {
            let score = game.play(rng);
            debug!(player = %player.name, %game, score, "game played");
            player.record_score(game, score)?;
        }
    }
    Ok(())
}

/// Run the full pipeline on `players`: play, apply the age bonus, aggregate.
pub fn run_tournament(mut players: Vec<Player>, seed: u64) -> Result<TournamentReport> {
    if players.is_empty() {
        return Err(TournamentError::EmptyRoster);
    }
    info!(seed, players = players.len(), "starting tournament");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    play_round(&mut players, &mut rng)?;

    let bonused = apply_age_bonus(&mut players)?;
    debug!(bonused, "age bonus pass complete");

    let standings = compute_standings(&players)?;
    info!(top_scorer = %standings.top_scorer, "tournament complete");

    Ok(TournamentReport { seed, standings })
}

/// Run the weekly roster. A fresh seed is drawn when none is given.
pub fn run_default(seed: Option<u64>) -> Result<TournamentReport> {
    let seed = seed.unwrap_or_else(rand::random);
    run_tournament(default_roster(), seed)
}
