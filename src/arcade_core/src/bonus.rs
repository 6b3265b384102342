use tracing::debug;

use crate::constants::{bonus_multiplier, JUNIOR_AGE_LIMIT, SENIOR_AGE_LIMIT};
use crate::error::{Result, TournamentError};
use crate::player::Player;

/// Whether a player of this age gets the bonus: under 16 or over 50.
pub fn is_bonus_eligible(age: u32) -> bool {
    age < JUNIOR_AGE_LIMIT || age > SENIOR_AGE_LIMIT
}

/// Apply the age bonus to every eligible player in a single pass.
///
/// Must run after all raw scores are recorded. If any eligible player already
/// has the bonus, fails with `BonusAlreadyApplied` and leaves every player
/// untouched.
///
/// # Returns
/// Number of players that received the bonus
pub fn apply_age_bonus(players: &mut [Player]) -> Result<usize> {
    if let Some(player) = players
        .iter()
        .find(|p| is_bonus_eligible(p.age) && p.bonus_applied())
    {
        return Err(TournamentError::BonusAlreadyApplied {
            player: player.name.clone(),
        });
    }

    let multiplier = bonus_multiplier();
    let mut applied = 0;

    for player in players.iter_mut().filter(|p| is_bonus_eligible(p.age)) {
        player.apply_multiplier(multiplier)?;
        debug!(
            player = %player.name,
            age = player.age,
            total = player.total_score(),
            "age bonus applied"
        );
        applied += 1;
    }

    Ok(applied)
}
