use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants::GAMES_PER_PLAYER;
use crate::error::{Result, TournamentError};
use crate::game::GameKind;

/// Scores keyed by game, at most one per game.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreCard {
    scores: BTreeMap<GameKind, f64>,
}

impl ScoreCard {
    pub fn new() -> Self {
        ScoreCard {
            scores: BTreeMap::new(),
        }
    }

    pub fn get(&self, game: GameKind) -> Option<f64> {
        self.scores.get(&game).copied()
    }

    pub fn contains(&self, game: GameKind) -> bool {
        self.scores.contains_key(&game)
    }

    /// Scores in game order.
    pub fn iter(&self) -> impl Iterator<Item = (GameKind, f64)> + '_ {
        self.scores.iter().map(|(&game, &score)| (game, score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    fn insert(&mut self, game: GameKind, score: f64) {
        self.scores.insert(game, score);
    }
}

/// Tournament entrant.
///
/// `raw_scores` keeps what each game returned; `scores` is the card used for
/// ranking, equal to the raw card until the age bonus is applied.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub age: u32,
    raw_scores: ScoreCard,
    scores: ScoreCard,
    bonus_applied: bool,
}

impl Player {
    /// Create a player with empty score cards.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Player {
            name: name.into(),
            age,
            raw_scores: ScoreCard::new(),
            scores: ScoreCard::new(),
            bonus_applied: false,
        }
    }

    /// Record the raw result of one play.
    ///
    /// Fails if the game already has a score or if the bonus has already
    /// been applied, since the adjusted card would then be out of step.
    pub fn record_score(&mut self, game: GameKind, score: f64) -> Result<()> {
        if self.raw_scores.contains(game) {
            return Err(TournamentError::DuplicateScore {
                player: self.name.clone(),
                game,
            });
        }
        if self.bonus_applied {
            return Err(TournamentError::BonusAlreadyApplied {
                player: self.name.clone(),
            });
        }
        self.raw_scores.insert(game, score);
        self.scores.insert(game, score);
        Ok(())
    }

    pub fn raw_scores(&self) -> &ScoreCard {
        &self.raw_scores
    }

    /// Scores after any bonus.
    pub fn scores(&self) -> &ScoreCard {
        &self.scores
    }

    pub fn bonus_applied(&self) -> bool {
        self.bonus_applied
    }

    /// Rebuild the adjusted card from the raw card scaled by `multiplier`.
    ///
    /// Only one application is allowed per player.
    pub fn apply_multiplier(&mut self, multiplier: f64) -> Result<()> {
        if self.bonus_applied {
            return Err(TournamentError::BonusAlreadyApplied {
                player: self.name.clone(),
            });
        }
        let mut adjusted = ScoreCard::new();
        for (game, raw) in self.raw_scores.iter() {
            adjusted.insert(game, raw * multiplier);
        }
        self.scores = adjusted;
        self.bonus_applied = true;
        Ok(())
    }

    /// Sum of the adjusted scores.
    pub fn total_score(&self) -> f64 {
        self.scores.total()
    }

    /// Check the adjusted card holds exactly one score for every game.
    pub fn validate(&self) -> Result<()> {
        for game in GameKind::ALL {
            if !self.scores.contains(game) {
                return Err(TournamentError::MissingScore {
                    player: self.name.clone(),
                    game,
                });
            }
        }
        debug_assert_eq!(self.scores.len(), GAMES_PER_PLAYER);
        Ok(())
    }
}
