use crate::game::GameKind;

/// Errors raised by the tournament pipeline.
///
/// None of these occur in a correct run; they surface programming defects
/// (a score recorded twice, a bonus applied twice) instead of masking them.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("tournament has no players")]
    EmptyRoster,

    #[error("player {player} has no {game} score")]
    MissingScore { player: String, game: GameKind },

    #[error("player {player} already has a {game} score")]
    DuplicateScore { player: String, game: GameKind },

    #[error("age bonus already applied to {player}")]
    BonusAlreadyApplied { player: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TournamentError>;
