use serde::Serialize;
use statrs::statistics::Statistics;
use std::fmt;

use crate::constants::{DISQUALIFY_THRESHOLD, PRIZE_TIERS};
use crate::error::{Result, TournamentError};
use crate::game::GameKind;
use crate::player::Player;

/// Qualification outcome for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Qualified,
    Disqualified,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Qualified => "qualified",
            Status::Disqualified => "disqualified",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prize placement, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Prize {
    Gold,
    Silver,
    Bronze,
}

impl Prize {
    const ORDER: [Prize; PRIZE_TIERS] = [Prize::Gold, Prize::Silver, Prize::Bronze];

    /// Prize for the n-th qualified finisher (0-based), if any.
    pub fn for_place(place: usize) -> Option<Prize> {
        Self::ORDER.get(place).copied()
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Prize::Gold => "Gold",
            Prize::Silver => "Silver",
            Prize::Bronze => "Bronze",
        };
        f.write_str(label)
    }
}

/// One leaderboard row.
#[derive(Clone, Debug)]
pub struct Standing {
    /// 1-based position on the leaderboard
    pub rank: usize,
    pub player: Player,
    pub total: f64,
    pub status: Status,
    pub prize: Option<Prize>,
}

/// Best player in a single game.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryWinner {
    pub game: GameKind,
    pub player: String,
    pub score: f64,
}

/// Summary of all totals in the field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FieldStats {
    pub mean: f64,
    /// Sample standard deviation; 0.0 for a single player
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Everything derived from the final score cards.
#[derive(Clone, Debug)]
pub struct Standings {
    /// Rows ordered by total descending, ties in roster order
    pub leaderboard: Vec<Standing>,
    pub top_scorer: String,
    pub category_winners: Vec<CategoryWinner>,
    pub field: FieldStats,
}

/// Sum of a player's adjusted scores.
pub fn total_score(player: &Player) -> f64 {
    player.total_score()
}

/// True when every game score is strictly below the threshold.
///
/// Fails with `MissingScore` on an incomplete card.
pub fn is_disqualified(player: &Player) -> Result<bool> {
    player.validate()?;
    Ok(player
        .scores()
        .iter()
        .all(|(_, score)| score < DISQUALIFY_THRESHOLD))
}

pub fn status(player: &Player) -> Result<Status> {
    if is_disqualified(player)? {
        Ok(Status::Disqualified)
    } else {
        Ok(Status::Qualified)
    }
}

/// Player with the highest total. Ties go to the earlier player.
///
/// Every card must be complete and the roster non-empty.
pub fn top_scorer(players: &[Player]) -> Result<&Player> {
    let mut best: Option<&Player> = None;
    for player in players {
        player.validate()?;
        match best {
            Some(current) if player.total_score() <= current.total_score() => {}
            _ => best = Some(player),
        }
    }
    best.ok_or(TournamentError::EmptyRoster)
}

/// Player with the highest score in `game`. Ties go to the earlier player.
///
/// Players without a score for the game are skipped.
pub fn category_winner(players: &[Player], game: GameKind) -> Option<CategoryWinner> {
    let mut best: Option<CategoryWinner> = None;
    for player in players {
        let Some(score) = player.scores().get(game) else {
            continue;
        };
        match &best {
            Some(current) if score <= current.score => {}
            _ => {
                best = Some(CategoryWinner {
                    game,
                    player: player.name.clone(),
                    score,
                })
            }
        }
    }
    best
}

/// Winner of every game, in game order.
pub fn category_winners(players: &[Player]) -> Vec<CategoryWinner> {
    GameKind::ALL
        .iter()
        .filter_map(|&game| category_winner(players, game))
        .collect()
}

/// Players ordered by total descending. The sort is stable, so ties keep
/// roster order.
pub fn leaderboard(players: &[Player]) -> Vec<&Player> {
    let mut ordered: Vec<&Player> = players.iter().collect();
    ordered.sort_by(|a, b| b.total_score().total_cmp(&a.total_score()));
    ordered
}

/// Mean, spread and range of the totals.
pub fn field_stats(totals: &[f64]) -> FieldStats {
    if totals.is_empty() {
        return FieldStats {
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
        };
    }

    let std_dev = if totals.len() > 1 {
        totals.iter().std_dev()
    } else {
        0.0
    };

    FieldStats {
        mean: totals.iter().mean(),
        std_dev,
        min: Statistics::min(totals.iter()),
        max: Statistics::max(totals.iter()),
    }
}

/// Aggregate final score cards into the tournament standings.
///
/// Every player must hold exactly one score per game. Prizes go to the first
/// qualified players on the leaderboard.
pub fn compute_standings(players: &[Player]) -> Result<Standings> {
    if players.is_empty() {
        return Err(TournamentError::EmptyRoster);
    }
    for player in players {
        player.validate()?;
    }

    let mut qualified_place = 0;
    let mut rows = Vec::with_capacity(players.len());
    for (idx, player) in leaderboard(players).into_iter().enumerate() {
        let outcome = status(player)?;
        let prize = match outcome {
            Status::Qualified => {
                let prize = Prize::for_place(qualified_place);
                qualified_place += 1;
                prize
            }
            Status::Disqualified => None,
        };
        rows.push(Standing {
            rank: idx + 1,
            player: player.clone(),
            total: total_score(player),
            status: outcome,
            prize,
        });
    }

    let top_scorer = top_scorer(players)?.name.clone();

    let totals: Vec<f64> = players.iter().map(total_score).collect();

    Ok(Standings {
        leaderboard: rows,
        top_scorer,
        category_winners: category_winners(players),
        field: field_stats(&totals),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::apply_age_bonus;

    fn scored(name: &str, age: u32, shooting: f64, racing: f64) -> Player {
        let mut player = Player::new(name, age);
        player.record_score(GameKind::Shooting, shooting).unwrap();
        player.record_score(GameKind::Racing, racing).unwrap();
        player
    }

    /// Five players with totals [85, 47.25, 120, 60, 33] after the bonus.
    fn make_field() -> Vec<Player> {
        let mut players = vec![
            scored("Amy", 17, 55.0, 30.0),
            scored("Leo", 14, 20.0, 25.0),
            scored("Maya", 34, 70.0, 50.0),
            scored("Sofia", 28, 35.0, 25.0),
            scored("Tom", 30, 18.0, 15.0),
        ];
        apply_age_bonus(&mut players).unwrap();
        players
    }

    #[test]
    fn test_amy_qualified() {
        let amy = scored("Amy", 17, 55.0, 30.0);
        assert_eq!(total_score(&amy), 85.0);
        assert_eq!(status(&amy).unwrap(), Status::Qualified);
    }

    #[test]
    fn test_leo_disqualified_after_bonus() {
        let players = make_field();
        let leo = &players[1];
        assert!(leo.bonus_applied());
        assert!((total_score(leo) - 47.25).abs() < 1e-10);
        assert_eq!(status(leo).unwrap(), Status::Disqualified);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly 40 counts as qualifying
        let edge = scored("Edge", 30, 40.0, 10.0);
        assert_eq!(status(&edge).unwrap(), Status::Qualified);

        let below = scored("Below", 30, 39.99, 39.99);
        assert_eq!(status(&below).unwrap(), Status::Disqualified);
    }

    #[test]
    fn test_bonus_can_lift_over_threshold() {
        // 38.5 * 1.05 = 40.425
        let mut players = vec![scored("Gran", 60, 38.5, 20.0)];
        assert_eq!(status(&players[0]).unwrap(), Status::Disqualified);
        apply_age_bonus(&mut players).unwrap();
        assert_eq!(status(&players[0]).unwrap(), Status::Qualified);
    }

    #[test]
    fn test_leaderboard_order() {
        let players = make_field();
        let board = leaderboard(&players);
        let names: Vec<&str> = board.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Maya", "Amy", "Sofia", "Leo", "Tom"]);

        let totals: Vec<f64> = board.iter().map(|p| total_score(p)).collect();
        assert_eq!(totals[0], 120.0);
        assert_eq!(totals[4], 33.0);
    }

    #[test]
    fn test_top_scorer_tie_goes_to_first() {
        let players = vec![
            scored("First", 30, 50.0, 50.0),
            scored("Second", 30, 60.0, 40.0),
        ];
        assert_eq!(top_scorer(&players).unwrap().name, "First");

        let board = leaderboard(&players);
        assert_eq!(board[0].name, "First");
        assert_eq!(board[1].name, "Second");
    }

    #[test]
    fn test_category_winners() {
        let players = make_field();
        let winners = category_winners(&players);
        assert_eq!(winners.len(), 2);

        assert_eq!(winners[0].game, GameKind::Shooting);
        assert_eq!(winners[0].player, "Maya");
        assert_eq!(winners[0].score, 70.0);

        assert_eq!(winners[1].game, GameKind::Racing);
        assert_eq!(winners[1].player, "Maya");
    }

    #[test]
    fn test_category_winner_tie_goes_to_first() {
        let players = vec![
            scored("First", 30, 60.0, 10.0),
            scored("Second", 30, 60.0, 20.0),
        ];
        let shooting = category_winner(&players, GameKind::Shooting).unwrap();
        assert_eq!(shooting.player, "First");
        let racing = category_winner(&players, GameKind::Racing).unwrap();
        assert_eq!(racing.player, "Second");
    }

    #[test]
    fn test_compute_standings_prizes_skip_disqualified() {
        let players = make_field();
        let standings = compute_standings(&players).unwrap();

        assert_eq!(standings.top_scorer, "Maya");
        assert_eq!(standings.leaderboard[0].player.name, standings.top_scorer);

        let prizes: Vec<(&str, Option<Prize>)> = standings
            .leaderboard
            .iter()
            .map(|s| (s.player.name.as_str(), s.prize))
            .collect();
        assert_eq!(
            prizes,
            vec![
                ("Maya", Some(Prize::Gold)),
                ("Amy", Some(Prize::Silver)),
                ("Sofia", None),
                ("Leo", None),
                ("Tom", None),
            ]
        );
        // Sofia's best game is 35, so she is out of the prizes
        assert_eq!(standings.leaderboard[2].status, Status::Disqualified);
        assert_eq!(standings.leaderboard[2].rank, 3);
    }

    #[test]
    fn test_compute_standings_rejects_incomplete_card() {
        let mut players = make_field();
        players.push(Player::new("Late", 20));

        let err = compute_standings(&players).unwrap_err();
        assert!(matches!(err, TournamentError::MissingScore { .. }));
    }

    #[test]
    fn test_incomplete_card_is_not_ranked() {
        let nobody = Player::new("Nobody", 20);
        assert!(matches!(
            is_disqualified(&nobody).unwrap_err(),
            TournamentError::MissingScore { game: GameKind::Shooting, .. }
        ));
        assert!(status(&nobody).is_err());

        let players = vec![scored("Amy", 17, 55.0, 30.0), nobody];
        assert!(matches!(
            top_scorer(&players).unwrap_err(),
            TournamentError::MissingScore { .. }
        ));
        assert!(matches!(top_scorer(&[]).unwrap_err(), TournamentError::EmptyRoster));
    }

    #[test]
    fn test_compute_standings_empty() {
        assert!(matches!(
            compute_standings(&[]).unwrap_err(),
            TournamentError::EmptyRoster
        ));
    }

    #[test]
    fn test_field_stats() {
        let stats = field_stats(&[85.0, 47.25, 120.0, 60.0, 33.0]);
        assert!((stats.mean - 69.05).abs() < 1e-9);
        assert_eq!(stats.min, 33.0);
        assert_eq!(stats.max, 120.0);
        assert!(stats.std_dev > 0.0);

        let single = field_stats(&[50.0]);
        assert_eq!(single.std_dev, 0.0);
        assert_eq!(single.mean, 50.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn field_strategy() -> impl Strategy<Value = Vec<(u32, f64, f64)>> {
            proptest::collection::vec((5u32..80, 0.0f64..100.0, 0.0f64..100.0), 1..12)
        }

        fn build(entries: &[(u32, f64, f64)]) -> Vec<Player> {
            let mut players: Vec<Player> = entries
                .iter()
                .enumerate()
                .map(|(i, &(age, shooting, racing))| {
                    scored(&format!("P{}", i), age, shooting, racing)
                })
                .collect();
            apply_age_bonus(&mut players).unwrap();
            players
        }

        proptest! {
            #[test]
            fn leaderboard_is_non_increasing(entries in field_strategy()) {
                let players = build(&entries);
                let standings = compute_standings(&players).unwrap();

                for pair in standings.leaderboard.windows(2) {
                    prop_assert!(pair[0].total >= pair[1].total);
                }
                prop_assert_eq!(&standings.leaderboard[0].player.name, &standings.top_scorer);
            }

            #[test]
            fn totals_and_bonus_match_raw_scores(entries in field_strategy()) {
                let players = build(&entries);

                for player in &players {
                    let sum: f64 = player.scores().iter().map(|(_, s)| s).sum();
                    prop_assert!((total_score(player) - sum).abs() < 1e-9);

                    for (game, raw) in player.raw_scores().iter() {
                        let adjusted = player.scores().get(game).unwrap();
                        if player.bonus_applied() {
                            prop_assert!((adjusted - raw * 1.05).abs() < 1e-9);
                        } else {
                            prop_assert_eq!(adjusted, raw);
                        }
                    }
                }
            }

            #[test]
            fn disqualified_iff_all_below_threshold(entries in field_strategy()) {
                let players = build(&entries);
                let standings = compute_standings(&players).unwrap();

                for row in &standings.leaderboard {
                    let all_below = row
                        .player
                        .scores()
                        .iter()
                        .all(|(_, s)| s < DISQUALIFY_THRESHOLD);
                    prop_assert_eq!(row.status == Status::Disqualified, all_below);
                    if row.status == Status::Disqualified {
                        prop_assert!(row.prize.is_none());
                    }
                }

                let prizes = standings.leaderboard.iter().filter(|s| s.prize.is_some()).count();
                prop_assert!(prizes <= PRIZE_TIERS);
            }
        }
    }
}
