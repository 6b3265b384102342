use serde::Serialize;

use crate::error::Result;
use crate::player::ScoreCard;
use crate::simulation::TournamentReport;
use crate::standings::{CategoryWinner, FieldStats, Prize, Status};

#[derive(Serialize)]
struct JsonReport<'a> {
    seed: u64,
    top_scorer: &'a str,
    leaderboard: Vec<JsonStanding<'a>>,
    category_winners: &'a [CategoryWinner],
    field: &'a FieldStats,
}

#[derive(Serialize)]
struct JsonStanding<'a> {
    rank: usize,
    name: &'a str,
    age: u32,
    scores: &'a ScoreCard,
    raw_scores: &'a ScoreCard,
    total: f64,
    bonus_applied: bool,
    status: Status,
    prize: Option<Prize>,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Human-readable report: one block per player in leaderboard order,
/// followed by category winners and the field summary.
pub fn render_text(report: &TournamentReport) -> String {
    let standings = &report.standings;
    let mut out = String::new();

    out.push_str("Arcade Tournament Final Report\n");
    out.push_str("==============================\n");
    out.push_str(&format!("Seed: {}\n\n", report.seed));

    out.push_str("Leaderboard\n");
    out.push_str("-----------\n");
    for row in &standings.leaderboard {
        let player = &row.player;
        out.push_str(&format!(
            "#{} {} (age {})\n",
            row.rank, player.name, player.age
        ));
        for (game, score) in player.scores().iter() {
            out.push_str(&format!("  {:<16}{:.2}\n", format!("{}:", game), score));
        }
        out.push_str(&format!("  {:<16}{:.2}\n", "Total:", row.total));
        out.push_str(&format!(
            "  {:<16}{}\n",
            "Bonus applied:",
            yes_no(player.bonus_applied())
        ));
        out.push_str(&format!("  {:<16}{}\n", "Status:", row.status));
        if let Some(prize) = row.prize {
            out.push_str(&format!("  {:<16}{}\n", "Prize:", prize));
        }
        out.push('\n');
    }

    out.push_str(&format!("Top scorer: {}\n\n", standings.top_scorer));

    out.push_str("Category winners\n");
    out.push_str("----------------\n");
    for winner in &standings.category_winners {
        out.push_str(&format!(
            "  {:<10}{} ({:.2})\n",
            winner.game.name(),
            winner.player,
            winner.score
        ));
    }
    out.push('\n');

    let field = &standings.field;
    out.push_str("Field\n");
    out.push_str("-----\n");
    out.push_str(&format!(
        "  mean {:.2} | std dev {:.2} | min {:.2} | max {:.2}\n",
        field.mean, field.std_dev, field.min, field.max
    ));

    out
}

/// Pretty-printed JSON with the same content as the text report.
pub fn render_json(report: &TournamentReport) -> Result<String> {
    let standings = &report.standings;
    let doc = JsonReport {
        seed: report.seed,
        top_scorer: &standings.top_scorer,
        leaderboard: standings
            .leaderboard
            .iter()
            .map(|row| JsonStanding {
                rank: row.rank,
                name: &row.player.name,
                age: row.player.age,
                scores: row.player.scores(),
                raw_scores: row.player.raw_scores(),
                total: row.total,
                bonus_applied: row.player.bonus_applied(),
                status: row.status,
                prize: row.prize,
            })
            .collect(),
        category_winners: &standings.category_winners,
        field: &standings.field,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
