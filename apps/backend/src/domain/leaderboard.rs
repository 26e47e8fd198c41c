//! Deterministic player ranking and optional team aggregation.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::lobby::{GameMode, Lobby};

/// Members counted toward a team's score.
const TEAM_TOP_N: usize = 3;

/// Fallback label for blank team names in teams mode.
const UNNAMED_TEAM: &str = "Team";

#[derive(Debug, Clone, Serialize)]
pub struct PlayerRow {
    pub player_id: String,
    pub name: String,
    pub team: String,
    pub score: i32,
    pub matches: u32,
    pub misses: u32,
    pub flips: u32,
    pub finished: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamRow {
    pub team: String,
    pub score: i64,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub players: Vec<PlayerRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<TeamRow>>,
}

/// Sort key carrying the non-serialized finish timestamp.
struct Ranked {
    row: PlayerRow,
    finished_at: Option<OffsetDateTime>,
}

/// Total order: score desc, finished first, earlier finish, fewer misses,
/// fewer flips, name (case-insensitive), then player id as the final
/// anchor so identical names still order deterministically.
fn compare(a: &Ranked, b: &Ranked) -> Ordering {
    b.row
        .score
        .cmp(&a.row.score)
        .then_with(|| b.row.finished.cmp(&a.row.finished))
        .then_with(|| match (a.finished_at, b.finished_at) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => Ordering::Equal,
        })
        .then_with(|| a.row.misses.cmp(&b.row.misses))
        .then_with(|| a.row.flips.cmp(&b.row.flips))
        .then_with(|| a.row.name.to_lowercase().cmp(&b.row.name.to_lowercase()))
        .then_with(|| a.row.player_id.cmp(&b.row.player_id))
}

/// Rank all players in the lobby; aggregate teams in teams mode.
pub fn build_leaderboard(lobby: &Lobby) -> Leaderboard {
    let mut ranked: Vec<Ranked> = lobby
        .players
        .values()
        .map(|player| {
            let view = lobby.view_of(player);
            Ranked {
                row: PlayerRow {
                    player_id: player.player_id.clone(),
                    name: player.name.clone(),
                    team: player.team.clone(),
                    score: player.score,
                    matches: player.matches,
                    misses: player.misses,
                    flips: player.flips,
                    finished: view.finished,
                },
                finished_at: view.finished_at,
            }
        })
        .collect();

    ranked.sort_by(compare);

    let teams = match lobby.mode {
        GameMode::Teams => Some(aggregate_teams(&ranked)),
        GameMode::Solo => None,
    };

    Leaderboard {
        players: ranked.into_iter().map(|r| r.row).collect(),
        teams,
    }
}

/// Group by team label, score each team from its top members, and order
/// teams by summed score then label.
fn aggregate_teams(ranked: &[Ranked]) -> Vec<TeamRow> {
    // Players arrive already sorted, so each team's vec is its ranking.
    let mut groups: HashMap<String, Vec<&Ranked>> = HashMap::new();
    for player in ranked {
        let label = {
            let trimmed = player.row.team.trim();
            if trimmed.is_empty() {
                UNNAMED_TEAM.to_string()
            } else {
                trimmed.to_string()
            }
        };
        groups.entry(label).or_default().push(player);
    }

    let mut teams: Vec<TeamRow> = groups
        .into_iter()
        .map(|(team, members)| {
            let counted = &members[..members.len().min(TEAM_TOP_N)];
            TeamRow {
                team,
                score: counted.iter().map(|p| p.row.score as i64).sum(),
                members: counted.iter().map(|p| p.row.name.clone()).collect(),
            }
        })
        .collect();

    teams.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.team.cmp(&b.team)));
    teams
}
