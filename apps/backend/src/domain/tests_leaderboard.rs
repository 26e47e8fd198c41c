use time::macros::datetime;
use time::Duration;

use crate::domain::leaderboard::build_leaderboard;
use crate::domain::lifecycle::{self, LobbyConfig};
use crate::domain::lobby::{GameMode, Lobby};
use crate::domain::player::PlayerSession;

fn lobby_with(mode: GameMode) -> Lobby {
    let config = LobbyConfig {
        mode,
        ..LobbyConfig::default()
    };
    lifecycle::create_lobby("RANK01".to_string(), &config, 3, Vec::new()).unwrap()
}

fn add_player(lobby: &mut Lobby, id: &str, name: &str, team: &str, score: i32) {
    let mut session = PlayerSession::new(id.to_string(), name.to_string(), team.to_string());
    session.score = score;
    lobby.players.insert(id.to_string(), session);
}

fn order(lobby: &Lobby) -> Vec<String> {
    build_leaderboard(lobby)
        .players
        .into_iter()
        .map(|row| row.player_id)
        .collect()
}

#[test]
fn higher_score_ranks_first() {
    let mut lobby = lobby_with(GameMode::Solo);
    add_player(&mut lobby, "a", "Ann", "", 5);
    add_player(&mut lobby, "b", "Ben", "", 30);
    add_player(&mut lobby, "c", "Cal", "", -2);

    assert_eq!(order(&lobby), ["b", "a", "c"]);
    assert!(build_leaderboard(&lobby).teams.is_none());
}

#[test]
fn finished_breaks_score_ties() {
    let mut lobby = lobby_with(GameMode::Solo);
    add_player(&mut lobby, "a", "Ann", "", 20);
    add_player(&mut lobby, "b", "Ben", "", 20);
    let t = datetime!(2026-01-01 12:00:00 UTC);
    {
        let b = lobby.players.get_mut("b").unwrap();
        b.view.finished = true;
        b.view.finished_at = Some(t);
    }

    assert_eq!(order(&lobby), ["b", "a"]);

    // Among finished players the earlier finish wins.
    {
        let a = lobby.players.get_mut("a").unwrap();
        a.view.finished = true;
        a.view.finished_at = Some(t - Duration::seconds(30));
    }
    assert_eq!(order(&lobby), ["a", "b"]);
}

#[test]
fn misses_then_flips_then_name_break_remaining_ties() {
    let mut lobby = lobby_with(GameMode::Solo);
    add_player(&mut lobby, "a", "Zed", "", 10);
    add_player(&mut lobby, "b", "ann", "", 10);
    lobby.players.get_mut("a").unwrap().misses = 2;
    lobby.players.get_mut("b").unwrap().misses = 4;
    assert_eq!(order(&lobby), ["a", "b"]);

    lobby.players.get_mut("b").unwrap().misses = 2;
    lobby.players.get_mut("a").unwrap().flips = 9;
    lobby.players.get_mut("b").unwrap().flips = 6;
    assert_eq!(order(&lobby), ["b", "a"]);

    // Equal everywhere: the case-insensitive name decides.
    lobby.players.get_mut("a").unwrap().flips = 6;
    assert_eq!(order(&lobby), ["b", "a"]);
}

#[test]
fn identical_rows_order_by_player_id() {
    let mut lobby = lobby_with(GameMode::Solo);
    add_player(&mut lobby, "z", "Same", "", 0);
    add_player(&mut lobby, "a", "Same", "", 0);
    assert_eq!(order(&lobby), ["a", "z"]);
}

#[test]
fn teams_are_scored_from_their_top_three() {
    let mut lobby = lobby_with(GameMode::Teams);
    add_player(&mut lobby, "r1", "R1", "Red", 10);
    add_player(&mut lobby, "r2", "R2", "Red", 8);
    add_player(&mut lobby, "r3", "R3", "Red", 6);
    add_player(&mut lobby, "r4", "R4", "Red", 100);
    add_player(&mut lobby, "b1", "B1", "Blue", 50);

    let teams = build_leaderboard(&lobby).teams.unwrap();
    let red = teams.iter().find(|t| t.team == "Red").unwrap();
    // Top three ranked members: r4 (100), r1 (10), r2 (8).
    assert_eq!(red.score, 118);
    assert_eq!(red.members.len(), 3);
    assert!(!red.members.contains(&"R3".to_string()));

    // Teams sort by summed score.
    assert_eq!(teams[0].team, "Red");
    assert_eq!(teams[1].team, "Blue");
    assert_eq!(teams[1].score, 50);
}

#[test]
fn blank_team_labels_collapse_into_fallback() {
    let mut lobby = lobby_with(GameMode::Teams);
    add_player(&mut lobby, "a", "Ann", "  ", 5);
    add_player(&mut lobby, "b", "Ben", "", 7);
    add_player(&mut lobby, "c", "Cal", "Blue", 1);

    let teams = build_leaderboard(&lobby).teams.unwrap();
    let fallback = teams.iter().find(|t| t.team == "Team").unwrap();
    assert_eq!(fallback.score, 12);
    assert_eq!(fallback.members.len(), 2);
}

#[test]
fn equal_team_scores_order_by_label() {
    let mut lobby = lobby_with(GameMode::Teams);
    add_player(&mut lobby, "a", "Ann", "Zebra", 10);
    add_player(&mut lobby, "b", "Ben", "Aqua", 10);

    let teams = build_leaderboard(&lobby).teams.unwrap();
    assert_eq!(teams[0].team, "Aqua");
    assert_eq!(teams[1].team, "Zebra");
}
