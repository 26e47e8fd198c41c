//! Public projections of lobby state.
//!
//! Views never expose the full solution: a face is present only when the
//! viewer's board state says the tile is visible.

use serde::Serialize;

use crate::domain::board::Symbol;
use crate::domain::lobby::{BoardScope, EntryMode, GameMode, Lobby, LobbyStatus};
use crate::domain::player::{BoardView, PlayerSession};

/// Lobby summary safe for any client.
#[derive(Debug, Clone, Serialize)]
pub struct LobbyView {
    pub code: String,
    pub status: LobbyStatus,
    pub mode: GameMode,
    pub entry: EntryMode,
    pub scope: BoardScope,
    pub rows: u8,
    pub cols: u8,
    pub player_count: usize,
    pub allow_join: bool,
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub prizes: std::collections::HashMap<String, String>,
}

impl LobbyView {
    pub fn from_lobby(lobby: &Lobby) -> Self {
        Self {
            code: lobby.code.clone(),
            status: lobby.status,
            mode: lobby.mode,
            entry: lobby.entry_mode,
            scope: lobby.scope,
            rows: lobby.rows,
            cols: lobby.cols,
            player_count: lobby.players.len(),
            allow_join: lobby.allow_join,
            prizes: lobby.prizes.clone(),
        }
    }
}

/// The board as one viewer sees it: `faces[i]` is the symbol when visible,
/// `null` when face-down; `matched` lists permanently-visible indices.
#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub rows: u8,
    pub cols: u8,
    pub faces: Vec<Option<Symbol>>,
    pub matched: Vec<usize>,
}

pub fn grid_view(lobby: &Lobby, view: &BoardView) -> GridView {
    let faces = lobby
        .board
        .iter()
        .enumerate()
        .map(|(idx, symbol)| view.is_visible(idx).then_some(*symbol))
        .collect();

    let mut matched: Vec<usize> = view.matched.iter().copied().collect();
    matched.sort_unstable();

    GridView {
        rows: lobby.rows,
        cols: lobby.cols,
        faces,
        matched,
    }
}

/// A player's own HUD numbers.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub player_id: String,
    pub name: String,
    pub team: String,
    pub score: i32,
    pub matches: u32,
    pub misses: u32,
    pub flips: u32,
    pub finished: bool,
}

pub fn player_view(player: &PlayerSession, view: &BoardView) -> PlayerView {
    PlayerView {
        player_id: player.player_id.clone(),
        name: player.name.clone(),
        team: player.team.clone(),
        score: player.score,
        matches: player.matches,
        misses: player.misses,
        flips: player.flips,
        finished: view.finished,
    }
}
