//! Lobby record and its configuration enums.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::board::Symbol;
use crate::domain::player::{BoardView, PlayerSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Solo,
    Teams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryMode {
    Free,
    Ticket,
}

/// Lifecycle status. Transitions run forward only
/// (waiting -> running -> ended); `reset_lobby` is the single path back
/// to `Waiting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LobbyStatus {
    Waiting,
    Running,
    Ended,
}

/// Whether each player sees their own board or everyone shares one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardScope {
    PerPlayer,
    Shared,
}

impl Default for BoardScope {
    fn default() -> Self {
        Self::PerPlayer
    }
}

/// One game session, identified by a short public code.
#[derive(Debug, Clone)]
pub struct Lobby {
    /// Uppercase short code, immutable after creation.
    pub code: String,
    pub mode: GameMode,
    pub entry_mode: EntryMode,
    pub scope: BoardScope,
    pub rows: u8,
    pub cols: u8,
    pub status: LobbyStatus,
    /// Independent of `status`: typically false once running or full.
    pub allow_join: bool,
    /// Seed the current board was shuffled with (reproducibility).
    pub seed: u64,
    /// Paired deck: each symbol appears exactly twice.
    pub board: Vec<Symbol>,
    pub players: HashMap<String, PlayerSession>,
    /// The shared board view; `Some` iff `scope == Shared`.
    pub shared: Option<BoardView>,
    /// Ticket code -> consumed. Empty unless `entry_mode == Ticket`.
    pub tickets: HashMap<String, bool>,
    /// Rank ("1"/"2"/"3") -> prize label.
    pub prizes: HashMap<String, String>,
}

impl Lobby {
    /// The board view `player` plays against: the lobby-wide view in
    /// shared scope, the player's own otherwise.
    pub fn view_of<'a>(&'a self, player: &'a PlayerSession) -> &'a BoardView {
        match &self.shared {
            Some(view) => view,
            None => &player.view,
        }
    }
}
