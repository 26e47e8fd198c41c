//! Per-player session state and board visibility.

use std::collections::{HashMap, HashSet};

use time::OffsetDateTime;

/// Visibility state of one board, from one viewer's perspective.
///
/// In per-player lobbies every `PlayerSession` owns one of these; in
/// shared-board lobbies a single instance lives on the lobby and every
/// player reads and mutates it.
///
/// Invariant: `revealed` and `matched` are disjoint. A matched index is
/// removed from `revealed` at resolution time and is permanently visible
/// through `matched` alone.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    /// Tile index -> advisory hide deadline. Entries past their deadline
    /// are removed lazily by `expire_reveals`, never by a timer.
    pub revealed: HashMap<usize, OffsetDateTime>,
    /// Indices that are part of a confirmed pair.
    pub matched: HashSet<usize>,
    /// First pick of an in-progress turn, if any.
    pub pending_pick: Option<usize>,
    /// Set once `matched` covers the whole board; cleared only by reset.
    pub finished: bool,
    /// When `finished` flipped to true (leaderboard tie-break).
    pub finished_at: Option<OffsetDateTime>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all round state, returning the view to face-down.
    pub fn reset(&mut self) {
        self.revealed.clear();
        self.matched.clear();
        self.pending_pick = None;
        self.finished = false;
        self.finished_at = None;
    }

    /// Whether a tile's symbol is currently visible to this viewer.
    pub fn is_visible(&self, idx: usize) -> bool {
        self.matched.contains(&idx) || self.revealed.contains_key(&idx)
    }
}

/// One player's membership and score within a lobby.
#[derive(Debug, Clone)]
pub struct PlayerSession {
    pub player_id: String,
    pub name: String,
    pub team: String,
    pub score: i32,
    pub matches: u32,
    pub misses: u32,
    pub flips: u32,
    /// Board visibility for this player. Unused (but kept uniform) when
    /// the lobby runs a shared board.
    pub view: BoardView,
}

impl PlayerSession {
    pub fn new(player_id: String, name: String, team: String) -> Self {
        Self {
            player_id,
            name,
            team,
            score: 0,
            matches: 0,
            misses: 0,
            flips: 0,
            view: BoardView::new(),
        }
    }

    /// Reset counters and visibility for a fresh round; membership survives.
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.matches = 0;
        self.misses = 0;
        self.flips = 0;
        self.view.reset();
    }
}
