//! Domain layer: pure game logic types and helpers.

pub mod board;
pub mod flip;
pub mod leaderboard;
pub mod lifecycle;
pub mod lobby;
pub mod player;
pub mod rules;
pub mod views;

#[cfg(test)]
mod tests_board;
#[cfg(test)]
mod tests_leaderboard;
#[cfg(test)]
mod tests_lifecycle;

// Re-exports for ergonomics
pub use board::{generate_board, validate_dimensions, Symbol};
pub use flip::{expire_reveals, flip_tile, FlipOutcome, ScoringRules};
pub use leaderboard::build_leaderboard;
pub use lobby::{BoardScope, EntryMode, GameMode, Lobby, LobbyStatus};
pub use player::{BoardView, PlayerSession};
