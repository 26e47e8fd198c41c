//! Canonical gameplay constants.
//!
//! Reward, penalty, and timing values are defaults only; the live values
//! come from [`crate::config::game::GameConfig`] so operators can tune them.

/// Smallest playable board (e.g. 2x4).
pub const MIN_TILES: usize = 8;

/// Largest playable board (e.g. 6x10).
pub const MAX_TILES: usize = 60;

/// Player capacity per lobby.
pub const MAX_PLAYERS: usize = 10;

/// Score delta for a confirmed pair.
pub const MATCH_REWARD: i32 = 10;

/// Score delta (subtracted) for a mismatch.
pub const MISS_PENALTY: i32 = 1;

/// How long a mismatched pair stays face-up before the lazy expiry hides it.
pub const DEFAULT_HIDE_DELAY_MS: u64 = 700;

/// Advisory lifetime of an unanswered first pick.
pub const DEFAULT_PICK_TTL_MS: u64 = 30_000;

/// Maximum characters kept from player and team names.
pub const MAX_NAME_LEN: usize = 24;

/// Maximum characters kept from a prize label.
pub const MAX_PRIZE_LEN: usize = 64;

/// Glyphs tiles are paired from. 32 entries covers the largest board
/// (60 tiles = 30 pairs) without reuse; smaller pools fall back to
/// round-robin repetition in the generator.
pub const SYMBOL_POOL: [&str; 32] = [
    "🍎", "🍌", "🍇", "🍒", "🍋", "🍉", "🍑", "🍐",
    "🍓", "🍊", "🌵", "🌲", "🌸", "🍄", "🌙", "🌈",
    "🐶", "🐱", "🐭", "🐸", "🐙", "🐢", "🐝", "🐠",
    "🎲", "🎯", "🎸", "🎁", "🚗", "🚀", "🔔", "🔑",
];
