//! Gameplay tunables, read from the environment at startup.
//!
//! The reward/penalty/delay values are UX knobs, not correctness
//! constants; source material disagrees on the exact numbers, so they are
//! configurable with the canonical defaults.

use time::Duration;

use crate::domain::flip::ScoringRules;
use crate::domain::rules;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Score added for a confirmed pair (BACKEND_MATCH_REWARD).
    pub match_reward: i32,
    /// Score subtracted for a mismatch (BACKEND_MISS_PENALTY).
    pub miss_penalty: i32,
    /// Mismatch hide window in milliseconds (BACKEND_HIDE_DELAY_MS).
    pub hide_delay_ms: u64,
    /// Advisory lifetime of an unanswered first pick (BACKEND_PICK_TTL_MS).
    pub pick_ttl_ms: u64,
    /// Per-lobby player cap (BACKEND_MAX_PLAYERS).
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            match_reward: rules::MATCH_REWARD,
            miss_penalty: rules::MISS_PENALTY,
            hide_delay_ms: rules::DEFAULT_HIDE_DELAY_MS,
            pick_ttl_ms: rules::DEFAULT_PICK_TTL_MS,
            max_players: rules::MAX_PLAYERS,
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{name} must be a valid number, got {raw:?}"))),
    }
}

impl GameConfig {
    /// Load from the environment, falling back to canonical defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            match_reward: env_parsed("BACKEND_MATCH_REWARD", defaults.match_reward)?,
            miss_penalty: env_parsed("BACKEND_MISS_PENALTY", defaults.miss_penalty)?,
            hide_delay_ms: env_parsed("BACKEND_HIDE_DELAY_MS", defaults.hide_delay_ms)?,
            pick_ttl_ms: env_parsed("BACKEND_PICK_TTL_MS", defaults.pick_ttl_ms)?,
            max_players: env_parsed("BACKEND_MAX_PLAYERS", defaults.max_players)?,
        })
    }

    /// Project the timing and scoring knobs into the domain's shape.
    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules {
            match_reward: self.match_reward,
            miss_penalty: self.miss_penalty,
            hide_delay: Duration::milliseconds(self.hide_delay_ms as i64),
            pick_ttl: Duration::milliseconds(self.pick_ttl_ms as i64),
        }
    }
}
