use std::sync::Arc;

use crate::config::game::GameConfig;
use crate::store::lobby_store::LobbyStore;

use super::security_config::SecurityConfig;

/// Application state containing shared resources.
///
/// Constructed once at process start and injected into handlers; lobby
/// state lives here and nowhere else, so it disappears with the process.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process-wide lobby registry.
    pub lobbies: Arc<LobbyStore>,
    /// Host credential configuration.
    pub security: SecurityConfig,
    /// Gameplay tunables.
    pub game: GameConfig,
}

impl AppState {
    pub fn new(security: SecurityConfig, game: GameConfig) -> Self {
        Self {
            lobbies: Arc::new(LobbyStore::new()),
            security,
            game,
        }
    }

    /// Test state with the standard test host key and default tunables.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(SecurityConfig::for_tests(), GameConfig::default())
    }

    /// Test state with specific tunables.
    #[cfg(test)]
    pub fn for_tests_with_game(game: GameConfig) -> Self {
        Self::new(SecurityConfig::for_tests(), game)
    }
}
