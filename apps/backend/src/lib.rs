#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod trace_ctx;
pub mod utils;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::game::GameConfig;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::host_key::HostKey;
pub use extractors::validated_json::ValidatedJson;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
pub use store::lobby_store::LobbyStore;

// Prelude for test convenience
pub mod prelude {
    pub use super::config::*;
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::extractors::*;
    pub use super::middleware::*;
    pub use super::state::*;
    pub use super::store::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
