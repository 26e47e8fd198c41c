//! Process-wide lobby registry.
//!
//! Maps an uppercase short code to a lobby behind its own mutex. The map
//! itself only serializes insert/lookup/removal; every gameplay mutation
//! takes the per-lobby lock, so operations on different lobbies never
//! block each other.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;

use crate::domain::lobby::Lobby;
use crate::errors::domain::DomainError;
use crate::utils::join_code::generate_lobby_code;

pub type SharedLobby = Arc<Mutex<Lobby>>;

#[derive(Debug, Default)]
pub struct LobbyStore {
    lobbies: DashMap<String, SharedLobby>,
}

impl LobbyStore {
    pub fn new() -> Self {
        Self {
            lobbies: DashMap::new(),
        }
    }

    /// Create and register a lobby under a freshly generated unique code.
    ///
    /// `build` receives the reserved code and constructs the lobby;
    /// generation retries until an unoccupied code is found. The entry API
    /// keeps the reserve-then-insert step atomic per shard.
    pub fn create_with<F>(&self, build: F) -> Result<SharedLobby, DomainError>
    where
        F: FnOnce(&str) -> Result<Lobby, DomainError>,
    {
        loop {
            let code = generate_lobby_code();
            if let Entry::Vacant(slot) = self.lobbies.entry(code.clone()) {
                let lobby = build(&code)?;
                let shared = Arc::new(Mutex::new(lobby));
                slot.insert(Arc::clone(&shared));
                return Ok(shared);
            }
        }
    }

    /// Case-insensitive lookup by code.
    pub fn get(&self, code: &str) -> Option<SharedLobby> {
        let key = code.trim().to_ascii_uppercase();
        self.lobbies.get(&key).map(|entry| Arc::clone(entry.value()))
    }

    /// Remove a lobby outright. Returns whether anything was removed.
    pub fn remove(&self, code: &str) -> bool {
        let key = code.trim().to_ascii_uppercase();
        self.lobbies.remove(&key).is_some()
    }

    pub fn len(&self) -> usize {
        self.lobbies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lobbies.is_empty()
    }
}
