pub mod lobby_store;

pub use lobby_store::LobbyStore;
