//! Error codes for the Matchbay API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authority
    /// Host credential missing or wrong
    InvalidHostKey,
    /// Joining is locked for this lobby
    JoinLocked,
    /// Ticket code is unknown
    TicketUnknown,
    /// Ticket code was already consumed
    TicketConsumed,

    // Request validation
    /// Board dimensions are invalid
    InvalidDimensions,
    /// Tile index outside the board
    InvalidTileIndex,
    /// Requested ticket count is out of range
    InvalidTicketCount,
    /// General validation error
    ValidationError,
    /// General bad request (malformed body etc.)
    BadRequest,

    // Resource not found
    /// Lobby code unknown
    LobbyNotFound,
    /// Player id unknown within the lobby
    PlayerNotFound,

    // Conflicts
    /// Action not legal in the lobby's current status
    WrongStatus,
    /// Lobby at player capacity
    LobbyFull,

    // Operational
    /// Internal server error
    Internal,
    /// Server misconfiguration
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidHostKey => "INVALID_HOST_KEY",
            ErrorCode::JoinLocked => "JOIN_LOCKED",
            ErrorCode::TicketUnknown => "TICKET_UNKNOWN",
            ErrorCode::TicketConsumed => "TICKET_CONSUMED",
            ErrorCode::InvalidDimensions => "INVALID_DIMENSIONS",
            ErrorCode::InvalidTileIndex => "INVALID_TILE_INDEX",
            ErrorCode::InvalidTicketCount => "INVALID_TICKET_COUNT",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::LobbyNotFound => "LOBBY_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::WrongStatus => "WRONG_STATUS",
            ErrorCode::LobbyFull => "LOBBY_FULL",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
