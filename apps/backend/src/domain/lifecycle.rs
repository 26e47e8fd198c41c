//! Lobby lifecycle: creation, host transitions, and the join gate.
//!
//! These are pure functions over `&mut Lobby`; credential checks and
//! locking happen in the layers above.

use std::collections::HashMap;

use crate::domain::board::generate_board;
use crate::domain::lobby::{BoardScope, EntryMode, GameMode, Lobby, LobbyStatus};
use crate::domain::player::{BoardView, PlayerSession};
use crate::domain::rules::{MAX_NAME_LEN, MAX_PRIZE_LEN};
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, NotFoundKind, ValidationKind,
};

/// Validated creation parameters for a lobby.
#[derive(Debug, Clone)]
pub struct LobbyConfig {
    pub mode: GameMode,
    pub entry_mode: EntryMode,
    pub scope: BoardScope,
    pub rows: u8,
    pub cols: u8,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Solo,
            entry_mode: EntryMode::Free,
            scope: BoardScope::PerPlayer,
            rows: 4,
            cols: 4,
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Bound and default a display name.
pub fn sanitize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "Player".to_string()
    } else {
        truncate_chars(trimmed, MAX_NAME_LEN)
    }
}

/// Bound a team label; blank stays blank (solo players have no team).
pub fn sanitize_team(raw: &str) -> String {
    truncate_chars(raw.trim(), MAX_NAME_LEN)
}

fn sanitize_prize(raw: &str) -> String {
    truncate_chars(raw.trim(), MAX_PRIZE_LEN)
}

/// Build a lobby under `code`. Dimension validation happens inside board
/// generation, before any state exists.
pub fn create_lobby(
    code: String,
    config: &LobbyConfig,
    seed: u64,
    tickets: Vec<String>,
) -> Result<Lobby, DomainError> {
    let board = generate_board(config.rows, config.cols, seed)?;

    let shared = match config.scope {
        BoardScope::Shared => Some(BoardView::new()),
        BoardScope::PerPlayer => None,
    };

    Ok(Lobby {
        code,
        mode: config.mode,
        entry_mode: config.entry_mode,
        scope: config.scope,
        rows: config.rows,
        cols: config.cols,
        status: LobbyStatus::Waiting,
        allow_join: true,
        seed,
        board,
        players: HashMap::new(),
        shared,
        tickets: tickets.into_iter().map(|t| (t, false)).collect(),
        prizes: HashMap::new(),
    })
}

fn reset_round_state(lobby: &mut Lobby) {
    for player in lobby.players.values_mut() {
        player.reset_round();
    }
    if let Some(shared) = lobby.shared.as_mut() {
        shared.reset();
    }
}

/// Waiting -> Running. Locks joining and gives everyone a fresh round.
pub fn start_round(lobby: &mut Lobby) -> Result<(), DomainError> {
    if lobby.status != LobbyStatus::Waiting {
        return Err(DomainError::conflict(
            ConflictKind::WrongStatus,
            format!("cannot start from {:?}", lobby.status),
        ));
    }
    reset_round_state(lobby);
    lobby.status = LobbyStatus::Running;
    lobby.allow_join = false;
    Ok(())
}

/// Running -> Ended. The leaderboard stays queryable afterwards.
pub fn end_round(lobby: &mut Lobby) -> Result<(), DomainError> {
    if lobby.status != LobbyStatus::Running {
        return Err(DomainError::conflict(
            ConflictKind::WrongStatus,
            format!("cannot end from {:?}", lobby.status),
        ));
    }
    lobby.status = LobbyStatus::Ended;
    Ok(())
}

/// Any state -> Waiting: the one transition that goes backwards.
/// Regenerates the board under `new_seed`, clears all round state, and
/// reopens joining. Membership and consumed tickets survive.
pub fn reset_lobby(lobby: &mut Lobby, new_seed: u64) -> Result<(), DomainError> {
    lobby.board = generate_board(lobby.rows, lobby.cols, new_seed)?;
    lobby.seed = new_seed;
    reset_round_state(lobby);
    lobby.status = LobbyStatus::Waiting;
    lobby.allow_join = true;
    Ok(())
}

/// Remove a player. Reopens joining if the lobby is still waiting.
pub fn kick(lobby: &mut Lobby, player_id: &str) -> Result<PlayerSession, DomainError> {
    let removed = lobby.players.remove(player_id).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("no player {player_id}"))
    })?;
    if lobby.status == LobbyStatus::Waiting {
        lobby.allow_join = true;
    }
    Ok(removed)
}

/// Store sanitized prize labels for ranks 1..=3. Blank labels clear the
/// rank. No gameplay effect.
pub fn set_prizes(lobby: &mut Lobby, labels: [Option<&str>; 3]) {
    for (rank, label) in labels.iter().enumerate() {
        let key = (rank + 1).to_string();
        match label.map(sanitize_prize) {
            Some(text) if !text.is_empty() => {
                lobby.prizes.insert(key, text);
            }
            _ => {
                lobby.prizes.remove(&key);
            }
        }
    }
}

/// The join gate. On success the player is registered and their id
/// returned; reaching capacity locks further joining.
///
/// A ticket is consumed only after every other check has passed, so a
/// rejected join never burns it.
pub fn join_lobby(
    lobby: &mut Lobby,
    player_id: String,
    name: &str,
    team: &str,
    ticket: Option<&str>,
    max_players: usize,
) -> Result<String, DomainError> {
    if lobby.status != LobbyStatus::Waiting {
        return Err(DomainError::forbidden(
            ForbiddenKind::JoinLocked,
            "joining is locked for this lobby",
        ));
    }
    // A lobby at capacity reports Full even though reaching capacity also
    // closed the join gate.
    if lobby.players.len() >= max_players {
        return Err(DomainError::conflict(
            ConflictKind::LobbyFull,
            format!("lobby is at capacity ({max_players})"),
        ));
    }
    if !lobby.allow_join {
        return Err(DomainError::forbidden(
            ForbiddenKind::JoinLocked,
            "joining is locked for this lobby",
        ));
    }

    if lobby.entry_mode == EntryMode::Ticket {
        let code = ticket
            .map(|t| t.trim().to_ascii_uppercase())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                DomainError::forbidden(ForbiddenKind::TicketUnknown, "a ticket is required")
            })?;
        match lobby.tickets.get_mut(&code) {
            None => {
                return Err(DomainError::forbidden(
                    ForbiddenKind::TicketUnknown,
                    "unknown ticket code",
                ));
            }
            Some(consumed) if *consumed => {
                return Err(DomainError::forbidden(
                    ForbiddenKind::TicketConsumed,
                    "ticket already used",
                ));
            }
            Some(consumed) => *consumed = true,
        }
    }

    let session = PlayerSession::new(player_id.clone(), sanitize_name(name), sanitize_team(team));
    lobby.players.insert(player_id.clone(), session);

    if lobby.players.len() >= max_players {
        lobby.allow_join = false;
    }

    Ok(player_id)
}

/// Bound a host-requested ticket batch size.
pub fn validate_ticket_count(count: usize) -> Result<(), DomainError> {
    const MAX_TICKETS: usize = 100;
    if count == 0 || count > MAX_TICKETS {
        return Err(DomainError::validation(
            ValidationKind::InvalidTicketCount,
            format!("ticket count must be within 1..={MAX_TICKETS}, got {count}"),
        ));
    }
    Ok(())
}
