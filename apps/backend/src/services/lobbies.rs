//! Lobby orchestration: resolve the lobby, take its lock, apply reveal
//! expiry, mutate through the domain, and project the fresh view.
//!
//! Every function here holds at most one per-lobby mutex for the duration
//! of one logical operation; nothing sleeps or awaits under a lock.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::domain::leaderboard::{build_leaderboard, Leaderboard};
use crate::domain::lifecycle;
use crate::domain::lobby::{BoardScope, EntryMode, GameMode, Lobby};
use crate::domain::views::{grid_view, player_view, GridView, LobbyView, PlayerView};
use crate::domain::{expire_reveals, flip_tile};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;
use crate::utils::join_code::generate_ticket_code;

#[derive(Debug, Deserialize)]
pub struct CreateLobbyRequest {
    pub mode: GameMode,
    pub entry: EntryMode,
    pub rows: u8,
    pub cols: u8,
    #[serde(default)]
    pub scope: BoardScope,
    /// Optional fixed shuffle seed (reproducible boards).
    #[serde(default)]
    pub seed: Option<u64>,
    /// Tickets to mint when entry = ticket; defaults to the player cap.
    #[serde(default)]
    pub tickets: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CreateLobbyResponse {
    pub lobby: LobbyView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub ticket: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JoinResponse {
    pub player_id: String,
    pub lobby: LobbyView,
}

#[derive(Debug, Deserialize)]
pub struct FlipRequest {
    pub code: String,
    pub player_id: String,
    pub idx: usize,
}

#[derive(Debug, Deserialize)]
pub struct KickRequest {
    pub player_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SetPrizesRequest {
    #[serde(default)]
    pub p1: Option<String>,
    #[serde(default)]
    pub p2: Option<String>,
    #[serde(default)]
    pub p3: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LobbyResponse {
    pub lobby: LobbyView,
    pub leaderboard: Leaderboard,
}

/// Shape of `GET /api/state` and `POST /api/flip` responses.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub lobby: LobbyView,
    pub grid: GridView,
    pub player: PlayerView,
    pub leaderboard: Leaderboard,
}

fn lobby_not_found(code: &str) -> AppError {
    AppError::not_found(ErrorCode::LobbyNotFound, format!("no lobby {code}"))
}

/// Run `op` under the target lobby's lock.
fn with_lobby<T>(
    state: &AppState,
    code: &str,
    op: impl FnOnce(&mut Lobby) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let shared = state.lobbies.get(code).ok_or_else(|| lobby_not_found(code))?;
    let mut lobby = shared.lock();
    op(&mut lobby)
}

/// Resolve expired reveals for the view `player_id` plays against.
fn expire_for(lobby: &mut Lobby, player_id: &str, now: OffsetDateTime) -> Result<(), AppError> {
    if lobby.shared.is_some() {
        if !lobby.players.contains_key(player_id) {
            return Err(AppError::not_found(
                ErrorCode::PlayerNotFound,
                format!("no player {player_id}"),
            ));
        }
        if let Some(view) = lobby.shared.as_mut() {
            expire_reveals(view, now);
        }
    } else {
        let player = lobby.players.get_mut(player_id).ok_or_else(|| {
            AppError::not_found(ErrorCode::PlayerNotFound, format!("no player {player_id}"))
        })?;
        expire_reveals(&mut player.view, now);
    }
    Ok(())
}

fn build_state(lobby: &Lobby, player_id: &str) -> Result<StateResponse, AppError> {
    let player = lobby.players.get(player_id).ok_or_else(|| {
        AppError::not_found(ErrorCode::PlayerNotFound, format!("no player {player_id}"))
    })?;
    let view = lobby.view_of(player);

    Ok(StateResponse {
        lobby: LobbyView::from_lobby(lobby),
        grid: grid_view(lobby, view),
        player: player_view(player, view),
        leaderboard: build_leaderboard(lobby),
    })
}

fn mint_tickets(count: usize) -> Vec<String> {
    let mut seen = HashSet::with_capacity(count);
    while seen.len() < count {
        seen.insert(generate_ticket_code());
    }
    seen.into_iter().collect()
}

pub fn create_lobby(
    state: &AppState,
    req: CreateLobbyRequest,
) -> Result<CreateLobbyResponse, AppError> {
    let config = lifecycle::LobbyConfig {
        mode: req.mode,
        entry_mode: req.entry,
        scope: req.scope,
        rows: req.rows,
        cols: req.cols,
    };

    let tickets = if req.entry == EntryMode::Ticket {
        let count = req.tickets.unwrap_or(state.game.max_players);
        lifecycle::validate_ticket_count(count)?;
        mint_tickets(count)
    } else {
        Vec::new()
    };

    let seed = req.seed.unwrap_or_else(|| rand::rng().random());
    let ticket_list = (!tickets.is_empty()).then(|| tickets.clone());

    let shared = state
        .lobbies
        .create_with(|code| lifecycle::create_lobby(code.to_string(), &config, seed, tickets))?;

    let lobby = shared.lock();
    info!(code = %lobby.code, rows = lobby.rows, cols = lobby.cols, "lobby created");

    Ok(CreateLobbyResponse {
        lobby: LobbyView::from_lobby(&lobby),
        tickets: ticket_list,
    })
}

pub fn start_round(state: &AppState, code: &str) -> Result<LobbyView, AppError> {
    with_lobby(state, code, |lobby| {
        lifecycle::start_round(lobby)?;
        info!(code = %lobby.code, "round started");
        Ok(LobbyView::from_lobby(lobby))
    })
}

pub fn end_round(state: &AppState, code: &str) -> Result<LobbyView, AppError> {
    with_lobby(state, code, |lobby| {
        lifecycle::end_round(lobby)?;
        info!(code = %lobby.code, "round ended");
        Ok(LobbyView::from_lobby(lobby))
    })
}

pub fn reset_lobby(state: &AppState, code: &str) -> Result<LobbyView, AppError> {
    with_lobby(state, code, |lobby| {
        let new_seed = rand::rng().random();
        lifecycle::reset_lobby(lobby, new_seed)?;
        info!(code = %lobby.code, "lobby reset");
        Ok(LobbyView::from_lobby(lobby))
    })
}

/// Drop the lobby from the registry. Players polling it afterwards get
/// a not-found.
pub fn close_lobby(state: &AppState, code: &str) -> Result<(), AppError> {
    if !state.lobbies.remove(code) {
        return Err(lobby_not_found(code));
    }
    info!(code = %code.trim().to_ascii_uppercase(), "lobby closed");
    Ok(())
}

pub fn kick_player(state: &AppState, code: &str, req: KickRequest) -> Result<LobbyView, AppError> {
    with_lobby(state, code, |lobby| {
        let removed = lifecycle::kick(lobby, &req.player_id)?;
        info!(code = %lobby.code, player = %removed.name, "player kicked");
        Ok(LobbyView::from_lobby(lobby))
    })
}

pub fn set_prizes(
    state: &AppState,
    code: &str,
    req: SetPrizesRequest,
) -> Result<LobbyView, AppError> {
    with_lobby(state, code, |lobby| {
        lifecycle::set_prizes(
            lobby,
            [req.p1.as_deref(), req.p2.as_deref(), req.p3.as_deref()],
        );
        Ok(LobbyView::from_lobby(lobby))
    })
}

pub fn join_lobby(state: &AppState, req: JoinRequest) -> Result<JoinResponse, AppError> {
    with_lobby(state, &req.code, |lobby| {
        let player_id = Uuid::new_v4().to_string();
        let player_id = lifecycle::join_lobby(
            lobby,
            player_id,
            &req.name,
            &req.team,
            req.ticket.as_deref(),
            state.game.max_players,
        )?;
        info!(code = %lobby.code, players = lobby.players.len(), "player joined");
        Ok(JoinResponse {
            player_id,
            lobby: LobbyView::from_lobby(lobby),
        })
    })
}

pub fn flip(state: &AppState, req: FlipRequest) -> Result<StateResponse, AppError> {
    let rules = state.game.scoring_rules();
    with_lobby(state, &req.code, |lobby| {
        let now = OffsetDateTime::now_utc();
        flip_tile(lobby, &req.player_id, req.idx, &rules, now)?;
        build_state(lobby, &req.player_id)
    })
}

pub fn player_state(
    state: &AppState,
    code: &str,
    player_id: &str,
) -> Result<StateResponse, AppError> {
    with_lobby(state, code, |lobby| {
        expire_for(lobby, player_id, OffsetDateTime::now_utc())?;
        build_state(lobby, player_id)
    })
}

pub fn lobby_overview(state: &AppState, code: &str) -> Result<LobbyResponse, AppError> {
    with_lobby(state, code, |lobby| {
        let now = OffsetDateTime::now_utc();
        if let Some(view) = lobby.shared.as_mut() {
            expire_reveals(view, now);
        } else {
            for player in lobby.players.values_mut() {
                expire_reveals(&mut player.view, now);
            }
        }
        Ok(LobbyResponse {
            lobby: LobbyView::from_lobby(lobby),
            leaderboard: build_leaderboard(lobby),
        })
    })
}
