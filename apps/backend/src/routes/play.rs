//! Player-facing routes: join a lobby, flip tiles, poll state.

use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::lobbies::{self, FlipRequest, JoinRequest};
use crate::state::app_state::AppState;

/// POST /api/join
async fn join(
    app_state: web::Data<AppState>,
    body: ValidatedJson<JoinRequest>,
) -> Result<HttpResponse, AppError> {
    let response = lobbies::join_lobby(&app_state, body.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/flip
///
/// Applies one tile flip and returns the refreshed state snapshot, so a
/// client needs no follow-up poll to render the outcome.
async fn flip(
    app_state: web::Data<AppState>,
    body: ValidatedJson<FlipRequest>,
) -> Result<HttpResponse, AppError> {
    let response = lobbies::flip(&app_state, body.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/lobby/{code}
async fn lobby_overview(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = lobbies::lobby_overview(&app_state, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/state/{code}/{player_id}
async fn player_state(
    app_state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (code, player_id) = path.into_inner();
    let response = lobbies::player_state(&app_state, &code, &player_id)?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/join", web::post().to(join))
        .route("/flip", web::post().to(flip))
        .route("/lobby/{code}", web::get().to(lobby_overview))
        .route("/state/{code}/{player_id}", web::get().to(player_state));
}
