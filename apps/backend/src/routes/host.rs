//! Host control routes. Every handler takes the [`HostKey`] extractor,
//! so an invalid or missing key is rejected before any lobby is touched.

use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::host_key::HostKey;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::lobbies::{
    self, CreateLobbyRequest, KickRequest, SetPrizesRequest,
};
use crate::state::app_state::AppState;

/// POST /api/host/create_lobby
async fn create_lobby(
    _key: HostKey,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateLobbyRequest>,
) -> Result<HttpResponse, AppError> {
    let response = lobbies::create_lobby(&app_state, body.into_inner())?;
    Ok(HttpResponse::Created().json(response))
}

/// POST /api/host/start_round/{code}
async fn start_round(
    _key: HostKey,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = lobbies::start_round(&app_state, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/host/end_round/{code}
async fn end_round(
    _key: HostKey,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = lobbies::end_round(&app_state, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/host/reset_lobby/{code}
async fn reset_lobby(
    _key: HostKey,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let view = lobbies::reset_lobby(&app_state, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/host/close_lobby/{code}
async fn close_lobby(
    _key: HostKey,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    lobbies::close_lobby(&app_state, &path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/host/kick/{code}
async fn kick_player(
    _key: HostKey,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<KickRequest>,
) -> Result<HttpResponse, AppError> {
    let view = lobbies::kick_player(&app_state, &path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/host/set_prizes/{code}
async fn set_prizes(
    _key: HostKey,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<SetPrizesRequest>,
) -> Result<HttpResponse, AppError> {
    let view = lobbies::set_prizes(&app_state, &path.into_inner(), body.into_inner())?;
    Ok(HttpResponse::Ok().json(view))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/create_lobby", web::post().to(create_lobby))
        .route("/start_round/{code}", web::post().to(start_round))
        .route("/end_round/{code}", web::post().to(end_round))
        .route("/reset_lobby/{code}", web::post().to(reset_lobby))
        .route("/close_lobby/{code}", web::post().to(close_lobby))
        .route("/kick/{code}", web::post().to(kick_player))
        .route("/set_prizes/{code}", web::post().to(set_prizes));
}
