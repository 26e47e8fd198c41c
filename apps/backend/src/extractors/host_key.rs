//! Host credential gate for lobby-lifecycle routes.
//!
//! The host key travels either in the `X-Host-Key` header or the
//! `host_key` query parameter (the host console sends both forms) and is
//! compared byte-for-byte against the server-held secret.

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// Proof that the request carried a valid host key. Handlers take this by
/// value; constructing it is only possible through extraction.
#[derive(Debug, Clone, Copy)]
pub struct HostKey;

fn presented_key(req: &HttpRequest) -> Option<String> {
    if let Some(value) = req.headers().get("x-host-key") {
        if let Ok(s) = value.to_str() {
            if !s.is_empty() {
                return Some(s.to_string());
            }
        }
    }

    // Fallback: host_key=... in the query string. Keys come from the
    // restricted code alphabet, so no percent-decoding is needed.
    req.query_string().split('&').find_map(|pair| {
        pair.split_once('=')
            .filter(|(k, v)| *k == "host_key" && !v.is_empty())
            .map(|(_, v)| v.to_string())
    })
}

impl FromRequest for HostKey {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.app_data::<web::Data<AppState>>() {
            None => Err(AppError::internal(
                "AppState missing from request data".to_string(),
            )),
            Some(state) => match presented_key(req) {
                Some(key) if state.security.verify_host_key(&key) => Ok(HostKey),
                _ => Err(AppError::forbidden(
                    ErrorCode::InvalidHostKey,
                    "Missing or invalid host key".to_string(),
                )),
            },
        };
        std::future::ready(result)
    }
}
