//! Access-log middleware emitting one structured line per completed
//! request, at a severity chosen from the response status class.
//!
//! Runs after `RequestTrace`, which has already parked the trace id in
//! the request extensions.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerService { service }))
    }
}

pub struct StructuredLoggerService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            emit(
                status,
                &method,
                &path,
                started.elapsed().as_micros() as u64,
                &trace_id,
            );

            result
        })
    }
}

fn emit(status: StatusCode, method: &str, path: &str, duration_us: u64, trace_id: &str) {
    let code = status.as_u16();
    if status.is_server_error() {
        error!(http.method = %method, url.path = %path, http.status_code = %code, duration_us, trace_id = %trace_id, message = "request_completed");
    } else if status.is_client_error() {
        warn!(http.method = %method, url.path = %path, http.status_code = %code, duration_us, trace_id = %trace_id, message = "request_completed");
    } else {
        info!(http.method = %method, url.path = %path, http.status_code = %code, duration_us, trace_id = %trace_id, message = "request_completed");
    }
}
