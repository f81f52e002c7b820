use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Log every request before it is dispatched
pub async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!("Received {} request to {}", req.method(), req.uri().path());
    next.run(req).await
}

/// Answer preflight requests and stamp CORS headers on everything else
///
/// OPTIONS is answered here for any path with an empty 200 and never
/// reaches the router.
pub async fn cors(req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };

    insert_cors_headers(response.headers_mut());
    response
}

/// Reject every method the router does not serve
///
/// Runs inside `cors`, so OPTIONS never gets here. HEAD is rejected too,
/// even though axum would otherwise answer it from the GET handler.
pub async fn reject_unsupported_methods(req: Request, next: Next) -> Response {
    if req.method() != Method::GET {
        tracing::debug!("Rejecting {} request to {}", req.method(), req.uri().path());
        return ApiError::MethodNotAllowed.into_response();
    }

    next.run(req).await
}

fn insert_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}
