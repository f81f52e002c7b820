use crate::error::ApiError;
use axum::http::Method;

/// Catch-all for requests that matched no route
///
/// GET gets a 404; any other method that reached routing gets a 405.
pub async fn fallback_handler(method: Method) -> ApiError {
    if method == Method::GET {
        ApiError::RouteNotFound
    } else {
        ApiError::MethodNotAllowed
    }
}
