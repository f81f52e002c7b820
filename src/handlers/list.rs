use crate::models::QuotesResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/quotes handler - Return every quote
///
/// The list always comes back in the same fixed order.
#[utoipa::path(
    get,
    path = routes::QUOTES,
    responses(
        (status = 200, description = "All quotes in collection order", body = QuotesResponse)
    ),
    tag = "quotes"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<QuotesResponse>) {
    let quotes: Vec<String> = state
        .quotes
        .all()
        .iter()
        .map(|quote| quote.to_string())
        .collect();

    tracing::debug!("Listed {} quotes", quotes.len());
    (StatusCode::OK, Json(QuotesResponse { quotes }))
}
