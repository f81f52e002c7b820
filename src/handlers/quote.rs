use crate::models::QuoteResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/quote handler - Return one quote picked uniformly at random
#[utoipa::path(
    get,
    path = routes::QUOTE,
    responses(
        (status = 200, description = "A random quote", body = QuoteResponse)
    ),
    tag = "quotes"
)]
pub async fn quote_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<QuoteResponse>) {
    let quote = state.quotes.random();

    tracing::debug!("Serving random quote: {}", quote);
    (
        StatusCode::OK,
        Json(QuoteResponse {
            quote: quote.to_string(),
        }),
    )
}
