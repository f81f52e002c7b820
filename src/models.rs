use serde::{Deserialize, Serialize};

/// Response type for the random quote endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct QuoteResponse {
    pub quote: String,
}

/// Response type for the full quote list, in collection order
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct QuotesResponse {
    pub quotes: Vec<String>,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
