use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, QuoteResponse, QuotesResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "quote-api",
        version = "1.0.0",
        description = "A read-only HTTP service serving a fixed collection of quotes"
    ),
    paths(
        handlers::health::health_handler,
        handlers::quote::quote_handler,
        handlers::list::list_handler
    ),
    components(
        schemas(
            QuoteResponse,
            QuotesResponse,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "quotes", description = "Quote retrieval operations")
    )
)]
pub struct ApiDoc;
