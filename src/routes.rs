use axum::{
    middleware::from_fn,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::middleware::{cors, log_request, reject_unsupported_methods};
use crate::state::AppState;

// Route path constants - single source of truth for all API paths
pub const QUOTE: &str = "/api/quote";
pub const QUOTES: &str = "/api/quotes";
pub const HEALTH: &str = "/health";

pub const DOCS: &str = "/api/docs";
pub const OPENAPI_JSON: &str = "/api/openapi.json";

/// A served endpoint, as announced at startup
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

pub const ENDPOINTS: [Endpoint; 3] = [
    Endpoint { method: "GET", path: QUOTE, description: "Get a random quote" },
    Endpoint { method: "GET", path: QUOTES, description: "Get all quotes" },
    Endpoint { method: "GET", path: HEALTH, description: "Health check" },
];

/// Path -> method router for every served endpoint
fn route_table() -> [(&'static str, MethodRouter<AppState>); 3] {
    [
        (QUOTE, get(handlers::quote_handler)),
        (QUOTES, get(handlers::list_handler)),
        (HEALTH, get(handlers::health_handler)),
    ]
}

/// Build the application router
///
/// Layers run outermost first: trace span, request log, CORS (which also
/// answers OPTIONS), method guard, then routing with the 404 fallback.
pub fn build_router(state: AppState) -> Router {
    let mut router = route_table()
        .into_iter()
        .fold(Router::<AppState>::new(), |router, (path, method_router)| {
            router.route(path, method_router)
        });

    if state.config.docs_enabled {
        router = router.merge(SwaggerUi::new(DOCS).url(OPENAPI_JSON, ApiDoc::openapi()));
    }

    router
        .fallback(handlers::fallback_handler)
        .layer(from_fn(reject_unsupported_methods))
        .layer(from_fn(cors))
        .layer(from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn log_endpoints(config: &crate::config::Config) {
    tracing::info!("Quote API Server running on http://{}", config.bind_address());
    tracing::info!("Available endpoints:");
    for endpoint in &ENDPOINTS {
        tracing::info!(
            "  {} {:<12} - {}",
            endpoint.method,
            endpoint.path,
            endpoint.description
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ErrorResponse;
    use crate::models::{QuoteResponse, QuotesResponse};
    use axum::{
        body::{Body, Bytes},
        http::{Request, StatusCode},
        response::Response,
    };
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    /// Buffer shared between the test and the fmt subscriber's writer
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn setup_test_app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(app: Router, method: &str, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_of(response: Response) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    }

    #[test]
    fn test_served_routes_match_endpoints() {
        let table = route_table();
        assert_eq!(table.len(), ENDPOINTS.len());
        for ((path, _), endpoint) in table.iter().zip(ENDPOINTS.iter()) {
            assert_eq!(*path, endpoint.path);
        }
    }

    #[tokio::test]
    async fn test_quote_is_member_of_quotes() {
        let app = setup_test_app();

        let response = send(app.clone(), "GET", QUOTES).await;
        let all: QuotesResponse = serde_json::from_slice(&body_of(response).await).unwrap();

        for _ in 0..30 {
            let response = send(app.clone(), "GET", QUOTE).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(response.headers()["content-type"], "application/json");
            assert_cors(&response);

            let one: QuoteResponse = serde_json::from_slice(&body_of(response).await).unwrap();
            assert!(all.quotes.contains(&one.quote));
        }
    }

    #[tokio::test]
    async fn test_quotes_identical_across_calls() {
        let app = setup_test_app();

        let first = body_of(send(app.clone(), "GET", QUOTES).await).await;
        let second = body_of(send(app, "GET", QUOTES).await).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(setup_test_app(), "GET", HEALTH).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_cors(&response);
        assert_eq!(&body_of(response).await[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = send(setup_test_app(), "GET", "/api/nonexistent").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_cors(&response);
        assert_eq!(&body_of(response).await[..], br#"{"error":"Not found"}"#);
    }

    #[tokio::test]
    async fn test_post_is_method_not_allowed() {
        let response = send(setup_test_app(), "POST", QUOTE).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_cors(&response);

        let error: ErrorResponse = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(error.error, "Method not allowed");
    }

    #[tokio::test]
    async fn test_other_methods_on_any_path() {
        for (method, uri) in [
            ("PUT", "/api/nonexistent"),
            ("DELETE", HEALTH),
            ("PATCH", QUOTES),
            ("HEAD", QUOTE),
        ] {
            let response = send(setup_test_app(), method, uri).await;
            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "{} {}",
                method,
                uri
            );
            assert_cors(&response);
        }
    }

    #[tokio::test]
    async fn test_options_preflight_any_path() {
        for uri in ["/anything", QUOTE, HEALTH] {
            let response = send(setup_test_app(), "OPTIONS", uri).await;

            assert_eq!(response.status(), StatusCode::OK);
            assert_cors(&response);
            assert!(response.headers().get("content-type").is_none());
            assert!(body_of(response).await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_docs_hidden_by_default() {
        let response = send(setup_test_app(), "GET", OPENAPI_JSON).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_docs_served_when_enabled() {
        let config = Config {
            docs_enabled: true,
            ..Config::default()
        };
        let app = build_router(AppState::new(config));

        let response = send(app, "GET", OPENAPI_JSON).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);

        let doc: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        for endpoint in &ENDPOINTS {
            assert!(doc["paths"].get(endpoint.path).is_some(), "{}", endpoint.path);
        }
    }

    #[tokio::test]
    async fn test_requests_logged_before_dispatch() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = setup_test_app();
        let response = send(app.clone(), "OPTIONS", "/anything").await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = send(app, "GET", "/api/nonexistent").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let output = logs.contents();
        assert!(output.contains("Received OPTIONS request to /anything"), "{}", output);
        assert!(output.contains("Received GET request to /api/nonexistent"), "{}", output);
    }
}
