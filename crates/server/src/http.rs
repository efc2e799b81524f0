//! HTTP Endpoints
//!
//! REST API for the college admissions agent.

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.settings.server.cors_origins,
        state.settings.server.cors_enabled,
    );

    Router::new()
        // Query endpoint
        .route("/api/query", post(query))
        // Chat-variant alias (accepts {"message": ...})
        .route("/api/chat", post(chat))
        // Rebuild the dataset index from disk
        .route("/api/reload", post(reload))
        // Health checks
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns a permissive layer (dev only)
/// - If cors_origins is empty or all invalid, defaults to localhost:3000
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin("http://localhost:3000".parse::<HeaderValue>().expect("valid origin"))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Query request body
#[derive(Debug, Deserialize)]
struct QueryRequest {
    #[serde(default)]
    query: String,
    #[serde(default)]
    user_id: Option<String>,
}

/// Chat-variant request body
#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

/// Successful response body
#[derive(Debug, Serialize)]
struct QueryResponse {
    response: String,
}

/// Query endpoint
async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ServerError> {
    let response = state.agent.handle_text(&request.query, request.user_id)?;
    Ok(Json(QueryResponse { response }))
}

/// Chat endpoint: same pipeline, chat-widget body shape
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<QueryResponse>, ServerError> {
    let response = state.agent.handle_text(&request.message, None)?;
    Ok(Json(QueryResponse { response }))
}

/// Rebuild the index from the dataset file and swap it in
async fn reload(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ServerError> {
    state
        .agent
        .reload()
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "status": "reloaded",
        "colleges": state.agent.college_count(),
    })))
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ready",
        "colleges": state.agent.college_count(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use college_agent_agent::CollegeAgent;
    use college_agent_config::{ResponseTemplates, Settings};
    use college_agent_retrieval::CollegeIndex;

    fn test_state() -> AppState {
        let records = serde_json::from_value(serde_json::json!([
            {"name": "MNIT Jaipur", "location": "Jaipur", "courses": ["CSE"]}
        ]))
        .unwrap();
        let agent = CollegeAgent::new(
            CollegeIndex::from_records(records).unwrap(),
            ResponseTemplates::default(),
        );
        AppState::new(Settings::default(), agent)
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_query_endpoint() {
        let app = create_router(test_state());

        let response = app
            .oneshot(json_request(
                "/api/query",
                serde_json::json!({"query": "Where is MNIT Jaipur?"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["response"].as_str().unwrap().contains("Jaipur"));
    }

    #[tokio::test]
    async fn test_empty_query_is_bad_request() {
        let app = create_router(test_state());

        let response = app
            .oneshot(json_request("/api/query", serde_json::json!({"query": "  "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn test_chat_variant_body() {
        let app = create_router(test_state());

        let response = app
            .oneshot(json_request(
                "/api/chat",
                serde_json::json!({"message": "courses at MNIT Jaipur"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
