//! Pass-through relay in front of the analysis backend.
//!
//! Forwards `/compare` and `/coach` request bodies to the backend
//! unmodified and returns the upstream status, body, and content type
//! as-is. The relay inspects nothing; when it cannot reach the backend
//! at all it answers 500 with a generic JSON error body, which the
//! frontend surfaces as the phase's failure text.
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use log::{error, info};
use tower_http::cors::CorsLayer;

/// Shared handler state: one upstream client and the backend base URL.
#[derive(Clone)]
pub struct RelayState {
    client: reqwest::Client,
    backend: String,
}

impl RelayState {
    #[must_use]
    pub fn new(backend: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            backend: backend.into().trim_end_matches('/').to_string(),
        }
    }
}

/// The relay surface: the two analysis endpoints, CORS open for the
/// dev server.
pub fn build_router(state: RelayState) -> Router {
    Router::new()
        .route("/compare", post(relay_compare))
        .route("/coach", post(relay_coach))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn relay_compare(State(state): State<RelayState>, body: String) -> Response {
    forward(&state, "compare", body).await
}

async fn relay_coach(State(state): State<RelayState>, body: String) -> Response {
    forward(&state, "coach", body).await
}

async fn forward(state: &RelayState, endpoint: &str, body: String) -> Response {
    let url = format!("{}/{endpoint}", state.backend);
    let upstream = match state
        .client
        .post(&url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(upstream) => upstream,
        Err(err) => {
            error!("relay /{endpoint}: backend unreachable: {err}");
            return relay_error(endpoint);
        }
    };

    // reqwest and axum sit on different http versions; carry the
    // status over numerically
    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    match upstream.text().await {
        Ok(text) => {
            info!("relay /{endpoint}: backend answered {status}");
            (status, [(CONTENT_TYPE, content_type)], text).into_response()
        }
        Err(err) => {
            error!("relay /{endpoint}: backend body unreadable: {err}");
            relay_error(endpoint)
        }
    }
}

fn relay_error(endpoint: &str) -> Response {
    let body = serde_json::json!({
        "error": format!("relay error calling backend /{endpoint}"),
    });
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(CONTENT_TYPE, "application/json".to_string())],
        body.to_string(),
    )
        .into_response()
}
