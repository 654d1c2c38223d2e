//! Route table

use std::path::Path;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{chat_handler, health_check, method_not_allowed, preflight};
use crate::state::AppState;

/// How long browsers may cache a preflight answer
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Build the application router.
///
/// With `static_dir`, every path that is not an API route is served from it.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-user-id")])
        .max_age(PREFLIGHT_MAX_AGE);

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/chat",
            post(chat_handler)
                .options(preflight)
                .fallback(method_not_allowed),
        );

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
