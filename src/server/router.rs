use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::user::{create_user, get_users},
    doc::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/user", post(create_user))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

/// Builds the complete application with state, CORS and request tracing applied.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
