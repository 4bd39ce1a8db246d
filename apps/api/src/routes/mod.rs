pub mod health;

use axum::{routing::get, Router};

use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/resumes",
            get(handlers::handle_list_resumes).post(handlers::handle_create_resume),
        )
        .route(
            "/resumes/",
            get(handlers::handle_list_resumes).post(handlers::handle_create_resume),
        )
        .route(
            "/resumes/:id",
            get(handlers::handle_get_resume)
                .put(handlers::handle_update_resume)
                .delete(handlers::handle_delete_resume),
        );

    let router = Router::new().route("/health", get(health::health_handler));

    // axum refuses to nest at the root, so an empty prefix mounts the API directly.
    let prefix = state.config.api_v1_str.trim_end_matches('/').to_string();
    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&prefix, api)
    };

    router.with_state(state)
}
