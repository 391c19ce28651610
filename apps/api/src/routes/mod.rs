pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assist;
use crate::export;
use crate::publish::handlers as publish_handlers;
use crate::render::handlers as render_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume storage
        .route(
            "/api/v1/resumes",
            post(resume_handlers::handle_create).get(resume_handlers::handle_list),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get)
                .put(resume_handlers::handle_update)
                .delete(resume_handlers::handle_delete),
        )
        // Live preview (pure, stateless)
        .route(
            "/api/v1/render/preview",
            post(render_handlers::handle_preview),
        )
        // Publication flow
        .route(
            "/api/v1/resumes/:id/publish/check",
            post(publish_handlers::handle_check_domain),
        )
        .route(
            "/api/v1/resumes/:id/publish",
            post(publish_handlers::handle_publish)
                .delete(publish_handlers::handle_dismiss_publish),
        )
        // Published sites
        .route("/sites/:domain", get(publish_handlers::handle_serve_site))
        // AI suggestions
        .route("/api/v1/assist", post(assist::handle_assist))
        // PDF export
        .route("/api/v1/export/pdf", post(export::handle_export_pdf))
        .with_state(state)
}
