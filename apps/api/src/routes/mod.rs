pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assist::handlers as assist;
use crate::documents::handlers as documents;
use crate::import::handlers as import;
use crate::preview::handlers as preview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Rendering
        .route("/api/v1/templates", get(preview::handle_list_templates))
        .route("/api/v1/render", post(preview::handle_render))
        .route("/api/v1/render/print", post(preview::handle_render_print))
        .route("/api/v1/pagination", post(preview::handle_pagination))
        // Documents
        .route("/api/v1/resumes", post(documents::handle_create_resume))
        .route(
            "/api/v1/resumes/:id",
            get(documents::handle_get_resume).put(documents::handle_save_resume),
        )
        .route(
            "/api/v1/resumes/:id/preview",
            get(documents::handle_resume_preview),
        )
        // AI assistant
        .route("/api/v1/assist/suggestions", post(assist::handle_suggestions))
        .route("/api/v1/assist/describe", post(assist::handle_describe))
        // Import
        .route("/api/v1/import/text", post(import::handle_import_text))
        .route("/api/v1/import/pdf", post(import::handle_import_pdf))
        .with_state(state)
}
