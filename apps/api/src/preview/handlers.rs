use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::layout::{paginate, PaginationReport};
use crate::models::resume::ResumeData;
use crate::models::settings::CONTENT_SCALE_RANGE;
use crate::preview::{build_document, ViewOptions};
use crate::state::AppState;
use crate::templates::{self, TemplateInfo};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(default)]
    pub template_id: Option<String>,
    pub data: ResumeData,
    #[serde(default)]
    pub view: ViewOptions,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    #[serde(default)]
    pub content_height_px: Option<f64>,
    #[serde(default)]
    pub content_scale: Option<f64>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(templates::catalogue())
}

/// POST /api/v1/render
///
/// Full HTML: interactive preview plus the hidden print target. The page
/// figures travel in `x-total-pages` / `x-active-page` headers.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Response {
    let document = build_document(
        &req.data,
        req.template_id.as_deref(),
        state.config.fallback_template_id(),
    );
    let preview = document.preview(&req.view);
    (
        [
            ("x-total-pages", preview.pagination.total_pages.to_string()),
            ("x-active-page", preview.active_page.to_string()),
        ],
        Html(preview.html),
    )
        .into_response()
}

/// POST /api/v1/render/print
pub async fn handle_render_print(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Html<String> {
    let document = build_document(
        &req.data,
        req.template_id.as_deref(),
        state.config.fallback_template_id(),
    );
    Html(document.print_html(req.view.content_height_px))
}

/// POST /api/v1/pagination
pub async fn handle_pagination(Json(req): Json<PaginationRequest>) -> Json<PaginationReport> {
    let scale = req
        .content_scale
        .filter(|s| s.is_finite())
        .map(|s| s.clamp(CONTENT_SCALE_RANGE.0, CONTENT_SCALE_RANGE.1))
        .unwrap_or(1.0);
    Json(paginate(req.content_height_px, scale))
}
