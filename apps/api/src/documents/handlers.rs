use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::documents::ResumeDraft;
use crate::errors::AppError;
use crate::models::resume::{ResumeData, StoredResume};
use crate::preview::{build_document, ViewOptions};
use crate::state::AppState;

const UNTITLED: &str = "Untitled Resume";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResumeRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub template_id: String,
    pub data: ResumeData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumeRequest {
    pub email: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
}

/// Blank title and template fields get the defaults. Template ids are kept
/// as sent; an unknown id falls back at render time.
fn draft(state: &AppState, title: &str, template_id: &str, data: ResumeData) -> ResumeDraft {
    let or = |value: &str, fallback: &str| match value.trim() {
        "" => fallback.to_string(),
        v => v.to_string(),
    };
    ResumeDraft {
        title: or(title, UNTITLED),
        template_id: or(template_id, state.config.fallback_template_id()),
        data,
    }
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<StoredResume>), AppError> {
    let email = req.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("email must not be empty".to_string()));
    }
    let draft = draft(
        &state,
        req.title.as_deref().unwrap_or_default(),
        req.template_id.as_deref().unwrap_or_default(),
        ResumeData::blank(email),
    );
    let stored = state.store.upsert(Uuid::new_v4(), draft).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SaveResumeRequest>,
) -> Result<Json<StoredResume>, AppError> {
    let stored = state
        .store
        .upsert(id, draft(&state, &req.title, &req.template_id, req.data))
        .await?;
    Ok(Json(stored))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredResume>, AppError> {
    let stored = load(&state, id).await?;
    Ok(Json(stored))
}

/// GET /api/v1/resumes/:id/preview
///
/// Renders the last stored snapshot with the same view options as
/// `/api/v1/render`, taken from the query string.
pub async fn handle_resume_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(view): Query<ViewOptions>,
) -> Result<Html<String>, AppError> {
    let stored = load(&state, id).await?;
    let document = build_document(
        &stored.data,
        Some(&stored.template_id),
        state.config.fallback_template_id(),
    );
    Ok(Html(document.preview(&view).html))
}

async fn load(state: &AppState, id: Uuid) -> Result<StoredResume, AppError> {
    state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}
