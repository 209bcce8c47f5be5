use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::import::{extract_pdf_text, import_text};
use crate::models::resume::ResumeData;
use crate::state::AppState;

const PDF_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct ImportTextRequest {
    pub text: String,
}

/// POST /api/v1/import/text
pub async fn handle_import_text(
    State(state): State<AppState>,
    Json(req): Json<ImportTextRequest>,
) -> Result<Json<ResumeData>, AppError> {
    let completion = state.completion()?;
    let data = import_text(completion.as_ref(), &req.text).await?;
    Ok(Json(data))
}

/// POST /api/v1/import/pdf
///
/// Multipart body with the document in a `file` field.
pub async fn handle_import_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeData>, AppError> {
    let completion = state.completion()?;

    let mut pdf = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some(PDF_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            pdf = Some(bytes);
            break;
        }
    }
    let pdf = pdf.ok_or_else(|| AppError::Validation(format!("missing '{PDF_FIELD}' field")))?;

    let text = extract_pdf_text(pdf).await?;
    let data = import_text(completion.as_ref(), &text).await?;
    Ok(Json(data))
}
