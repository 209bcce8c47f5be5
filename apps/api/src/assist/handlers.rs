use axum::{extract::State, Json};
use tracing::debug;

use crate::assist::prompts::{describe_prompt, suggestions_prompt};
use crate::assist::{
    clean_draft, parse_suggestions, AssistRequest, DescribeResponse, SuggestionsResponse,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, PLAIN_TEXT_SYSTEM};
use crate::state::AppState;

/// POST /api/v1/assist/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(req): Json<AssistRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    req.validate()?;
    let completion = state.completion()?;

    let ticket = state.sequencer.begin("suggestions", req.document_id.as_deref());
    let reply = completion
        .complete(&suggestions_prompt(&req), JSON_ONLY_SYSTEM)
        .await;
    if !state.sequencer.finish(ticket) {
        debug!(document_id = ?req.document_id, "discarding stale suggestions");
        return Ok(Json(SuggestionsResponse {
            suggestions: Vec::new(),
            stale: true,
        }));
    }

    Ok(Json(SuggestionsResponse {
        suggestions: parse_suggestions(&reply?),
        stale: false,
    }))
}

/// POST /api/v1/assist/describe
pub async fn handle_describe(
    State(state): State<AppState>,
    Json(req): Json<AssistRequest>,
) -> Result<Json<DescribeResponse>, AppError> {
    req.validate()?;
    let completion = state.completion()?;

    let ticket = state.sequencer.begin("describe", req.document_id.as_deref());
    let reply = completion
        .complete(&describe_prompt(&req), PLAIN_TEXT_SYSTEM)
        .await;
    if !state.sequencer.finish(ticket) {
        debug!(document_id = ?req.document_id, "discarding stale draft");
        return Ok(Json(DescribeResponse {
            text: String::new(),
            stale: true,
        }));
    }

    Ok(Json(DescribeResponse {
        text: clean_draft(&reply?),
        stale: false,
    }))
}
