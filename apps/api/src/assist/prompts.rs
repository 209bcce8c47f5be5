// Prompts for the writing assistant. Kept minimal: they only pin the shape
// of the answer.

use crate::llm_client::prompts::NO_INVENTION_INSTRUCTION;
use crate::models::resume::ResumeData;

use super::AssistRequest;

pub fn suggestions_prompt(req: &AssistRequest) -> String {
    format!(
        "Suggest up to 5 concrete improvements for the \"{section}\" section of this resume.\n\
         Target role: {role}\n\
         Current text of the field:\n{field}\n\n\
         {NO_INVENTION_INSTRUCTION}\n\n\
         Return a JSON array. Each element has \"title\" (short label), \
         \"suggestion\" (the advice or rewritten text) and \"priority\" \
         (\"high\", \"medium\" or \"low\").\n\n\
         Resume:\n{resume}",
        section = req.section.trim(),
        role = or_unspecified(&req.job_title),
        field = or_unspecified(&req.field_value),
        resume = resume_json(req.resume_data.as_ref()),
    )
}

pub fn describe_prompt(req: &AssistRequest) -> String {
    format!(
        "Write the \"{section}\" text for this resume.\n\
         Target role: {role}\n\
         Draft so far:\n{field}\n\n\
         {NO_INVENTION_INSTRUCTION}\n\n\
         Keep it under 80 words. Use plain sentences or lines starting with \"- \".\n\n\
         Resume:\n{resume}",
        section = req.section.trim(),
        role = or_unspecified(&req.job_title),
        field = or_unspecified(&req.field_value),
        resume = resume_json(req.resume_data.as_ref()),
    )
}

fn or_unspecified(value: &str) -> &str {
    match value.trim() {
        "" => "(not specified)",
        v => v,
    }
}

/// Settings are presentation only and are left out of the prompt.
fn resume_json(data: Option<&ResumeData>) -> String {
    let Some(data) = data else {
        return "(not provided)".to_string();
    };
    let content = ResumeData {
        settings: None,
        ..data.clone()
    };
    serde_json::to_string(&content).unwrap_or_default()
}
