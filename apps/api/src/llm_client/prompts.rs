// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for plain prose answers.
pub const PLAIN_TEXT_SYSTEM: &str = "You are a concise resume writing assistant. \
    Respond with the requested text only, without a preamble, headings or quotes.";

/// Appended to every prompt that shows the model the user's resume.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    Only use facts present in the resume below. Do NOT invent employers, \
    dates, degrees, figures or skills.";
