//! AI writing assistant: suggestions and field drafts for the editor.
//!
//! The model's reply is untrusted text. Suggestions are read as a JSON array
//! when possible and otherwise wrapped whole as a single suggestion, so a
//! reply is never thrown away.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::models::lenient::{lenient, lenient_or_default};
use crate::models::resume::ResumeData;

pub mod handlers;
pub mod prompts;
pub mod sequencer;

pub use sequencer::RequestSequencer;

pub const FALLBACK_TITLE: &str = "AI Suggestion";

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistRequest {
    pub section: String,
    #[serde(default)]
    pub field_value: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub resume_data: Option<ResumeData>,
    /// Enables stale-answer detection for this document.
    #[serde(default)]
    pub document_id: Option<String>,
}

impl AssistRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.section.trim().is_empty() {
            return Err(AppError::Validation("section must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub title: String,
    #[serde(default, alias = "text", deserialize_with = "lenient_or_default")]
    pub suggestion: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
    /// A newer request for the same document superseded this one.
    pub stale: bool,
}

#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub text: String,
    pub stale: bool,
}

#[derive(Deserialize)]
struct Wrapped {
    suggestions: Vec<Suggestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Reply parsing
// ────────────────────────────────────────────────────────────────────────────

/// Reads suggestions out of a model reply.
///
/// Accepts a bare array, an object with a `suggestions` array, or an array
/// embedded in surrounding prose. Anything else becomes one suggestion
/// titled [`FALLBACK_TITLE`] holding the whole reply. Entries without text
/// are dropped.
pub fn parse_suggestions(raw: &str) -> Vec<Suggestion> {
    let text = strip_json_fences(raw);
    if text.is_empty() {
        return Vec::new();
    }

    let parsed = serde_json::from_str::<Vec<Suggestion>>(text)
        .or_else(|_| serde_json::from_str::<Wrapped>(text).map(|w| w.suggestions))
        .ok()
        .or_else(|| embedded_array(text));

    match parsed {
        Some(list) => list
            .into_iter()
            .filter(|s| !s.suggestion.trim().is_empty())
            .map(|mut s| {
                if s.title.trim().is_empty() {
                    s.title = FALLBACK_TITLE.to_string();
                }
                s
            })
            .collect(),
        None => vec![Suggestion {
            title: FALLBACK_TITLE.to_string(),
            suggestion: text.to_string(),
            priority: None,
        }],
    }
}

fn embedded_array(text: &str) -> Option<Vec<Suggestion>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Trims a free-text draft: fences and wrapping quotes removed.
pub fn clean_draft(raw: &str) -> String {
    let text = strip_json_fences(raw);
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_json_array() {
        let raw = r#"[{"title":"Quantify","suggestion":"Add numbers","priority":"high"},
                      {"title":"Tighten","suggestion":"Cut filler"}]"#;
        let list = parse_suggestions(raw);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].priority.as_deref(), Some("high"));
        assert_eq!(list[1].priority, None);
    }

    #[test]
    fn test_parses_fenced_and_wrapped_replies() {
        let fenced = "```json\n[{\"title\":\"A\",\"suggestion\":\"B\"}]\n```";
        assert_eq!(parse_suggestions(fenced)[0].suggestion, "B");

        let wrapped = r#"{"suggestions":[{"title":"A","text":"via alias"}]}"#;
        assert_eq!(parse_suggestions(wrapped)[0].suggestion, "via alias");

        let prose = "Here you go:\n[{\"title\":\"A\",\"suggestion\":\"C\"}]\nGood luck!";
        assert_eq!(parse_suggestions(prose)[0].suggestion, "C");
    }

    #[test]
    fn test_plain_text_becomes_single_suggestion() {
        let list = parse_suggestions("Lead with your strongest result.");
        assert_eq!(
            list,
            vec![Suggestion {
                title: FALLBACK_TITLE.to_string(),
                suggestion: "Lead with your strongest result.".to_string(),
                priority: None,
            }]
        );
    }

    #[test]
    fn test_blank_entries_dropped_and_titles_filled() {
        let raw = r#"[{"title":"","suggestion":"Keep"},{"title":"Empty","suggestion":"  "},
                      {"suggestion":"No title","priority":3}]"#;
        let list = parse_suggestions(raw);
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|s| s.title == FALLBACK_TITLE));
        assert_eq!(list[1].priority, None);
    }

    #[test]
    fn test_empty_reply_has_no_suggestions() {
        assert!(parse_suggestions("   ").is_empty());
        assert!(parse_suggestions("[]").is_empty());
    }

    #[test]
    fn test_clean_draft() {
        assert_eq!(clean_draft("  \"Built things.\"  "), "Built things.");
        assert_eq!(clean_draft("```\nShipped v2\n```"), "Shipped v2");
    }

    #[test]
    fn test_blank_section_is_rejected() {
        let req: AssistRequest = serde_json::from_str(r#"{"section":"  "}"#).unwrap();
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }
}
