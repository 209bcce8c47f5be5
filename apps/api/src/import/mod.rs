//! Resume import: pasted text or an uploaded PDF becomes a `ResumeData`.
//!
//! Pipeline: extract text (PDF only) → length gate → model extraction →
//! lenient deserialization → id normalization. Deserialization reuses the
//! document model's forgiving rules, so missing arrays come back empty and
//! unknown skill or language levels come back as `None`.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info};

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, LlmError, TextCompletion};
use crate::models::resume::ResumeData;

pub mod handlers;
pub mod prompts;

/// Minimum number of non-whitespace characters worth sending to the model.
pub const MIN_TEXT_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Resume text is too short: {found} non-whitespace characters, at least {min} required")]
    TooShort { min: usize, found: usize },

    #[error("Could not read text from the PDF: {0}")]
    Pdf(String),

    #[error("The extracted resume was not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Background task failed: {0}")]
    Task(String),
}

/// Rejects text with fewer than [`MIN_TEXT_CHARS`] visible characters.
pub fn check_length(text: &str) -> Result<(), ImportError> {
    let found = text.chars().filter(|c| !c.is_whitespace()).count();
    if found < MIN_TEXT_CHARS {
        return Err(ImportError::TooShort {
            min: MIN_TEXT_CHARS,
            found,
        });
    }
    Ok(())
}

/// Extracts the text layer of a PDF on the blocking pool.
pub async fn extract_pdf_text(pdf: Bytes) -> Result<String, ImportError> {
    let size = pdf.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
        .await
        .map_err(|e| ImportError::Task(e.to_string()))?
        .map_err(|e| ImportError::Pdf(e.to_string()))?;
    debug!(bytes = size, chars = text.len(), "extracted PDF text");
    Ok(text)
}

/// Parses the model's JSON reply into a normalized document.
pub fn parse_document(reply: &str) -> Result<ResumeData, ImportError> {
    let mut data: ResumeData = serde_json::from_str(strip_json_fences(reply))?;
    let replaced = data.ensure_unique_ids();
    if replaced > 0 {
        debug!(replaced, "assigned fresh entry ids");
    }
    Ok(data)
}

/// Text in, normalized document out.
pub async fn import_text(
    completion: &dyn TextCompletion,
    text: &str,
) -> Result<ResumeData, ImportError> {
    check_length(text)?;
    let reply = completion
        .complete(&prompts::import_prompt(text.trim()), JSON_ONLY_SYSTEM)
        .await?;
    let data = parse_document(&reply)?;
    info!(
        experience = data.experience.len(),
        education = data.education.len(),
        skills = data.skills.len(),
        "imported resume"
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedCompletion;
    use crate::models::resume::{LanguageLevel, SkillLevel};

    const RESUME_TEXT: &str = "Ada Lovelace, analyst. Wrote the first published algorithm \
        for the Analytical Engine in 1843.";

    #[test]
    fn test_length_gate_counts_visible_characters() {
        let padded = format!("{}{}", "a".repeat(49), " \n\t".repeat(100));
        assert!(matches!(
            check_length(&padded),
            Err(ImportError::TooShort { min: 50, found: 49 })
        ));
        assert!(check_length(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_parse_document_normalizes_entries() {
        let reply = r#"```json
        {
          "personalInfo": {"firstName": "Ada", "email": "ada@example.com"},
          "experience": [
            {"id": "x", "company": "Engine Co", "position": "Analyst"},
            {"id": "x", "company": "Engine Co", "position": "Translator"},
            {"company": "Royal Society", "position": "Fellow"}
          ],
          "skills": [
            {"id": "s1", "name": "Maths", "level": "expert"},
            {"id": "s2", "name": "Poetry", "level": "legendary"}
          ],
          "languages": [{"id": "l1", "name": "French", "level": "Fluent"}]
        }
        ```"#;
        let data = parse_document(reply).unwrap();

        assert_eq!(data.personal_info.first_name, "Ada");
        assert!(data.education.is_empty());
        assert!(data.publications.is_empty());

        let ids: Vec<_> = data.experience.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids[0], "x");
        assert_ne!(ids[1], "x");
        assert!(!ids[2].is_empty());

        assert_eq!(data.skills[0].level, Some(SkillLevel::Expert));
        assert_eq!(data.skills[1].level, None);
        assert_eq!(data.languages[0].level, Some(LanguageLevel::Fluent));
    }

    #[test]
    fn test_parse_document_rejects_non_json() {
        assert!(matches!(
            parse_document("I could not read that resume."),
            Err(ImportError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_import_text_sends_text_to_model() {
        let fake = ScriptedCompletion::replying([r#"{"personalInfo":{"firstName":"Ada"}}"#]);
        let data = import_text(&fake, RESUME_TEXT).await.unwrap();
        assert_eq!(data.personal_info.first_name, "Ada");
        assert!(fake.prompts()[0].contains("Analytical Engine"));
    }

    #[tokio::test]
    async fn test_short_text_never_reaches_model() {
        let fake = ScriptedCompletion::replying(["{}"]);
        let err = import_text(&fake, "too short").await.unwrap_err();
        assert!(matches!(err, ImportError::TooShort { .. }));
        assert!(fake.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_a_pdf_error() {
        let err = extract_pdf_text(Bytes::from_static(b"not a pdf")).await.unwrap_err();
        assert!(matches!(err, ImportError::Pdf(_) | ImportError::Task(_)));
    }
}
