use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::lenient::{lenient, lenient_or_default, lenient_vec};
use crate::models::settings::{RawSettings, ResumeSettings};

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// One resume snapshot. Missing collections deserialize as empty and
/// missing settings resolve to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub personal_info: PersonalInfo,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub settings: Option<RawSettings>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub skills: Vec<Skill>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub languages: Vec<Language>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub certificates: Vec<Certificate>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub publications: Vec<Publication>,
}

impl ResumeData {
    /// A new, empty document with the owner's contact email pre-filled.
    pub fn blank(email: &str) -> Self {
        Self {
            personal_info: PersonalInfo {
                email: email.to_string(),
                ..PersonalInfo::default()
            },
            ..Self::default()
        }
    }

    /// Resolved settings for this snapshot.
    pub fn resolved_settings(&self) -> ResumeSettings {
        self.settings
            .as_ref()
            .map(ResumeSettings::resolve)
            .unwrap_or_default()
    }

    /// Assigns a fresh id to every entry whose id is empty or already used
    /// earlier in the document. Returns how many ids were replaced.
    pub fn ensure_unique_ids(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut replaced = 0;
        let ids = self
            .experience
            .iter_mut()
            .map(|e| &mut e.id)
            .chain(self.education.iter_mut().map(|e| &mut e.id))
            .chain(self.skills.iter_mut().map(|e| &mut e.id))
            .chain(self.languages.iter_mut().map(|e| &mut e.id))
            .chain(self.certificates.iter_mut().map(|e| &mut e.id))
            .chain(self.publications.iter_mut().map(|e| &mut e.id));
        for id in ids {
            if id.trim().is_empty() || !seen.insert(id.clone()) {
                *id = Uuid::new_v4().to_string();
                seen.insert(id.clone());
                replaced += 1;
            }
        }
        replaced
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub website: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub github: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl PersonalInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub current: bool,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub school: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[serde(alias = "beginner")]
    Beginner,
    #[serde(alias = "intermediate")]
    Intermediate,
    #[serde(alias = "advanced")]
    Advanced,
    #[serde(alias = "expert")]
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageLevel {
    #[serde(alias = "native")]
    Native,
    #[serde(alias = "fluent")]
    Fluent,
    #[serde(alias = "conversational")]
    Conversational,
    #[serde(alias = "basic")]
    Basic,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

impl LanguageLevel {
    pub fn label(self) -> &'static str {
        match self {
            LanguageLevel::Native => "Native",
            LanguageLevel::Fluent => "Fluent",
            LanguageLevel::Conversational => "Conversational",
            LanguageLevel::Basic => "Basic",
        }
    }
}

/// Fill percentage for bars. Beginner and unrated skills share the bottom step.
pub fn skill_fill_percent(level: Option<SkillLevel>) -> u32 {
    match level {
        Some(SkillLevel::Expert) => 100,
        Some(SkillLevel::Advanced) => 75,
        Some(SkillLevel::Intermediate) => 50,
        _ => 25,
    }
}

/// Filled dots out of five.
pub fn skill_dots(level: Option<SkillLevel>) -> u32 {
    match level {
        Some(SkillLevel::Expert) => 5,
        Some(SkillLevel::Advanced) => 4,
        Some(SkillLevel::Intermediate) => 3,
        _ => 2,
    }
}

pub fn language_fill_percent(level: Option<LanguageLevel>) -> u32 {
    match level {
        Some(LanguageLevel::Native) => 100,
        Some(LanguageLevel::Fluent) => 80,
        Some(LanguageLevel::Conversational) => 60,
        _ => 40,
    }
}

pub fn language_dots(level: Option<LanguageLevel>) -> u32 {
    match level {
        Some(LanguageLevel::Native) => 5,
        Some(LanguageLevel::Fluent) => 4,
        Some(LanguageLevel::Conversational) => 3,
        _ => 2,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub level: Option<LanguageLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub issuer: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub publisher: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Storage rows
// ────────────────────────────────────────────────────────────────────────────

/// A stored document as the persistence collaborator keeps it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResume {
    pub id: Uuid,
    pub title: String,
    pub template_id: String,
    pub data: ResumeData,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub title: String,
    pub template_id: String,
    pub data: sqlx::types::Json<ResumeData>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeRow> for StoredResume {
    fn from(row: ResumeRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            template_id: row.template_id,
            data: row.data.0,
            updated_at: row.updated_at,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_collections_are_empty() {
        let data: ResumeData =
            serde_json::from_str(r#"{"personalInfo": {"firstName": "Ada"}}"#).unwrap();
        assert_eq!(data.personal_info.first_name, "Ada");
        assert!(data.experience.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.settings.is_none());
        assert_eq!(data.resolved_settings().font_size_pt, 10.0);
    }

    #[test]
    fn test_null_collections_and_settings_are_tolerated() {
        let data: ResumeData =
            serde_json::from_str(r#"{"skills": null, "settings": "broken", "education": {}}"#)
                .unwrap();
        assert!(data.skills.is_empty());
        assert!(data.education.is_empty());
        assert!(data.settings.is_none());
    }

    #[test]
    fn test_unknown_levels_become_none() {
        let data: ResumeData = serde_json::from_str(
            r#"{"skills": [{"id": "1", "name": "Rust", "level": "Wizard"},
                           {"id": "2", "name": "Go", "level": "Expert"}],
                "languages": [{"id": "3", "name": "French", "level": "Fluent"}]}"#,
        )
        .unwrap();
        assert_eq!(data.skills[0].level, None);
        assert_eq!(data.skills[1].level, Some(SkillLevel::Expert));
        assert_eq!(data.languages[0].level, Some(LanguageLevel::Fluent));
    }

    #[test]
    fn test_level_scales() {
        assert_eq!(skill_fill_percent(Some(SkillLevel::Expert)), 100);
        assert_eq!(skill_fill_percent(Some(SkillLevel::Advanced)), 75);
        assert_eq!(skill_fill_percent(Some(SkillLevel::Intermediate)), 50);
        assert_eq!(skill_fill_percent(Some(SkillLevel::Beginner)), 25);
        assert_eq!(skill_fill_percent(None), 25);
        assert_eq!(language_fill_percent(Some(LanguageLevel::Native)), 100);
        assert_eq!(language_fill_percent(Some(LanguageLevel::Fluent)), 80);
        assert_eq!(language_fill_percent(Some(LanguageLevel::Conversational)), 60);
        assert_eq!(language_fill_percent(None), 40);
        assert_eq!(skill_dots(Some(SkillLevel::Advanced)), 4);
        assert_eq!(language_dots(Some(LanguageLevel::Basic)), 2);
    }

    #[test]
    fn test_blank_prefills_email() {
        let data = ResumeData::blank("ada@example.com");
        assert_eq!(data.personal_info.email, "ada@example.com");
        assert_eq!(data.personal_info.first_name, "");
        assert!(data.experience.is_empty());
    }

    #[test]
    fn test_ensure_unique_ids_replaces_missing_and_duplicates() {
        let mut data = ResumeData::default();
        data.skills = vec![
            Skill { id: "a".into(), name: "Rust".into(), level: None },
            Skill { id: "a".into(), name: "Go".into(), level: None },
            Skill { id: "".into(), name: "C".into(), level: None },
        ];
        assert_eq!(data.ensure_unique_ids(), 2);
        assert_eq!(data.skills[0].id, "a");
        assert_ne!(data.skills[1].id, "a");
        assert!(!data.skills[2].id.is_empty());
        assert_ne!(data.skills[1].id, data.skills[2].id);
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let info = PersonalInfo {
            first_name: "Ada".into(),
            ..PersonalInfo::default()
        };
        assert_eq!(info.full_name(), "Ada");
    }
}
