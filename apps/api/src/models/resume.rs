//! The canonical resume document model.
//!
//! This is the single in-memory representation shared by the form editors,
//! the template renderer, and the static site generator. The wire format is
//! camelCase JSON, matching what the builder frontend stores on every
//! keystroke. Persistence metadata (row id, timestamps, published domain)
//! lives on [`ResumeRow`], never on the document itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// The closed set of visual templates. Unrecognized ids resolve to `Modern`
/// rather than erroring, so a stored document with a stale template id keeps
/// rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl TemplateId {
    /// Resolves a raw template id string. Never fails — anything unknown
    /// falls back to `Modern`.
    pub fn resolve(raw: &str) -> Self {
        match raw {
            "classic" => TemplateId::Classic,
            "minimal" => TemplateId::Minimal,
            _ => TemplateId::Modern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
        }
    }
}

impl From<String> for TemplateId {
    fn from(raw: String) -> Self {
        TemplateId::resolve(&raw)
    }
}

/// Free-text personal fields. No format validation — email and phone render
/// exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub title: String,
    pub summary: String,
}

/// One work experience entry. `id` is assigned at creation and stable across
/// edits; it is never reused after removal. When `current` is true the stored
/// `end_date` is ignored at render time and the range ends in "Present".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: Uuid,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    /// Partial date, `YYYY-MM` or empty.
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    /// Free text; embedded line breaks are preserved on render.
    #[serde(default)]
    pub description: String,
}

impl ExperienceEntry {
    pub fn new() -> Self {
        ExperienceEntry {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// One education entry. There is intentionally no `current` flag here — the
/// date range always formats both endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: Uuid,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl EducationEntry {
    pub fn new() -> Self {
        EducationEntry {
            id: Uuid::new_v4(),
            school: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl Default for EducationEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// The aggregate consumed immutably by the renderer and the site generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub title: String,
    pub template_id: TemplateId,
    pub personal_info: PersonalInfo,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// Ordered, case-sensitive unique. Duplicates are rejected on insert.
    pub skills: Vec<String>,
}

/// A stored resume. Document parts are JSONB columns so the frontend shape
/// round-trips untouched; `skills` is a `text[]`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub title: String,
    pub template_id: String,
    pub personal_info: Value,
    pub experiences: Value,
    pub education: Value,
    pub skills: Vec<String>,
    pub published_domain: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRow {
    /// Reassembles the document from the stored columns. Malformed stored
    /// JSON degrades to empty parts instead of failing the whole resume.
    pub fn document(&self) -> ResumeDocument {
        ResumeDocument {
            title: self.title.clone(),
            template_id: TemplateId::resolve(&self.template_id),
            personal_info: serde_json::from_value(self.personal_info.clone())
                .unwrap_or_default(),
            experiences: serde_json::from_value(self.experiences.clone()).unwrap_or_default(),
            education: serde_json::from_value(self.education.clone()).unwrap_or_default(),
            skills: self.skills.clone(),
        }
    }
}

/// A published website record, keyed by domain. `html_content` is served
/// verbatim — byte-for-byte — by the site handler.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PublishedWebsiteRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub domain: String,
    pub html_content: String,
    pub template_id: String,
    pub created_at: DateTime<Utc>,
}
