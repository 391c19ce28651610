//! Template Renderer — pure projection of a [`ResumeDocument`] into a tree
//! of labeled sections.
//!
//! `render(resume, template)` is deterministic and side-effect-free: equal
//! input produces an identical tree, so it is safe to call on every
//! keystroke for the live preview and reused verbatim at publish time. The
//! tree serializes to camelCase JSON for the interactive preview surface;
//! [`site::generate`] projects the same selection rules into a standalone
//! HTML document.
//!
//! The three templates are alternate style tables over one data-selection
//! core ([`sections::build_sections`]) — a closed enum, not a plugin seam.

pub mod dates;
pub mod escape;
pub mod handlers;
pub mod sections;
pub mod site;

use serde::Serialize;

use crate::models::resume::{ResumeDocument, TemplateId};
use crate::render::sections::{build_sections, style_for};

/// Fallback header name when the user has not typed one yet.
pub const NAME_PLACEHOLDER: &str = "Your Name";

/// The rendered section tree for one template variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    pub template: TemplateId,
    pub sections: Vec<Section>,
}

/// One labeled block of the rendered resume, in display order.
///
/// Sections that would be empty are not emitted at all — a document with no
/// experience has no `Experience` variant in its tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Section {
    #[serde(rename_all = "camelCase")]
    Header {
        name: String,
        /// Omitted entirely when blank.
        title: Option<String>,
        /// Non-blank contact fields (email, phone, location) in that order.
        contacts: Vec<String>,
        /// Variant-specific join between contact fields.
        contact_separator: String,
    },
    #[serde(rename_all = "camelCase")]
    Summary { heading: String, text: String },
    #[serde(rename_all = "camelCase")]
    Experience {
        heading: String,
        entries: Vec<ExperienceItem>,
    },
    #[serde(rename_all = "camelCase")]
    Education {
        heading: String,
        entries: Vec<EducationItem>,
    },
    #[serde(rename_all = "camelCase")]
    Skills { heading: String, skills: SkillsBlock },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub position: String,
    pub company: String,
    /// `"Mar 2021 - Present"` when `current`, otherwise both ends formatted.
    pub date_range: String,
    /// Omitted when blank. Embedded newlines are preserved, not collapsed.
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub degree: String,
    /// School and field joined with the variant separator when both present.
    pub institution: String,
    pub date_range: String,
}

/// Per-template skills arrangement: discrete tags for Modern and Minimal, a
/// single delimited line for Classic. A deliberate divergence, not a bug.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "camelCase")]
pub enum SkillsBlock {
    #[serde(rename_all = "camelCase")]
    Tags { items: Vec<String> },
    #[serde(rename_all = "camelCase")]
    Line { text: String },
}

/// Renders the resume with the requested template. An unrecognized template
/// id has already collapsed to `Modern` during deserialization; callers that
/// hold a raw string go through [`TemplateId::resolve`].
pub fn render(resume: &ResumeDocument, template: TemplateId) -> RenderedDocument {
    RenderedDocument {
        template,
        sections: build_sections(resume, style_for(template)),
    }
}
