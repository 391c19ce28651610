//! Shared data-selection core for the three templates.
//!
//! All templates apply identical inclusion rules — a section renders only
//! when it has content, `current` suppresses the stored end date, blank
//! contact fields drop out — and differ only in the style table:
//! headings, separators, and the Classic skills-line divergence.

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeDocument, TemplateId};
use crate::render::dates::format_partial_date;
use crate::render::{
    EducationItem, ExperienceItem, Section, SkillsBlock, NAME_PLACEHOLDER,
};

/// Style knobs for one template variant. Data selection never branches on
/// the variant directly — everything variant-specific lives here.
#[derive(Debug, Clone, Copy)]
pub struct TemplateStyle {
    pub summary_heading: &'static str,
    pub experience_heading: &'static str,
    pub education_heading: &'static str,
    pub skills_heading: &'static str,
    pub contact_separator: &'static str,
    /// Joins school and field when both are present.
    pub institution_separator: &'static str,
    /// Classic renders skills as one delimited line instead of tags.
    pub skills_as_line: bool,
    pub skills_delimiter: &'static str,
}

pub const MODERN: TemplateStyle = TemplateStyle {
    summary_heading: "Professional Summary",
    experience_heading: "Work Experience",
    education_heading: "Education",
    skills_heading: "Skills",
    contact_separator: " • ",
    institution_separator: ", ",
    skills_as_line: false,
    skills_delimiter: " • ",
};

pub const CLASSIC: TemplateStyle = TemplateStyle {
    summary_heading: "PROFESSIONAL SUMMARY",
    experience_heading: "WORK EXPERIENCE",
    education_heading: "EDUCATION",
    skills_heading: "SKILLS",
    contact_separator: " | ",
    institution_separator: ", ",
    skills_as_line: true,
    skills_delimiter: " • ",
};

pub const MINIMAL: TemplateStyle = TemplateStyle {
    summary_heading: "Summary",
    experience_heading: "Experience",
    education_heading: "Education",
    skills_heading: "Skills",
    contact_separator: " · ",
    institution_separator: ", ",
    skills_as_line: false,
    skills_delimiter: " · ",
};

pub fn style_for(template: TemplateId) -> &'static TemplateStyle {
    match template {
        TemplateId::Modern => &MODERN,
        TemplateId::Classic => &CLASSIC,
        TemplateId::Minimal => &MINIMAL,
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Date range for an experience entry. `current` wins over any stored end
/// date.
pub fn experience_date_range(entry: &ExperienceEntry) -> String {
    let end = if entry.current {
        "Present".to_string()
    } else {
        format_partial_date(&entry.end_date)
    };
    format!("{} - {}", format_partial_date(&entry.start_date), end)
}

fn education_date_range(entry: &EducationEntry) -> String {
    format!(
        "{} - {}",
        format_partial_date(&entry.start_date),
        format_partial_date(&entry.end_date)
    )
}

fn institution_line(entry: &EducationEntry, style: &TemplateStyle) -> String {
    match (non_blank(&entry.school), non_blank(&entry.field)) {
        (Some(school), Some(field)) => {
            format!("{school}{}{field}", style.institution_separator)
        }
        (Some(school), None) => school,
        (None, Some(field)) => field,
        (None, None) => String::new(),
    }
}

/// Builds the ordered section list for one style table. Empty sections are
/// omitted entirely — only the header is unconditional.
pub fn build_sections(resume: &ResumeDocument, style: &TemplateStyle) -> Vec<Section> {
    let info = &resume.personal_info;
    let mut sections = Vec::with_capacity(5);

    let contacts: Vec<String> = [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter_map(|f| non_blank(f))
        .collect();

    sections.push(Section::Header {
        name: non_blank(&info.full_name).unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
        title: non_blank(&info.title),
        contacts,
        contact_separator: style.contact_separator.to_string(),
    });

    if let Some(summary) = non_blank(&info.summary) {
        sections.push(Section::Summary {
            heading: style.summary_heading.to_string(),
            text: summary,
        });
    }

    if !resume.experiences.is_empty() {
        sections.push(Section::Experience {
            heading: style.experience_heading.to_string(),
            entries: resume
                .experiences
                .iter()
                .map(|exp| ExperienceItem {
                    position: exp.position.clone(),
                    company: exp.company.clone(),
                    date_range: experience_date_range(exp),
                    description: non_blank(&exp.description),
                })
                .collect(),
        });
    }

    if !resume.education.is_empty() {
        sections.push(Section::Education {
            heading: style.education_heading.to_string(),
            entries: resume
                .education
                .iter()
                .map(|edu| EducationItem {
                    degree: edu.degree.clone(),
                    institution: institution_line(edu, style),
                    date_range: education_date_range(edu),
                })
                .collect(),
        });
    }

    if !resume.skills.is_empty() {
        let skills = if style.skills_as_line {
            SkillsBlock::Line {
                text: resume.skills.join(style.skills_delimiter),
            }
        } else {
            SkillsBlock::Tags {
                items: resume.skills.clone(),
            }
        };
        sections.push(Section::Skills {
            heading: style.skills_heading.to_string(),
            skills,
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resume_renders_header_only() {
        let sections = build_sections(&ResumeDocument::default(), &MODERN);
        assert_eq!(sections.len(), 1);
        match &sections[0] {
            Section::Header {
                name,
                title,
                contacts,
                ..
            } => {
                assert_eq!(name, NAME_PLACEHOLDER);
                assert!(title.is_none());
                assert!(contacts.is_empty());
            }
            other => panic!("expected header, got {other:?}"),
        }
    }

    #[test]
    fn test_contacts_keep_field_order_and_skip_blanks() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.phone = "555-0100".to_string();
        doc.personal_info.location = "Oslo".to_string();
        // email left blank
        let sections = build_sections(&doc, &MODERN);
        match &sections[0] {
            Section::Header { contacts, .. } => {
                assert_eq!(contacts, &["555-0100".to_string(), "Oslo".to_string()]);
            }
            other => panic!("expected header, got {other:?}"),
        }
    }

    #[test]
    fn test_current_entry_renders_present_regardless_of_end_date() {
        let mut doc = ResumeDocument::default();
        doc.experiences.push(ExperienceEntry {
            start_date: "2020-01".to_string(),
            end_date: "2021-06".to_string(),
            current: true,
            ..ExperienceEntry::new()
        });
        let sections = build_sections(&doc, &MODERN);
        let entries = match &sections[1] {
            Section::Experience { entries, .. } => entries,
            other => panic!("expected experience, got {other:?}"),
        };
        assert_eq!(entries[0].date_range, "Jan 2020 - Present");
    }

    #[test]
    fn test_non_current_entry_formats_both_ends() {
        let mut doc = ResumeDocument::default();
        doc.experiences.push(ExperienceEntry {
            start_date: "2020-01".to_string(),
            end_date: "2021-06".to_string(),
            current: false,
            ..ExperienceEntry::new()
        });
        let sections = build_sections(&doc, &MODERN);
        match &sections[1] {
            Section::Experience { entries, .. } => {
                assert_eq!(entries[0].date_range, "Jan 2020 - Jun 2021");
            }
            other => panic!("expected experience, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_description_is_omitted_but_newlines_survive() {
        let mut doc = ResumeDocument::default();
        doc.experiences.push(ExperienceEntry {
            description: "   ".to_string(),
            ..ExperienceEntry::new()
        });
        doc.experiences.push(ExperienceEntry {
            description: "first\nsecond".to_string(),
            ..ExperienceEntry::new()
        });
        let sections = build_sections(&doc, &MODERN);
        match &sections[1] {
            Section::Experience { entries, .. } => {
                assert_eq!(entries[0].description, None);
                assert_eq!(entries[1].description.as_deref(), Some("first\nsecond"));
            }
            other => panic!("expected experience, got {other:?}"),
        }
    }

    #[test]
    fn test_institution_joins_school_and_field_when_both_present() {
        let entry = EducationEntry {
            school: "MIT".to_string(),
            field: "EECS".to_string(),
            ..EducationEntry::new()
        };
        assert_eq!(institution_line(&entry, &MODERN), "MIT, EECS");

        let school_only = EducationEntry {
            school: "MIT".to_string(),
            ..EducationEntry::new()
        };
        assert_eq!(institution_line(&school_only, &MODERN), "MIT");

        let field_only = EducationEntry {
            field: "EECS".to_string(),
            ..EducationEntry::new()
        };
        assert_eq!(institution_line(&field_only, &MODERN), "EECS");
    }

    #[test]
    fn test_education_has_no_current_concept() {
        let mut doc = ResumeDocument::default();
        doc.education.push(EducationEntry {
            start_date: "2018-09".to_string(),
            end_date: "2022-06".to_string(),
            ..EducationEntry::new()
        });
        let sections = build_sections(&doc, &MODERN);
        match &sections[1] {
            Section::Education { entries, .. } => {
                assert_eq!(entries[0].date_range, "Sep 2018 - Jun 2022");
            }
            other => panic!("expected education, got {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_only_summary_is_omitted() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.summary = " \n ".to_string();
        let sections = build_sections(&doc, &MODERN);
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.summary = "s".to_string();
        doc.experiences.push(ExperienceEntry::new());
        doc.education.push(EducationEntry::new());
        doc.skills.push("Rust".to_string());
        let sections = build_sections(&doc, &MINIMAL);
        let kinds: Vec<&str> = sections
            .iter()
            .map(|s| match s {
                Section::Header { .. } => "header",
                Section::Summary { .. } => "summary",
                Section::Experience { .. } => "experience",
                Section::Education { .. } => "education",
                Section::Skills { .. } => "skills",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["header", "summary", "experience", "education", "skills"]
        );
    }
}
