#![allow(dead_code)]

//! Form editor operations on a [`ResumeDocument`].
//!
//! These are the only mutations the builder performs: append a blank entry,
//! patch an entry's fields by id, remove by id, and manage the skill list.
//! Entry ids are fresh UUIDs assigned at creation — stable across edits and
//! never reused after removal. List order is insertion order; there is no
//! reordering, only append and delete.

use serde::Deserialize;
use uuid::Uuid;

use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};

/// Partial update for an experience entry. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

/// Partial update for an education entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// The personal-info fields addressable by the single-field update the form
/// sends on each keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Title,
    Summary,
}

/// Appends a blank experience entry and returns its id.
pub fn add_experience(resume: &mut ResumeDocument) -> Uuid {
    let entry = ExperienceEntry::new();
    let id = entry.id;
    resume.experiences.push(entry);
    id
}

/// Applies a patch to the entry with the given id. Returns false when no
/// such entry exists (e.g. it was removed in a concurrent tab).
pub fn update_experience(resume: &mut ResumeDocument, id: Uuid, patch: ExperiencePatch) -> bool {
    let Some(entry) = resume.experiences.iter_mut().find(|e| e.id == id) else {
        return false;
    };
    if let Some(company) = patch.company {
        entry.company = company;
    }
    if let Some(position) = patch.position {
        entry.position = position;
    }
    if let Some(start_date) = patch.start_date {
        entry.start_date = start_date;
    }
    if let Some(end_date) = patch.end_date {
        entry.end_date = end_date;
    }
    if let Some(current) = patch.current {
        entry.current = current;
    }
    if let Some(description) = patch.description {
        entry.description = description;
    }
    true
}

pub fn remove_experience(resume: &mut ResumeDocument, id: Uuid) -> bool {
    let before = resume.experiences.len();
    resume.experiences.retain(|e| e.id != id);
    resume.experiences.len() != before
}

pub fn add_education(resume: &mut ResumeDocument) -> Uuid {
    let entry = EducationEntry::new();
    let id = entry.id;
    resume.education.push(entry);
    id
}

pub fn update_education(resume: &mut ResumeDocument, id: Uuid, patch: EducationPatch) -> bool {
    let Some(entry) = resume.education.iter_mut().find(|e| e.id == id) else {
        return false;
    };
    if let Some(school) = patch.school {
        entry.school = school;
    }
    if let Some(degree) = patch.degree {
        entry.degree = degree;
    }
    if let Some(field) = patch.field {
        entry.field = field;
    }
    if let Some(start_date) = patch.start_date {
        entry.start_date = start_date;
    }
    if let Some(end_date) = patch.end_date {
        entry.end_date = end_date;
    }
    true
}

pub fn remove_education(resume: &mut ResumeDocument, id: Uuid) -> bool {
    let before = resume.education.len();
    resume.education.retain(|e| e.id != id);
    resume.education.len() != before
}

pub fn set_personal_field(info: &mut PersonalInfo, field: PersonalField, value: String) {
    match field {
        PersonalField::FullName => info.full_name = value,
        PersonalField::Email => info.email = value,
        PersonalField::Phone => info.phone = value,
        PersonalField::Location => info.location = value,
        PersonalField::Title => info.title = value,
        PersonalField::Summary => info.summary = value,
    }
}

/// Adds a skill, trimmed. Blank input and exact duplicates are silently
/// rejected. Uniqueness is case-sensitive: "JavaScript" and "javascript"
/// are distinct entries.
pub fn add_skill(resume: &mut ResumeDocument, raw: &str) -> bool {
    let skill = raw.trim();
    if skill.is_empty() || resume.skills.iter().any(|s| s == skill) {
        return false;
    }
    resume.skills.push(skill.to_string());
    true
}

pub fn remove_skill(resume: &mut ResumeDocument, skill: &str) -> bool {
    let before = resume.skills.len();
    resume.skills.retain(|s| s != skill);
    resume.skills.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_two_remove_first_keeps_survivor_intact() {
        let mut resume = ResumeDocument::default();
        let first = add_experience(&mut resume);
        let second = add_experience(&mut resume);
        update_experience(
            &mut resume,
            second,
            ExperiencePatch {
                company: Some("Initech".to_string()),
                position: Some("TPS Lead".to_string()),
                ..ExperiencePatch::default()
            },
        );

        assert!(remove_experience(&mut resume, first));
        assert_eq!(resume.experiences.len(), 1);
        assert_eq!(resume.experiences[0].id, second);
        assert_eq!(resume.experiences[0].company, "Initech");
        assert_eq!(resume.experiences[0].position, "TPS Lead");
    }

    #[test]
    fn test_patch_touches_only_supplied_fields() {
        let mut resume = ResumeDocument::default();
        let id = add_experience(&mut resume);
        update_experience(
            &mut resume,
            id,
            ExperiencePatch {
                company: Some("Acme".to_string()),
                ..ExperiencePatch::default()
            },
        );
        update_experience(
            &mut resume,
            id,
            ExperiencePatch {
                current: Some(true),
                ..ExperiencePatch::default()
            },
        );
        assert_eq!(resume.experiences[0].company, "Acme");
        assert!(resume.experiences[0].current);
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let mut resume = ResumeDocument::default();
        add_experience(&mut resume);
        assert!(!update_experience(
            &mut resume,
            Uuid::new_v4(),
            ExperiencePatch::default()
        ));
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let mut resume = ResumeDocument::default();
        let a = add_experience(&mut resume);
        let b = add_experience(&mut resume);
        let c = add_education(&mut resume);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_add_skill_trims_and_dedups() {
        let mut resume = ResumeDocument::default();
        assert!(add_skill(&mut resume, "  Rust  "));
        assert!(!add_skill(&mut resume, "Rust"));
        assert!(!add_skill(&mut resume, "   "));
        assert_eq!(resume.skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_skill_uniqueness_is_case_sensitive() {
        let mut resume = ResumeDocument::default();
        assert!(add_skill(&mut resume, "JavaScript"));
        assert!(add_skill(&mut resume, "javascript"));
        assert_eq!(resume.skills.len(), 2);
    }

    #[test]
    fn test_remove_skill() {
        let mut resume = ResumeDocument::default();
        add_skill(&mut resume, "Rust");
        add_skill(&mut resume, "Go");
        assert!(remove_skill(&mut resume, "Rust"));
        assert!(!remove_skill(&mut resume, "Rust"));
        assert_eq!(resume.skills, vec!["Go".to_string()]);
    }

    #[test]
    fn test_skills_keep_insertion_order() {
        let mut resume = ResumeDocument::default();
        for s in ["C", "A", "B"] {
            add_skill(&mut resume, s);
        }
        assert_eq!(resume.skills, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_set_personal_field() {
        let mut info = PersonalInfo::default();
        set_personal_field(&mut info, PersonalField::FullName, "Ada".to_string());
        set_personal_field(&mut info, PersonalField::Summary, "Hi".to_string());
        assert_eq!(info.full_name, "Ada");
        assert_eq!(info.summary, "Hi");
    }
}
