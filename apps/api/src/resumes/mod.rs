//! Resume persistence — thin storage glue around the `resumes` table.
//!
//! The document parts are stored as JSONB in the exact wire shape the
//! builder sends, so a fetch hands the frontend back what it saved. No
//! interpretation happens here; the renderer works on [`ResumeRow::document`].

pub mod handlers;

use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeRow, TemplateId};

/// Fields the builder saves. Everything is optional so the frontend can
/// save a single tab's state without resending the rest.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateResumeRequest {
    pub title: Option<String>,
    pub template_id: Option<String>,
    pub personal_info: Option<Value>,
    pub experiences: Option<Value>,
    pub education: Option<Value>,
    pub skills: Option<Vec<String>>,
}

/// Creates an empty resume: blank personal info, empty lists, Modern
/// template.
pub async fn create_resume(pool: &PgPool) -> Result<ResumeRow, AppError> {
    let row = sqlx::query_as(
        r#"
        INSERT INTO resumes (title, template_id, personal_info, experiences, education, skills)
        VALUES ('Untitled Resume', $1, $2, '[]'::jsonb, '[]'::jsonb, '{}')
        RETURNING *
        "#,
    )
    .bind(TemplateId::Modern.as_str())
    .bind(serde_json::json!({
        "fullName": "", "email": "", "phone": "", "location": "", "title": "", "summary": ""
    }))
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn fetch_resume(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
    let row = sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn list_resumes(pool: &PgPool) -> Result<Vec<ResumeRow>, AppError> {
    let rows = sqlx::query_as("SELECT * FROM resumes ORDER BY updated_at DESC")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Applies a partial save. The template id passes through
/// [`TemplateId::resolve`] so an unknown value is stored as `modern`
/// instead of poisoning the row.
pub async fn update_resume(
    pool: &PgPool,
    id: Uuid,
    update: UpdateResumeRequest,
) -> Result<Option<ResumeRow>, AppError> {
    let template_id = update
        .template_id
        .as_deref()
        .map(|raw| TemplateId::resolve(raw).as_str());

    let row = sqlx::query_as(
        r#"
        UPDATE resumes SET
            title = COALESCE($2, title),
            template_id = COALESCE($3, template_id),
            personal_info = COALESCE($4, personal_info),
            experiences = COALESCE($5, experiences),
            education = COALESCE($6, education),
            skills = COALESCE($7, skills),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(update.title)
    .bind(template_id)
    .bind(update.personal_info)
    .bind(update.experiences)
    .bind(update.education)
    .bind(update.skills)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete_resume(pool: &PgPool, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
