//! AI text suggestions for resume fields.
//!
//! The frontend sends the field's current context and shows the returned
//! text as a replacement candidate. A gateway failure surfaces as an error
//! notification and leaves the field's existing value untouched — the only
//! write happens client-side on success.

pub mod prompts;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assist::prompts::{
    EXPERIENCE_PROMPT, EXPERIENCE_SYSTEM, SUMMARY_PROMPT, SUMMARY_SYSTEM,
};
use crate::errors::AppError;
use crate::state::AppState;

/// `{"type": "experience" | "summary", "data": {...}}`
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SuggestionRequest {
    Experience(ExperienceContext),
    Summary(SummaryContext),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceContext {
    pub position: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryContext {
    pub full_name: String,
    pub title: String,
    pub experience_highlights: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub content: String,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Builds the (system, user) prompt pair for a request.
pub fn build_prompt(request: &SuggestionRequest) -> (&'static str, String) {
    match request {
        SuggestionRequest::Experience(ctx) => (
            EXPERIENCE_SYSTEM,
            EXPERIENCE_PROMPT
                .replace("{position}", &ctx.position)
                .replace("{company}", &ctx.company)
                .replace(
                    "{description}",
                    &or_placeholder(&ctx.description, "None provided"),
                ),
        ),
        SuggestionRequest::Summary(ctx) => (
            SUMMARY_SYSTEM,
            SUMMARY_PROMPT
                .replace("{full_name}", &ctx.full_name)
                .replace("{title}", &ctx.title)
                .replace(
                    "{experience_highlights}",
                    &or_placeholder(
                        &ctx.experience_highlights,
                        "Various professional experiences",
                    ),
                ),
        ),
    }
}

/// POST /api/v1/assist
pub async fn handle_assist(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let (system, prompt) = build_prompt(&request);
    let content = state.ai.complete(system, &prompt).await?;
    Ok(Json(SuggestionResponse { content }))
}
