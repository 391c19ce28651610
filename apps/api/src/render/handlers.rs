use axum::Json;

use crate::models::resume::ResumeDocument;
use crate::render::{render, RenderedDocument};

/// POST /api/v1/render/preview
///
/// Stateless: the frontend posts the in-progress document on every change
/// and projects the returned section tree into the preview pane. The
/// document's own template id picks the variant (unknown ids have already
/// collapsed to Modern).
pub async fn handle_preview(Json(resume): Json<ResumeDocument>) -> Json<RenderedDocument> {
    Json(render(&resume, resume.template_id))
}
