//! PDF export.
//!
//! Rasterizing the preview and packaging it as a PDF is an external
//! conversion capability consumed as a black box ([`PdfConverter`]). What
//! lives here is the pure part: A4 page geometry, the scale-to-fit
//! placement math, and the download filename rule — plus the handler that
//! wires them to the converter service.

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::render::site;
use crate::state::AppState;

pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Where a rasterized preview image lands on the page, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Scales an image to fit an A4 portrait page preserving aspect ratio,
/// horizontally centered, flush to the top edge.
pub fn fit_to_page(image_width: f64, image_height: f64) -> Placement {
    if image_width <= 0.0 || image_height <= 0.0 {
        return Placement {
            x_mm: 0.0,
            y_mm: 0.0,
            width_mm: 0.0,
            height_mm: 0.0,
        };
    }
    let ratio = (A4_WIDTH_MM / image_width).min(A4_HEIGHT_MM / image_height);
    let width_mm = image_width * ratio;
    let height_mm = image_height * ratio;
    Placement {
        x_mm: (A4_WIDTH_MM - width_mm) / 2.0,
        y_mm: 0.0,
        width_mm,
        height_mm,
    }
}

/// Download filename: the owner's full name, `"resume"` when blank. Path
/// separators and control characters are dropped so the name is safe in a
/// content-disposition header.
pub fn export_filename(full_name: &str) -> String {
    let cleaned: String = full_name
        .trim()
        .chars()
        .filter(|c| !c.is_control() && *c != '/' && *c != '\\' && *c != '"')
        .collect();
    let base = if cleaned.trim().is_empty() {
        "resume".to_string()
    } else {
        cleaned
    };
    format!("{base}.pdf")
}

/// The external HTML-to-PDF conversion service.
#[async_trait]
pub trait PdfConverter: Send + Sync {
    async fn convert(&self, html: &str, placement: Placement) -> Result<Bytes, AppError>;
}

#[derive(Debug, Serialize)]
struct ConvertRequest<'a> {
    html: &'a str,
    page_width_mm: f64,
    page_height_mm: f64,
    placement: Placement,
}

/// Posts the document to a headless-renderer service and returns its PDF
/// bytes untouched.
pub struct HttpPdfConverter {
    client: Client,
    base_url: String,
}

impl HttpPdfConverter {
    pub fn new(base_url: String) -> Self {
        HttpPdfConverter {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl PdfConverter for HttpPdfConverter {
    async fn convert(&self, html: &str, placement: Placement) -> Result<Bytes, AppError> {
        let url = format!("{}/convert", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&ConvertRequest {
                html,
                page_width_mm: A4_WIDTH_MM,
                page_height_mm: A4_HEIGHT_MM,
                placement,
            })
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("PDF converter unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "PDF converter error (status {status}): {message}"
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| AppError::ExternalService(format!("PDF converter read failed: {e}")))
    }
}

/// POST /api/v1/export/pdf
///
/// Renders the posted document to its publish-grade HTML, converts it, and
/// streams the PDF back named after the resume owner.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(resume): Json<ResumeDocument>,
) -> Result<Response, AppError> {
    let html = site::generate(&resume);
    // The preview surface is 850 CSS pixels wide, rasterized page-proportioned.
    let surface_width = 850.0;
    let surface_height = surface_width * (A4_HEIGHT_MM / A4_WIDTH_MM);
    let placement = fit_to_page(surface_width, surface_height);
    let pdf = state.pdf.convert(&html, placement).await?;

    let filename = export_filename(&resume.personal_info.full_name);
    let response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf,
    );
    Ok(response.into_response())
}
