//! Publication endpoints: availability check, publish, dismissal, and the
//! published-site viewer.
//!
//! The orchestration is factored into `run_check`/`run_publish` over the
//! collaborator traits so the sequencing rules — guard before any network
//! call, at-most-once registration, stale results discarded — are exercised
//! by tests without a database or registrar.

use std::collections::HashMap;
use std::sync::Mutex;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::publish::domain::normalize_domain;
use crate::publish::flow::PublishFlow;
use crate::publish::registrar::DomainRegistrar;
use crate::publish::store::SiteStore;
use crate::render::site;
use crate::state::AppState;

type FlowMap = Mutex<HashMap<Uuid, PublishFlow>>;

#[derive(Debug, Deserialize)]
pub struct CheckDomainRequest {
    pub domain: String,
}

#[derive(Debug, Serialize)]
pub struct CheckDomainResponse {
    pub available: bool,
    pub domain: String,
    pub price: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub domain: String,
    pub resume_data: ResumeDocument,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    pub success: bool,
    pub domain: String,
    pub website_url: String,
    pub published_at: DateTime<Utc>,
}

fn lock_flows(flows: &FlowMap) -> std::sync::MutexGuard<'_, HashMap<Uuid, PublishFlow>> {
    flows.lock().expect("publish flow lock poisoned")
}

pub(crate) async fn run_check(
    registrar: &dyn DomainRegistrar,
    flows: &FlowMap,
    resume_id: Uuid,
    raw_domain: &str,
) -> Result<CheckDomainResponse, AppError> {
    let domain = normalize_domain(raw_domain);
    if domain.is_empty() {
        return Err(AppError::Validation("Domain is required".to_string()));
    }

    // Claim the check before suspending; the epoch token identifies it.
    let epoch = lock_flows(flows)
        .entry(resume_id)
        .or_default()
        .begin_check(&domain)?;

    let result = registrar.check_availability(&domain).await;

    let mut guard = lock_flows(flows);
    let flow = guard.entry(resume_id).or_default();
    match result {
        Ok(availability) => {
            if !flow.complete_check(epoch, &domain, availability.available, availability.price) {
                // The dialog was dismissed or the domain retyped mid-flight;
                // this verdict no longer describes anything.
                return Err(AppError::Precondition(
                    "Availability check was cancelled".to_string(),
                ));
            }
            Ok(CheckDomainResponse {
                available: availability.available,
                domain,
                price: availability.price,
            })
        }
        Err(err) => {
            flow.fail_check(epoch);
            Err(err.into())
        }
    }
}

pub(crate) async fn run_publish(
    registrar: &dyn DomainRegistrar,
    store: &dyn SiteStore,
    flows: &FlowMap,
    resume_id: Uuid,
    raw_domain: &str,
    resume: &ResumeDocument,
) -> Result<PublishResponse, AppError> {
    let domain = normalize_domain(raw_domain);

    // The guard runs before any network call: no positive availability
    // verdict for this exact domain, or a publish already in flight, and we
    // stop here.
    lock_flows(flows)
        .entry(resume_id)
        .or_default()
        .begin_publish(&domain)?;

    let outcome: Result<DateTime<Utc>, AppError> = async {
        registrar.register(&domain).await?;
        let html = site::generate(resume);
        store
            .put_site(resume_id, &domain, &html, resume.template_id)
            .await
    }
    .await;

    let mut guard = lock_flows(flows);
    let flow = guard.entry(resume_id).or_default();
    match outcome {
        Ok(published_at) => {
            let website_url = format!("https://{domain}");
            flow.complete_publish(&domain, &website_url, published_at);
            Ok(PublishResponse {
                success: true,
                domain,
                website_url,
                published_at,
            })
        }
        Err(err) => {
            flow.fail_publish(&domain, &err.to_string());
            Err(err)
        }
    }
}

/// POST /api/v1/resumes/:id/publish/check
pub async fn handle_check_domain(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Json(req): Json<CheckDomainRequest>,
) -> Result<Json<CheckDomainResponse>, AppError> {
    let response = run_check(
        state.registrar.as_ref(),
        &state.publish_flows,
        resume_id,
        &req.domain,
    )
    .await?;
    Ok(Json(response))
}

/// POST /api/v1/resumes/:id/publish
pub async fn handle_publish(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Json(req): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, AppError> {
    let response = run_publish(
        state.registrar.as_ref(),
        state.site_store.as_ref(),
        &state.publish_flows,
        resume_id,
        &req.domain,
        &req.resume_data,
    )
    .await?;
    Ok(Json(response))
}

/// DELETE /api/v1/resumes/:id/publish
///
/// The publish dialog was dismissed: drop the flow so any in-flight check
/// result is discarded. Refused while a publish is actually running.
pub async fn handle_dismiss_publish(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut guard = lock_flows(&state.publish_flows);
    if let Some(flow) = guard.get_mut(&resume_id) {
        if !flow.cancel() {
            return Err(AppError::Conflict(
                "A publish for this resume is already in progress".to_string(),
            ));
        }
        guard.remove(&resume_id);
    }
    Ok(StatusCode::NO_CONTENT)
}

const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Website Not Found</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; display: flex; align-items: center; justify-content: center; min-height: 100vh; margin: 0; color: #333; }
        .notice { text-align: center; }
        h1 { font-size: 1.5em; margin-bottom: 8px; }
        p { color: #6b7280; }
    </style>
</head>
<body>
    <div class="notice">
        <h1>Website Not Found</h1>
        <p>No published resume exists at this address.</p>
    </div>
</body>
</html>"#;

/// GET /sites/:domain
///
/// Serves the stored document exactly as published — byte-for-byte, as its
/// own document, never injected into another page's DOM.
pub async fn handle_serve_site(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Response, AppError> {
    match state.site_store.get_site_html(&domain).await? {
        Some(html) => Ok(Html(html).into_response()),
        None => Ok((StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::TemplateId;
    use crate::publish::flow::PublishState;
    use crate::publish::registrar::{DomainAvailability, RegistrarError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct MockRegistrar {
        available: bool,
        fail_check: bool,
        registrations: AtomicU32,
    }

    impl MockRegistrar {
        fn new(available: bool) -> Self {
            MockRegistrar {
                available,
                fail_check: false,
                registrations: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl DomainRegistrar for MockRegistrar {
        async fn check_availability(
            &self,
            _domain: &str,
        ) -> Result<DomainAvailability, RegistrarError> {
            if self.fail_check {
                return Err(RegistrarError::Api {
                    status: 500,
                    message: "registrar down".to_string(),
                });
            }
            Ok(DomainAvailability {
                available: self.available,
                price: Some(9.99),
            })
        }

        async fn register(&self, _domain: &str) -> Result<(), RegistrarError> {
            self.registrations.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockStore {
        fail_put: bool,
        stored: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl SiteStore for MockStore {
        async fn put_site(
            &self,
            _resume_id: Uuid,
            domain: &str,
            html: &str,
            _template: TemplateId,
        ) -> Result<DateTime<Utc>, AppError> {
            if self.fail_put {
                return Err(AppError::ExternalService("storage down".to_string()));
            }
            self.stored
                .lock()
                .unwrap()
                .insert(domain.to_string(), html.to_string());
            Ok(Utc::now())
        }

        async fn get_site_html(&self, domain: &str) -> Result<Option<String>, AppError> {
            Ok(self.stored.lock().unwrap().get(domain).cloned())
        }
    }

    fn sample_resume() -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = "Jane Doe".to_string();
        doc.skills.push("Rust".to_string());
        doc
    }

    #[tokio::test]
    async fn test_check_then_publish_stores_site() {
        let registrar = MockRegistrar::new(true);
        let store = MockStore::default();
        let flows = FlowMap::default();
        let resume_id = Uuid::new_v4();

        let check = run_check(&registrar, &flows, resume_id, "Jane Doe.me")
            .await
            .unwrap();
        assert!(check.available);
        assert_eq!(check.domain, "janedoe.me");

        let resume = sample_resume();
        let published = run_publish(&registrar, &store, &flows, resume_id, "janedoe.me", &resume)
            .await
            .unwrap();
        assert!(published.success);
        assert_eq!(published.website_url, "https://janedoe.me");
        assert_eq!(registrar.registrations.load(Ordering::SeqCst), 1);

        let html = store.get_site_html("janedoe.me").await.unwrap().unwrap();
        assert!(html.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_publish_without_check_is_rejected_before_registration() {
        let registrar = MockRegistrar::new(true);
        let store = MockStore::default();
        let flows = FlowMap::default();
        let resume = sample_resume();

        let err = run_publish(
            &registrar,
            &store,
            &flows,
            Uuid::new_v4(),
            "janedoe.me",
            &resume,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Precondition(_)));
        // The non-idempotent side effect never ran.
        assert_eq!(registrar.registrations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_publish_after_unavailable_verdict_is_rejected() {
        let registrar = MockRegistrar::new(false);
        let store = MockStore::default();
        let flows = FlowMap::default();
        let resume_id = Uuid::new_v4();

        let check = run_check(&registrar, &flows, resume_id, "janedoe.me")
            .await
            .unwrap();
        assert!(!check.available);

        let err = run_publish(
            &registrar,
            &store,
            &flows,
            resume_id,
            "janedoe.me",
            &sample_resume(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Precondition(_)));
        assert_eq!(registrar.registrations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_duplicate_publish_in_flight_is_conflict() {
        let registrar = MockRegistrar::new(true);
        let store = MockStore::default();
        let flows = FlowMap::default();
        let resume_id = Uuid::new_v4();

        run_check(&registrar, &flows, resume_id, "janedoe.me")
            .await
            .unwrap();
        // Simulate the first publish still being in flight.
        flows
            .lock()
            .unwrap()
            .get_mut(&resume_id)
            .unwrap()
            .begin_publish("janedoe.me")
            .unwrap();

        let err = run_publish(
            &registrar,
            &store,
            &flows,
            resume_id,
            "janedoe.me",
            &sample_resume(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(registrar.registrations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_store_leaves_flow_failed_and_site_absent() {
        let registrar = MockRegistrar::new(true);
        let store = MockStore {
            fail_put: true,
            ..MockStore::default()
        };
        let flows = FlowMap::default();
        let resume_id = Uuid::new_v4();

        run_check(&registrar, &flows, resume_id, "janedoe.me")
            .await
            .unwrap();
        let err = run_publish(
            &registrar,
            &store,
            &flows,
            resume_id,
            "janedoe.me",
            &sample_resume(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));

        let guard = flows.lock().unwrap();
        assert!(matches!(
            guard.get(&resume_id).unwrap().state(),
            PublishState::Failed { .. }
        ));
        drop(guard);
        assert!(store.get_site_html("janedoe.me").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_registrar_failure_surfaces_verbatim() {
        let registrar = MockRegistrar {
            fail_check: true,
            ..MockRegistrar::new(true)
        };
        let flows = FlowMap::default();

        let err = run_check(&registrar, &flows, Uuid::new_v4(), "janedoe.me")
            .await
            .unwrap_err();
        match err {
            AppError::ExternalService(message) => assert!(message.contains("registrar down")),
            other => panic!("expected external service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_domain_is_validation_error() {
        let registrar = MockRegistrar::new(true);
        let flows = FlowMap::default();
        let err = run_check(&registrar, &flows, Uuid::new_v4(), "!!!")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_published_html_is_escaped() {
        let registrar = MockRegistrar::new(true);
        let store = MockStore::default();
        let flows = FlowMap::default();
        let resume_id = Uuid::new_v4();

        run_check(&registrar, &flows, resume_id, "janedoe.me")
            .await
            .unwrap();
        let mut resume = sample_resume();
        resume.skills.push("<script>alert(1)</script>".to_string());
        run_publish(&registrar, &store, &flows, resume_id, "janedoe.me", &resume)
            .await
            .unwrap();

        let html = store.get_site_html("janedoe.me").await.unwrap().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
