use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sqlx::PgPool;
use uuid::Uuid;

use crate::ai_client::AiClient;
use crate::config::Config;
use crate::export::PdfConverter;
use crate::publish::flow::PublishFlow;
use crate::publish::registrar::DomainRegistrar;
use crate::publish::store::SiteStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// External domain availability/registration collaborator.
    pub registrar: Arc<dyn DomainRegistrar>,
    /// Published-site artifact persistence (S3 + Postgres).
    pub site_store: Arc<dyn SiteStore>,
    pub ai: AiClient,
    /// External HTML-to-PDF conversion service.
    pub pdf: Arc<dyn PdfConverter>,
    pub config: Config,
    /// One publication flow per resume with an open publish dialog. The map
    /// is the serialization point for the at-most-once publish guarantee;
    /// the lock is never held across an await.
    pub publish_flows: Arc<Mutex<HashMap<Uuid, PublishFlow>>>,
}
