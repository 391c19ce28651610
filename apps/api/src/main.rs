mod ai_client;
mod assist;
mod config;
mod db;
mod editor;
mod errors;
mod export;
mod models;
mod publish;
mod render;
mod resumes;
mod routes;
mod state;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::ai_client::AiClient;
use crate::config::Config;
use crate::db::create_pool;
use crate::export::HttpPdfConverter;
use crate::publish::registrar::NamecomRegistrar;
use crate::publish::store::PgS3SiteStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;

    // Initialize S3 / MinIO for published-site artifacts
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    // External collaborators
    let registrar = Arc::new(NamecomRegistrar::new(
        config.registrar_api_url.clone(),
        config.registrar_username.clone(),
        config.registrar_api_key.clone(),
    ));
    info!("Registrar client initialized ({})", config.registrar_api_url);

    let ai = AiClient::new(
        config.ai_gateway_url.clone(),
        config.ai_gateway_api_key.clone(),
    );
    info!("AI client initialized (model: {})", ai_client::MODEL);

    let pdf = Arc::new(HttpPdfConverter::new(config.pdf_converter_url.clone()));

    let site_store = Arc::new(PgS3SiteStore::new(
        pool.clone(),
        s3,
        config.s3_bucket.clone(),
    ));

    // Build app state
    let state = AppState {
        db: pool,
        registrar,
        site_store,
        ai,
        pdf,
        config: config.clone(),
        publish_flows: Arc::new(Mutex::new(HashMap::new())),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "folio-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
