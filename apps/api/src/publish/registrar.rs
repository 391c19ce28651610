//! Domain registrar client — the external availability/registration
//! collaborator.
//!
//! Carried in `AppState` as `Arc<dyn DomainRegistrar>` so the publish
//! handlers can be exercised against a mock. The production implementation
//! talks to the Name.com v4 API with basic auth.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Registrar API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainAvailability {
    pub available: bool,
    pub price: Option<f64>,
}

#[async_trait]
pub trait DomainRegistrar: Send + Sync {
    async fn check_availability(&self, domain: &str) -> Result<DomainAvailability, RegistrarError>;

    /// Registers the domain. Non-idempotent — callers must guarantee
    /// at-most-once invocation per publish.
    async fn register(&self, domain: &str) -> Result<(), RegistrarError>;
}

// ── Name.com wire types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CheckAvailabilityRequest<'a> {
    #[serde(rename = "domainNames")]
    domain_names: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct CheckAvailabilityResponse {
    #[serde(default)]
    results: Vec<DomainResult>,
}

#[derive(Debug, Deserialize)]
struct DomainResult {
    #[serde(default)]
    purchasable: bool,
    #[serde(rename = "purchasePrice")]
    purchase_price: Option<f64>,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    domain: RegisterDomain<'a>,
    /// Zero in the development tier.
    #[serde(rename = "purchasePrice")]
    purchase_price: f64,
}

#[derive(Debug, Serialize)]
struct RegisterDomain<'a> {
    #[serde(rename = "domainName")]
    domain_name: &'a str,
}

impl CheckAvailabilityResponse {
    fn availability(&self) -> DomainAvailability {
        match self.results.first() {
            Some(result) => DomainAvailability {
                available: result.purchasable,
                price: result.purchase_price,
            },
            None => DomainAvailability {
                available: false,
                price: None,
            },
        }
    }
}

/// Name.com v4 client. The default endpoint is the dev-tier API host;
/// production swaps the base URL via config.
pub struct NamecomRegistrar {
    client: Client,
    base_url: String,
    username: String,
    api_key: String,
}

impl NamecomRegistrar {
    pub fn new(base_url: String, username: String, api_key: String) -> Self {
        NamecomRegistrar {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            username,
            api_key,
        }
    }
}

#[async_trait]
impl DomainRegistrar for NamecomRegistrar {
    async fn check_availability(&self, domain: &str) -> Result<DomainAvailability, RegistrarError> {
        let url = format!("{}/v4/domains:checkAvailability", self.base_url);
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.api_key))
            .json(&CheckAvailabilityRequest {
                domain_names: vec![domain],
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RegistrarError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CheckAvailabilityResponse = response.json().await?;
        let availability = body.availability();
        info!(
            "Availability check for {domain}: available={}",
            availability.available
        );
        Ok(availability)
    }

    async fn register(&self, domain: &str) -> Result<(), RegistrarError> {
        let url = format!("{}/v4/domains", self.base_url);
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.api_key))
            .json(&RegisterRequest {
                domain: RegisterDomain {
                    domain_name: domain,
                },
                purchase_price: 0.0,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The dev-tier API rejects most registrations; match the original
            // service and proceed with publishing anyway.
            let message = response.text().await.unwrap_or_default();
            warn!("Registration of {domain} returned {status}: {message} — continuing");
            return Ok(());
        }

        info!("Domain registered: {domain}");
        Ok(())
    }
}
