//! Published-site persistence.
//!
//! The generated HTML lands in two places: an S3 object (durable artifact,
//! key `sites/<domain>/index.html`) and the `published_websites` row that the
//! site handler serves from. The row insert and the resume's publish
//! metadata update share one transaction; if it fails, the already-uploaded
//! S3 object is deleted so no partial record survives a failed publish.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::TemplateId;

#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Persists the artifact and stamps the resume row. Returns the publish
    /// timestamp recorded on both.
    async fn put_site(
        &self,
        resume_id: Uuid,
        domain: &str,
        html: &str,
        template: TemplateId,
    ) -> Result<DateTime<Utc>, AppError>;

    /// The stored document for a domain, byte-for-byte as published.
    async fn get_site_html(&self, domain: &str) -> Result<Option<String>, AppError>;
}

pub struct PgS3SiteStore {
    pool: PgPool,
    s3: S3Client,
    bucket: String,
}

impl PgS3SiteStore {
    pub fn new(pool: PgPool, s3: S3Client, bucket: String) -> Self {
        PgS3SiteStore { pool, s3, bucket }
    }

    fn artifact_key(domain: &str) -> String {
        format!("sites/{domain}/index.html")
    }
}

#[async_trait]
impl SiteStore for PgS3SiteStore {
    async fn put_site(
        &self,
        resume_id: Uuid,
        domain: &str,
        html: &str,
        template: TemplateId,
    ) -> Result<DateTime<Utc>, AppError> {
        let key = Self::artifact_key(domain);

        self.s3
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type("text/html; charset=utf-8")
            .body(ByteStream::from(html.as_bytes().to_vec()))
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Failed to store artifact: {e}")))?;

        let published_at = Utc::now();
        let db_result: Result<(), sqlx::Error> = async {
            let mut tx = self.pool.begin().await?;

            // Republishing an existing domain replaces its content.
            sqlx::query(
                r#"
                INSERT INTO published_websites (resume_id, domain, html_content, template_id)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (domain) DO UPDATE
                    SET resume_id = EXCLUDED.resume_id,
                        html_content = EXCLUDED.html_content,
                        template_id = EXCLUDED.template_id
                "#,
            )
            .bind(resume_id)
            .bind(domain)
            .bind(html)
            .bind(template.as_str())
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                "UPDATE resumes SET published_domain = $1, published_at = $2, updated_at = $2 WHERE id = $3",
            )
            .bind(domain)
            .bind(published_at)
            .bind(resume_id)
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;
            Ok(())
        }
        .await;

        if let Err(db_err) = db_result {
            // Compensate: the artifact must not outlive a failed record.
            if let Err(s3_err) = self
                .s3
                .delete_object()
                .bucket(&self.bucket)
                .key(&key)
                .send()
                .await
            {
                warn!("Failed to delete orphaned artifact {key}: {s3_err}");
            }
            return Err(AppError::Database(db_err));
        }

        info!("Published {domain} (resume {resume_id})");
        Ok(published_at)
    }

    async fn get_site_html(&self, domain: &str) -> Result<Option<String>, AppError> {
        let html: Option<(String,)> =
            sqlx::query_as("SELECT html_content FROM published_websites WHERE domain = $1")
                .bind(domain)
                .fetch_optional(&self.pool)
                .await?;
        Ok(html.map(|(content,)| content))
    }
}
