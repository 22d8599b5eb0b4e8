//! Job Catalog: the ordered list of postings every resume is matched against.
//!
//! `AppState` holds an `Arc<dyn JobCatalog>`; the default backend is PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobRow};

#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// All postings, in stable catalog order.
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError>;
}

/// Reads postings from the `jobs` table, ordered by id.
pub struct PgJobCatalog {
    pool: PgPool,
}

impl PgJobCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobCatalog for PgJobCatalog {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, job_title, company, location, job_type, experience,
                   description, skills_required
            FROM jobs
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        info!("Loaded {} jobs from catalog", rows.len());
        Ok(rows.into_iter().map(JobPosting::from).collect())
    }
}
