//! Resume persistence.
//!
//! `AppState` holds an `Arc<dyn ResumeRepository>`; production wires in
//! `PgResumeRepository`, tests use an in-memory implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeCreate};

/// Which rows a list query may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    All,
    OwnedBy(Uuid),
}

impl ListScope {
    fn owner(self) -> Option<Uuid> {
        match self {
            ListScope::All => None,
            ListScope::OwnedBy(owner_id) => Some(owner_id),
        }
    }
}

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Returns one page of rows in `scope` plus the total number of rows in `scope`.
    async fn list(
        &self,
        scope: ListScope,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<Resume>, i64), AppError>;

    async fn get(&self, id: i64) -> Result<Option<Resume>, AppError>;

    async fn create(&self, input: &ResumeCreate, owner_id: Uuid) -> Result<Resume, AppError>;

    /// Overwrites title and description of the row with `resume.id`.
    /// Returns `None` if the row no longer exists.
    async fn update(&self, resume: &Resume) -> Result<Option<Resume>, AppError>;

    /// Returns `false` if there was no row to delete.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

pub struct PgResumeRepository {
    pool: PgPool,
}

impl PgResumeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeRepository for PgResumeRepository {
    async fn list(
        &self,
        scope: ListScope,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<Resume>, i64), AppError> {
        let owner = scope.owner();

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM resumes WHERE ($1::uuid IS NULL OR owner_id = $1)",
        )
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, Resume>(
            r#"
            SELECT id, title, description, owner_id
            FROM resumes
            WHERE ($1::uuid IS NULL OR owner_id = $1)
            ORDER BY id
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(owner)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok((rows, count))
    }

    async fn get(&self, id: i64) -> Result<Option<Resume>, AppError> {
        Ok(sqlx::query_as::<_, Resume>(
            "SELECT id, title, description, owner_id FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn create(&self, input: &ResumeCreate, owner_id: Uuid) -> Result<Resume, AppError> {
        let resume = sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resumes (title, description, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, owner_id
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted resume {} for owner {owner_id}", resume.id);
        Ok(resume)
    }

    async fn update(&self, resume: &Resume) -> Result<Option<Resume>, AppError> {
        Ok(sqlx::query_as::<_, Resume>(
            r#"
            UPDATE resumes
            SET title = $2, description = $3
            WHERE id = $1
            RETURNING id, title, description, owner_id
            "#,
        )
        .bind(resume.id)
        .bind(&resume.title)
        .bind(&resume.description)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
