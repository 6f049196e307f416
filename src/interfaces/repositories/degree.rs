use async_trait::async_trait;

use crate::{
    entities::degree::{Degree, DegreeInsert, DEGREE_EXISTS, UNIVERSITY_NOT_FOUND},
    errors::AppError,
    repositories::sqlx_repo::{sql_state, SqlxDegreeRepo, FOREIGN_KEY_VIOLATION, UNIQUE_VIOLATION},
};

#[async_trait]
pub trait DegreeRepository: Send + Sync {
    /// True when `link` is already registered for the university
    async fn degree_exists(&self, link: &str, university_id: i32) -> Result<bool, AppError>;

    /// Inserts a degree and returns its generated id
    async fn create_degree(&self, degree: &DegreeInsert) -> Result<i32, AppError>;

    async fn list_degrees(&self) -> Result<Vec<Degree>, AppError>;
}

impl SqlxDegreeRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxDegreeRepo { pool }
    }
}

#[async_trait]
impl DegreeRepository for SqlxDegreeRepo {
    async fn degree_exists(&self, link: &str, university_id: i32) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM degree WHERE link = $1 AND university_id = $2)"
        )
        .bind(link)
        .bind(university_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_degree(&self, degree: &DegreeInsert) -> Result<i32, AppError> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO degree (link, issue_date, university_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#
        )
        .bind(&degree.link)
        .bind(degree.issue_date)
        .bind(degree.university_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match sql_state(&e).as_deref() {
            Some(UNIQUE_VIOLATION) => AppError::ValidationError(DEGREE_EXISTS.to_string()),
            Some(FOREIGN_KEY_VIOLATION) => AppError::ValidationError(UNIVERSITY_NOT_FOUND.to_string()),
            _ => AppError::from(e),
        })
    }

    async fn list_degrees(&self) -> Result<Vec<Degree>, AppError> {
        let degrees = sqlx::query_as::<_, Degree>(
            "SELECT id, link, issue_date, university_id FROM degree"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(degrees)
    }
}
