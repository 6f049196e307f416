use async_trait::async_trait;

use crate::{
    entities::university::{University, UniversityInsert, UNIVERSITY_EXISTS},
    errors::AppError,
    repositories::sqlx_repo::{sql_state, SqlxUniversityRepo, UNIQUE_VIOLATION},
};

#[async_trait]
pub trait UniversityRepository: Send + Sync {
    /// Round-trips a trivial query to prove the store is reachable
    async fn check_connection(&self) -> Result<(), AppError>;

    /// True when any university already uses `name` or `email`
    async fn university_exists(&self, name: &str, email: &str) -> Result<bool, AppError>;

    async fn university_exists_by_id(&self, id: i32) -> Result<bool, AppError>;

    /// Inserts a university and returns its generated id
    async fn create_university(&self, university: &UniversityInsert) -> Result<i32, AppError>;

    async fn list_universities(&self) -> Result<Vec<University>, AppError>;
}

impl SqlxUniversityRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxUniversityRepo { pool }
    }
}

#[async_trait]
impl UniversityRepository for SqlxUniversityRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn university_exists(&self, name: &str, email: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM university WHERE name = $1 OR email = $2)"
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn university_exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM university WHERE id = $1)"
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_university(&self, university: &UniversityInsert) -> Result<i32, AppError> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO university (name, location, email, logo)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#
        )
        .bind(&university.name)
        .bind(&university.location)
        .bind(&university.email)
        .bind(&university.logo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match sql_state(&e).as_deref() {
            // Lost the race against a concurrent insert of the same name or email.
            Some(UNIQUE_VIOLATION) => AppError::Conflict(UNIVERSITY_EXISTS.to_string()),
            _ => AppError::from(e),
        })
    }

    async fn list_universities(&self) -> Result<Vec<University>, AppError> {
        let universities = sqlx::query_as::<_, University>(
            "SELECT id, name, location, email, logo FROM university"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(universities)
    }
}
