use crate::{
    entities::university::{
        NewUniversity, University, UniversityCreatedResponse, UNIVERSITY_EXISTS,
        UNIVERSITY_FIELDS_REQUIRED,
    },
    errors::AppError,
    repositories::university::UniversityRepository,
};

pub struct UniversityHandler<R>
where
    R: UniversityRepository,
{
    pub university_repo: R,
}

impl<R> UniversityHandler<R>
where
    R: UniversityRepository,
{
    pub fn new(university_repo: R) -> Self {
        UniversityHandler { university_repo }
    }

    /// Registers a university after checking that neither its name nor its email is taken
    pub async fn create_university(
        &self,
        request: NewUniversity
    ) -> Result<UniversityCreatedResponse, AppError> {
        let insert = request
            .prepare_for_insert()
            .ok_or_else(|| AppError::ValidationError(UNIVERSITY_FIELDS_REQUIRED.to_string()))?;

        if self.university_repo.university_exists(&insert.name, &insert.email).await? {
            return Err(AppError::Conflict(UNIVERSITY_EXISTS.to_string()));
        }

        let university_id = self.university_repo.create_university(&insert).await?;

        tracing::info!(university_id, name = %insert.name, "University created");
        Ok(UniversityCreatedResponse {
            message: "University added successfully".to_string(),
            university_id,
        })
    }

    /// Lists every university in storage order; an empty table is an empty list
    pub async fn list_universities(&self) -> Result<Vec<University>, AppError> {
        self.university_repo.list_universities().await
    }
}
