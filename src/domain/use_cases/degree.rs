use crate::{
    entities::degree::{
        Degree, DegreeCreatedResponse, DegreeInsert, NewDegree, DEGREE_EXISTS, NO_DEGREES_FOUND,
        UNIVERSITY_NOT_FOUND,
    },
    errors::AppError,
    repositories::{degree::DegreeRepository, university::UniversityRepository},
};

const LOOKUP_FAILED: &str = "Database error. Please try again.";
const DUPLICATE_CHECK_FAILED: &str = "Please try again.";
const INSERT_FAILED: &str = "Error adding degree. Please try again.";

pub struct DegreeHandler<U, D>
where
    U: UniversityRepository,
    D: DegreeRepository,
{
    pub university_repo: U,
    pub degree_repo: D,
}

impl<U, D> DegreeHandler<U, D>
where
    U: UniversityRepository,
    D: DegreeRepository,
{
    pub fn new(university_repo: U, degree_repo: D) -> Self {
        DegreeHandler {
            university_repo,
            degree_repo,
        }
    }

    /// Registers a degree for an existing university.
    ///
    /// The university lookup runs before the duplicate check: a
    /// `(link, university_id)` pair is only meaningful once the university
    /// is known to exist. Field checks, including the `issue_date` format,
    /// happen before either query.
    pub async fn create_degree(&self, request: NewDegree) -> Result<DegreeCreatedResponse, AppError> {
        let insert = DegreeInsert::try_from(request)?;

        let university_exists = self.university_repo
            .university_exists_by_id(insert.university_id)
            .await
            .map_err(|e| e.with_internal_message(LOOKUP_FAILED))?;

        if !university_exists {
            return Err(AppError::ValidationError(UNIVERSITY_NOT_FOUND.to_string()));
        }

        let duplicate = self.degree_repo
            .degree_exists(&insert.link, insert.university_id)
            .await
            .map_err(|e| e.with_internal_message(DUPLICATE_CHECK_FAILED))?;

        if duplicate {
            return Err(AppError::ValidationError(DEGREE_EXISTS.to_string()));
        }

        let degree_id = self.degree_repo
            .create_degree(&insert)
            .await
            .map_err(|e| e.with_internal_message(INSERT_FAILED))?;

        tracing::info!(degree_id, university_id = insert.university_id, "Degree created");
        Ok(DegreeCreatedResponse {
            message: "Degree added successfully.".to_string(),
            degree_id,
        })
    }

    /// Lists every degree. Unlike universities, an empty table is reported as not found.
    pub async fn list_degrees(&self) -> Result<Vec<Degree>, AppError> {
        let degrees = self.degree_repo
            .list_degrees()
            .await
            .map_err(|e| e.with_internal_message(LOOKUP_FAILED))?;

        if degrees.is_empty() {
            return Err(AppError::NotFound(NO_DEGREES_FOUND.to_string()));
        }

        Ok(degrees)
    }
}
