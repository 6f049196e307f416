use async_trait::async_trait;
use degree_registry::{
    entities::{
        degree::{Degree, DegreeInsert},
        university::{University, UniversityInsert},
    },
    errors::AppError,
    repositories::{degree::DegreeRepository, university::UniversityRepository},
};
use mockall::mock;

mock! {
    pub UniversityRepo {}

    #[async_trait]
    impl UniversityRepository for UniversityRepo {
        async fn check_connection(&self) -> Result<(), AppError>;
        async fn university_exists(&self, name: &str, email: &str) -> Result<bool, AppError>;
        async fn university_exists_by_id(&self, id: i32) -> Result<bool, AppError>;
        async fn create_university(&self, university: &UniversityInsert) -> Result<i32, AppError>;
        async fn list_universities(&self) -> Result<Vec<University>, AppError>;
    }
}

mock! {
    pub DegreeRepo {}

    #[async_trait]
    impl DegreeRepository for DegreeRepo {
        async fn degree_exists(&self, link: &str, university_id: i32) -> Result<bool, AppError>;
        async fn create_degree(&self, degree: &DegreeInsert) -> Result<i32, AppError>;
        async fn list_degrees(&self) -> Result<Vec<Degree>, AppError>;
    }
}

pub fn db_error() -> AppError {
    AppError::InternalError("Database error".to_string())
}
