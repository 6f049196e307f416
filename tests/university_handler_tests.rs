mod mocks;

use degree_registry::{
    entities::university::{NewUniversity, University, UniversityInsert},
    errors::AppError,
    use_cases::university::UniversityHandler,
};
use mocks::{db_error, MockUniversityRepo};
use mockall::predicate::eq;

fn mit() -> NewUniversity {
    NewUniversity::new("MIT", "Cambridge", "info@mit.edu")
}

#[actix_rt::test]
async fn create_university_returns_new_id() {
    let mut repo = MockUniversityRepo::new();

    repo.expect_university_exists()
        .withf(|name: &str, email: &str| name == "MIT" && email == "info@mit.edu")
        .times(1)
        .returning(|_, _| Ok(false));

    repo.expect_create_university()
        .with(eq(UniversityInsert {
            name: "MIT".into(),
            location: "Cambridge".into(),
            email: "info@mit.edu".into(),
            logo: "logo-1700000000000.png".into(),
        }))
        .times(1)
        .returning(|_| Ok(11));

    let handler = UniversityHandler::new(repo);
    let request = mit().with_logo(Some("logo-1700000000000.png".into()));

    let response = handler.create_university(request).await.unwrap();

    assert_eq!(response.university_id, 11);
    assert_eq!(response.message, "University added successfully");
}

#[actix_rt::test]
async fn create_university_without_logo_stores_empty_string() {
    let mut repo = MockUniversityRepo::new();
    repo.expect_university_exists().returning(|_, _| Ok(false));
    repo.expect_create_university()
        .withf(|insert: &UniversityInsert| insert.logo.is_empty())
        .returning(|_| Ok(1));

    let handler = UniversityHandler::new(repo);

    assert!(handler.create_university(mit()).await.is_ok());
}

#[actix_rt::test]
async fn missing_location_is_rejected_before_storage() {
    let mut repo = MockUniversityRepo::new();
    repo.expect_university_exists().never();
    repo.expect_create_university().never();

    let handler = UniversityHandler::new(repo);
    let request = NewUniversity {
        location: None,
        ..mit()
    };

    let err = handler.create_university(request).await.unwrap_err();

    assert_eq!(
        err,
        AppError::ValidationError("All fields (name, location, email) are required".into())
    );
}

#[actix_rt::test]
async fn empty_fields_are_treated_as_missing() {
    let handler = UniversityHandler::new(MockUniversityRepo::new());

    for request in [
        NewUniversity::new("", "Cambridge", "info@mit.edu"),
        NewUniversity::new("MIT", "Cambridge", ""),
        NewUniversity::default(),
    ] {
        let err = handler.create_university(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}

#[actix_rt::test]
async fn duplicate_name_or_email_conflicts_without_insert() {
    let mut repo = MockUniversityRepo::new();
    repo.expect_university_exists().times(1).returning(|_, _| Ok(true));
    repo.expect_create_university().never();

    let handler = UniversityHandler::new(repo);

    let err = handler
        .create_university(NewUniversity::new("Harvard", "Cambridge", "info@mit.edu"))
        .await
        .unwrap_err();

    assert_eq!(err, AppError::Conflict("University already exists".into()));
}

#[actix_rt::test]
async fn conflict_raised_at_insert_is_passed_through() {
    let mut repo = MockUniversityRepo::new();
    repo.expect_university_exists().returning(|_, _| Ok(false));
    repo.expect_create_university()
        .returning(|_| Err(AppError::Conflict("University already exists".into())));

    let handler = UniversityHandler::new(repo);

    let err = handler.create_university(mit()).await.unwrap_err();

    assert_eq!(err.to_string(), "University already exists");
}

#[actix_rt::test]
async fn storage_failure_during_duplicate_check_is_internal() {
    let mut repo = MockUniversityRepo::new();
    repo.expect_university_exists().returning(|_, _| Err(db_error()));
    repo.expect_create_university().never();

    let handler = UniversityHandler::new(repo);

    let err = handler.create_university(mit()).await.unwrap_err();

    assert_eq!(err, AppError::InternalError("Database error".into()));
}

#[actix_rt::test]
async fn list_universities_returns_empty_list_when_table_is_empty() {
    let mut repo = MockUniversityRepo::new();
    repo.expect_list_universities().returning(|| Ok(vec![]));

    let handler = UniversityHandler::new(repo);

    assert_eq!(handler.list_universities().await.unwrap(), vec![]);
}

#[actix_rt::test]
async fn list_universities_returns_rows_unchanged() {
    let rows = vec![
        University {
            id: 2,
            name: "Oxford".into(),
            location: "Oxford".into(),
            email: "admissions@ox.ac.uk".into(),
            logo: String::new(),
        },
        University {
            id: 1,
            name: "MIT".into(),
            location: "Cambridge".into(),
            email: "info@mit.edu".into(),
            logo: "logo-1.png".into(),
        },
    ];
    let expected = rows.clone();

    let mut repo = MockUniversityRepo::new();
    repo.expect_list_universities().returning(move || Ok(rows.clone()));

    let handler = UniversityHandler::new(repo);

    assert_eq!(handler.list_universities().await.unwrap(), expected);
}

#[actix_rt::test]
async fn list_universities_surfaces_storage_failure() {
    let mut repo = MockUniversityRepo::new();
    repo.expect_list_universities().returning(|| Err(db_error()));

    let handler = UniversityHandler::new(repo);

    assert!(matches!(
        handler.list_universities().await,
        Err(AppError::InternalError(_))
    ));
}
