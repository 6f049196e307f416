mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, storage, web};

use repositories::sqlx_repo::{SqlxDegreeRepo, SqlxUniversityRepo};
use storage::uploads::UploadStore;
use use_cases::{degree::DegreeHandler, university::UniversityHandler};

pub struct AppState {
    pub university_handler: AppUniversityHandler,
    pub degree_handler: AppDegreeHandler,
    pub upload_store: UploadStore,
}

pub type AppUniversityHandler = UniversityHandler<SqlxUniversityRepo>;
pub type AppDegreeHandler = DegreeHandler<SqlxUniversityRepo, SqlxDegreeRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let university_handler = UniversityHandler::new(SqlxUniversityRepo::new(pool.clone()));
        let degree_handler = DegreeHandler::new(
            SqlxUniversityRepo::new(pool.clone()),
            SqlxDegreeRepo::new(pool),
        );

        AppState {
            university_handler,
            degree_handler,
            upload_store: UploadStore::new(&config.upload_dir),
        }
    }
}
