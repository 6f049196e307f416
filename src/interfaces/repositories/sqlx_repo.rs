use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxUniversityRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxDegreeRepo {
    pub pool: PgPool,
}

/// Postgres `unique_violation`.
pub(crate) const UNIQUE_VIOLATION: &str = "23505";

/// Postgres `foreign_key_violation`.
pub(crate) const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Returns the SQLSTATE of a database error, if the driver reported one.
pub(crate) fn sql_state(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|code| code.into_owned()),
        _ => None,
    }
}
