pub mod degree;
pub mod sqlx_repo;
pub mod university;
