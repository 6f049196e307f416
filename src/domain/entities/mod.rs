pub mod degree;
pub mod university;
