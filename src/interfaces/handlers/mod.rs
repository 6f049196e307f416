pub mod degree;
pub mod system;
pub mod university;
pub mod uploads;
