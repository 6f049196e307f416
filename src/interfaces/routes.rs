use actix_web::web;

mod degree;
mod json_error;
mod limits;
mod system;
mod university;
mod uploads;

pub use limits::body_limits;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(university::config_routes)
        .configure(degree::config_routes)
        .configure(uploads::config_routes)
        .configure(system::config_routes)
        .configure(json_error::config_routes);
}
