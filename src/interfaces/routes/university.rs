use actix_web::web;

use crate::handlers::university;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/university")
            .route(web::post().to(university::create_university))
    )
    .service(
        web::resource("/universities")
            .route(web::get().to(university::list_universities))
    );
}
