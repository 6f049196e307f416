use actix_web::web;

use crate::handlers::degree;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/degree")
            .route(web::post().to(degree::create_degree))
    )
    .service(
        web::resource("/degrees")
            .route(web::get().to(degree::list_degrees))
    );
}
