use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Builds the CORS policy. A `*` entry allows every origin.
pub fn build_cors(origins: &[String]) -> Cors {
    let base = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        return base.allow_any_origin();
    }

    origins
        .iter()
        .fold(base, |cors, origin| cors.allowed_origin(origin))
}
