use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

/// Caps request bodies at `max_bytes`. The payload limit also bounds the
/// buffer used when `/university` tries multipart before falling back to JSON.
pub fn body_limits(max_bytes: usize) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::PayloadConfig::new(max_bytes))
            .app_data(MultipartFormConfig::default().total_limit(max_bytes));
    }
}
