use actix_web::{error::JsonPayloadError, web};

use crate::errors::AppError;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected JSON payload");
        json_payload_error(err).into()
    }));
}

/// Oversized bodies are 413, every other decoding failure is a 400.
fn json_payload_error(err: JsonPayloadError) -> AppError {
    let message = format!("JSON payload error: {}", err);
    match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            AppError::PayloadTooLarge(message)
        }
        _ => AppError::ValidationError(message),
    }
}
