use actix_web::{http::header, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

const FILE_NOT_FOUND: &str = "File not found";

/// `GET /uploads/{file_name}`: returns a stored logo.
#[instrument(skip(state))]
pub async fn serve_upload(
    state: web::Data<AppState>,
    file_name: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let path = state.upload_store
        .resolve(&file_name)
        .ok_or_else(|| AppError::NotFound(FILE_NOT_FOUND.to_string()))?;

    let content = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::IsADirectory => {
            AppError::NotFound(FILE_NOT_FOUND.to_string())
        }
        _ => {
            tracing::error!(file = %file_name, error = %e, "Failed to read upload");
            AppError::InternalError("Failed to read file".to_string())
        }
    })?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, mime.as_ref()))
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(content))
}
