use actix_multipart::form::MultipartForm;
use actix_web::{web, Either, HttpMessage, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::LOGO_FIELD,
    entities::university::{NewUniversity, UniversityUpload},
    errors::AppError,
    AppState,
};

type UniversityInput = Either<MultipartForm<UniversityUpload>, web::Json<NewUniversity>>;

/// `POST /university`: multipart form with an optional `logo` file, or a plain JSON body.
#[instrument(skip(req, state, data_input))]
pub async fn create_university(
    req: HttpRequest,
    state: web::Data<AppState>,
    data_input: Result<UniversityInput, actix_web::Error>
) -> Result<impl Responder, AppError> {
    let request = match data_input {
        Ok(Either::Left(form)) => {
            let (request, logo) = form.into_inner().into_parts();
            // The logo is stored before the text fields are checked.
            let stored = state.upload_store.store(LOGO_FIELD, logo).await?;
            request.with_logo(stored)
        }
        Ok(Either::Right(json)) => json.into_inner(),
        Err(e) => return Err(body_error(&req, e)),
    };

    let response = state.university_handler
        .create_university(request)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state))]
pub async fn list_universities(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let universities = state.university_handler.list_universities().await?;
    Ok(HttpResponse::Ok().json(universities))
}

/// A supported content type with an unreadable body is a bad request;
/// anything else is the wrong media type.
fn body_error(req: &HttpRequest, err: actix_web::Error) -> AppError {
    let content_type = req.content_type().to_ascii_lowercase();
    tracing::warn!(content_type = %content_type, error = %err, "Rejected university body");

    if content_type == "multipart/form-data" || content_type == "application/json" {
        AppError::ValidationError(format!("Invalid request body: {}", err))
    } else {
        AppError::UnsupportedMediaType(
            "Request must be either application/json or multipart/form-data".to_string()
        )
    }
}
