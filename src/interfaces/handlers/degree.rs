use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::degree::NewDegree, errors::AppError, AppState};

#[instrument(skip(state, data))]
pub async fn create_degree(
    state: web::Data<AppState>,
    data: web::Json<NewDegree>
) -> Result<impl Responder, AppError> {
    let response = state.degree_handler
        .create_degree(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state))]
pub async fn list_degrees(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let degrees = state.degree_handler.list_degrees().await?;
    Ok(HttpResponse::Ok().json(degrees))
}
