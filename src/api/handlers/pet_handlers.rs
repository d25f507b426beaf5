use actix_web::{
    error::JsonPayloadError, web, HttpRequest, HttpResponse, Responder, ResponseError,
};

use crate::{
    api::state::AppState,
    domain::pet::{
        model::{CreatePetRequest, Pet},
        validation::{validate, ValidationResult},
    },
    utils::errors::ApiError,
};

pub const PETS_PATH: &str = "/v1/pets";

pub async fn create_pet(
    state: web::Data<AppState>,
    request: web::Json<CreatePetRequest>
) -> impl Responder {
    let request = request.into_inner();

    if let ValidationResult::Rejected(violations) = validate(&request) {
        let error = ApiError::Validation(violations);
        log::warn!("Rejected pet registration: {}", error);
        return error.error_response();
    }

    let pet = match Pet::from_request(request) {
        Some(pet) => pet,
        None => {
            let message = "Accepted request could not be converted".to_string();
            return ApiError::InternalServerError(message).error_response();
        }
    };

    match state.pets.create_pet(pet).await {
        Ok(pet) => {
            log::info!("Registered pet {} ({:?})", pet.id, pet.specie);
            HttpResponse::Created().json(pet)
        },
        Err(e) => {
            log::error!("Failed to store pet: {}", e);
            e.error_response()
        }
    }
}

/// Turns every body extraction failure (missing body, wrong content type,
/// malformed JSON, unknown enum value) into a 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Request body must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) if e.is_eof() => {
            "Request body is missing or incomplete".to_string()
        }
        other => format!("Invalid request body: {}", other),
    };
    log::warn!("Rejected pet registration: {}", message);
    ApiError::BadRequest(message).into()
}
