use actix_web::web;

use crate::api::handlers::pet_handlers::{create_pet, json_error_handler, PETS_PATH};

pub fn pet_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(PETS_PATH)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route(web::post().to(create_pet))
    );
}
