use std::sync::Arc;

use actix_web::{get, middleware::Logger, web, App, HttpServer, Responder};
use pets_service::{
    api::state::AppState, infrastructure::pet_repository::InMemoryPetRepository,
    routes::pet_routes, utils::config::AppConfig,
};


#[get("/")]
async fn entry_point() -> impl Responder {
    "This is the Pets API. Use POST /v1/pets to register a pet."
}

#[tokio::main]
async fn main() -> std::io::Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::global() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(Arc::new(InMemoryPetRepository::new()));

    log::info!("Server running at http://{}:{}", config.server_host, config.server_port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(pet_routes)
            .service(entry_point)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
