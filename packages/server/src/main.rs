#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server binary for the crime risk assessment backend.
//!
//! Loads the incident CSV exactly once at startup, installs it as the
//! process-wide read-only dataset, and serves assessment queries against it.

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use crime_risk_dataset::cache;
use crime_risk_server::{AppState, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let csv_path =
        std::env::var("CRIME_DATA_CSV").unwrap_or_else(|_| "crime_data.csv".to_string());

    log::info!("Loading dataset from {csv_path}...");
    let dataset =
        crime_risk_dataset::load_dataset(&csv_path).expect("Failed to load the incident dataset");

    // Installed once; every request shares this read-only instance.
    let dataset = cache::init(dataset);

    let state = web::Data::new(AppState { dataset });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/options", web::get().to(handlers::options))
                    .route("/assess", web::get().to(handlers::assess)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
