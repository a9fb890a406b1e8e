// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, upstream client, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::GoogleMapsClient;
use std::io;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration; the upstream API key is mandatory
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting nomad-scout-api...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );
    if config.search_partial_results {
        log::info!("Partial search results enabled: failed sub-queries are skipped");
    }

    // 4. Initialize the shared upstream client
    let maps_client = web::Data::new(GoogleMapsClient::new(
        config.google_maps_api_key.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    ));

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        App::new()
            // Application state (upstream client and config)
            .app_data(maps_client.clone())
            .app_data(web::Data::new(config_clone.clone()))
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::search_config)
            .configure(handlers::details_config)
            .configure(handlers::geocode_config)
            .default_service(web::route().to(handlers::not_found))
    })
    .bind(&server_addr)?
    .run()
    .await
}
