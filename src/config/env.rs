// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 5000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Maps API key (required, server refuses to start without it)
    pub google_maps_api_key: String,

    /// Timeout applied to every upstream Maps API call, in seconds
    pub upstream_timeout_secs: u64,

    /// When true, a failed sub-query is skipped instead of failing the
    /// whole search request. Default is fail-fast (all-or-nothing).
    pub search_partial_results: bool,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY").unwrap_or_else(|_| String::new()),

            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),

            search_partial_results: env::var("SEARCH_PARTIAL_RESULTS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.google_maps_api_key.is_empty() {
            return Err("GOOGLE_MAPS_API_KEY environment variable is required".to_string());
        }

        Ok(())
    }
}
