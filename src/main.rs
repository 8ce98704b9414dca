//! HTTP server for the Faculty Payroll Engine.
//!
//! Reads the configuration directory from `FACULTY_PAYROLL_CONFIG` and the
//! bind address from `FACULTY_PAYROLL_ADDR`.

use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use faculty_payroll::api::{AppState, create_router};
use faculty_payroll::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config_dir = env::var("FACULTY_PAYROLL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("FACULTY_PAYROLL_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        institution = %config.institution().name,
        default_rate = %config.rate_table().default_rate(),
        "Loaded configuration"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
