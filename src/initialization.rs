use std::{env, fs};
use log::{info, LevelFilter};
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

#[derive(Deserialize)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize)]
pub struct Db {
    pub db_path: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub web_server: WebServer,
    pub db: Db,
    pub general: General,
    #[serde(skip)]
    pub api_key: String,
}

/// Loads the configuration file, merges in the provider API key from the
/// environment and sets up logging
///
/// The configuration file path is taken from the CONFIG_FILE environment
/// variable, falling back to cityweather.toml in the working directory.
/// The OpenWeatherMap API key must be present as OWM_API_KEY.
pub fn config() -> Result<Config, ConfigError> {
    let config_path = env::var("CONFIG_FILE").unwrap_or("cityweather.toml".to_string());

    let toml = fs::read_to_string(&config_path)?;
    let mut config: Config = toml::from_str(&toml)?;

    config.api_key = env::var("OWM_API_KEY")
        .map_err(|_| ConfigError::from("OWM_API_KEY not set in environment"))?;

    setup_logger(&config.general)?;

    info!("cityweather version: {}", env!("CARGO_PKG_VERSION"));

    Ok(config)
}
