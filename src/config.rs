use std::fs;
use log::LevelFilter;
use serde::{Deserialize, Deserializer};
use crate::errors::ConfigError;

/// Default forecast endpoint of the MeteoSwiss app backend
pub const DEFAULT_URL: &str = "https://app-prod-ws.meteoswiss-app.ch/v1/forecast";

/// User agents used when none are configured
pub const DEFAULT_USER_AGENTS: [&str; 2] = [
    "RainMachine.com v2",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/85.0.4183.121 Safari/537.36",
];

/// Longest allowed time between two cycles, one week
pub const MAX_INTERVAL_HOURS: u64 = 7 * 24;

/// How the user agent is picked for each request
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    #[default]
    Random,
    RoundRobin,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MeteoSwissParameters {
    #[serde(default)]
    pub enabled: bool,
    #[serde(deserialize_with = "deserialize_plz")]
    pub plz: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u64,
    #[serde(default = "default_user_agents")]
    pub user_agents: Vec<String>,
    #[serde(default)]
    pub rotation: Rotation,
}

impl Default for MeteoSwissParameters {
    fn default() -> Self {
        Self {
            enabled: false,
            plz: String::new(),
            url: default_url(),
            timeout_secs: default_timeout_secs(),
            interval_hours: default_interval_hours(),
            user_agents: default_user_agents(),
            rotation: Rotation::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Location {
    pub timezone: Option<String>,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub long: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct General {
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub meteoswiss: MeteoSwissParameters,
    #[serde(default)]
    pub location: Location,
    pub general: General,
}

/// The postal code may be given either as a toml string or integer
#[derive(Deserialize)]
#[serde(untagged)]
enum PostalCode {
    Text(String),
    Number(u64),
}

fn deserialize_plz<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match PostalCode::deserialize(deserializer)? {
        PostalCode::Text(plz) => Ok(plz.trim().to_string()),
        PostalCode::Number(plz) => Ok(plz.to_string()),
    }
}

fn default_url() -> String { DEFAULT_URL.to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_interval_hours() -> u64 { 3 }
fn default_user_agents() -> Vec<String> {
    DEFAULT_USER_AGENTS.iter().map(|a| a.to_string()).collect()
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses and validates a configuration document
///
/// # Arguments
///
/// * 'toml' - the configuration as a toml string
pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.meteoswiss.plz.is_empty() {
        return Err(ConfigError::from("meteoswiss.plz must not be empty"));
    }
    if config.meteoswiss.interval_hours == 0 || config.meteoswiss.interval_hours > MAX_INTERVAL_HOURS {
        return Err(ConfigError::from("meteoswiss.interval_hours must be between 1 and 168"));
    }

    Ok(config)
}
