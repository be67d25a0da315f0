use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;

/// Application configuration shared by the API and the form app
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub model: ModelSettings,
    pub client: ClientSettings,
    pub logging: LoggingSettings,
}

/// Prediction API listener
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Artifact locations; the scaler is optional
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    pub model_path: String,
    pub scaler_path: Option<String>,
}

/// Form app listener and the API it forwards to
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    pub host: String,
    pub port: u16,
    pub api_endpoint: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

pub const DEFAULT_API_PORT: u16 = 8080;
pub const DEFAULT_CLIENT_PORT: u16 = 5000;
pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:8080/predict";

fn with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", i64::from(DEFAULT_API_PORT))?
        .set_default("model.model_path", "models/random_forest_model.json")?
        .set_default("client.host", "127.0.0.1")?
        .set_default("client.port", i64::from(DEFAULT_CLIENT_PORT))?
        .set_default("client.api_endpoint", DEFAULT_API_ENDPOINT)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

/// `LOAN__` variables, read from `vars` instead of the process when given
fn environment(vars: Option<Map<String, String>>) -> Environment {
    // e.g., LOAN__SERVER__PORT -> server.port
    Environment::with_prefix("LOAN")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}

fn from_file(path: &Path, env: Environment) -> Result<Settings, ConfigError> {
    with_defaults()?
        .add_source(File::from(path))
        .add_source(env)
        .build()?
        .try_deserialize()
}

impl Settings {
    /// Load configuration from defaults, files and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LOAN__)
    pub fn load() -> Result<Self, ConfigError> {
        with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment(None))
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        from_file(path.as_ref(), environment(None))
    }
}
