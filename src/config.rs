use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Host used when no configuration source sets one.
const DEFAULT_HOST: &str = "127.0.0.1";

/// Port used when no configuration source sets one.
const DEFAULT_PORT: u16 = 5000;

/// All settings for the server. Currently there are only application settings.
#[derive(Deserialize, Debug)]
pub struct Settings {
    /// Application settings.
    pub application: ApplicationSettings,
}

/// Application settings.
#[derive(Deserialize, Debug)]
pub struct ApplicationSettings {
    /// The port number on which the application will listen.
    pub port: u16,

    /// The hostname or IP address where the application will run.
    ///
    /// This could be a hostname like "localhost" or an IP address like "127.0.0.1". Use "0.0.0.0"
    /// to accept connections on every interface.
    pub host: String,
}

impl ApplicationSettings {
    /// Returns the `host:port` string to bind the listener to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads the settings from, in increasing order of priority:
///
/// 1. `config/base.toml`,
/// 2. `config/{environment}.toml`, where the environment comes from `APP_ENVIRONMENT` and
///    defaults to `local`,
/// 3. `APP_`-prefixed environment variables, with `__` separating nested keys, e.g.
///    `APP_APPLICATION__PORT=8080`.
///
/// Every file is optional; missing values fall back to `127.0.0.1:5000`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let config_dir = base_path.join("config");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;
    let environment_filename = format!("{}.toml", environment.as_str());

    let settings = Config::builder()
        .set_default("application.host", DEFAULT_HOST)?
        .set_default("application.port", i64::from(DEFAULT_PORT))?
        .add_source(File::from(config_dir.join("base.toml")).required(false))
        .add_source(File::from(config_dir.join(environment_filename)).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    settings.try_deserialize()
}

/// The possible runtime environments for the application.
#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment.
    Local,
    /// Production environment.
    Production,
}

impl Environment {
    /// Returns the environment as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Must be `local` or `production`"
            )),
        }
    }
}
