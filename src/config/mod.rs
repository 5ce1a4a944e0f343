use serde::Deserialize;

use crate::error::AppError;

/// Service configuration, loaded once at startup and injected into the
/// router state. There is no hot reload; the values are fixed for the
/// lifetime of the process.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub urls: UrlSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UrlSettings {
    pub frontend: FrontendUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendUrls {
    pub dev: String,
    pub production: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Load settings from `config.json` in the working directory, with
/// `APP`-prefixed environment overrides (e.g. `APP_SERVER__PORT`).
///
/// A missing or malformed file is a hard error; the caller is expected
/// to treat it as fatal and exit before binding any listener.
pub fn get_configuration() -> Result<Settings, AppError> {
    let settings = config::Config::builder()
        .add_source(config::File::new("config", config::FileFormat::Json).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
