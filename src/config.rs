//! Server settings loaded from defaults and environment overrides.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Top-level runtime settings.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
}

/// Bind address settings for the HTTP server.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    /// Host to bind on.
    pub host: String,
    /// Port to bind on.
    pub port: u16,
}

impl Settings {
    /// Loads settings, merging `TASKBOARD`-prefixed environment variables
    /// (for example `TASKBOARD_SERVER__PORT`) over the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when an override cannot be parsed into the
    /// settings shape.
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .add_source(Environment::with_prefix("TASKBOARD").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
