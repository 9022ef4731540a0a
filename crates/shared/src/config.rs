//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Demo-mode configuration.
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Demo-mode configuration.
///
/// The stores are in-memory and reseeded at startup; these knobs control
/// what gets seeded.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    /// Whether to load demo fixture data at startup.
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,
}

fn default_seed_fixtures() -> bool {
    true
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: default_seed_fixtures(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LEDGERDESK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
