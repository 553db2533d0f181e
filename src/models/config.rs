use serde::Deserialize;

/// Configuration options for the catalog server.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Directory containing the Tera templates.
    pub templates_dir: String,
    /// Insert the example movies and series when the catalog is empty.
    pub seed_examples: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            database_url: "zoomplay.db".to_string(),
            templates_dir: "templates".to_string(),
            seed_examples: true,
        }
    }
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Builds the configuration from defaults, `config/default.yaml`,
    /// `config/{APP_ENV}.yaml` and `APP_*` environment variables, in that
    /// order of precedence.
    pub fn load() -> Result<Self, config::ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let defaults = Self::default();

        config::Config::builder()
            .set_default("address", defaults.address)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("templates_dir", defaults.templates_dir)?
            .set_default("seed_examples", defaults.seed_examples)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
