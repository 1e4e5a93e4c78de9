use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_FILE: &str = "data/faqs.json";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    /// JSON file holding the whole FAQ collection
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CorsConfig {
    /// Empty means any origin is accepted
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            storage: StorageConfig {
                path: PathBuf::from(DEFAULT_DATA_FILE),
            },
            cors: CorsConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from defaults, the config file, `FAQ_*` variables
    /// and finally the plain `PORT` variable.
    ///
    /// When `config_file` is `None` the per-user file is used if it exists.
    pub fn load(config_file: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(get_config_path);
        let port = std::env::var("PORT").ok().filter(|p| !p.trim().is_empty());

        let config = Self::build(&config_path, port)?;
        Ok((config, config_path))
    }

    pub fn build(config_path: &Path, port_override: Option<String>) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("storage.path", DEFAULT_DATA_FILE)?
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("FAQ")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("server.port", port_override)?
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;

        // Expand tilde in storage path
        if config.storage.path.starts_with("~") {
            if let Some(home) = dirs::home_dir() {
                let path_str = config.storage.path.to_string_lossy();
                let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
                config.storage.path = PathBuf::from(expanded);
            }
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Renders the built-in defaults as a TOML document.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&ApiConfig::default())
            .map_err(|e| ConfigError::Message(format!("Failed to render default config: {e}")))
    }
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("faq-desk/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
