use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Placeholder credential written into freshly generated config files.
pub const API_KEY_PLACEHOLDER: &str = "YOUR TMDB API KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub web: WebConfig,
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
    /// Original-language filter passed to the discover query.
    pub language: String,
    /// Region used for both the discover query and availability checks.
    pub region: String,
    /// Upper bound on discover pagination.
    pub max_pages: u32,
    pub discover_timeout_secs: u64,
    pub lookup_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig {
                host: "0.0.0.0".to_string(),
                port: 7000,
            },
            tmdb: TmdbConfig {
                api_key: API_KEY_PLACEHOLDER.to_string(),
                language: "ml".to_string(),
                region: "IN".to_string(),
                max_pages: 300,
                discover_timeout_secs: 15,
                lookup_timeout_secs: 10,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        let mut config = if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(&config_file)?;
            toml::from_str(&contents)?
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_file, contents)?;
            default_config
        };

        // The environment always wins for the credential, so deployments can
        // keep the key out of the config file entirely.
        if let Ok(api_key) = std::env::var("TMDB_API_KEY") {
            if !api_key.is_empty() {
                config.tmdb.api_key = api_key;
            }
        }

        Ok(config)
    }
}
