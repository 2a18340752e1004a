use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use shared_types::SearchProfile;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub api_keys: Option<ApiKeysConfig>,
    pub cors: Option<CorsConfig>,
    pub server: Option<ServerConfig>,
    pub output: Option<OutputConfig>,
    pub search: Option<SearchConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_keys: None,
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            server: Some(ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            }),
            output: Some(OutputConfig {
                dir: "./leads".to_string(),
            }),
            search: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiKeysConfig {
    pub exa_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    pub dir: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchConfig {
    pub active_profile: Option<String>,
    #[serde(default)]
    pub profiles: HashMap<String, SearchProfile>,
}

impl ApiConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            let default_config = r#"
[api_keys]
# exa_api_key = "your-exa-key"
# anthropic_api_key = "your-anthropic-key"

[cors]
allowed_origins = ["http://localhost:3000"]

[server]
host = "127.0.0.1"
port = 8080

[output]
dir = "./leads"

[search]
active_profile = "default"

[search.profiles.default]
name = "Default Profile"
description = "AI Engineers & CTOs (Voice/Speech Focus)"
lead_count = 50
query = "AI engineers, CTOs, and technical decision makers focused on speech-to-text, voice AI, and conversational AI applications."
criteria = [
    "currently employed as an ai engineer, cto, vp of engineering, or technical decision maker",
    "professional focus on speech-to-text, voice ai, conversational ai, or audio processing",
    "active in the ai/developer community (github, twitter, linkedin, blog posts)",
]
"#;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let config: ApiConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }

    /// Exa API key from config, falling back to the environment.
    pub fn resolve_exa_key(&self) -> Option<String> {
        self.api_keys
            .as_ref()
            .and_then(|keys| keys.exa_api_key.clone())
            .or_else(|| std::env::var("EXA_API_KEY").ok())
    }

    /// Anthropic API key from config, falling back to the environment.
    pub fn resolve_anthropic_key(&self) -> Option<String> {
        self.api_keys
            .as_ref()
            .and_then(|keys| keys.anthropic_api_key.clone())
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
    }

    pub fn output_dir(&self) -> String {
        self.output
            .as_ref()
            .map(|o| o.dir.clone())
            .unwrap_or_else(|| "./leads".to_string())
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("prospect").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
