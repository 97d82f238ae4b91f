use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Groq API key. Falls back to the GROQ_API_KEY environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model override applied to every role.
    #[serde(default)]
    pub model: Option<String>,

    /// Base URL override for the hosted-model endpoint.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub tools: ToolsConfigEntry,
}

/// Tools configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfigEntry {
    /// Enable the web search tool
    #[serde(default = "default_true")]
    pub enable_web: bool,

    /// Enable the YouTube transcript tool
    #[serde(default = "default_true")]
    pub enable_transcript: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ToolsConfigEntry {
    fn default() -> Self {
        Self {
            enable_web: true,
            enable_transcript: true,
        }
    }
}

impl Config {
    /// Load `~/.config/parley/config.toml`. A missing file yields the
    /// defaults: a missing credential must surface as an invocation failure
    /// later, never a startup failure.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("parley").join("config.toml"))
    }

    /// Resolve the API key: config file > environment. Absence resolves to
    /// an empty key that the endpoint will reject with an auth error.
    pub fn resolve_api_key(&self) -> String {
        self.api_key
            .clone()
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .unwrap_or_default()
    }
}
