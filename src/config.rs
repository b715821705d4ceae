use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Top-level configuration loaded from TOML.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalystConfig {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Directory holding the built UI bundle (Trunk output).
    #[serde(default = "default_ui_dir")]
    pub ui_dir: String,
    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
            ui_dir: default_ui_dir(),
            cors_origins: Vec::new(),
        }
    }
}

fn default_port() -> u16 {
    7300
}
fn default_bind() -> String {
    "127.0.0.1".into()
}
fn default_ui_dir() -> String {
    "ui/dist".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            max_output_tokens: None,
            temperature: None,
            top_p: None,
        }
    }
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        .into()
}

/// Load configuration from file or use defaults.
///
/// Search order:
/// 1. `DATA_ANALYST_CONFIG` env var
/// 2. `~/.data-analyst/config.toml`
/// 3. Zero-config defaults (no file needed)
pub fn load() -> anyhow::Result<AnalystConfig> {
    let path = config_path();

    if path.exists() {
        let mut config = load_from_path(&path)?;
        resolve_api_key(&mut config);
        info!("loaded config from {}", path.display());
        Ok(config)
    } else {
        info!("no config file found, using zero-config defaults");
        let mut config = AnalystConfig::default();
        resolve_api_key(&mut config);
        Ok(config)
    }
}

/// Parse and validate a config file without touching the environment.
pub fn load_from_path(path: &Path) -> anyhow::Result<AnalystConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let config: AnalystConfig = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("invalid config at {}: {e}", path.display()))?;
    validate(&config)?;
    Ok(config)
}

/// Write the config as TOML, creating parent directories as needed.
pub fn save_to_path(config: &AnalystConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("failed to create {}: {e}", parent.display()))?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|e| anyhow::anyhow!("failed to serialize config: {e}"))?;
    std::fs::write(path, content)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("DATA_ANALYST_CONFIG") {
        return PathBuf::from(path);
    }
    crate::secrets::state_dir().join("config.toml")
}

fn resolve_api_key(config: &mut AnalystConfig) {
    let env_key = std::env::var("GEMINI_API_KEY").ok();
    resolve_api_key_from(config, env_key, &crate::secrets::state_dir());
}

/// Fill in `gemini.api_key` when the config file leaves it unset or blank.
///
/// Order: config file, then `env_key` (`GEMINI_API_KEY`), then the key file
/// under `state_dir`.
pub fn resolve_api_key_from(config: &mut AnalystConfig, env_key: Option<String>, state_dir: &Path) {
    let from_file = config
        .gemini
        .api_key
        .take()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    config.gemini.api_key = from_file
        .or_else(|| {
            env_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        })
        .or_else(|| crate::secrets::read_key_from(state_dir));
}

/// Validate the config and return clear error messages.
pub fn validate(config: &AnalystConfig) -> anyhow::Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("server.port must be > 0");
    }

    let api_url = url::Url::parse(&config.gemini.api_url)
        .map_err(|e| anyhow::anyhow!("invalid gemini.api_url '{}': {e}", config.gemini.api_url))?;
    if !matches!(api_url.scheme(), "http" | "https") {
        anyhow::bail!(
            "gemini.api_url must use http or https, got '{}'",
            api_url.scheme()
        );
    }

    if config.gemini.max_output_tokens == Some(0) {
        anyhow::bail!("gemini.max_output_tokens must be > 0");
    }
    if let Some(t) = config.gemini.temperature {
        if !(0.0..=2.0).contains(&t) {
            anyhow::bail!("gemini.temperature must be within [0, 2], got {t}");
        }
    }
    if let Some(p) = config.gemini.top_p {
        if !(0.0..=1.0).contains(&p) {
            anyhow::bail!("gemini.top_p must be within [0, 1], got {p}");
        }
    }

    Ok(())
}
