//! Manages the loading of the optimizer provider configuration.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk shape of `config.toml` under the base directory.
#[derive(Deserialize, Debug, Default)]
struct Config {
    #[serde(default)]
    optimizer: Option<OptimizerSection>,
}

#[derive(Deserialize, Debug)]
struct OptimizerSection {
    backend: Option<String>,
    model: Option<String>,
    api_key_env: Option<String>,
    base_url: Option<String>,
}

/// Resolved optimizer provider settings.
#[derive(Clone, Debug)]
pub struct OptimizerConfig {
    pub backend: String,
    pub model: String,
    pub api_key_env: String,
    pub base_url: Option<String>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            backend: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            base_url: None,
        }
    }
}

/// Loads the optimizer configuration from `config.toml`, falling back to the
/// OpenAI defaults when the file or the `[optimizer]` section is absent.
pub fn load_optimizer_config(config_path: &Path) -> Result<OptimizerConfig, String> {
    if !config_path.exists() {
        return Ok(OptimizerConfig::default());
    }

    let config_content = fs::read_to_string(config_path)
        .map_err(|e| format!("Failed to read config.toml: {}", e))?;
    let config: Config = toml::from_str(&config_content)
        .map_err(|e| format!("Failed to parse config.toml: {}", e))?;

    let defaults = OptimizerConfig::default();
    let Some(section) = config.optimizer else {
        return Ok(defaults);
    };

    Ok(OptimizerConfig {
        backend: section.backend.unwrap_or(defaults.backend),
        model: section.model.unwrap_or(defaults.model),
        api_key_env: section.api_key_env.unwrap_or(defaults.api_key_env),
        base_url: section.base_url,
    })
}
