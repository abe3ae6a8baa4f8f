//! Application service — configuration use-cases.

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::ProvisionConfig;

/// Load and validate configuration.
///
/// # Errors
///
/// Returns an error if the file cannot be parsed or holds an invalid value.
pub fn load_config(store: &impl ConfigStore) -> Result<ProvisionConfig> {
    let config = store.load()?;
    config.validate().with_context(|| match store.path() {
        Ok(path) => format!("invalid configuration in {}", path.display()),
        Err(_) => "invalid configuration".to_string(),
    })?;
    Ok(config)
}

/// Render the effective configuration as YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_config(config: &ProvisionConfig) -> Result<String> {
    serde_yaml::to_string(config).context("cannot serialize config")
}
