use super::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Load configuration from the default location or return defaults
pub fn load_config() -> Result<Config> {
    let config_path = get_config_path();

    if config_path.exists() {
        load_config_from(&config_path)
    } else {
        // Create default config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Config::default())
    }
}

/// Load configuration from an explicit file
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Get the path to the config file
fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "regex-tutor")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.config/regex-tutor/config.toml"))
}
