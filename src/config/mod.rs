use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// CLI configuration, loaded from `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Known human-readable signatures, e.g. `transfer(address,uint256)`.
    /// Selectors found here are reported verbatim instead of guessed.
    #[serde(default)]
    pub signatures: Vec<String>,
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("SIGSNIFF_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("sigsniff").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("sigsniff").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "sigsniff", "sigsniff")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
