use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout and build behaviour, read from `pages.toml`.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the Markdown sources.
    pub content_dir: PathBuf,
    /// Files copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Destination root. Cleaned before every build.
    pub output_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
    /// URL prefix substituted for root-relative links.
    pub base_path: String,
    /// Skip documents that fail to convert instead of aborting.
    pub keep_going: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
            base_path: "/".to_string(),
            keep_going: false,
        }
    }
}

impl Config {
    /// Default config file, looked up relative to the current directory.
    pub const FILE_NAME: &'static str = "pages.toml";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.expand_paths();
        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    // Expand shell variables and tilde in every configured path
    fn expand_paths(&mut self) {
        for path in [
            &mut self.content_dir,
            &mut self.static_dir,
            &mut self.output_dir,
            &mut self.template,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
