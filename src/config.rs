//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsforest/rsforest.toml`
//! 3. Environment variables: `RSFOREST_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// How nodes are labelled in command output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    Id,
    Name,
    #[default]
    Both,
}

impl FromStr for LabelStyle {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "both" => Ok(Self::Both),
            other => Err(ApplicationError::Config {
                message: format!("unknown label style '{other}' (expected id, name or both)"),
            }),
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LabelStyle::Id => "id",
            LabelStyle::Name => "name",
            LabelStyle::Both => "both",
        };
        f.write_str(name)
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub input: Option<PathBuf>,
    pub label: Option<LabelStyle>,
}

/// Unified configuration for rsforest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Record file used when no `--file` is given
    pub input: Option<PathBuf>,
    /// Node labels in output
    pub label: LabelStyle,
}

/// Get the XDG config directory for rsforest.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsforest").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rsforest.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}`, leaving the input untouched on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(input) = &self.input {
            let expanded = expand_env_vars(input.to_string_lossy().as_ref());
            self.input = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            input: overlay.input.clone().or_else(|| self.input.clone()),
            label: overlay.label.unwrap_or(self.label),
        }
    }

    /// Load settings from the global config path and the process environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_with(global_config_path().as_deref(), None)
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `global_path` - Global config file; skipped when `None` or missing
    /// * `env` - Environment variables to read instead of the process environment
    pub fn load_with(
        global_path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config file
        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current, env)?;

        current.expand_paths();
        Ok(current)
    }

    /// Apply RSFOREST_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let source = Environment::with_prefix("RSFOREST")
            .prefix_separator("_")
            .separator("__")
            .source(env);
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("input") {
            settings.input = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("label") {
            settings.label = val.parse()?;
        }

        Ok(settings)
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_with_keeps_base_for_unspecified_fields() {
        let base = Settings {
            input: Some(PathBuf::from("base.toml")),
            label: LabelStyle::Id,
        };
        let merged = base.merge_with(&RawSettings {
            input: None,
            label: Some(LabelStyle::Name),
        });

        assert_eq!(merged.input, Some(PathBuf::from("base.toml")));
        assert_eq!(merged.label, LabelStyle::Name);
    }

    #[test]
    fn test_label_style_parse() {
        assert_eq!("ID".parse::<LabelStyle>().unwrap(), LabelStyle::Id);
        assert_eq!(" both ".parse::<LabelStyle>().unwrap(), LabelStyle::Both);
        assert!("tree".parse::<LabelStyle>().is_err());
    }
}
