//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `LISTFMT__SECTION__KEY`
//! 3. Config file (`--config`, or the platform default if it exists)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::Dispatch;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for `render`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Notation name; parsed when used so a bad value surfaces as an
    /// unsupported-notation error.
    pub notation: String,
    pub dispatch: Dispatch,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            notation: "bullet".into(),
            dispatch: Dispatch::Dynamic,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// An explicit `config_file` must exist.  The default location is read
    /// only if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        let file = File::from(path.as_path())
            .format(FileFormat::Toml)
            .required(config_file.is_some());

        Config::builder()
            .set_default("defaults.notation", defaults.defaults.notation)?
            .set_default("defaults.dispatch", defaults.defaults.dispatch.to_string())?
            .set_default("output.no_color", defaults.output.no_color)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("LISTFMT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()
            .context("failed to read configuration sources")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.listfmt.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "listfmt", "listfmt")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".listfmt.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn default_notation_is_bullet() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.notation, "bullet");
        assert_eq!(cfg.defaults.dispatch, Dispatch::Dynamic);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[defaults]\nnotation = \"tagged\"\ndispatch = \"static\"\n\n[output]\nno_color = true"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.notation, "tagged");
        assert_eq!(cfg.defaults.dispatch, Dispatch::Static);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nnotation = \"html\"").unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.defaults.notation, "html");
        assert_eq!(cfg.defaults.dispatch, Dispatch::Dynamic);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }

    #[test]
    fn serializes_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("notation = \"bullet\""));
        assert!(text.contains("dispatch = \"dynamic\""));
    }
}
