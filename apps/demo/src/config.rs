//! # Demo configuration
//!
//! Settings are layered: an optional TOML file, then environment variables prefixed with
//! `VFAB__` (for example `VFAB__ARGS__V1=7` sets `args.v1`).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG: &str = "vfab";

#[vfab::fabric_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub args: ArgsConfig,
    pub logging: LoggingConfig,
}

/// Constructor arguments used when the command line leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArgsConfig {
    pub v1: i32,
    pub v2: i32,
}

impl Default for ArgsConfig {
    fn default() -> Self {
        Self { v1: 1, v2: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, path: None }
    }
}

/// Loads [`DemoConfig`] from `path` (required) or from the optional default file, then applies
/// environment overrides.
///
/// # Errors
/// [`ConfigError::Config`] when an explicit file is missing or any source is malformed.
pub fn load_config(path: Option<&Path>) -> Result<DemoConfig, ConfigError> {
    let (file, required) =
        path.map_or_else(|| (PathBuf::from(DEFAULT_CONFIG), false), |p| (p.to_path_buf(), true));

    Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(
            Environment::with_prefix("VFAB").separator("__").try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<DemoConfig>()
        .context("Failed to deserialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_the_walkthrough() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.args, ArgsConfig { v1: 1, v2: 2 });
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.logging.path.is_none());
    }

    #[test]
    fn reads_partial_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let file = dir.path().join("demo.toml");
        fs::write(&file, "[args]\nv2 = 42\n\n[logging]\nlevel = \"debug\"\n")?;

        let cfg = load_config(Some(&file))?;
        assert_eq!(cfg.args, ArgsConfig { v1: 1, v2: 42 });
        assert_eq!(cfg.logging.level, "debug");
        Ok(())
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/vfab-demo.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to build config"), "{err}");
    }

    #[test]
    fn malformed_value_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let file = dir.path().join("bad.toml");
        fs::write(&file, "[args]\nv1 = \"many\"\n")?;

        let err = load_config(Some(&file)).unwrap_err();
        assert!(err.to_string().contains("Failed to deserialize config"), "{err}");
        Ok(())
    }
}
