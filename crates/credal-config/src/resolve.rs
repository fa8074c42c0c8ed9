//! Configuration resolution and path discovery.
//!
//! Resolution order: CLI argument → environment variables → XDG path → defaults.

use std::path::{Path, PathBuf};

use crate::classifier::ClassifierConfig;
use crate::validate::ValidationResult;

/// Where the classifier config was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Discovered config file path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Path to classifier.json (None means built-in defaults).
    pub path: Option<PathBuf>,

    pub source: ConfigSource,
}

/// A loaded config together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ClassifierConfig,
    pub path: Option<PathBuf>,
    pub source: ConfigSource,
}

/// Environment variable names.
const ENV_CONFIG_PATH: &str = "CREDAL_CONFIG";
const ENV_CONFIG_DIR: &str = "CREDAL_CONFIG_DIR";

/// Standard config file name.
const CONFIG_FILENAME: &str = "classifier.json";

/// Application name for XDG directories.
const APP_NAME: &str = "credal";

/// Resolve the classifier config path.
///
/// Resolution order:
/// 1. Explicit CLI path (used even if missing, so loading reports it)
/// 2. CREDAL_CONFIG environment variable
/// 3. CREDAL_CONFIG_DIR environment variable + classifier.json
/// 4. XDG config directory (~/.config/credal/)
/// 5. Built-in defaults (None)
pub fn resolve_config(cli_path: Option<&Path>) -> ResolvedPath {
    resolve_from(
        cli_path,
        std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from),
        std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from),
        xdg_config_dir(),
    )
}

fn resolve_from(
    cli_path: Option<&Path>,
    env_path: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    xdg_dir: Option<PathBuf>,
) -> ResolvedPath {
    // 1. CLI argument
    if let Some(path) = cli_path {
        return ResolvedPath {
            path: Some(path.to_path_buf()),
            source: ConfigSource::CliArgument,
        };
    }

    // 2. Environment variable (direct path)
    if let Some(path) = env_path.filter(|p| p.exists()) {
        return ResolvedPath {
            path: Some(path),
            source: ConfigSource::Environment,
        };
    }

    // 3. Environment variable (config dir)
    if let Some(path) = env_dir
        .map(|dir| dir.join(CONFIG_FILENAME))
        .filter(|p| p.exists())
    {
        return ResolvedPath {
            path: Some(path),
            source: ConfigSource::Environment,
        };
    }

    // 4. XDG config directory
    if let Some(path) = xdg_dir
        .map(|dir| dir.join(CONFIG_FILENAME))
        .filter(|p| p.exists())
    {
        return ResolvedPath {
            path: Some(path),
            source: ConfigSource::XdgConfig,
        };
    }

    // 5. Built-in default
    ResolvedPath::default()
}

/// Get the XDG config directory for credal.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Resolve, read and validate the classifier config.
pub fn load_config(cli_path: Option<&Path>) -> ValidationResult<LoadedConfig> {
    let resolved = resolve_config(cli_path);
    let config = match &resolved.path {
        Some(path) => ClassifierConfig::from_file(path)?,
        None => ClassifierConfig::default(),
    };
    Ok(LoadedConfig {
        config,
        path: resolved.path,
        source: resolved.source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(format!("{}", ConfigSource::CliArgument), "CLI argument");
        assert_eq!(
            format!("{}", ConfigSource::Environment),
            "environment variable"
        );
        assert_eq!(format!("{}", ConfigSource::XdgConfig), "XDG config");
        assert_eq!(
            format!("{}", ConfigSource::BuiltinDefault),
            "builtin default"
        );
    }

    #[test]
    fn test_nothing_found_uses_defaults() {
        let resolved = resolve_from(None, None, None, None);
        assert!(resolved.path.is_none());
        assert_eq!(resolved.source, ConfigSource::BuiltinDefault);
    }

    #[test]
    fn test_cli_wins_over_env() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = write_config(dir.path(), "{}");
        let cli = dir.path().join("other.json");
        let resolved = resolve_from(Some(&cli), Some(env_path), None, None);
        assert_eq!(resolved.path, Some(cli));
        assert_eq!(resolved.source, ConfigSource::CliArgument);
    }

    #[test]
    fn test_missing_env_path_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        let xdg_path = write_config(dir.path(), "{}");
        let resolved = resolve_from(
            None,
            Some(dir.path().join("missing.json")),
            Some(dir.path().join("missing-dir")),
            Some(dir.path().to_path_buf()),
        );
        assert_eq!(resolved.path, Some(xdg_path));
        assert_eq!(resolved.source, ConfigSource::XdgConfig);
    }

    #[test]
    fn test_env_dir_before_xdg() {
        let env_dir = tempfile::tempdir().unwrap();
        let xdg_dir = tempfile::tempdir().unwrap();
        let env_path = write_config(env_dir.path(), "{}");
        write_config(xdg_dir.path(), "{}");
        let resolved = resolve_from(
            None,
            None,
            Some(env_dir.path().to_path_buf()),
            Some(xdg_dir.path().to_path_buf()),
        );
        assert_eq!(resolved.path, Some(env_path));
        assert_eq!(resolved.source, ConfigSource::Environment);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), r#"{"folds": 4, "method": "naive_bayes"}"#);
        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.config.folds, 4);
        assert_eq!(loaded.source, ConfigSource::CliArgument);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert_eq!(err.code(), 60);
    }

    #[test]
    fn test_xdg_config_dir() {
        if let Some(path) = xdg_config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
