//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.roaster/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_ENDPOINT;
use crate::core::mode::RoastMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RoasterConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_mode: Option<RoastMode>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub endpoint: Option<String>,
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_FILE: &str = "roaster.log";

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub mode: Option<RoastMode>,
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub endpoint: String,
    pub mode: RoastMode,
    pub log_file: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Returns the path to `~/.roaster/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roaster").join("config.toml"))
}

/// Load config from `~/.roaster/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RoasterConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RoasterConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(RoasterConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RoasterConfig::default());
    }

    load_config_from(&path)
}

fn load_config_from(path: &Path) -> Result<RoasterConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RoasterConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Roaster Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_mode = "roast2"            # roast2, badchick, unhinged, smartass, clown
# log_file = "roaster.log"

# [server]
# base_url = "http://localhost:3000" # Or set ROASTER_BASE_URL env var
# endpoint = "/api/roast"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RoasterConfig, cli: &CliOverrides) -> ResolvedConfig {
    let env_base_url = std::env::var("ROASTER_BASE_URL").ok();
    let env_mode = std::env::var("ROASTER_MODE").ok();
    resolve_with_env(config, cli, env_base_url, env_mode.as_deref())
}

fn resolve_with_env(
    config: &RoasterConfig,
    cli: &CliOverrides,
    env_base_url: Option<String>,
    env_mode: Option<&str>,
) -> ResolvedConfig {
    let base_url = cli
        .base_url
        .clone()
        .or(env_base_url)
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let env_mode = env_mode.and_then(|id| {
        let mode = RoastMode::from_id(id);
        if mode.is_none() {
            warn!("Ignoring unknown ROASTER_MODE value '{}'", id);
        }
        mode
    });

    let mode = cli
        .mode
        .or(env_mode)
        .or(config.general.default_mode)
        .unwrap_or_default();

    ResolvedConfig {
        base_url,
        endpoint: config
            .server
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        mode,
        log_file: cli
            .log_file
            .clone()
            .or_else(|| config.general.log_file.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved =
            resolve_with_env(&RoasterConfig::default(), &CliOverrides::default(), None, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.endpoint, "/api/roast");
        assert_eq!(resolved.mode, RoastMode::Roast2);
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = RoasterConfig {
            general: GeneralConfig {
                default_mode: Some(RoastMode::Smartass),
                log_file: Some("/tmp/r.log".to_string()),
            },
            server: ServerConfig {
                base_url: Some("http://roast.local".to_string()),
                endpoint: Some("/v2/roast".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), None, None);
        assert_eq!(resolved.base_url, "http://roast.local");
        assert_eq!(resolved.endpoint, "/v2/roast");
        assert_eq!(resolved.mode, RoastMode::Smartass);
        assert_eq!(resolved.log_file, "/tmp/r.log");
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = RoasterConfig {
            server: ServerConfig {
                base_url: Some("http://from-file".to_string()),
                endpoint: None,
            },
            general: GeneralConfig {
                default_mode: Some(RoastMode::Clown),
                log_file: None,
            },
        };
        let resolved = resolve_with_env(
            &config,
            &CliOverrides::default(),
            Some("http://from-env".to_string()),
            Some("unhinged"),
        );
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.mode, RoastMode::Unhinged);
    }

    #[test]
    fn test_unknown_env_mode_is_ignored() {
        let config = RoasterConfig {
            general: GeneralConfig {
                default_mode: Some(RoastMode::BadChick),
                log_file: None,
            },
            ..Default::default()
        };
        let resolved =
            resolve_with_env(&config, &CliOverrides::default(), None, Some("spicy"));
        assert_eq!(resolved.mode, RoastMode::BadChick);
    }

    #[test]
    fn test_cli_wins_over_everything() {
        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            mode: Some(RoastMode::Clown),
            log_file: Some("cli.log".to_string()),
        };
        let resolved = resolve_with_env(
            &RoasterConfig::default(),
            &cli,
            Some("http://from-env".to_string()),
            Some("smartass"),
        );
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.mode, RoastMode::Clown);
        assert_eq!(resolved.log_file, "cli.log");
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
default_mode = "badchick"
log_file = "roast.log"

[server]
base_url = "https://roasts.example.com"
endpoint = "/api/roast"
"#;
        let config: RoasterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_mode, Some(RoastMode::BadChick));
        assert_eq!(config.general.log_file.as_deref(), Some("roast.log"));
        assert_eq!(
            config.server.base_url.as_deref(),
            Some("https://roasts.example.com")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[server]
base_url = "http://10.0.0.2:3000"
"#;
        let config: RoasterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.base_url.as_deref(), Some("http://10.0.0.2:3000"));
        assert!(config.server.endpoint.is_none());
        assert!(config.general.default_mode.is_none());
    }

    #[test]
    fn test_unknown_mode_in_toml_is_rejected() {
        let toml_str = r#"
[general]
default_mode = "spicy"
"#;
        assert!(toml::from_str::<RoasterConfig>(toml_str).is_err());
    }

    #[test]
    fn test_generated_default_config_parses_to_defaults() {
        let dir = std::env::temp_dir().join(format!("roaster-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        generate_default_config(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.default_mode.is_none());
        assert!(config.server.base_url.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("roaster-definitely-missing").join("config.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
