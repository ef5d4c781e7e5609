//! # Configuration
//!
//! Settings for the demo binary, with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.switchback/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all
//! options. The engine itself needs none of this; policies reach the
//! reducer as plain values.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::policy::UnwindMissPolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SwitchbackConfig {
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DemoConfig {
    pub tick_ms: Option<u64>,
    pub transition_ms: Option<u64>,
    pub unwind_policy: Option<UnwindMissPolicy>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_MS: u64 = 100;
pub const DEFAULT_TRANSITION_MS: u64 = 250;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tick_ms: u64,
    pub transition_ms: u64,
    pub unwind_policy: UnwindMissPolicy,
    pub log_level: String,
}

// ============================================================================
// Error Type
// ============================================================================

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

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.switchback/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".switchback").join("config.toml"))
}

/// Load config from `~/.switchback/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SwitchbackConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SwitchbackConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SwitchbackConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SwitchbackConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SwitchbackConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Switchback Demo Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [demo]
# tick_ms = 100              # event poll interval
# transition_ms = 250        # how long the demo "animates" a transition
# unwind_policy = "truncate-to-first"   # or "ignore"
# log_level = "debug"        # off, error, warn, info, debug, trace
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI. `cli_unwind` is from the `--unwind-policy` flag (None =
/// not specified).
pub fn resolve(
    config: &SwitchbackConfig,
    cli_unwind: Option<UnwindMissPolicy>,
) -> ResolvedConfig {
    // Unwind policy: CLI → config → default
    let unwind_policy = cli_unwind
        .or(config.demo.unwind_policy)
        .unwrap_or_default();

    // Log level: env → config → default
    let log_level = std::env::var("SWITCHBACK_LOG")
        .ok()
        .or_else(|| config.demo.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        tick_ms: config.demo.tick_ms.unwrap_or(DEFAULT_TICK_MS),
        transition_ms: config.demo.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
        unwind_policy,
        log_level,
    }
}
