//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.stardeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StardeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Deck file opened when none is given on the command line.
    pub deck: Option<String>,
    /// Fixed seed for the star field.
    pub seed: Option<u64>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub tick_ms: Option<u64>,
    pub show_background: Option<bool>,
    pub show_help: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "stardeck.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_TICK_MS: u64 = 80;
/// Lower bound for `tick_ms`; faster redraws only burn CPU.
pub const MIN_TICK_MS: u64 = 16;

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` = built-in deck.
    pub deck_path: Option<PathBuf>,
    /// `None` = entropy.
    pub seed: Option<u64>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub tick_ms: u64,
    pub show_background: bool,
    pub show_help: bool,
    /// Settings that were ignored during resolution. Resolution runs before
    /// the logger exists, so the caller logs these once it is installed.
    pub warnings: Vec<String>,
}

/// Values supplied on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub deck: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub no_background: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.stardeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stardeck").join("config.toml"))
}

/// Load config from `~/.stardeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StardeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StardeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StardeckConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<StardeckConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(StardeckConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: StardeckConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Stardeck Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# deck = "~/talks/orbit.toml"   # Or STARDECK_DECK env var, or the DECK argument
# seed = 42                     # Or STARDECK_SEED; omit for a new sky every run
# log_file = "stardeck.log"
# log_level = "debug"           # "error", "warn", "info", "debug", "trace", "off"

# [display]
# tick_ms = 80                  # Animation redraw interval
# show_background = true
# show_help = true
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

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StardeckConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &StardeckConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Deck: CLI → env → config → built-in
    let deck_path = cli
        .deck
        .clone()
        .or_else(|| env("STARDECK_DECK").map(PathBuf::from))
        .or_else(|| config.general.deck.as_deref().map(expand_home));

    // Seed: CLI → env → config → entropy
    let seed = cli.seed.or_else(|| {
        env("STARDECK_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                warnings.push(format!("Ignoring STARDECK_SEED={:?}: {}", raw, e));
                None
            }
        })
    });
    let seed = seed.or(config.general.seed);

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.as_deref().map(expand_home))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warnings.push(format!("Unknown log_level {:?}, using default", level));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let tick_ms = config
        .display
        .tick_ms
        .unwrap_or(DEFAULT_TICK_MS)
        .max(MIN_TICK_MS);

    let show_background = !cli.no_background && config.display.show_background.unwrap_or(true);

    ResolvedConfig {
        deck_path,
        seed,
        log_file,
        log_level,
        tick_ms,
        show_background,
        show_help: config.display.show_help.unwrap_or(true),
        warnings,
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    match (raw.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = StardeckConfig::default();
        assert!(config.general.deck.is_none());
        assert!(config.general.seed.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved =
            resolve_with_env(&StardeckConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.deck_path, None);
        assert_eq!(resolved.seed, None);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.tick_ms, DEFAULT_TICK_MS);
        assert!(resolved.show_background);
        assert!(resolved.show_help);
        assert!(resolved.warnings.is_empty());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = StardeckConfig {
            general: GeneralConfig {
                deck: Some("/talks/orbit.toml".to_string()),
                seed: Some(9),
                log_file: Some("/tmp/deck.log".to_string()),
                log_level: Some("warn".to_string()),
            },
            display: DisplayConfig {
                tick_ms: Some(120),
                show_background: Some(false),
                show_help: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.deck_path, Some(PathBuf::from("/talks/orbit.toml")));
        assert_eq!(resolved.seed, Some(9));
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/deck.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.tick_ms, 120);
        assert!(!resolved.show_background);
        assert!(!resolved.show_help);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = StardeckConfig {
            general: GeneralConfig {
                deck: Some("/from/config.toml".to_string()),
                seed: Some(1),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "STARDECK_DECK" => Some("/from/env.toml".to_string()),
            "STARDECK_SEED" => Some("2".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.deck_path, Some(PathBuf::from("/from/env.toml")));
        assert_eq!(resolved.seed, Some(2));

        let cli = CliOverrides {
            deck: Some(PathBuf::from("/from/cli.json")),
            seed: Some(3),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.deck_path, Some(PathBuf::from("/from/cli.json")));
        assert_eq!(resolved.seed, Some(3));
    }

    #[test]
    fn test_bad_env_seed_falls_back_to_config() {
        let config = StardeckConfig {
            general: GeneralConfig {
                seed: Some(77),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "STARDECK_SEED").then(|| "not-a-number".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.seed, Some(77));
        assert_eq!(resolved.warnings.len(), 1);
        assert!(resolved.warnings[0].contains("STARDECK_SEED=\"not-a-number\""));
    }

    #[test]
    fn test_cli_no_background_wins() {
        let config = StardeckConfig {
            display: DisplayConfig {
                show_background: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            no_background: true,
            ..Default::default()
        };
        assert!(!resolve_with_env(&config, &cli, no_env).show_background);
    }

    #[test]
    fn test_tick_is_clamped() {
        let config = StardeckConfig {
            display: DisplayConfig {
                tick_ms: Some(1),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.tick_ms, MIN_TICK_MS);
    }

    #[test]
    fn test_unknown_log_level_uses_default() {
        let config = StardeckConfig {
            general: GeneralConfig {
                log_level: Some("chatty".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            resolved.warnings,
            vec!["Unknown log_level \"chatty\", using default".to_string()]
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[display]
tick_ms = 40
"#;
        let config: StardeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.tick_ms, Some(40));
        assert!(config.display.show_help.is_none());
        assert!(config.general.deck.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(config.general.seed.is_none());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Stardeck Configuration"));
        // Everything is commented out, so it parses to the defaults
        let reparsed: StardeckConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.general.deck.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display\ntick_ms = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
