//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.minibranch/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Screen and language names arriving as free-form strings (config file,
//! env vars) are parsed against the closed sets; anything unrecognized
//! falls back to the default with a warning rather than failing startup.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::content::Language;
use crate::core::screen::ScreenId;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MiniBranchConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Screen shown at startup, kebab-case name (e.g. "cash-counter").
    pub start_screen: Option<String>,
    /// Label language: "english", "kannada", or "bilingual".
    pub language: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ResolvedConfig {
    pub start_screen: ScreenId,
    pub language: Language,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_screen: ScreenId::Home,
            language: Language::default(),
        }
    }
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

/// Returns the path to `~/.minibranch/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".minibranch").join("config.toml"))
}

/// Load config from `~/.minibranch/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MiniBranchConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MiniBranchConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MiniBranchConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MiniBranchConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MiniBranchConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Mini Branch Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_screen = "home"     # home, services, upload, history, profile,
#                           # agent-profile, settings, cash-counter
# language = "bilingual"    # "english", "kannada", or "bilingual"
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
///
/// `cli_screen` and `cli_language` come from CLI flags (None = not specified);
/// they are already typed, so only file/env strings need parsing here.
pub fn resolve(
    config: &MiniBranchConfig,
    cli_screen: Option<ScreenId>,
    cli_language: Option<Language>,
) -> ResolvedConfig {
    // Start screen: CLI → env → config → Home
    let start_screen = cli_screen
        .or_else(|| std::env::var("MINIBRANCH_SCREEN").ok().map(|s| parse_screen(&s)))
        .or_else(|| config.general.start_screen.as_deref().map(parse_screen))
        .unwrap_or_default();

    // Language: CLI → env → config → Bilingual
    let language = cli_language
        .or_else(|| std::env::var("MINIBRANCH_LANGUAGE").ok().map(|s| parse_language(&s)))
        .or_else(|| config.general.language.as_deref().map(parse_language))
        .unwrap_or_default();

    ResolvedConfig {
        start_screen,
        language,
    }
}

/// Parse a screen name, falling back to `Home` for anything outside the
/// closed set. The fallback is deliberate: a typo'd config must not keep
/// the app from starting.
fn parse_screen(name: &str) -> ScreenId {
    match ScreenId::from_name(name) {
        Some(screen) => screen,
        None => {
            warn!("Unknown screen {name:?}, falling back to home");
            ScreenId::Home
        }
    }
}

fn parse_language(name: &str) -> Language {
    match name {
        "english" => Language::English,
        "kannada" => Language::Kannada,
        "bilingual" => Language::Bilingual,
        other => {
            warn!("Unknown language {other:?}, falling back to bilingual");
            Language::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MiniBranchConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.start_screen, ScreenId::Home);
        assert_eq!(resolved.language, Language::Bilingual);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MiniBranchConfig {
            general: GeneralConfig {
                start_screen: Some("cash-counter".to_string()),
                language: Some("kannada".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.start_screen, ScreenId::CashCounter);
        assert_eq!(resolved.language, Language::Kannada);
    }

    #[test]
    fn test_resolve_cli_wins_over_config() {
        let config = MiniBranchConfig {
            general: GeneralConfig {
                start_screen: Some("history".to_string()),
                language: Some("english".to_string()),
            },
        };
        let resolved = resolve(&config, Some(ScreenId::Profile), Some(Language::Bilingual));
        assert_eq!(resolved.start_screen, ScreenId::Profile);
        assert_eq!(resolved.language, Language::Bilingual);
    }

    #[test]
    fn test_unknown_screen_falls_back_to_home() {
        let config = MiniBranchConfig {
            general: GeneralConfig {
                start_screen: Some("dashboard".to_string()),
                language: None,
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.start_screen, ScreenId::Home);
    }

    #[test]
    fn test_unknown_language_falls_back_to_bilingual() {
        let config = MiniBranchConfig {
            general: GeneralConfig {
                start_screen: None,
                language: Some("hindi".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.language, Language::Bilingual);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
start_screen = "agent-profile"
language = "english"
"#;
        let config: MiniBranchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_screen.as_deref(), Some("agent-profile"));
        assert_eq!(config.general.language.as_deref(), Some("english"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
language = "kannada"
"#;
        let config: MiniBranchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.language.as_deref(), Some("kannada"));
        assert!(config.general.start_screen.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: MiniBranchConfig = toml::from_str("").unwrap();
        assert!(config.general.start_screen.is_none());
        assert!(config.general.language.is_none());
    }
}
