//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.megamenu/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog::{DEFAULT_LOCALE, MessageOverrides};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Locale → (message id → text).
    #[serde(default)]
    pub messages: MessageOverrides,
    /// Icon name → glyph.
    #[serde(default)]
    pub icons: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub locale: Option<String>,
    pub theme: Option<ThemeName>,
    pub show_urls: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(ThemeName::Dark),
            "light" => Some(ThemeName::Light),
            _ => None,
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SHOW_URLS: bool = true;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub locale: String,
    pub theme: ThemeName,
    pub show_urls: bool,
    pub log_level: LevelFilter,
    pub messages: MessageOverrides,
    pub icons: HashMap<String, String>,
    /// Label path of the node to mark active at startup (CLI only).
    pub active: Option<String>,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub locale: Option<&'a str>,
    pub theme: Option<ThemeName>,
    pub active: Option<&'a str>,
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

/// Returns the path to `~/.megamenu/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".megamenu").join("config.toml"))
}

/// Load config from `~/.megamenu/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MenuConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MenuConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MenuConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MenuConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<MenuConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MenuConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# megamenu configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# locale = "en-US"       # Or set MEGAMENU_LOCALE
# theme = "dark"         # "dark" or "light", or set MEGAMENU_THEME
# show_urls = true       # Show link destinations next to menu items
# log_level = "debug"    # "error", "warn", "info", "debug", "trace", "off"

# Empty-state messages, per locale
# [messages.en-US]
# starred-empty = "Star a dashboard to see it here"

# Extra or replacement icon glyphs
# [icons]
# rocket = "^"
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
pub fn resolve(config: &MenuConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &MenuConfig,
    cli: &CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Locale: CLI → env → config → default
    let locale = cli
        .locale
        .map(|s| s.to_string())
        .or_else(|| env("MEGAMENU_LOCALE"))
        .or_else(|| config.general.locale.clone())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| {
            env("MEGAMENU_THEME").and_then(|s| {
                let parsed = ThemeName::parse(&s);
                if parsed.is_none() {
                    warn!("Ignoring unknown MEGAMENU_THEME value {:?}", s);
                }
                parsed
            })
        })
        .or(config.general.theme)
        .unwrap_or_default();

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            warn!("Unknown log_level {:?}, using {}", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        locale,
        theme,
        show_urls: config.general.show_urls.unwrap_or(DEFAULT_SHOW_URLS),
        log_level,
        messages: config.messages.clone(),
        icons: config.icons.clone(),
        active: cli.active.map(|s| s.to_string()),
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
        let config = MenuConfig::default();
        assert!(config.messages.is_empty());
        assert!(config.icons.is_empty());
        assert!(config.general.locale.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&MenuConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.locale, DEFAULT_LOCALE);
        assert_eq!(resolved.theme, ThemeName::Dark);
        assert_eq!(resolved.show_urls, DEFAULT_SHOW_URLS);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert!(resolved.active.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MenuConfig {
            general: GeneralConfig {
                locale: Some("de-DE".to_string()),
                theme: Some(ThemeName::Light),
                show_urls: Some(false),
                log_level: Some("warn".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.locale, "de-DE");
        assert_eq!(resolved.theme, ThemeName::Light);
        assert!(!resolved.show_urls);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_env_overrides_config() {
        let config = MenuConfig {
            general: GeneralConfig {
                locale: Some("de-DE".to_string()),
                theme: Some(ThemeName::Dark),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "MEGAMENU_LOCALE" => Some("fr-FR".to_string()),
            "MEGAMENU_THEME" => Some("LIGHT".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.locale, "fr-FR");
        assert_eq!(resolved.theme, ThemeName::Light);
    }

    #[test]
    fn test_unknown_env_theme_falls_through() {
        let config = MenuConfig {
            general: GeneralConfig {
                theme: Some(ThemeName::Light),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "MEGAMENU_THEME").then(|| "neon".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.theme, ThemeName::Light);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = MenuConfig {
            general: GeneralConfig {
                locale: Some("de-DE".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "MEGAMENU_LOCALE").then(|| "fr-FR".to_string());
        let cli = CliOverrides {
            locale: Some("en-US"),
            theme: Some(ThemeName::Light),
            active: Some("Dashboards/Browse"),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.locale, "en-US");
        assert_eq!(resolved.theme, ThemeName::Light);
        assert_eq!(resolved.active.as_deref(), Some("Dashboards/Browse"));
    }

    #[test]
    fn test_bad_log_level_uses_default() {
        let config = MenuConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
locale = "de-DE"
theme = "light"
show_urls = false

[messages.de-DE]
starred-empty = "Noch nichts markiert"

[icons]
rocket = "^"
"#;
        let config: MenuConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.locale.as_deref(), Some("de-DE"));
        assert_eq!(config.general.theme, Some(ThemeName::Light));
        assert_eq!(config.general.show_urls, Some(false));
        assert_eq!(
            config.messages["de-DE"]["starred-empty"],
            "Noch nichts markiert"
        );
        assert_eq!(config.icons["rocket"], "^");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
theme = "dark"
"#;
        let config: MenuConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(ThemeName::Dark));
        assert!(config.general.locale.is_none());
        assert!(config.messages.is_empty());
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let result: Result<MenuConfig, _> = toml::from_str("[general]\ntheme = \"neon\"\n");
        assert!(result.is_err());
    }
}
