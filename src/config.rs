//! Optional cosmetic configuration
//!
//! `~/.config/sysdash/config.toml` may override the color roles and the
//! label/value separator. The dashboard must never fail to start over
//! cosmetics, so a missing file means defaults and a malformed file is
//! reported once on stderr and then ignored.

use dirs::config_dir;
use serde::Deserialize;
use std::{collections::HashMap, fs};

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    /// Color role overrides: label, value, separator, rule, menu, banner.
    /// Values are ANSI color names or `#rrggbb` hex.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct DisplayConfig {
    pub separator: Option<String>,
}

pub fn load_config() -> Config {
    let user_config_path = config_dir().map(|p| p.join("sysdash/config.toml"));

    let Some(path) = user_config_path.filter(|p| p.exists()) else {
        return Config::default();
    };

    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("sysdash: could not read {}: {}", path.display(), err);
            return Config::default();
        }
    };

    match toml::de::from_str(&data) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("sysdash: ignoring malformed {}: {}", path.display(), err);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r##"
            [display]
            separator = " = "

            [colors]
            label = "bright_cyan"
            rule = "#ff00ff"
        "##;
        let config: Config = toml::de::from_str(toml).unwrap();
        assert_eq!(config.display.separator.as_deref(), Some(" = "));
        assert_eq!(config.colors.get("label").map(String::as_str), Some("bright_cyan"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::de::from_str("").unwrap();
        assert!(config.display.separator.is_none());
        assert!(config.colors.is_empty());
    }
}
