//! Desktop environment, theming and font probes
//!
//! These lean on KDE-specific tools (`plasmashell`, `kreadconfig5`) that may
//! be absent on other desktops; absence degrades to "unknown", never to a
//! failed refresh.

use crate::data::ThemeBundle;
use crate::utils::command::{command_exists, run_or_unknown, UNKNOWN};
use crate::utils::parsing::{sanitize_single_line, strip_trailing_paren};
use regex::Regex;

/// Desktop environment with version, e.g. `KDE plasmashell 6.0.4`.
pub fn desktop_environment() -> String {
    parse_de_version(&run_or_unknown("plasmashell --version 2> /dev/null"))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub(crate) fn parse_de_version(output: &str) -> Option<String> {
    if output == UNKNOWN {
        return None;
    }
    let mut tokens = output.split_whitespace();
    let name = tokens.next()?;
    let version = tokens.next()?;
    Some(format!("KDE {} {}", name, version))
}

/// Query the four KDE theme facts as a group.
///
/// Only attempted when the config reader itself is on PATH; a present reader
/// with a missing key degrades that single field.
pub fn theme_bundle() -> ThemeBundle {
    if !command_exists("kreadconfig5") {
        return ThemeBundle::unknown();
    }
    ThemeBundle {
        icons: theme_query("kdeglobals", "Icons", "Theme"),
        cursor: theme_query("kcminputrc", "Mouse", "cursorTheme"),
        color_scheme: theme_query("kdeglobals", "General", "ColorScheme"),
        widget_style: theme_query("kdeglobals", "KDE", "widgetStyle"),
    }
}

fn theme_query(file: &str, group: &str, key: &str) -> String {
    let cmd = format!(
        "kreadconfig5 --file {} --group {} --key {} 2>/dev/null",
        file, group, key
    );
    // kreadconfig5 prints nothing for an unset key; sanitize maps that
    // (and any control garbage) to the sentinel.
    sanitize_single_line(&run_or_unknown(&cmd))
}

/// Default system font, from the font matcher's verbose output.
pub fn font() -> String {
    parse_font_fullname(&run_or_unknown("fc-match -v")).unwrap_or_else(|| UNKNOWN.to_string())
}

pub(crate) fn parse_font_fullname(output: &str) -> Option<String> {
    let re = Regex::new(r#"fullname:\s*"([^"]+)""#).ok()?;
    let captured = re.captures(output)?.get(1)?.as_str();
    let name = strip_trailing_paren(captured);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_de_version() {
        assert_eq!(
            parse_de_version("plasmashell 6.0.4"),
            Some("KDE plasmashell 6.0.4".to_string())
        );
    }

    #[test]
    fn test_parse_de_version_empty_or_short() {
        assert_eq!(parse_de_version(""), None);
        assert_eq!(parse_de_version("plasmashell"), None);
        assert_eq!(parse_de_version(UNKNOWN), None);
    }

    #[test]
    fn test_parse_font_fullname() {
        let out = "Pattern has 21 elts\n\tfullname: \"Noto Sans (Regular)\"(s)\n\tfamily: \"Noto Sans\"(s)";
        assert_eq!(parse_font_fullname(out), Some("Noto Sans".to_string()));
    }

    #[test]
    fn test_parse_font_fullname_no_match() {
        assert_eq!(parse_font_fullname("family: \"Noto Sans\""), None);
        assert_eq!(parse_font_fullname(UNKNOWN), None);
    }

    #[test]
    fn test_theme_bundle_unknown_is_all_unknown() {
        let bundle = ThemeBundle::unknown();
        assert_eq!(bundle.icons, UNKNOWN);
        assert_eq!(bundle.cursor, UNKNOWN);
        assert_eq!(bundle.color_scheme, UNKNOWN);
        assert_eq!(bundle.widget_style, UNKNOWN);
    }
}
