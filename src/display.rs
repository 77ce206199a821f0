//! Terminal rendering: fact rows, rule lines and the fixed-position menu box
//!
//! Layout geometry and menu text are process-wide constants; only colors and
//! the label/value separator are configurable. Facts always print first,
//! top to bottom, before the box is drawn over the right-hand side of the
//! same screen region.

use crate::config::Config;
use crate::data::{Fact, FactBand};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthStr;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

// Box-drawing glyphs
const L_TOP: &str = "┌";
const R_TOP: &str = "┐";
const L_BOTTOM: &str = "└";
const R_BOTTOM: &str = "┘";
const H_LINE: &str = "─";
const V_LINE: &str = "│";

// Fixed layout geometry
const LINE_WIDTH: usize = 70;
const BOX_WIDTH: usize = 32;
const FIRST_HBOX_LINE: usize = 28;
const FIRST_V_POS: usize = 70;
const TEXT_POS: usize = FIRST_V_POS + 3;
const NBR_LINES: usize = 8;
const PROMPT_LINE: usize = FIRST_HBOX_LINE + 28;
const LABEL_WIDTH: usize = 20;

pub const MENU_OPTIONS: [&str; NBR_LINES] = [
    "(A)uditFullSystem",
    "(C)heckUpdates",
    "(D)ir",
    "(F)reemem",
    "(I)nstallHistory",
    "(R)emoveAllCache",
    "(U)pdate",
    "(Q)uit",
];

pub const MSG_PRESS_ENTER: &str = "*** PRESS Enter to continue ***";
pub const MSG_CHECK_UPDATES: &str = "*** Checkupdates ***";
pub const MSG_INSTALL_UPDATES: &str = "*** Install Updates ***";
pub const MSG_INSTALL_HISTORY: &str = "*** Last Installed/Updated Packages ***";
pub const MSG_REMOVE_CACHE: &str = "*** Remove Cache ***";
pub const MSG_AUDIT_RUNNING: &str = "*** Full System Audit Running [Please Wait...] ***";
pub const MSG_AUDIT_DONE: &str = "### Full System Audit Report Available in ~/Audit directory ###";

pub const ERR_CHECK_UPDATES: &str = "*** No Updates or Error: ";
pub const ERR_UPDATE_FAILED: &str = "*** Update process failed with exit code ";

/// Resolved ANSI sequences for each color role.
pub struct Theme {
    pub label: String,
    pub value: String,
    pub separator: String,
    pub rule: String,
    pub accent: String,
    pub menu: String,
    pub banner: String,
    pub error: String,
}

impl Theme {
    pub fn from_config(config: &Config) -> Self {
        let resolve = |role: &str, default: &str| resolve_color(&config.colors, role, default);
        Theme {
            label: resolve("label", "cyan"),
            value: resolve("value", "white"),
            separator: resolve("separator", "green"),
            rule: resolve("rule", "magenta"),
            accent: resolve("accent", "green"),
            menu: resolve("menu", "yellow"),
            banner: resolve("banner", "yellow"),
            error: resolve("error", "magenta"),
        }
    }
}

fn resolve_color(colors: &HashMap<String, String>, role: &str, default: &str) -> String {
    let chosen = colors.get(role).map(String::as_str).unwrap_or(default);
    color_to_ansi(chosen).unwrap_or_else(|| {
        eprintln!("sysdash: unknown color '{}' for role '{}'", chosen, role);
        color_to_ansi(default).unwrap_or_else(|| RESET.to_string())
    })
}

/// Translate an ANSI color name or `#rrggbb` hex value to an escape sequence.
pub fn color_to_ansi(color: &str) -> Option<String> {
    if let Some(code) = ansi_color_code(color) {
        return Some(code.to_string());
    }
    if color.starts_with('#') && color.len() == 7 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&color[1..3], 16),
            u8::from_str_radix(&color[3..5], 16),
            u8::from_str_radix(&color[5..7], 16),
        ) {
            return Some(format!("\x1b[38;2;{};{};{}m", r, g, b));
        }
    }
    None
}

fn ansi_color_code(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "black" => Some("\x1b[30m"),
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" => Some("\x1b[33m"),
        "blue" => Some("\x1b[34m"),
        "magenta" => Some("\x1b[35m"),
        "cyan" => Some("\x1b[36m"),
        "white" => Some("\x1b[37m"),
        "bright_black" | "gray" | "grey" => Some("\x1b[90m"),
        "bright_red" => Some("\x1b[91m"),
        "bright_green" => Some("\x1b[92m"),
        "bright_yellow" => Some("\x1b[93m"),
        "bright_blue" => Some("\x1b[94m"),
        "bright_magenta" => Some("\x1b[95m"),
        "bright_cyan" => Some("\x1b[96m"),
        "bright_white" => Some("\x1b[97m"),
        "reset" | "default" => Some("\x1b[0m"),
        _ => None,
    }
}

pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}

fn rule_line(theme: &Theme) {
    println!("{}{}{}", theme.rule, H_LINE.repeat(LINE_WIDTH), RESET);
}

fn print_fact(fact: &Fact, theme: &Theme, separator: &str) {
    let pad = LABEL_WIDTH.saturating_sub(UnicodeWidthStr::width(fact.label));
    println!(
        "{}{}{}{}{}{}{}{}{}",
        BOLD,
        theme.label,
        fact.label,
        " ".repeat(pad),
        RESET,
        theme.separator,
        separator,
        theme.value,
        fact.value
    );
    print!("{}", RESET);
}

/// Print all fact bands, each delimited by a rule line.
pub fn render_facts(bands: &[FactBand], theme: &Theme, config: &Config) {
    let separator = config
        .display
        .separator
        .clone()
        .unwrap_or_else(|| ": ".to_string());

    rule_line(theme);
    for band in bands {
        for fact in &band.facts {
            print_fact(fact, theme, &separator);
        }
        rule_line(theme);
    }
}

/// Draw the menu frame and options at their absolute screen position.
pub fn draw_menu_box(theme: &Theme) {
    print!(
        "\x1b[{};{}H{}{}{}{}{}",
        FIRST_HBOX_LINE,
        FIRST_V_POS,
        BOLD,
        theme.accent,
        L_TOP,
        H_LINE.repeat(BOX_WIDTH),
        R_TOP
    );
    for i in 0..NBR_LINES {
        print!("\x1b[{};{}H{}", FIRST_HBOX_LINE + 1 + i, FIRST_V_POS, V_LINE);
        print!(
            "\x1b[{};{}H{}",
            FIRST_HBOX_LINE + 1 + i,
            FIRST_V_POS + BOX_WIDTH + 1,
            V_LINE
        );
    }
    print!(
        "\x1b[{};{}H{}{}{}",
        FIRST_HBOX_LINE + NBR_LINES + 1,
        FIRST_V_POS,
        L_BOTTOM,
        H_LINE.repeat(BOX_WIDTH),
        R_BOTTOM
    );

    for (i, item) in MENU_OPTIONS.iter().enumerate() {
        print!(
            "\x1b[{};{}H{}{}{}",
            FIRST_HBOX_LINE + 1 + i,
            TEXT_POS,
            BOLD,
            theme.menu,
            item
        );
    }
    let _ = io::stdout().flush();
}

/// Park the cursor on the prompt line and read one menu choice.
pub fn read_menu_choice() -> String {
    print!("\x1b[{};1H{}", PROMPT_LINE, RESET);
    let _ = io::stdout().flush();

    let mut choice = String::new();
    let _ = io::stdin().lock().read_line(&mut choice);
    choice.trim().to_lowercase()
}

pub fn banner(theme: &Theme, message: &str) {
    println!("{}{}{}{}", BOLD, theme.banner, message, RESET);
}

pub fn wait_for_enter(theme: &Theme) {
    println!("{}{}{}{}", BOLD, theme.accent, MSG_PRESS_ENTER, RESET);
    let mut discard = String::new();
    let _ = io::stdin().lock().read_line(&mut discard);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_ansi_named() {
        assert_eq!(color_to_ansi("cyan"), Some("\x1b[36m".to_string()));
        assert_eq!(color_to_ansi("BRIGHT_RED"), Some("\x1b[91m".to_string()));
    }

    #[test]
    fn test_color_to_ansi_hex() {
        assert_eq!(
            color_to_ansi("#ff0000"),
            Some("\x1b[38;2;255;0;0m".to_string())
        );
    }

    #[test]
    fn test_color_to_ansi_invalid() {
        assert_eq!(color_to_ansi("chartreuse-ish"), None);
        assert_eq!(color_to_ansi("#zzz"), None);
    }

    #[test]
    fn test_theme_falls_back_on_bad_override() {
        let mut config = Config::default();
        config
            .colors
            .insert("label".to_string(), "not-a-color".to_string());
        let theme = Theme::from_config(&config);
        assert_eq!(theme.label, "\x1b[36m");
    }

    #[test]
    fn test_menu_fits_the_box() {
        assert_eq!(MENU_OPTIONS.len(), NBR_LINES);
        for item in MENU_OPTIONS {
            assert!(UnicodeWidthStr::width(item) <= BOX_WIDTH - 2);
        }
    }
}
