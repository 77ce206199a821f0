//! System identity probes (OS name, kernel, shell, session type)

use crate::error::{Result, SysdashError};
use crate::utils::command::{run_or_unknown, UNKNOWN};
use crate::utils::file::find_line_with_prefix;
use crate::utils::parsing::{nth_token, sanitize_single_line, strip_trailing_paren};

/// Distribution name from `/etc/os-release`.
pub fn os_name() -> String {
    read_os_name().unwrap_or_else(|_| UNKNOWN.to_string())
}

fn read_os_name() -> Result<String> {
    let line = find_line_with_prefix("/etc/os-release", "NAME=")?;
    parse_os_release_name(&line)
        .ok_or_else(|| SysdashError::Parse("malformed NAME= line".to_string()))
}

pub(crate) fn parse_os_release_name(line: &str) -> Option<String> {
    let (_, value) = line.split_once('=')?;
    let name = value.trim().trim_matches('"');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Kernel name and release, e.g. `Linux 6.9.3-arch1-1`.
pub fn kernel() -> String {
    sanitize_single_line(&run_or_unknown("uname -sr"))
}

/// Machine hardware name, e.g. `x86_64`.
pub fn machine() -> String {
    sanitize_single_line(&run_or_unknown("uname -m"))
}

/// Login shell with version, e.g. `bash 5.2.26`.
pub fn shell() -> String {
    parse_shell_version(&run_or_unknown("bash --version"))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub(crate) fn parse_shell_version(output: &str) -> Option<String> {
    if output == UNKNOWN {
        return None;
    }
    // "GNU bash, version 5.2.26(1)-release ..." -> 4th token, paren stripped
    let token = nth_token(output, 3)?;
    let version = strip_trailing_paren(token);
    if version.is_empty() {
        None
    } else {
        Some(format!("bash {}", version))
    }
}

/// Session type from the environment, e.g. `wayland` or `x11`.
pub fn session_type() -> String {
    std::env::var("XDG_SESSION_TYPE").unwrap_or_else(|_| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_os_release_name_quoted() {
        assert_eq!(
            parse_os_release_name("NAME=\"Arch Linux\""),
            Some("Arch Linux".to_string())
        );
    }

    #[test]
    fn test_parse_os_release_name_unquoted() {
        assert_eq!(
            parse_os_release_name("NAME=Fedora"),
            Some("Fedora".to_string())
        );
    }

    #[test]
    fn test_parse_os_release_name_malformed() {
        assert_eq!(parse_os_release_name("NAME"), None);
        assert_eq!(parse_os_release_name("NAME=\"\""), None);
    }

    #[test]
    fn test_parse_shell_version() {
        let out = "GNU bash, version 5.2.26(1)-release (x86_64-pc-linux-gnu)";
        assert_eq!(parse_shell_version(out), Some("bash 5.2.26".to_string()));
    }

    #[test]
    fn test_parse_shell_version_short_output() {
        assert_eq!(parse_shell_version("GNU bash"), None);
        assert_eq!(parse_shell_version(""), None);
    }

    #[test]
    fn test_parse_shell_version_sentinel_passthrough() {
        // The runner already collapsed a failure; don't parse the sentinel.
        assert_eq!(parse_shell_version(UNKNOWN), None);
    }

    #[test]
    fn test_os_probe_absent_file_is_unknown() {
        // find_line_with_prefix on a missing path must surface as an error,
        // which the probe collapses to the sentinel.
        assert!(find_line_with_prefix("/nonexistent/os-release", "NAME=").is_err());
    }
}
