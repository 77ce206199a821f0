//! Command execution utilities
//!
//! Probes invoke third-party tools through the shell so that pipes and
//! redirections in the command line keep working. A failed invocation is an
//! expected condition (optional tools), so callers normally go through
//! [`run_or_unknown`] rather than handling errors themselves.

use crate::error::{Result, SysdashError};
use std::process::Command;

/// Sentinel value substituted for any fact that could not be determined.
pub const UNKNOWN: &str = "unknown";

/// Execute a shell command line and return trimmed stdout.
pub fn run_shell(command: &str) -> Result<String> {
    let output = Command::new("sh").arg("-c").arg(command).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(SysdashError::Detection(format!(
            "Command '{}' failed with exit code: {:?}",
            command,
            output.status.code()
        )))
    }
}

/// Execute a shell command line, collapsing any failure to the sentinel.
///
/// A missing optional tool must never abort fact collection, so nonzero
/// exits, spawn failures and signals all come back as `"unknown"`.
pub fn run_or_unknown(command: &str) -> String {
    run_shell(command).unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Run a shell command line with inherited stdio, returning its exit status.
///
/// Used by the menu actions, whose tools talk to the terminal themselves.
pub fn run_interactive(command: &str) -> Result<std::process::ExitStatus> {
    Command::new("sh")
        .arg("-c")
        .arg(command)
        .status()
        .map_err(SysdashError::from)
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    use std::env;

    if let Ok(path) = env::var("PATH") {
        for dir in path.split(':') {
            let full_path = std::path::Path::new(dir).join(program);
            if full_path.exists() && full_path.is_file() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_shell_captures_trimmed_stdout() {
        let out = run_shell("echo '  hello  '").unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_nonzero_exit_collapses_to_unknown() {
        assert_eq!(run_or_unknown("false"), UNKNOWN);
    }

    #[test]
    fn test_missing_binary_collapses_to_unknown() {
        assert_eq!(run_or_unknown("definitely-not-a-real-tool-xyz"), UNKNOWN);
    }

    #[test]
    fn test_pipes_are_supported() {
        let out = run_shell("printf 'a\\nb\\nc\\n' | wc -l").unwrap();
        assert_eq!(out, "3");
    }

    #[test]
    fn test_command_exists_finds_sh() {
        assert!(command_exists("sh"));
        assert!(!command_exists("definitely-not-a-real-tool-xyz"));
    }
}
