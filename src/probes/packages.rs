//! Installed-package count probe
//!
//! The manager is detected from its on-disk database (cheaper and more
//! reliable than probing PATH), then its listing tool is counted line by
//! line. The count is annotated with the manager name so the fact stays
//! meaningful across distributions.

use crate::utils::command::{run_shell, UNKNOWN};
use crate::utils::file::file_exists;

/// Supported package managers for different Linux distributions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PackageManager {
    Pacman, // Arch Linux, Manjaro
    Dpkg,   // Debian, Ubuntu
    Rpm,    // Fedora, RHEL
    Xbps,   // Void Linux
}

impl PackageManager {
    fn list_command(self) -> &'static str {
        match self {
            PackageManager::Pacman => "pacman -Qq",
            PackageManager::Dpkg => "dpkg-query -f '${binary:Package}\\n' -W",
            PackageManager::Rpm => "rpm -qa",
            PackageManager::Xbps => "xbps-query -l",
        }
    }

    fn name(self) -> &'static str {
        match self {
            PackageManager::Pacman => "pacman",
            PackageManager::Dpkg => "dpkg",
            PackageManager::Rpm => "rpm",
            PackageManager::Xbps => "xbps",
        }
    }
}

fn detect_package_manager() -> Option<PackageManager> {
    // Database paths, most common systems first
    if file_exists("/var/lib/pacman/local") {
        Some(PackageManager::Pacman)
    } else if file_exists("/var/lib/dpkg/status") {
        Some(PackageManager::Dpkg)
    } else if file_exists("/var/lib/rpm") {
        Some(PackageManager::Rpm)
    } else if file_exists("/var/db/xbps") {
        Some(PackageManager::Xbps)
    } else {
        None
    }
}

/// Package count annotated with the manager, e.g. `1200 (pacman)`.
pub fn package_count() -> String {
    let Some(manager) = detect_package_manager() else {
        return UNKNOWN.to_string();
    };
    match run_shell(manager.list_command()) {
        Ok(listing) => format_package_count(&listing, manager.name()),
        Err(_) => UNKNOWN.to_string(),
    }
}

pub(crate) fn format_package_count(listing: &str, manager: &str) -> String {
    let count = listing.lines().filter(|line| !line.is_empty()).count();
    format!("{} ({})", count, manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_package_count() {
        let listing = (0..1200).map(|i| format!("pkg{}\n", i)).collect::<String>();
        assert_eq!(format_package_count(&listing, "pacman"), "1200 (pacman)");
    }

    #[test]
    fn test_format_package_count_skips_blank_lines() {
        assert_eq!(format_package_count("a\n\nb\n", "dpkg"), "2 (dpkg)");
        assert_eq!(format_package_count("", "rpm"), "0 (rpm)");
    }

    #[test]
    fn test_list_commands_are_shell_safe() {
        // Commands run through `sh -c`; keep the dpkg format string quoted.
        assert!(PackageManager::Dpkg.list_command().contains('\''));
        for pm in [
            PackageManager::Pacman,
            PackageManager::Dpkg,
            PackageManager::Rpm,
            PackageManager::Xbps,
        ] {
            assert!(!pm.list_command().is_empty());
            assert!(!pm.name().is_empty());
        }
    }
}
