//! Menu action handlers
//!
//! Each action owns the whole screen while it runs: clear, banner, run the
//! tool with inherited stdio, wait for Enter. Unlike the probes these report
//! failures directly to the terminal.

use crate::display::{self, Theme, BOLD, RESET};
use crate::error::Result;
use crate::utils::command::run_interactive;
use std::fs;
use std::path::Path;

/// Show memory, drop kernel caches, show memory again.
pub fn freemem(theme: &Theme) {
    display::clear_screen();
    print!("{}{}", theme.banner, BOLD);
    let _ = run_interactive("sudo free -h");
    let _ = run_interactive("sudo sysctl -w vm.drop_caches=3");
    let _ = run_interactive("sync");
    let _ = run_interactive("sudo sh -c 'echo 3 > /proc/sys/vm/drop_caches'");
    print!("{}{}", RESET, BOLD);
    let _ = run_interactive("sudo free -h");
    display::wait_for_enter(theme);
}

/// Hand the terminal to the file manager until it exits.
pub fn open_file_manager() {
    display::clear_screen();
    let _ = run_interactive("ranger");
}

/// List pending updates.
pub fn check_updates(theme: &Theme) {
    display::clear_screen();
    display::banner(theme, display::MSG_CHECK_UPDATES);
    match run_interactive("checkupdates") {
        // checkupdates exits 2 when no updates are pending; only other
        // nonzero codes are real errors.
        Ok(status) if status.success() || status.code() == Some(2) => {}
        Ok(status) => {
            println!(
                "{}{}{}{:?}{}",
                BOLD,
                theme.error,
                display::ERR_CHECK_UPDATES,
                status.code(),
                RESET
            );
        }
        Err(err) => {
            println!(
                "{}{}{}{}{}",
                BOLD,
                theme.error,
                display::ERR_CHECK_UPDATES,
                err,
                RESET
            );
        }
    }
    display::wait_for_enter(theme);
}

/// Run a full system upgrade.
pub fn install_updates(theme: &Theme) {
    display::clear_screen();
    display::banner(theme, display::MSG_INSTALL_UPDATES);
    match run_interactive("sudo pacman -Syyu") {
        Ok(status) if status.success() => {}
        Ok(status) => {
            println!(
                "{}{}{}{}{}",
                BOLD,
                theme.error,
                display::ERR_UPDATE_FAILED,
                status.code().unwrap_or(-1),
                RESET
            );
        }
        Err(err) => {
            println!(
                "{}{}{}{}{}",
                BOLD,
                theme.error,
                display::ERR_UPDATE_FAILED,
                err,
                RESET
            );
        }
    }
    display::wait_for_enter(theme);
}

/// Show the 50 most recently installed or updated packages.
pub fn list_install_history(theme: &Theme) {
    display::clear_screen();
    display::banner(theme, display::MSG_INSTALL_HISTORY);
    let _ = run_interactive("expac --timefmt='%Y-%m-%d %T' '%l\\t%n' | sort | tail -n 50");
    display::wait_for_enter(theme);
}

/// Wipe the user cache directory and the recently-used lists.
pub fn remove_all_cache(theme: &Theme) {
    display::clear_screen();
    display::banner(theme, display::MSG_REMOVE_CACHE);
    if let Err(err) = clear_user_caches() {
        println!("{}{}{}{}", BOLD, theme.error, err, RESET);
    }
    display::wait_for_enter(theme);
}

fn clear_user_caches() -> Result<()> {
    let cache_dir = shellexpand::tilde("~/.cache").to_string();
    if Path::new(&cache_dir).exists() {
        fs::remove_dir_all(&cache_dir)?;
    }
    fs::create_dir_all(&cache_dir)?;

    remove_recently_used(&shellexpand::tilde("~/.local/share").to_string())?;
    Ok(())
}

// Removes recently-used.xbel and its backup/temp siblings.
fn remove_recently_used(share_dir: &str) -> Result<()> {
    let dir = Path::new(share_dir);
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with("recently-used.xbel") {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

/// Run a full lynis audit, capturing the report under ~/Audit.
pub fn full_system_audit(theme: &Theme) {
    display::clear_screen();
    display::banner(theme, display::MSG_AUDIT_RUNNING);

    let audit_dir = shellexpand::tilde("~/Audit").to_string();
    let _ = fs::create_dir_all(&audit_dir);
    let _ = run_interactive(
        "sudo lynis audit system --forensics --pentest --verbose --no-log > ~/Audit/FullSysAudit.txt",
    );

    println!("\n{}\x1b[37m{}{}\n", BOLD, display::MSG_AUDIT_DONE, RESET);
    display::wait_for_enter(theme);
}
