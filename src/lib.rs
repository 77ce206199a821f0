//! sysdash library
//!
//! An interactive maintenance dashboard for a Linux desktop: gathers system
//! facts resiliently and dispatches single-letter menu choices to
//! maintenance actions.

pub mod actions;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod probes;
pub mod utils;

pub use data::{Fact, FactBand, GpuPair, MemoryStat, ThemeBundle};
pub use error::{Result, SysdashError};

/// Run every probe once, in display order, grouped into the three bands the
/// renderer expects: system identity, desktop/theme, hardware.
///
/// Probes are total (they collapse their own failures to "unknown"), so a
/// missing tool never prevents the probes after it from running.
pub fn collect_facts() -> Vec<FactBand> {
    use probes::{desktop, hardware, packages, system};

    let identity = FactBand {
        facts: vec![
            Fact::new("OS", format!("{} {}", system::os_name(), system::machine())),
            Fact::new("Kernel", system::kernel()),
            Fact::new("Shell", system::shell()),
            Fact::new("Root Disk", hardware::root_disk()),
            Fact::new("Packages", packages::package_count()),
        ],
    };

    let theme = desktop::theme_bundle();
    let desktop_band = FactBand {
        facts: vec![
            Fact::new(
                "DE",
                format!(
                    "{} - {}",
                    desktop::desktop_environment(),
                    system::session_type()
                ),
            ),
            Fact::new("Qt Style", theme.widget_style),
            Fact::new("Icons", theme.icons),
            Fact::new("Color Scheme", theme.color_scheme),
            Fact::new("Font", desktop::font()),
            Fact::new("Plasma Cursor", theme.cursor),
        ],
    };

    let gpus = hardware::gpus();
    let memory = hardware::memory();
    let hardware_band = FactBand {
        facts: vec![
            Fact::new(
                "CPU",
                format!("{} ({} cores)", hardware::cpu_model(), hardware::core_count()),
            ),
            Fact::new("GPU", gpus.pci),
            Fact::new("Second GPU", gpus.renderer),
            Fact::new("Mem.(Used/Total)", format!("{}/{}", memory.used, memory.total)),
        ],
    };

    vec![identity, desktop_band, hardware_band]
}
