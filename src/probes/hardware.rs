//! Hardware probes (CPU, GPU, memory, root disk)

use crate::data::{GpuPair, MemoryStat};
use crate::error::{Result, SysdashError};
use crate::utils::command::{run_or_unknown, run_shell, UNKNOWN};
use crate::utils::file::find_line_with_prefix;
use crate::utils::parsing::{extract_after_colon, nth_token};

/// CPU model name from `/proc/cpuinfo`.
pub fn cpu_model() -> String {
    read_cpu_model().unwrap_or_else(|_| UNKNOWN.to_string())
}

fn read_cpu_model() -> Result<String> {
    let line = find_line_with_prefix("/proc/cpuinfo", "model name")?;
    extract_after_colon(&line)
        .ok_or_else(|| SysdashError::Parse("malformed model name line".to_string()))
}

/// Logical core count, for the CPU fact's suffix.
pub fn core_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// The two GPU descriptions, from independent sources.
///
/// PCI listing and GL renderer are probed separately; either may come back
/// empty without affecting the other. First matching line wins per source,
/// whatever the enumeration order (known limitation on multi-GPU boxes).
pub fn gpus() -> GpuPair {
    GpuPair {
        pci: parse_pci_gpu(&run_or_unknown("lspci")),
        renderer: parse_gl_renderer(&run_or_unknown("glxinfo")),
    }
}

pub(crate) fn parse_pci_gpu(lspci_output: &str) -> String {
    if lspci_output == UNKNOWN {
        return String::new();
    }
    for line in lspci_output.lines() {
        let lower = line.to_lowercase();
        if lower.contains("vga") || lower.contains("3d") || lower.contains("display") {
            if let Some((_, device)) = line.rsplit_once(": ") {
                return device.trim().to_string();
            }
        }
    }
    String::new()
}

pub(crate) fn parse_gl_renderer(glxinfo_output: &str) -> String {
    if glxinfo_output == UNKNOWN {
        return String::new();
    }
    for line in glxinfo_output.lines() {
        if line.contains("OpenGL renderer") {
            if let Some((_, renderer)) = line.split_once(": ") {
                return renderer.trim().to_string();
            }
        }
    }
    String::new()
}

/// Used and total memory via two `free` invocations.
///
/// Total comes from the human-readable run, used is derived from the
/// megabyte run only (total - free - buff/cache), so units are never mixed
/// across the two. The two invocations can observe different memory states
/// under load; that skew is accepted.
pub fn memory() -> MemoryStat {
    read_memory().unwrap_or_else(|_| MemoryStat::unknown())
}

fn read_memory() -> Result<MemoryStat> {
    let human = run_shell("free -h")?;
    let megabytes = run_shell("free -m")?;
    parse_memory(&human, &megabytes)
        .ok_or_else(|| SysdashError::Parse("unexpected free output".to_string()))
}

pub(crate) fn parse_memory(human: &str, megabytes: &str) -> Option<MemoryStat> {
    let total = nth_token(human.lines().nth(1)?, 1)?.to_string();

    let mem_line = megabytes.lines().nth(1)?;
    let total_m: u64 = nth_token(mem_line, 1)?.parse().ok()?;
    let free_m: u64 = nth_token(mem_line, 3)?.parse().ok()?;
    let buff_m: u64 = nth_token(mem_line, 5)?.parse().ok()?;

    // A negative result means the two snapshots disagree badly; treat it as
    // a failure rather than displaying nonsense.
    let used = total_m.checked_sub(free_m)?.checked_sub(buff_m)?;

    Some(MemoryStat {
        used: format!("{}M", used),
        total,
    })
}

/// Root filesystem usage as `used/total (pct)`.
pub fn root_disk() -> String {
    read_root_disk().unwrap_or_else(|_| UNKNOWN.to_string())
}

fn read_root_disk() -> Result<String> {
    let output = run_shell("df -h /")?;
    parse_root_disk(&output)
        .ok_or_else(|| SysdashError::Parse("unexpected df output".to_string()))
}

pub(crate) fn parse_root_disk(df_output: &str) -> Option<String> {
    let line = df_output.lines().nth(1)?;
    let used = nth_token(line, 2)?;
    let total = nth_token(line, 1)?;
    let pct = nth_token(line, 4)?;
    Some(format!("{}/{} ({})", used, total, pct))
}
