//! Fact structures handed from the aggregator to the renderer
//!
//! Everything here is created fresh per refresh, read once by the renderer
//! and discarded; nothing is mutated after creation.

/// A labeled, display-ready piece of system information.
///
/// Labels are fixed at compile time and stay under the renderer's 20-column
/// label width. Values are single-line; probes substitute `"unknown"` for
/// anything they could not determine.
#[derive(Debug, Clone)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

impl Fact {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Fact {
            label,
            value: value.into(),
        }
    }
}

/// One display band of facts, separated from its neighbors by a rule line.
#[derive(Debug, Clone)]
pub struct FactBand {
    pub facts: Vec<Fact>,
}

/// KDE theming facts, produced atomically by one probe.
///
/// Either all four fields come from live `kreadconfig5` queries or all four
/// are `"unknown"` (the reader tool is absent). Individual fields may still
/// degrade to `"unknown"` when the tool is present but a key is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeBundle {
    pub icons: String,
    pub cursor: String,
    pub color_scheme: String,
    pub widget_style: String,
}

impl ThemeBundle {
    pub fn unknown() -> Self {
        let u = crate::utils::command::UNKNOWN.to_string();
        ThemeBundle {
            icons: u.clone(),
            cursor: u.clone(),
            color_scheme: u.clone(),
            widget_style: u,
        }
    }
}

/// Used/total memory, both preformatted display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryStat {
    pub used: String,
    pub total: String,
}

impl MemoryStat {
    pub fn unknown() -> Self {
        let u = crate::utils::command::UNKNOWN.to_string();
        MemoryStat {
            used: u.clone(),
            total: u,
        }
    }
}

/// The two independently-sourced GPU descriptions.
///
/// Unlike every other fact these degrade to the empty string, not the
/// sentinel: a machine with no secondary GPU is the normal case, not a
/// failure worth flagging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpuPair {
    pub pci: String,
    pub renderer: String,
}
