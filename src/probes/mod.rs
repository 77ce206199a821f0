//! Fact probes
//!
//! One module per fact family. Every public probe function is total: it
//! queries live system state and returns a display string (or tuple of
//! strings), absorbing every failure mode into the "unknown" sentinel.

pub mod desktop;
pub mod hardware;
pub mod packages;
pub mod system;
