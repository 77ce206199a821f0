//! Transient value structures, rebuilt on every dashboard refresh

pub mod facts;

pub use facts::{Fact, FactBand, GpuPair, MemoryStat, ThemeBundle};
