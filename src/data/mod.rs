//! Plain data types shared between the collectors and the poller

pub mod readings;
pub mod source;

pub use readings::{BatteryState, CpuTimes, MemoryReading};
pub use source::{SourceKind, SourceSpec};
