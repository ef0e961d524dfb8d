//! Source descriptors: which fetcher runs, with what format, how often

use serde::Deserialize;

/// The closed set of things a status line can show
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Local time rendered through a strftime pattern
    Clock,
    /// Aggregate CPU utilization since the previous sample
    CpuUsage,
    /// Current scaling frequency of cpu0, in GHz
    CpuFreq,
    /// Used memory in GiB and percent of total
    Memory,
    /// Charge state symbol and capacity with a color band
    Battery,
    /// First token of an externally maintained file
    File,
}

/// One entry of the ordered source table.
///
/// For [`SourceKind::File`] the `format` holds the path of the file to read.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub kind: SourceKind,
    pub format: String,
    /// Refresh every `cache` cycles; 0 means the configured default
    #[serde(default)]
    pub cache: u32,
}

impl SourceSpec {
    pub fn new(kind: SourceKind, format: impl Into<String>, cache: u32) -> Self {
        Self {
            kind,
            format: format.into(),
            cache,
        }
    }

    /// Interval in cycles, with 0 mapped to `default_cache`
    pub fn effective_interval(&self, default_cache: u32) -> u32 {
        if self.cache == 0 {
            default_cache.max(1)
        } else {
            self.cache
        }
    }
}
