//! The poller owns every piece of state that survives between cycles:
//! the cache slot of each source, the previous CPU sample, the battery
//! device path and the cycle counter.

use crate::collectors::{clock, external, hardware, sensors};
use crate::config::{BatteryConfig, Config, PathsConfig};
use crate::data::{SourceKind, SourceSpec};
use crate::error::Result;
use chrono::{DateTime, Local};

/// Source of "now" for clock fragments
pub type ClockFn = fn() -> DateTime<Local>;

pub struct Poller {
    sources: Vec<SourceSpec>,
    cache: Vec<String>,
    default_cache: u32,
    counter: u32,
    paths: PathsConfig,
    battery_style: BatteryConfig,
    cpu: hardware::CpuTracker,
    battery: sensors::BatteryLocator,
    clock: ClockFn,
}

impl Poller {
    pub fn new(config: &Config) -> Self {
        Self {
            sources: config.sources.clone(),
            cache: vec![String::new(); config.sources.len()],
            default_cache: config.general.default_cache,
            counter: 0,
            paths: config.paths.clone(),
            battery_style: config.battery.clone(),
            cpu: hardware::CpuTracker::new(),
            battery: sensors::BatteryLocator::new(config.battery.helper.clone(), config.paths.power_supply.clone()),
            clock: Local::now,
        }
    }

    /// Use a fixed clock instead of the system one
    pub fn with_clock(mut self, clock: ClockFn) -> Self {
        self.clock = clock;
        self
    }

    pub fn sources(&self) -> &[SourceSpec] {
        &self.sources
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Cached fragment of source `idx`, empty when unset or failed
    pub fn cached(&self, idx: usize) -> &str {
        self.cache.get(idx).map(String::as_str).unwrap_or_default()
    }

    /// A source is due when its slot is empty or its interval divides the
    /// cycle counter. Unknown indexes are never due.
    pub fn is_due(&self, idx: usize) -> bool {
        match (self.sources.get(idx), self.cache.get(idx)) {
            (Some(spec), Some(slot)) => {
                slot.is_empty() || self.counter % spec.effective_interval(self.default_cache) == 0
            }
            _ => false,
        }
    }

    /// Build this cycle's line: one fragment per source, in order, with
    /// nothing in between.
    pub fn compose(&mut self) -> String {
        let mut line = String::new();

        for idx in 0..self.sources.len() {
            if self.is_due(idx) {
                match self.fetch(idx) {
                    Ok(fragment) => self.cache[idx] = fragment,
                    Err(err) => {
                        tracing::debug!(
                            source = ?self.sources[idx].kind,
                            cycle = self.counter,
                            error = %err,
                            "fetch failed, blanking fragment"
                        );
                        self.cache[idx].clear();
                    }
                }
            }
            line.push_str(&self.cache[idx]);
        }

        line
    }

    /// Move to the next cycle
    pub fn advance(&mut self) {
        self.counter = self.counter.wrapping_add(1);
    }

    fn fetch(&mut self, idx: usize) -> Result<String> {
        let spec = &self.sources[idx];
        match spec.kind {
            SourceKind::Clock => clock::format_clock(&(self.clock)(), &spec.format),
            SourceKind::CpuUsage => hardware::fetch_cpu_usage(&spec.format, &self.paths.proc_stat, &mut self.cpu),
            SourceKind::CpuFreq => hardware::fetch_cpu_freq(&spec.format, &self.paths.cpu_freq),
            SourceKind::Memory => hardware::fetch_memory(&spec.format, &self.paths.meminfo),
            SourceKind::Battery => sensors::fetch_battery(&spec.format, self.battery.device(), &self.battery_style),
            SourceKind::File => external::fetch_file(&spec.format),
        }
    }
}
