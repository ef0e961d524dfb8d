//! Hardware readings (CPU utilization, CPU frequency, memory)

use crate::data::{CpuTimes, MemoryReading};
use crate::error::{Result, SwiftstatusError};
use crate::utils::file::{read_file_safe, read_u64};
use crate::utils::format::{render, Arg, FRAGMENT_CAPACITY};
use crate::utils::parsing::{parse_cpu_times, parse_meminfo};
use std::path::Path;

/// Remembers the previous `/proc/stat` sample so utilization can be taken
/// as a delta. Lives as long as the poller that owns it.
#[derive(Debug, Default, Clone)]
pub struct CpuTracker {
    prev: Option<(u64, u64)>,
}

impl CpuTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `times` and return the busy percentage since the last sample.
    ///
    /// The first sample, and a sample with no elapsed time, report 0.
    /// 100 is reported as 99 so the field never grows a third digit.
    pub fn sample(&mut self, times: CpuTimes) -> u64 {
        let busy = times.busy();
        let total = times.total();

        let percent = match self.prev {
            Some((prev_busy, prev_total)) if prev_total != 0 && total != prev_total => {
                let busy_delta = busy.saturating_sub(prev_busy);
                let total_delta = total.saturating_sub(prev_total);
                if total_delta == 0 {
                    0
                } else {
                    busy_delta.saturating_mul(100) / total_delta
                }
            }
            _ => 0,
        };

        self.prev = Some((busy, total));
        percent.min(99)
    }
}

/// CPU utilization fragment: `%d` receives the percentage
pub fn fetch_cpu_usage(format: &str, proc_stat: &Path, tracker: &mut CpuTracker) -> Result<String> {
    let times = parse_cpu_times(&read_file_safe(proc_stat)?)?;
    let percent = tracker.sample(times);
    render(format, &[Arg::Int(percent as i64)], FRAGMENT_CAPACITY)
}

/// CPU frequency fragment: `%f` receives GHz, read from a kHz sysfs value
pub fn fetch_cpu_freq(format: &str, scaling_cur_freq: &Path) -> Result<String> {
    let khz = read_u64(scaling_cur_freq)?;
    render(format, &[Arg::Float(khz_to_ghz(khz))], FRAGMENT_CAPACITY)
}

pub fn khz_to_ghz(khz: u64) -> f64 {
    khz as f64 / (1000.0 * 1000.0)
}

/// Memory fragment: `%f` receives used GiB, `%d` the used percentage
pub fn fetch_memory(format: &str, meminfo: &Path) -> Result<String> {
    let reading = parse_meminfo(&read_file_safe(meminfo)?)?;
    let (used_gib, percent) = memory_usage(&reading)?;
    render(format, &[Arg::Float(used_gib), Arg::Int(percent)], FRAGMENT_CAPACITY)
}

/// Used memory as (GiB, percent of total).
///
/// kB go to MiB with an integer division before the float step to GiB.
pub fn memory_usage(reading: &MemoryReading) -> Result<(f64, i64)> {
    if reading.total == 0 {
        return Err(SwiftstatusError::Detection("MemTotal is zero".to_string()));
    }
    let used = reading.used_kb();
    let used_gib = (used / 1024) as f64 / 1024.0;
    let percent = used.saturating_mul(100) / reading.total as i64;
    Ok((used_gib, percent))
}
