//! String parsing utilities for `/proc` pseudo-files

use crate::data::{CpuTimes, MemoryReading};
use crate::error::{Result, SwiftstatusError};

/// Extract the value after a colon, trimmed
pub fn extract_after_colon(line: &str) -> Option<&str> {
    line.split_once(':')
        .map(|(_, value)| value.trim())
        .filter(|s| !s.is_empty())
}

/// Parse a `/proc/meminfo` value such as `16384 kB` into kB
pub fn parse_kb(value: &str) -> Option<u64> {
    value.split_whitespace().next()?.parse().ok()
}

/// Parse the aggregate `cpu` line at the top of `/proc/stat`
pub fn parse_cpu_times(stat: &str) -> Result<CpuTimes> {
    let line = stat
        .lines()
        .next()
        .ok_or_else(|| SwiftstatusError::Parse("empty /proc/stat".to_string()))?;

    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .take(7)
        .map(|v| v.parse::<u64>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| SwiftstatusError::Parse(format!("bad cpu line: {}", line)))?;

    if fields.len() < 7 {
        return Err(SwiftstatusError::Parse(format!("short cpu line: {}", line)));
    }

    Ok(CpuTimes {
        user: fields[0],
        nice: fields[1],
        system: fields[2],
        idle: fields[3],
        iowait: fields[4],
        irq: fields[5],
        softirq: fields[6],
    })
}

/// Parse the memory counters out of `/proc/meminfo`.
///
/// All of `MemTotal`, `MemFree`, `MemAvailable`, `Buffers` and `Cached` must
/// be present. `MemAvailable` and `Buffers` share one slot, so the later one
/// wins.
pub fn parse_meminfo(meminfo: &str) -> Result<MemoryReading> {
    let mut total = None;
    let mut free = None;
    let mut buffers = None;
    let mut cached = None;
    let mut seen = 0u8;

    for line in meminfo.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let slot = match key {
            "MemTotal" => &mut total,
            "MemFree" => &mut free,
            "MemAvailable" | "Buffers" => &mut buffers,
            "Cached" => &mut cached,
            _ => continue,
        };
        let value = extract_after_colon(line)
            .and_then(parse_kb)
            .ok_or_else(|| SwiftstatusError::Parse(format!("bad meminfo value for {}: {}", key, rest.trim())))?;
        *slot = Some(value);
        seen += 1;
        if seen == 5 {
            break;
        }
    }

    match (total, free, buffers, cached) {
        (Some(total), Some(free), Some(buffers), Some(cached)) if seen == 5 => Ok(MemoryReading {
            total,
            free,
            buffers,
            cached,
        }),
        _ => Err(SwiftstatusError::Parse("missing fields in /proc/meminfo".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMINFO: &str = "MemTotal:       16777216 kB
MemFree:         8388608 kB
MemAvailable:   12000000 kB
Buffers:         1048576 kB
Cached:          1048576 kB
SwapCached:            0 kB
";

    #[test]
    fn test_extract_after_colon() {
        assert_eq!(extract_after_colon("MemTotal:  42 kB"), Some("42 kB"));
        assert_eq!(extract_after_colon("Empty:   "), None);
        assert_eq!(extract_after_colon("no colon"), None);
    }

    #[test]
    fn test_parse_cpu_times() {
        let stat = "cpu  100 5 50 1000 20 3 2 0 0 0\ncpu0 50 2 25 500 10 1 1 0 0 0\n";
        let times = parse_cpu_times(stat).unwrap();
        assert_eq!(
            times,
            CpuTimes {
                user: 100,
                nice: 5,
                system: 50,
                idle: 1000,
                iowait: 20,
                irq: 3,
                softirq: 2,
            }
        );
    }

    #[test]
    fn test_parse_cpu_times_short_line() {
        assert!(parse_cpu_times("cpu 1 2 3\n").is_err());
        assert!(parse_cpu_times("").is_err());
        assert!(parse_cpu_times("cpu a b c d e f g\n").is_err());
    }

    #[test]
    fn test_parse_meminfo_merges_available_into_buffers() {
        let reading = parse_meminfo(MEMINFO).unwrap();
        assert_eq!(reading.total, 16_777_216);
        assert_eq!(reading.free, 8_388_608);
        assert_eq!(reading.buffers, 1_048_576);
        assert_eq!(reading.cached, 1_048_576);
    }

    #[test]
    fn test_parse_meminfo_missing_field() {
        let without_cached = "MemTotal: 100 kB\nMemFree: 50 kB\nMemAvailable: 60 kB\nBuffers: 1 kB\n";
        assert!(parse_meminfo(without_cached).is_err());

        let without_available = "MemTotal: 100 kB\nMemFree: 50 kB\nBuffers: 1 kB\nCached: 1 kB\n";
        assert!(parse_meminfo(without_available).is_err());
    }
}
