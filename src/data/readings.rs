//! Raw readings taken from kernel interfaces

/// Aggregate CPU time counters from the first line of `/proc/stat`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
}

impl CpuTimes {
    pub fn busy(&self) -> u64 {
        self.user + self.nice + self.system + self.irq + self.softirq
    }

    pub fn total(&self) -> u64 {
        self.busy() + self.idle + self.iowait
    }
}

/// Memory counters from `/proc/meminfo`, all in kB.
///
/// `MemAvailable` and `Buffers` land in the same slot, so `buffers` holds
/// whichever of the two appears last (`Buffers` in practice).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReading {
    pub total: u64,
    pub free: u64,
    pub buffers: u64,
    pub cached: u64,
}

impl MemoryReading {
    /// Used memory in kB; may go negative on odd kernels
    pub fn used_kb(&self) -> i64 {
        self.total as i64 - self.free as i64 - self.buffers as i64 - self.cached as i64
    }
}

/// Charge state as reported by `power_supply/*/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryState {
    Full,
    Charging,
    Discharging,
    Other,
}

impl BatteryState {
    pub fn from_token(token: &str) -> Self {
        match token {
            "Full" => BatteryState::Full,
            "Charging" => BatteryState::Charging,
            "Discharging" => BatteryState::Discharging,
            _ => BatteryState::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_times_busy_total() {
        let times = CpuTimes {
            user: 10,
            nice: 1,
            system: 5,
            idle: 100,
            iowait: 4,
            irq: 2,
            softirq: 3,
        };
        assert_eq!(times.busy(), 21);
        assert_eq!(times.total(), 125);
    }

    #[test]
    fn test_battery_state_tokens() {
        assert_eq!(BatteryState::from_token("Full"), BatteryState::Full);
        assert_eq!(BatteryState::from_token("Charging"), BatteryState::Charging);
        assert_eq!(BatteryState::from_token("Discharging"), BatteryState::Discharging);
        assert_eq!(BatteryState::from_token("Not"), BatteryState::Other);
        assert_eq!(BatteryState::from_token("Unknown"), BatteryState::Other);
    }
}
