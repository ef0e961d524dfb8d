//! Sensors and hardware monitoring (battery)

use crate::config::BatteryConfig;
use crate::data::BatteryState;
use crate::error::{Result, SwiftstatusError};
use crate::utils::command::{run_shell_capture, COMMAND_OUTPUT_LIMIT};
use crate::utils::file::read_token;
use crate::utils::format::{render, Arg, FRAGMENT_CAPACITY};
use std::fs;
use std::path::{Path, PathBuf};

/// Longest status word read from `status` ("Discharging" fits)
const STATUS_TOKEN_LEN: usize = 12;

/// Finds the battery device directory once and remembers the answer,
/// including the answer "there is none".
#[derive(Debug, Clone)]
pub struct BatteryLocator {
    helper: String,
    power_supply: PathBuf,
    device: Option<Option<PathBuf>>,
}

impl BatteryLocator {
    pub fn new(helper: impl Into<String>, power_supply: impl Into<PathBuf>) -> Self {
        Self {
            helper: helper.into(),
            power_supply: power_supply.into(),
            device: None,
        }
    }

    /// The battery device directory, discovering it on first use
    pub fn device(&mut self) -> Option<&Path> {
        if self.device.is_none() {
            let found = self.discover();
            match &found {
                Some(path) => tracing::info!(device = %path.display(), "battery device found"),
                None => tracing::warn!("no battery device found"),
            }
            self.device = Some(found);
        }
        self.device.as_ref().and_then(|d| d.as_deref())
    }

    pub fn is_resolved(&self) -> bool {
        self.device.is_some()
    }

    fn discover(&self) -> Option<PathBuf> {
        if !self.helper.trim().is_empty() {
            match run_shell_capture(&self.helper, COMMAND_OUTPUT_LIMIT) {
                Ok(out) if !out.trim().is_empty() => return Some(PathBuf::from(out.trim())),
                Ok(_) => tracing::debug!(helper = %self.helper, "battery helper printed nothing"),
                Err(err) => tracing::debug!(helper = %self.helper, error = %err, "battery helper failed"),
            }
        }
        find_battery_dir(&self.power_supply)
    }
}

/// First `BAT*` entry under a power_supply class directory, by name
pub fn find_battery_dir(power_supply: &Path) -> Option<PathBuf> {
    let mut batteries: Vec<PathBuf> = fs::read_dir(power_supply)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("BAT"))
        .map(|entry| entry.path())
        .collect();
    batteries.sort();
    batteries.into_iter().next()
}

/// Battery fragment: `%s` color band, `%s` state symbol, `%d` capacity.
/// A full battery short-circuits to the bare full symbol.
pub fn fetch_battery(format: &str, device: Option<&Path>, style: &BatteryConfig) -> Result<String> {
    let device = device.ok_or_else(|| SwiftstatusError::Detection("No battery found".to_string()))?;

    let state = BatteryState::from_token(&read_token(device.join("status"), STATUS_TOKEN_LEN)?);
    let symbol: &str = match state {
        BatteryState::Full => return Ok(style.full_symbol.clone()),
        BatteryState::Charging => &style.charging_symbol,
        BatteryState::Discharging => &style.discharging_symbol,
        BatteryState::Other => &style.other_symbol,
    };

    let token = read_token(device.join("capacity"), 16)?;
    let capacity: i64 = token
        .parse()
        .map_err(|_| SwiftstatusError::Parse(format!("Invalid battery capacity '{}'", token)))?;

    render(
        format,
        &[Arg::Str(capacity_color(capacity, style)), Arg::Str(symbol), Arg::Int(capacity)],
        FRAGMENT_CAPACITY,
    )
}

pub fn capacity_color(capacity: i64, style: &BatteryConfig) -> &str {
    if capacity > style.high_threshold {
        &style.high_color
    } else if capacity < style.low_threshold {
        &style.low_color
    } else {
        &style.normal_color
    }
}
