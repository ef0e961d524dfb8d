use crate::data::{SourceKind, SourceSpec};
use crate::error::{Result, SwiftstatusError};
use dirs::config_dir;
use serde::Deserialize;
use std::{fs, path::{Path, PathBuf}, time::Duration};

const SYSTEM_CONFIG_PATH: &str = "/usr/share/swiftstatus/config.toml";

pub const DEFAULT_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_CACHE: u32 = 10;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub paths: PathsConfig,
    pub battery: BatteryConfig,
    pub sources: Vec<SourceSpec>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Length of one refresh cycle
    pub interval_ms: u64,
    /// Refresh divisor for sources that declare `cache = 0`
    pub default_cache: u32,
}

/// Kernel interfaces the collectors read
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub proc_stat: PathBuf,
    pub meminfo: PathBuf,
    pub cpu_freq: PathBuf,
    pub power_supply: PathBuf,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BatteryConfig {
    /// Shell command printing the battery device directory
    pub helper: String,
    pub full_symbol: String,
    pub charging_symbol: String,
    pub discharging_symbol: String,
    pub other_symbol: String,
    pub high_color: String,
    pub low_color: String,
    pub normal_color: String,
    /// Capacity strictly above this uses `high_color`
    pub high_threshold: i64,
    /// Capacity strictly below this uses `low_color`
    pub low_threshold: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            paths: PathsConfig::default(),
            battery: BatteryConfig::default(),
            sources: default_sources(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            default_cache: DEFAULT_CACHE,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            proc_stat: PathBuf::from("/proc/stat"),
            meminfo: PathBuf::from("/proc/meminfo"),
            cpu_freq: PathBuf::from("/sys/devices/system/cpu/cpu0/cpufreq/scaling_cur_freq"),
            power_supply: PathBuf::from("/sys/class/power_supply"),
        }
    }
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            helper: "get_battery".to_string(),
            full_symbol: String::new(),
            charging_symbol: "+".to_string(),
            discharging_symbol: "-".to_string(),
            other_symbol: String::new(),
            high_color: "green".to_string(),
            low_color: "red".to_string(),
            normal_color: "cyan".to_string(),
            high_threshold: 90,
            low_threshold: 3,
        }
    }
}

/// The built-in bar layout
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new(SourceKind::Clock, "^fg(#FCD862)%H:%M:%S|%a %d^fg()|", 1),
        SourceSpec::new(SourceKind::CpuUsage, "^fg(cyan)%02d%%", 0),
        SourceSpec::new(SourceKind::CpuFreq, ";%02.1f^fg()|", 0),
        SourceSpec::new(SourceKind::Memory, "^fg(green)%.2fG;%02d%%^fg()|", 0),
        SourceSpec::new(SourceKind::Battery, "^fg(%s)%s%d%%^fg()|", 0),
        SourceSpec::new(SourceKind::File, "/tmp/.weather", 600),
    ]
}

impl Config {
    /// Parse a TOML document, then validate and expand it
    pub fn from_toml(data: &str) -> Result<Self> {
        let config: Config = toml::de::from_str(data).map_err(|e| SwiftstatusError::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.general.interval_ms)
    }

    /// Replace unusable values with defaults and expand `~` in paths
    fn normalized(mut self) -> Self {
        if self.general.interval_ms == 0 {
            tracing::warn!(default = DEFAULT_INTERVAL_MS, "interval_ms must be positive, using default");
            self.general.interval_ms = DEFAULT_INTERVAL_MS;
        }
        if self.general.default_cache == 0 {
            tracing::warn!(default = DEFAULT_CACHE, "default_cache must be positive, using default");
            self.general.default_cache = DEFAULT_CACHE;
        }

        self.paths.proc_stat = expand_path(&self.paths.proc_stat);
        self.paths.meminfo = expand_path(&self.paths.meminfo);
        self.paths.cpu_freq = expand_path(&self.paths.cpu_freq);
        self.paths.power_supply = expand_path(&self.paths.power_supply);

        for source in self.sources.iter_mut().filter(|s| s.kind == SourceKind::File) {
            source.format = shellexpand::tilde(&source.format).to_string();
        }
        self
    }
}

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    }
}

/// Where a config file would be read from, if any exists
pub fn config_path() -> Option<PathBuf> {
    let user_config_path = config_dir().map(|p| p.join("swiftstatus/config.toml"));

    match user_config_path {
        Some(path) if path.exists() => Some(path),
        _ if Path::new(SYSTEM_CONFIG_PATH).exists() => Some(PathBuf::from(SYSTEM_CONFIG_PATH)),
        _ => None,
    }
}

pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config_data = fs::read_to_string(path)?;
    Config::from_toml(&config_data)
}

/// Load the user or system config; anything unreadable falls back to the
/// built-in layout.
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        tracing::debug!("no config file found, using built-in layout");
        return Config::default();
    };

    match load_config_from(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), sources = config.sources.len(), "loaded config");
            config
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "failed to load config, using built-in layout");
            Config::default()
        }
    }
}
