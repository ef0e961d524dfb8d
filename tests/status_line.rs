use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::Path;
use std::time::Duration;
use swiftstatus::config::{Config, PathsConfig};
use swiftstatus::display::StatusWriter;
use swiftstatus::runner::run_cycle;
use swiftstatus::Poller;
use tempfile::TempDir;

fn fixed_clock() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

/// Lay out canned kernel files and a weather file under `root` and return
/// the default bar pointed at them.
fn canned_config(root: &Path) -> Config {
    fs::write(root.join("stat"), "cpu  100 0 50 800 50 0 0 0 0 0\n").unwrap();
    fs::write(
        root.join("meminfo"),
        "MemTotal:       16777216 kB\n\
         MemFree:         8388608 kB\n\
         MemAvailable:   10485760 kB\n\
         Buffers:         1048576 kB\n\
         Cached:          1048576 kB\n",
    )
    .unwrap();
    fs::write(root.join("scaling_cur_freq"), "2400000\n").unwrap();

    let battery = root.join("power_supply/BAT0");
    fs::create_dir_all(&battery).unwrap();
    fs::write(battery.join("status"), "Discharging\n").unwrap();
    fs::write(battery.join("capacity"), "50\n").unwrap();

    let weather = root.join(".weather");
    fs::write(&weather, "+5°C\n").unwrap();

    let mut config = Config {
        paths: PathsConfig {
            proc_stat: root.join("stat"),
            meminfo: root.join("meminfo"),
            cpu_freq: root.join("scaling_cur_freq"),
            power_supply: root.join("power_supply"),
        },
        ..Config::default()
    };
    config.battery.helper = format!("echo '{}'", battery.display());
    config.sources[5].format = weather.to_string_lossy().into_owned();
    config
}

const FIRST_LINE: &str = "^fg(#FCD862)03:04:05|Tue 02^fg()|\
^fg(cyan)00%\
;2.4^fg()|\
^fg(green)6.00G;37%^fg()|\
^fg(cyan)-50%^fg()|\
+5°C";

#[test]
fn cold_cycle_produces_deterministic_line() {
    let temp_dir = TempDir::new().unwrap();
    let config = canned_config(temp_dir.path());
    let mut poller = Poller::new(&config).with_clock(fixed_clock);

    assert_eq!(poller.compose(), FIRST_LINE);
}

#[test]
fn cached_sources_hold_between_due_cycles() {
    let temp_dir = TempDir::new().unwrap();
    let config = canned_config(temp_dir.path());
    let mut poller = Poller::new(&config).with_clock(fixed_clock);
    let mut writer = StatusWriter::new(Vec::new());

    run_cycle(&mut poller, &mut writer, Duration::from_millis(5)).unwrap();

    // everything changes underneath; only the clock (interval 1) is due
    fs::write(temp_dir.path().join("stat"), "cpu  600 0 50 800 50 0 0 0 0 0\n").unwrap();
    fs::write(temp_dir.path().join("scaling_cur_freq"), "1200000\n").unwrap();
    fs::write(temp_dir.path().join(".weather"), "-3°C\n").unwrap();
    fs::write(temp_dir.path().join("power_supply/BAT0/status"), "Charging\n").unwrap();

    run_cycle(&mut poller, &mut writer, Duration::from_millis(5)).unwrap();

    let output = String::from_utf8(writer.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec![FIRST_LINE, FIRST_LINE]);
    assert!(output.ends_with('\n'));
    assert_eq!(poller.counter(), 2);
}

#[test]
fn default_interval_refreshes_on_tenth_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let config = canned_config(temp_dir.path());
    let mut poller = Poller::new(&config).with_clock(fixed_clock);

    poller.compose();
    // busy +500 of total +500
    fs::write(temp_dir.path().join("stat"), "cpu  600 0 50 800 50 0 0 0 0 0\n").unwrap();
    fs::write(temp_dir.path().join("power_supply/BAT0/capacity"), "95\n").unwrap();
    fs::write(temp_dir.path().join("power_supply/BAT0/status"), "Charging\n").unwrap();

    for _ in 0..10 {
        poller.advance();
    }
    let line = poller.compose();

    assert!(line.contains("^fg(cyan)99%"), "{}", line);
    assert!(line.contains("^fg(green)+95%^fg()|"), "{}", line);
    // the weather file refreshes every 600 cycles
    assert!(line.ends_with("+5°C"));
}

#[test]
fn missing_sources_blank_only_their_fragment() {
    let temp_dir = TempDir::new().unwrap();
    let config = canned_config(temp_dir.path());
    fs::remove_file(temp_dir.path().join("meminfo")).unwrap();
    fs::remove_file(temp_dir.path().join(".weather")).unwrap();

    let mut poller = Poller::new(&config).with_clock(fixed_clock);
    assert_eq!(
        poller.compose(),
        "^fg(#FCD862)03:04:05|Tue 02^fg()|^fg(cyan)00%;2.4^fg()|^fg(cyan)-50%^fg()|"
    );
}
