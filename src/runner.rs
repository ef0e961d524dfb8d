//! The status loop: compose, emit, sleep out the rest of the cycle, repeat

use crate::config::Config;
use crate::display::StatusWriter;
use crate::error::Result;
use crate::poller::Poller;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Time left in a cycle of length `interval` after `elapsed` has passed.
/// `None` when the cycle already ran over; lost time is never made up.
pub fn remaining_interval(interval: Duration, elapsed: Duration) -> Option<Duration> {
    interval.checked_sub(elapsed).filter(|wait| !wait.is_zero())
}

/// Run one full cycle: compose, emit, sleep, advance the counter
pub fn run_cycle<W: Write>(poller: &mut Poller, writer: &mut StatusWriter<W>, interval: Duration) -> Result<()> {
    let start = Instant::now();

    let line = poller.compose();
    writer.emit(&line)?;

    match remaining_interval(interval, start.elapsed()) {
        Some(wait) => thread::sleep(wait),
        None => tracing::trace!(cycle = poller.counter(), elapsed = ?start.elapsed(), "cycle overran its interval"),
    }

    poller.advance();
    Ok(())
}

/// Print status lines to stdout until writing fails
pub fn run(config: &Config) -> Result<()> {
    let interval = config.interval();
    let mut poller = Poller::new(config);
    let mut writer = StatusWriter::new(io::stdout().lock());

    tracing::debug!(sources = poller.sources().len(), ?interval, "starting status loop");

    loop {
        run_cycle(&mut poller, &mut writer, interval)?;
    }
}
