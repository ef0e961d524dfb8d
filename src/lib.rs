//! swiftstatus library
//!
//! A fast and simple status line generator for minimal window manager bars.
//! Each refresh cycle polls a fixed set of sources (clock, CPU, memory,
//! battery, an external cache file) and prints one concatenated line.

pub mod error;
pub mod data;
pub mod collectors;
pub mod utils;
pub mod config;
pub mod display;
pub mod logging;
pub mod poller;
pub mod runner;

pub use error::{SwiftstatusError, Result};
pub use data::{SourceKind, SourceSpec};
pub use config::Config;
pub use poller::Poller;
