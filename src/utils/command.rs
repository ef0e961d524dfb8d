//! Command execution utilities

use crate::error::{Result, SwiftstatusError};
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;

/// Most bytes ever read back from a helper command
pub const COMMAND_OUTPUT_LIMIT: usize = 1024;

/// Run `cmd` through `/bin/sh -c` and return what a single read of its
/// stdout yields, at most `limit` bytes, with the trailing newline stripped.
///
/// The caller never waits on the child: after the one read the pipe is
/// closed and a detached thread reaps the process whenever it exits.
pub fn run_shell_capture(cmd: &str, limit: usize) -> Result<String> {
    let mut child = Command::new("/bin/sh")
        .arg("-c")
        .arg(cmd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut output = vec![0u8; limit];
    let read = match child.stdout.take() {
        // Dropping the handle closes our end of the pipe
        Some(mut stdout) => stdout.read(&mut output),
        None => Ok(0),
    };

    thread::spawn(move || {
        let _ = child.wait();
    });

    let n = read?;
    if n == 0 {
        return Err(SwiftstatusError::Detection(format!("Command '{}' produced no output", cmd)));
    }
    output.truncate(n);

    if output.last() == Some(&b'\n') {
        output.pop();
    }

    Ok(String::from_utf8_lossy(&output).into_owned())
}
