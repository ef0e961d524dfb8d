//! Output side: one status line per cycle, flushed right away so the bar
//! never waits on a buffer.

use crate::error::Result;
use std::io::Write;

pub struct StatusWriter<W: Write> {
    inner: W,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write `line` plus a newline and flush
    pub fn emit(&mut self, line: &str) -> Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
