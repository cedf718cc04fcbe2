// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trace logger that writes to the process's standard error stream.

use std::io::Write;
use std::sync::Mutex;

use rlclient_core::{Capability, Plugin, TraceLevel, TraceLogger};

/// Writes `[LEVEL]: message` lines to a writer, stderr by default.
pub struct ConsoleTracer {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleTracer {
    /// Create a tracer bound to stderr.
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    /// Create a tracer bound to an arbitrary writer.
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl Default for ConsoleTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ConsoleTracer {
    fn name(&self) -> &str {
        "console"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capability(&self) -> Capability {
        Capability::TraceLogger
    }
}

impl TraceLogger for ConsoleTracer {
    fn log(&self, level: TraceLevel, message: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Diagnostics must never fail the caller.
        let _ = writeln!(out, "[{level}]: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_level_prefixed_lines() {
        let buf = SharedBuf::default();
        let tracer = ConsoleTracer::with_writer(Box::new(buf.clone()));
        tracer.log(TraceLevel::Info, "model loaded");
        tracer.log(TraceLevel::Error, "send failed");

        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(text, "[INFO]: model loaded\n[ERROR]: send failed\n");
    }

    #[test]
    fn identifies_as_trace_logger() {
        let tracer = ConsoleTracer::new();
        assert_eq!(tracer.name(), "console");
        assert_eq!(tracer.capability(), Capability::TraceLogger);
    }
}
