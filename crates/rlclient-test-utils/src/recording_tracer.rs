// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trace logger that records messages for assertion in tests.

use std::sync::Mutex;

use rlclient_core::{Capability, Plugin, TraceLevel, TraceLogger};

/// Captures every `(level, message)` pair it is given.
#[derive(Default)]
pub struct RecordingTracer {
    entries: Mutex<Vec<(TraceLevel, String)>>,
}

impl RecordingTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> Vec<(TraceLevel, String)> {
        self.entries.lock().unwrap().clone()
    }

    /// Returns true if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .any(|(_, message)| message.contains(needle))
    }
}

impl Plugin for RecordingTracer {
    fn name(&self) -> &str {
        "recording"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capability(&self) -> Capability {
        Capability::TraceLogger
    }
}

impl TraceLogger for RecordingTracer {
    fn log(&self, level: TraceLevel, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}
