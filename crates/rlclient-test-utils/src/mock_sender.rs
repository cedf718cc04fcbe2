// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock sender and error callback recorder.

use std::sync::{Arc, Mutex};

use rlclient_core::{Capability, ClientError, ErrorCallback, ErrorKind, Plugin, Sender};

/// Sender that stores payloads in memory.
///
/// Clones share the same payload buffer, so a test can keep one clone and
/// hand the other to a factory.
#[derive(Clone)]
pub struct MockSender {
    name: String,
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
    fail_sends: bool,
    initialized: bool,
    error_cb: ErrorCallback,
}

impl MockSender {
    pub fn new(name: impl Into<String>, error_cb: ErrorCallback) -> Self {
        Self {
            name: name.into(),
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_sends: false,
            initialized: false,
            error_cb,
        }
    }

    /// Make every subsequent `send` fail and report through the callback.
    pub fn failing(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    /// Payloads sent so far.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }
}

impl Plugin for MockSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 0, 1)
    }

    fn capability(&self) -> Capability {
        Capability::Sender
    }
}

impl Sender for MockSender {
    fn init(&mut self) -> Result<(), ClientError> {
        self.initialized = true;
        Ok(())
    }

    fn send(&mut self, payload: &[u8]) -> Result<(), ClientError> {
        if !self.initialized {
            return Err(ClientError::Internal("mock sender not initialized".into()));
        }
        if self.fail_sends {
            let err = ClientError::Internal(format!("{}: send failed", self.name));
            (self.error_cb)(&err);
            return Err(err);
        }
        self.sent.lock().unwrap().push(payload.to_vec());
        Ok(())
    }
}

/// Error callback that records the kind and message of every reported error.
#[derive(Clone, Default)]
pub struct ErrorRecorder {
    errors: Arc<Mutex<Vec<(ErrorKind, String)>>>,
}

impl ErrorRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends to this recorder.
    pub fn callback(&self) -> ErrorCallback {
        let errors = Arc::clone(&self.errors);
        Arc::new(move |err: &ClientError| {
            errors.lock().unwrap().push((err.kind(), err.to_string()));
        })
    }

    /// Errors reported so far.
    pub fn errors(&self) -> Vec<(ErrorKind, String)> {
        self.errors.lock().unwrap().clone()
    }
}
