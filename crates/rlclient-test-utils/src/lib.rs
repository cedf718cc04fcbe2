// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for rlclient factory tests.
//!
//! Provides capability implementations that record what happens to them,
//! so tests can register them as factories and assert on the calls.
//!
//! # Components
//!
//! - [`RecordingTracer`] - Trace logger that captures every message
//! - [`MockSender`] - Sender that captures payloads and can be told to fail
//! - [`MockModel`] / [`MockTransport`] - Minimal model and data transport
//! - [`ErrorRecorder`] - Error callback that captures reported errors

pub mod mock_model;
pub mod mock_sender;
pub mod recording_tracer;

pub use mock_model::{MockModel, MockTransport};
pub use mock_sender::{ErrorRecorder, MockSender};
pub use recording_tracer::RecordingTracer;
