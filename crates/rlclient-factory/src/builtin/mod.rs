// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in capability implementations.
//!
//! These are always available without any platform factories installed.
//! [`crate::defaults`] registers them under their well-known keys.

pub mod console_tracer;
pub mod file_model_data;
pub mod file_sender;
pub mod vw_model;

pub use console_tracer::ConsoleTracer;
pub use file_model_data::FileModelData;
pub use file_sender::FileSender;
pub use vw_model::VwModel;
