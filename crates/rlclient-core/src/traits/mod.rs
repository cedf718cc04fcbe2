// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability trait definitions.
//!
//! Every capability extends the [`Plugin`] base trait. Methods are
//! synchronous: factories and the objects they build are driven directly
//! by the caller's thread.

pub mod data_transport;
pub mod model;
pub mod plugin;
pub mod sender;
pub mod trace;

pub use data_transport::DataTransport;
pub use model::Model;
pub use plugin::Plugin;
pub use sender::Sender;
pub use trace::TraceLogger;
