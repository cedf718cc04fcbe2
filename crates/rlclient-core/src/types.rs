// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the capability traits and the factory registry.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::ClientError;

/// Identifies one of the four independently pluggable capability axes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    DataTransport,
    Model,
    Sender,
    TraceLogger,
}

/// Severity of a message written to a trace logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TraceLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Raw model bytes as delivered by a data transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelData {
    /// Serialized model payload.
    pub data: Vec<u8>,
    /// Number of times the source has been refreshed.
    pub refresh_count: u32,
}

impl ModelData {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            refresh_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Out-of-band error reporter handed to senders at creation time.
///
/// Senders call it for failures detected after the creation call has
/// returned, such as a write error during a later `send`.
pub type ErrorCallback = Arc<dyn Fn(&ClientError) + Send + Sync>;

/// Returns an [`ErrorCallback`] that discards every error.
pub fn ignore_errors() -> ErrorCallback {
    Arc::new(|_| {})
}
