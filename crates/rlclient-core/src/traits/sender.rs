// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sender trait for delivering serialized events.

use crate::error::ClientError;
use crate::traits::plugin::Plugin;

/// Delivers serialized event batches to a destination.
///
/// Failures detected after creation are returned from the call and also
/// reported through the error callback the sender was created with.
pub trait Sender: Plugin {
    /// Prepares the destination. Must be called once before [`Sender::send`].
    fn init(&mut self) -> Result<(), ClientError>;

    /// Sends one serialized payload.
    fn send(&mut self, payload: &[u8]) -> Result<(), ClientError>;
}
