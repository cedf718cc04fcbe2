// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data transport trait for retrieving model data.

use crate::error::ClientError;
use crate::traits::plugin::Plugin;
use crate::types::ModelData;

/// Fetches serialized model data from some source (local file, blob
/// storage, REST endpoint).
pub trait DataTransport: Plugin {
    /// Retrieves the current model data.
    fn get_data(&mut self) -> Result<ModelData, ClientError>;
}
