// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model trait for in-process inference models.

use crate::error::ClientError;
use crate::traits::plugin::Plugin;
use crate::types::ModelData;

/// An in-process model that can be refreshed with new model data.
pub trait Model: Plugin {
    /// Replaces the current model with the given model data.
    fn update(&mut self, data: &ModelData) -> Result<(), ClientError>;

    /// Identifier of the currently loaded model, if any has been loaded.
    fn model_id(&self) -> Option<&str>;
}
