// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The primary in-process model.
//!
//! Model parsing belongs to the inference runtime; this type owns the
//! lifecycle around it: accepting new model bytes, tracking which model is
//! active, and reporting through the trace logger.

use std::sync::Arc;

use rlclient_core::{Capability, ClientError, Model, ModelData, Plugin, TraceLevel, TraceLogger};

/// In-process model refreshed from data transport payloads.
pub struct VwModel {
    model: Option<Vec<u8>>,
    model_id: Option<String>,
    updates: u32,
    trace_logger: Option<Arc<dyn TraceLogger>>,
}

impl VwModel {
    pub fn new(trace_logger: Option<Arc<dyn TraceLogger>>) -> Self {
        Self {
            model: None,
            model_id: None,
            updates: 0,
            trace_logger,
        }
    }

    /// Size in bytes of the currently loaded model.
    pub fn model_size(&self) -> usize {
        self.model.as_ref().map_or(0, Vec::len)
    }

    /// Returns true if a trace logger was supplied at creation.
    pub fn has_trace_logger(&self) -> bool {
        self.trace_logger.is_some()
    }
}

impl Plugin for VwModel {
    fn name(&self) -> &str {
        "vw"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capability(&self) -> Capability {
        Capability::Model
    }
}

impl Model for VwModel {
    fn update(&mut self, data: &ModelData) -> Result<(), ClientError> {
        if data.is_empty() {
            return Err(ClientError::ModelUpdate("model data is empty".to_string()));
        }
        self.updates += 1;
        let model_id = format!("{}-{}", self.updates, data.len());
        if let Some(trace_logger) = &self.trace_logger {
            trace_logger.log(
                TraceLevel::Info,
                &format!("model updated: id={model_id} bytes={}", data.len()),
            );
        }
        self.model = Some(data.data.clone());
        self.model_id = Some(model_id);
        Ok(())
    }

    fn model_id(&self) -> Option<&str> {
        self.model_id.as_deref()
    }
}
