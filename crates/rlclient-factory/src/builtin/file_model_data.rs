// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data transport that reads model data from a local file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rlclient_core::{
    Capability, ClientError, DataTransport, ModelData, Plugin, TraceLevel, TraceLogger,
};

/// Reads the whole file on every `get_data` call.
pub struct FileModelData {
    path: PathBuf,
    refresh_count: u32,
    trace_logger: Option<Arc<dyn TraceLogger>>,
}

impl FileModelData {
    pub fn new(path: impl Into<PathBuf>, trace_logger: Option<Arc<dyn TraceLogger>>) -> Self {
        Self {
            path: path.into(),
            refresh_count: 0,
            trace_logger,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Plugin for FileModelData {
    fn name(&self) -> &str {
        "file_model_data"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capability(&self) -> Capability {
        Capability::DataTransport
    }
}

impl DataTransport for FileModelData {
    fn get_data(&mut self) -> Result<ModelData, ClientError> {
        let data = std::fs::read(&self.path).map_err(|e| {
            ClientError::ModelData(format!("failed to read {}: {e}", self.path.display()))
        })?;
        self.refresh_count += 1;
        if let Some(trace_logger) = &self.trace_logger {
            trace_logger.log(
                TraceLevel::Debug,
                &format!("read {} bytes from {}", data.len(), self.path.display()),
            );
        }
        Ok(ModelData {
            data,
            refresh_count: self.refresh_count,
        })
    }
}
