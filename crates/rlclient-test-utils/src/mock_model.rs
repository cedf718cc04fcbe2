// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal model and data transport for factory tests.

use rlclient_core::{Capability, ClientError, DataTransport, Model, ModelData, Plugin};

/// Model that remembers the last update it accepted.
pub struct MockModel {
    name: String,
    model_id: Option<String>,
}

impl MockModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model_id: None,
        }
    }
}

impl Plugin for MockModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 0, 1)
    }

    fn capability(&self) -> Capability {
        Capability::Model
    }
}

impl Model for MockModel {
    fn update(&mut self, data: &ModelData) -> Result<(), ClientError> {
        self.model_id = Some(format!("mock-{}", data.len()));
        Ok(())
    }

    fn model_id(&self) -> Option<&str> {
        self.model_id.as_deref()
    }
}

/// Data transport that always returns the same bytes.
pub struct MockTransport {
    name: String,
    data: Vec<u8>,
}

impl MockTransport {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

impl Plugin for MockTransport {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 0, 1)
    }

    fn capability(&self) -> Capability {
        Capability::DataTransport
    }
}

impl DataTransport for MockTransport {
    fn get_data(&mut self) -> Result<ModelData, ClientError> {
        Ok(ModelData::new(self.data.clone()))
    }
}
