// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the rlclient factory registry and its capabilities.

use thiserror::Error;

use crate::types::Capability;

/// Result code reported for a successful creation call.
pub const SUCCESS: i32 = 0;

/// Coarse classification of a [`ClientError`].
///
/// Callers that only care about the failure class (for example, to map it to
/// an integer result code at an FFI boundary) match on this instead of the
/// full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    DuplicateRegistration,
    ConstructionFailed,
    InvalidConfiguration,
    Io,
    ModelData,
    ModelUpdate,
    Internal,
}

impl ErrorKind {
    /// Stable, nonzero integer result code for this kind.
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::NotFound => 1,
            ErrorKind::DuplicateRegistration => 2,
            ErrorKind::ConstructionFailed => 3,
            ErrorKind::InvalidConfiguration => 4,
            ErrorKind::Io => 5,
            ErrorKind::ModelData => 6,
            ErrorKind::ModelUpdate => 7,
            ErrorKind::Internal => 8,
        }
    }
}

/// The error type shared by every registry operation and every factory.
///
/// The registry itself only originates [`ClientError::NotFound`] and
/// [`ClientError::DuplicateRegistration`]. All other variants come from
/// factory functions or the objects they build and are passed through the
/// registry untouched.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No factory is registered under the requested key.
    #[error("{axis} factory not found: {key}")]
    NotFound { axis: Capability, key: String },

    /// A factory is already registered under the key.
    #[error("{axis} factory already registered: {key}")]
    DuplicateRegistration { axis: Capability, key: String },

    /// A factory failed to build its object.
    #[error("failed to construct {key}: {message}")]
    ConstructionFailed {
        key: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration option a factory depends on is missing or malformed.
    #[error("invalid configuration for `{key}`: {message}")]
    InvalidConfiguration { key: String, message: String },

    /// I/O failure in a file-backed capability.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Model data could not be retrieved from a data transport.
    #[error("model data error: {0}")]
    ModelData(String),

    /// A model rejected new model data.
    #[error("model update error: {0}")]
    ModelUpdate(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::NotFound { .. } => ErrorKind::NotFound,
            ClientError::DuplicateRegistration { .. } => ErrorKind::DuplicateRegistration,
            ClientError::ConstructionFailed { .. } => ErrorKind::ConstructionFailed,
            ClientError::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
            ClientError::Io { .. } => ErrorKind::Io,
            ClientError::ModelData(_) => ErrorKind::ModelData,
            ClientError::ModelUpdate(_) => ErrorKind::ModelUpdate,
            ClientError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Integer result code for this error. Never equal to [`SUCCESS`].
    pub fn code(&self) -> i32 {
        self.kind().code()
    }

    /// Shorthand for an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        ClientError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Integer result code for any creation outcome.
pub fn result_code<T>(result: &Result<T, ClientError>) -> i32 {
    match result {
        Ok(_) => SUCCESS,
        Err(e) => e.code(),
    }
}
