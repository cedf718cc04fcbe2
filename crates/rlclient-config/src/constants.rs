// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Well-known configuration option names and implementation keys.

/// Configuration option names.
pub mod name {
    /// Key of the model implementation to create.
    pub const MODEL_IMPLEMENTATION: &str = "model.implementation";
    /// Key of the data transport that supplies model data.
    pub const MODEL_SRC: &str = "model.source";
    /// Path of the file read by the file model data transport.
    pub const MODEL_FILE_NAME: &str = "model.file.name";
    /// Key of the trace logger implementation to create.
    pub const TRACE_LOG_IMPLEMENTATION: &str = "trace.logger.implementation";
    /// Key of the sender used for interaction events.
    pub const INTERACTION_SENDER_IMPLEMENTATION: &str = "interaction.sender.implementation";
    /// Key of the sender used for observation events.
    pub const OBSERVATION_SENDER_IMPLEMENTATION: &str = "observation.sender.implementation";
    /// Destination file of the interaction file sender.
    pub const INTERACTION_FILE_NAME: &str = "interaction.file.name";
    /// Destination file of the observation file sender.
    pub const OBSERVATION_FILE_NAME: &str = "observation.file.name";

    /// Every option name the built-in factories read.
    pub const ALL: &[&str] = &[
        MODEL_IMPLEMENTATION,
        MODEL_SRC,
        MODEL_FILE_NAME,
        TRACE_LOG_IMPLEMENTATION,
        INTERACTION_SENDER_IMPLEMENTATION,
        OBSERVATION_SENDER_IMPLEMENTATION,
        INTERACTION_FILE_NAME,
        OBSERVATION_FILE_NAME,
    ];
}

/// Implementation keys registered by the default factory set.
pub mod value {
    pub const VW: &str = "VW";
    pub const NULL_TRACE_LOGGER: &str = "NULL_TRACE_LOGGER";
    pub const CONSOLE_TRACE_LOGGER: &str = "CONSOLE_TRACE_LOGGER";
    pub const OBSERVATION_FILE_SENDER: &str = "OBSERVATION_FILE_SENDER";
    pub const INTERACTION_FILE_SENDER: &str = "INTERACTION_FILE_SENDER";
    pub const FILE_MODEL_DATA: &str = "FILE_MODEL_DATA";
}

/// Fallback values used when an option is not set.
pub mod default {
    pub const OBSERVATION_FILE_NAME: &str = "observation.fb.data";
    pub const INTERACTION_FILE_NAME: &str = "interaction.fb.data";
    pub const MODEL_FILE_NAME: &str = "current";
}
