// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the rlclient factory registry.
//!
//! This crate provides the capability traits, the shared error type, and the
//! common types used by every factory and every implementation registered
//! with it. Concrete implementations live in other crates and only depend on
//! the traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ClientError, ErrorKind, SUCCESS, result_code};
pub use types::{Capability, ErrorCallback, ModelData, TraceLevel, ignore_errors};

pub use traits::{DataTransport, Model, Plugin, Sender, TraceLogger};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_has_four_axes() {
        use std::str::FromStr;
        use strum::IntoEnumIterator;

        let axes: Vec<Capability> = Capability::iter().collect();
        assert_eq!(axes.len(), 4, "Capability must have exactly 4 axes");

        for axis in &axes {
            let s = axis.to_string();
            let parsed = Capability::from_str(&s).expect("should parse back");
            assert_eq!(*axis, parsed);
        }
        assert_eq!(Capability::TraceLogger.to_string(), "trace_logger");
    }

    #[test]
    fn capability_serialization() {
        let json = serde_json::to_string(&Capability::DataTransport).expect("should serialize");
        assert_eq!(json, "\"data_transport\"");
        let parsed: Capability = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(parsed, Capability::DataTransport);
    }

    #[test]
    fn trace_level_display_is_uppercase() {
        assert_eq!(TraceLevel::Warn.to_string(), "WARN");
        assert!(TraceLevel::Debug < TraceLevel::Error);
    }

    #[test]
    fn model_data_len() {
        let data = ModelData::new(vec![1, 2, 3]);
        assert_eq!(data.len(), 3);
        assert!(!data.is_empty());
        assert!(ModelData::default().is_empty());
    }

    #[test]
    fn ignore_errors_callback_is_callable() {
        let cb = ignore_errors();
        cb(&ClientError::Internal("ignored".into()));
    }

    #[test]
    fn all_trait_modules_are_exported() {
        fn _assert_plugin<T: Plugin>() {}
        fn _assert_data_transport<T: DataTransport>() {}
        fn _assert_model<T: Model>() {}
        fn _assert_sender<T: Sender>() {}
        fn _assert_trace_logger<T: TraceLogger>() {}
    }
}
