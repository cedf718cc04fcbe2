// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The four capability registries as one unit.
//!
//! A `FactoryRegistries` is mutable only while it is being populated. Once
//! published (by the lifecycle guard, or by an embedder wrapping it in an
//! `Arc`) it is read-only, so concurrent `create_*` calls need no locking.

use std::sync::Arc;

use rlclient_config::Configuration;
use rlclient_core::{
    Capability, ClientError, DataTransport, ErrorCallback, Model, Sender, TraceLogger,
};

use crate::defaults;
use crate::registry::FactoryRegistry;

/// Registry of data transport factories.
pub type DataTransportFactory = FactoryRegistry<Box<dyn DataTransport>>;
/// Registry of model factories.
pub type ModelFactory = FactoryRegistry<Box<dyn Model>>;
/// Registry of sender factories; senders also receive an error callback.
pub type SenderFactory = FactoryRegistry<Box<dyn Sender>, ErrorCallback>;
/// Registry of trace logger factories. `Ok(None)` means "no logger".
pub type TraceLoggerFactory = FactoryRegistry<Option<Arc<dyn TraceLogger>>>;

/// The data transport, model, sender, and trace logger registries.
pub struct FactoryRegistries {
    // Fields drop in declaration order: the reverse of initialization.
    trace_loggers: TraceLoggerFactory,
    senders: SenderFactory,
    models: ModelFactory,
    data_transports: DataTransportFactory,
    startup_errors: Vec<ClientError>,
}

impl FactoryRegistries {
    /// Create four empty registries.
    pub fn new() -> Self {
        let data_transports = DataTransportFactory::new(Capability::DataTransport);
        let models = ModelFactory::new(Capability::Model);
        let senders = SenderFactory::new(Capability::Sender);
        let trace_loggers = TraceLoggerFactory::new(Capability::TraceLogger);
        Self {
            trace_loggers,
            senders,
            models,
            data_transports,
            startup_errors: Vec::new(),
        }
    }

    /// Create registries populated with the default factory set and no
    /// platform factories.
    ///
    /// Intended for embedders that need a private, separately owned set of
    /// registries (for example, to add factories after startup under their
    /// own lock).
    pub fn with_defaults() -> Self {
        let mut registries = Self::new();
        let errors = defaults::register_default_factories(&mut registries, None);
        registries.record_startup_errors(errors);
        registries
    }

    pub fn data_transports(&self) -> &DataTransportFactory {
        &self.data_transports
    }

    pub fn data_transports_mut(&mut self) -> &mut DataTransportFactory {
        &mut self.data_transports
    }

    pub fn models(&self) -> &ModelFactory {
        &self.models
    }

    pub fn models_mut(&mut self) -> &mut ModelFactory {
        &mut self.models
    }

    pub fn senders(&self) -> &SenderFactory {
        &self.senders
    }

    pub fn senders_mut(&mut self) -> &mut SenderFactory {
        &mut self.senders
    }

    pub fn trace_loggers(&self) -> &TraceLoggerFactory {
        &self.trace_loggers
    }

    pub fn trace_loggers_mut(&mut self) -> &mut TraceLoggerFactory {
        &mut self.trace_loggers
    }

    /// Create a data transport by key.
    pub fn create_data_transport(
        &self,
        key: &str,
        config: &Configuration,
        trace_logger: Option<&Arc<dyn TraceLogger>>,
    ) -> Result<Box<dyn DataTransport>, ClientError> {
        self.data_transports.create(key, config, (), trace_logger)
    }

    /// Create a model by key.
    pub fn create_model(
        &self,
        key: &str,
        config: &Configuration,
        trace_logger: Option<&Arc<dyn TraceLogger>>,
    ) -> Result<Box<dyn Model>, ClientError> {
        self.models.create(key, config, (), trace_logger)
    }

    /// Create a sender by key, bound to `error_cb` for late failures.
    pub fn create_sender(
        &self,
        key: &str,
        config: &Configuration,
        error_cb: ErrorCallback,
        trace_logger: Option<&Arc<dyn TraceLogger>>,
    ) -> Result<Box<dyn Sender>, ClientError> {
        self.senders.create(key, config, error_cb, trace_logger)
    }

    /// Create a trace logger by key. `Ok(None)` is a valid "no-op" result.
    pub fn create_trace_logger(
        &self,
        key: &str,
        config: &Configuration,
        trace_logger: Option<&Arc<dyn TraceLogger>>,
    ) -> Result<Option<Arc<dyn TraceLogger>>, ClientError> {
        self.trace_loggers.create(key, config, (), trace_logger)
    }

    /// Sorted keys of the registry for `axis`.
    pub fn keys(&self, axis: Capability) -> Vec<&str> {
        match axis {
            Capability::DataTransport => self.data_transports.keys(),
            Capability::Model => self.models.keys(),
            Capability::Sender => self.senders.keys(),
            Capability::TraceLogger => self.trace_loggers.keys(),
        }
    }

    /// Registrations that failed while these registries were populated.
    pub fn startup_errors(&self) -> &[ClientError] {
        &self.startup_errors
    }

    pub(crate) fn record_startup_errors(&mut self, errors: Vec<ClientError>) {
        for error in &errors {
            tracing::warn!(code = error.code(), error = %error, "factory registration failed");
        }
        self.startup_errors.extend(errors);
    }
}

impl Default for FactoryRegistries {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FactoryRegistries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistries")
            .field("data_transports", &self.data_transports)
            .field("models", &self.models)
            .field("senders", &self.senders)
            .field("trace_loggers", &self.trace_loggers)
            .field("startup_errors", &self.startup_errors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlclient_core::ErrorKind;

    #[test]
    fn new_registries_are_empty() {
        let registries = FactoryRegistries::new();
        assert!(registries.data_transports().is_empty());
        assert!(registries.models().is_empty());
        assert!(registries.senders().is_empty());
        assert!(registries.trace_loggers().is_empty());
        assert!(registries.startup_errors().is_empty());
    }

    #[test]
    fn each_registry_knows_its_axis() {
        let registries = FactoryRegistries::new();
        assert_eq!(registries.data_transports().axis(), Capability::DataTransport);
        assert_eq!(registries.models().axis(), Capability::Model);
        assert_eq!(registries.senders().axis(), Capability::Sender);
        assert_eq!(registries.trace_loggers().axis(), Capability::TraceLogger);
    }

    #[test]
    fn not_found_names_the_axis() {
        let registries = FactoryRegistries::new();
        let err = registries
            .create_model("VW", &Configuration::new(), None)
            .err()
            .expect("empty registry");
        assert!(matches!(
            err,
            ClientError::NotFound { axis: Capability::Model, ref key } if key == "VW"
        ));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn registries_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FactoryRegistries>();
    }
}
