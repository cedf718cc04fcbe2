// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type-keyed factory registry for one capability axis.
//!
//! A `FactoryRegistry` maps string keys to creation functions. It is a pure
//! dispatch layer: `create` looks the key up and returns exactly what the
//! factory returned. The only errors it originates are
//! [`ClientError::NotFound`] and [`ClientError::DuplicateRegistration`].

use std::collections::HashMap;
use std::sync::Arc;

use rlclient_config::Configuration;
use rlclient_core::{Capability, ClientError, TraceLogger};

/// A creation function for objects of type `T`.
///
/// Receives the configuration view, the axis-specific extra argument `A`
/// (`()` for axes without extras) and an optional trace logger. The
/// configuration and logger are borrowed for the duration of the call only;
/// a factory that wants to keep the logger clones the `Arc`.
pub type FactoryFn<T, A = ()> = Box<
    dyn Fn(&Configuration, A, Option<&Arc<dyn TraceLogger>>) -> Result<T, ClientError>
        + Send
        + Sync,
>;

/// Registry of creation functions for one capability axis.
pub struct FactoryRegistry<T, A = ()> {
    axis: Capability,
    factories: HashMap<String, FactoryFn<T, A>>,
}

impl<T, A> FactoryRegistry<T, A> {
    /// Create an empty registry for the given axis.
    pub fn new(axis: Capability) -> Self {
        Self {
            axis,
            factories: HashMap::new(),
        }
    }

    /// The capability axis this registry serves.
    pub fn axis(&self) -> Capability {
        self.axis
    }

    /// Register `factory` under `key`.
    ///
    /// Fails with [`ClientError::DuplicateRegistration`] if the key is taken;
    /// the existing factory is left in place. Use [`FactoryRegistry::replace`]
    /// for an intentional override.
    pub fn register<F>(&mut self, key: impl Into<String>, factory: F) -> Result<(), ClientError>
    where
        F: Fn(&Configuration, A, Option<&Arc<dyn TraceLogger>>) -> Result<T, ClientError>
            + Send
            + Sync
            + 'static,
    {
        let key = key.into();
        if self.factories.contains_key(&key) {
            return Err(ClientError::DuplicateRegistration {
                axis: self.axis,
                key,
            });
        }
        tracing::debug!(axis = %self.axis, key = %key, "factory registered");
        self.factories.insert(key, Box::new(factory));
        Ok(())
    }

    /// Register `factory` under `key`, overwriting any existing factory.
    ///
    /// Returns true if a previous factory was replaced.
    pub fn replace<F>(&mut self, key: impl Into<String>, factory: F) -> bool
    where
        F: Fn(&Configuration, A, Option<&Arc<dyn TraceLogger>>) -> Result<T, ClientError>
            + Send
            + Sync
            + 'static,
    {
        let key = key.into();
        let replaced = self.factories.insert(key.clone(), Box::new(factory)).is_some();
        if replaced {
            tracing::info!(axis = %self.axis, key = %key, "factory replaced");
        }
        replaced
    }

    /// Create an object using the factory registered under `key`.
    pub fn create(
        &self,
        key: &str,
        config: &Configuration,
        extra: A,
        trace_logger: Option<&Arc<dyn TraceLogger>>,
    ) -> Result<T, ClientError> {
        let factory = self.factories.get(key).ok_or_else(|| ClientError::NotFound {
            axis: self.axis,
            key: key.to_string(),
        })?;
        factory(config, extra, trace_logger)
    }

    /// Returns true if a factory is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// All registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Returns the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if no factories are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<T, A> std::fmt::Debug for FactoryRegistry<T, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("axis", &self.axis)
            .field("keys", &self.keys())
            .finish()
    }
}
