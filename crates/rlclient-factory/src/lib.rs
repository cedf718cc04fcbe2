// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide, type-keyed factory registries.
//!
//! Independently compiled crates register named constructors for four
//! capability axes (data transport, model, sender, trace logger). The rest
//! of the system creates a concrete implementation by key at runtime,
//! without depending on the implementation's type.
//!
//! The shared registries are owned by [`FactoryGuard`] handles: the first
//! guard builds and populates them with the [default factory
//! set](defaults), the last guard to drop tears them down. Embedders that
//! want a private set build a [`FactoryRegistries`] directly.

pub mod builtin;
pub mod defaults;
pub mod guard;
pub mod registries;
pub mod registry;

pub use defaults::{PlatformHook, register_default_factories};
pub use guard::{
    FactoryGuard, LifecycleStats, active_guards, clear_platform_factories, current,
    install_platform_factories, lifecycle_stats,
};
pub use registries::{
    DataTransportFactory, FactoryRegistries, ModelFactory, SenderFactory, TraceLoggerFactory,
};
pub use registry::{FactoryFn, FactoryRegistry};
