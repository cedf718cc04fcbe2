// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle guard behaviour across many acquisitions and releases.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};

use proptest::prelude::*;
use rlclient_config::Configuration;
use rlclient_config::constants::value;
use rlclient_core::ClientError;
use rlclient_factory::{
    FactoryGuard, FactoryRegistries, active_guards, clear_platform_factories, current,
    install_platform_factories, lifecycle_stats,
};
use rlclient_test_utils::MockModel;
use serial_test::serial;

/// Acquire `n` guards, then drop them in the order given by `release_order`.
fn acquire_then_release(n: usize, release_order: &[usize]) {
    let mut guards: Vec<Option<FactoryGuard>> = (0..n).map(|_| Some(FactoryGuard::acquire())).collect();
    assert_eq!(active_guards(), n);

    for (released, &index) in release_order.iter().enumerate() {
        assert!(current().is_some(), "registries vanished with guards still alive");
        guards[index] = None;
        assert_eq!(active_guards(), n - released - 1);
    }
    assert!(current().is_none());
}

proptest! {
    /// N acquisitions followed by N releases in any order initialize and
    /// tear down exactly once.
    #[test]
    #[serial]
    fn n_guards_any_release_order(release_order in (1usize..12).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())) {
        let before = lifecycle_stats();
        acquire_then_release(release_order.len(), &release_order);
        let after = lifecycle_stats();

        prop_assert_eq!(after.initializations - before.initializations, 1);
        prop_assert_eq!(after.teardowns - before.teardowns, 1);
    }

    /// Arbitrary acquire/release sequences initialize once per 0→1 crossing
    /// and tear down once per 1→0 crossing.
    #[test]
    #[serial]
    fn reentrant_sequences_match_boundary_crossings(ops in prop::collection::vec((any::<bool>(), any::<usize>()), 1..64)) {
        let before = lifecycle_stats();
        let mut live: Vec<FactoryGuard> = Vec::new();
        let mut expected_inits = 0u64;
        let mut expected_teardowns = 0u64;

        for (acquire, pick) in ops {
            if acquire || live.is_empty() {
                if live.is_empty() {
                    expected_inits += 1;
                }
                live.push(FactoryGuard::acquire());
            } else {
                let index = pick % live.len();
                drop(live.swap_remove(index));
                if live.is_empty() {
                    expected_teardowns += 1;
                }
            }
            prop_assert_eq!(current().is_some(), !live.is_empty());
        }
        if !live.is_empty() {
            expected_teardowns += 1;
        }
        live.clear();

        let after = lifecycle_stats();
        prop_assert_eq!(after.initializations - before.initializations, expected_inits);
        prop_assert_eq!(after.teardowns - before.teardowns, expected_teardowns);
        prop_assert!(current().is_none());
    }
}

static FACTORIES_DROPPED: AtomicUsize = AtomicUsize::new(0);

/// Dropped together with the factory closure that owns it.
struct DropSentinel;

impl Drop for DropSentinel {
    fn drop(&mut self) {
        FACTORIES_DROPPED.fetch_add(1, Ordering::SeqCst);
    }
}

fn sentinel_platform(registries: &mut FactoryRegistries) -> Result<(), ClientError> {
    let sentinel = DropSentinel;
    registries
        .models_mut()
        .register("SENTINEL", move |_config, _extra, _trace| {
            let _keep = &sentinel;
            Ok(Box::new(MockModel::new("sentinel")) as Box<dyn rlclient_core::Model>)
        })
}

#[test]
#[serial]
fn last_release_drops_every_factory() {
    install_platform_factories(sentinel_platform);
    let dropped_before = FACTORIES_DROPPED.load(Ordering::SeqCst);

    let a = FactoryGuard::acquire();
    let b = FactoryGuard::acquire();
    clear_platform_factories();

    let model = b
        .create_model("SENTINEL", &Configuration::new(), None)
        .unwrap();
    assert_eq!(model.name(), "sentinel");

    drop(a);
    assert_eq!(FACTORIES_DROPPED.load(Ordering::SeqCst), dropped_before);
    drop(b);
    assert_eq!(FACTORIES_DROPPED.load(Ordering::SeqCst), dropped_before + 1);

    // Objects created earlier are owned by the caller and outlive the registries.
    assert_eq!(model.name(), "sentinel");
}

#[test]
#[serial]
fn held_current_handle_outlives_publication() {
    let guard = FactoryGuard::acquire();
    let snapshot: Arc<FactoryRegistries> = current().expect("published");
    drop(guard);

    assert!(current().is_none());
    assert!(snapshot.models().contains(value::VW));
}

const CONCURRENT_THREADS: usize = 16;

fn per_thread_models(registries: &mut FactoryRegistries) -> Result<(), ClientError> {
    for i in 0..CONCURRENT_THREADS {
        registries
            .models_mut()
            .register(format!("MODEL_{i}"), move |_config, _extra, _trace| {
                Ok(Box::new(MockModel::new(format!("model-{i}"))) as Box<dyn rlclient_core::Model>)
            })?;
    }
    Ok(())
}

#[test]
#[serial]
fn concurrent_acquisition_initializes_once() {
    install_platform_factories(per_thread_models);
    let before = lifecycle_stats();
    let barrier = Barrier::new(CONCURRENT_THREADS);
    let config = Configuration::new();

    let names: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..CONCURRENT_THREADS)
            .map(|i| {
                let barrier = &barrier;
                let config = &config;
                scope.spawn(move || {
                    barrier.wait();
                    let guard = FactoryGuard::acquire();
                    let model = guard
                        .create_model(&format!("MODEL_{i}"), config, None)
                        .unwrap();
                    // Every guard is alive before any is released.
                    barrier.wait();
                    let name = model.name().to_string();
                    drop(guard);
                    name
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    clear_platform_factories();

    for (i, name) in names.iter().enumerate() {
        assert_eq!(name, &format!("model-{i}"));
    }
    let after = lifecycle_stats();
    assert_eq!(after.initializations - before.initializations, 1);
    assert_eq!(after.teardowns - before.teardowns, 1);
    assert!(current().is_none());
    assert_eq!(active_guards(), 0);
}
