// SPDX-FileCopyrightText: 2026 rlclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reference-counted lifecycle guard for the process-wide registries.
//!
//! Every component that needs the shared registries holds a
//! [`FactoryGuard`]. The first acquisition builds and populates the four
//! registries, the last drop tears them down. Acquisitions in between only
//! bump the count. The count may cross zero any number of times (a module
//! that is loaded and unloaded repeatedly); each crossing re-runs
//! initialization or teardown.
//!
//! Registration happens entirely under the state mutex before the bundle is
//! published, so no caller can observe partially populated registries.
//! After publication the bundle is immutable and `create_*` calls through a
//! guard take no lock at all.
//!
//! A platform hook may itself acquire or clone a guard. On the thread that
//! is running initialization such a guard joins the initialization in
//! progress: it only bumps the count and sees the registries once they are
//! published. A hook that waits on another thread acquiring a guard still
//! deadlocks.

use std::cell::Cell;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, OnceLock};

use arc_swap::ArcSwapOption;

use crate::defaults::{self, PlatformHook};
use crate::registries::FactoryRegistries;

struct GuardState {
    platform: Option<PlatformHook>,
    initializations: u64,
    teardowns: u64,
}

static STATE: Mutex<GuardState> = Mutex::new(GuardState {
    platform: None,
    initializations: 0,
    teardowns: 0,
});

/// Live guard count. Only modified by a thread holding `STATE`.
static ACTIVE: AtomicUsize = AtomicUsize::new(0);

/// Published registries. Written only while `STATE` is locked.
static CURRENT: LazyLock<ArcSwapOption<FactoryRegistries>> = LazyLock::new(ArcSwapOption::empty);

/// What a guard joined during initialization derefs to until publication.
static UNPUBLISHED: LazyLock<FactoryRegistries> = LazyLock::new(FactoryRegistries::new);

thread_local! {
    /// Set while this thread holds `STATE` and populates the registries.
    static INITIALIZING: Cell<bool> = const { Cell::new(false) };
}

fn lock_state() -> MutexGuard<'static, GuardState> {
    // The state is a handful of counters; it stays consistent even if a
    // platform hook panicked while the lock was held.
    STATE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn initializing_here() -> bool {
    INITIALIZING.with(Cell::get)
}

/// Clears the initializing marker, also when a platform hook panics.
struct InitializingMarker;

impl InitializingMarker {
    fn set() -> Self {
        INITIALIZING.with(|flag| flag.set(true));
        Self
    }
}

impl Drop for InitializingMarker {
    fn drop(&mut self) {
        INITIALIZING.with(|flag| flag.set(false));
    }
}

/// Counts of initialization and teardown runs since process start.
///
/// A teardown is counted when the last guard withdraws the published
/// registries. Factories are released once the last handle to that
/// generation drops, which is later if a [`current`] snapshot is still held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifecycleStats {
    pub initializations: u64,
    pub teardowns: u64,
}

/// Handle that keeps the process-wide registries alive.
///
/// Dereferences to [`FactoryRegistries`].
///
/// ```
/// use rlclient_config::{Configuration, constants::value};
/// use rlclient_core::Model;
/// use rlclient_factory::FactoryGuard;
///
/// let guard = FactoryGuard::acquire();
/// let model = guard.create_model(value::VW, &Configuration::new(), None).unwrap();
/// assert_eq!(model.model_id(), None);
/// ```
pub struct FactoryGuard {
    // Empty only for a guard joined during initialization, until the
    // registries are published.
    registries: OnceLock<Arc<FactoryRegistries>>,
}

impl FactoryGuard {
    /// Acquire a guard, initializing the registries if none are alive.
    ///
    /// Never fails. Registration failures during initialization are logged
    /// and available through [`FactoryRegistries::startup_errors`].
    pub fn acquire() -> Self {
        if initializing_here() {
            return Self::join_initialization();
        }

        let mut state = lock_state();
        let registries = match CURRENT.load_full() {
            Some(registries) => registries,
            None => initialize(&mut state),
        };
        let count = ACTIVE.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(count, "factory guard acquired");
        Self {
            registries: OnceLock::from(registries),
        }
    }

    /// The shared registries.
    pub fn registries(&self) -> &FactoryRegistries {
        if let Some(registries) = self.registries.get() {
            return registries;
        }
        match CURRENT.load_full() {
            Some(published) => self.registries.get_or_init(|| published),
            None => &UNPUBLISHED,
        }
    }

    /// Nested acquisition from a platform hook. The outer `acquire` holds
    /// `STATE` on this thread, so the count is still modified under it.
    fn join_initialization() -> Self {
        let count = ACTIVE.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!(count, "factory guard joined initialization");
        Self {
            registries: OnceLock::new(),
        }
    }
}

fn initialize(state: &mut GuardState) -> Arc<FactoryRegistries> {
    let mut registries = FactoryRegistries::new();
    let errors = {
        let _marker = InitializingMarker::set();
        defaults::register_default_factories(&mut registries, state.platform)
    };
    registries.record_startup_errors(errors);

    let registries = Arc::new(registries);
    CURRENT.store(Some(Arc::clone(&registries)));
    state.initializations += 1;
    tracing::info!(
        startup_errors = registries.startup_errors().len(),
        "factory registries initialized"
    );
    registries
}

impl Clone for FactoryGuard {
    fn clone(&self) -> Self {
        if initializing_here() {
            return Self::join_initialization();
        }
        let _state = lock_state();
        ACTIVE.fetch_add(1, Ordering::SeqCst);
        let registries = OnceLock::new();
        if let Some(published) = self.registries.get() {
            let _ = registries.set(Arc::clone(published));
        }
        Self { registries }
    }
}

impl Drop for FactoryGuard {
    fn drop(&mut self) {
        if initializing_here() {
            // The outer acquisition is not counted yet, so this cannot be
            // the last guard of a published generation.
            let count = ACTIVE.fetch_sub(1, Ordering::SeqCst) - 1;
            tracing::trace!(count, "factory guard released during initialization");
            return;
        }

        let mut state = lock_state();
        let count = ACTIVE.load(Ordering::SeqCst).saturating_sub(1);
        ACTIVE.store(count, Ordering::SeqCst);
        tracing::trace!(count, "factory guard released");
        if count == 0 {
            // The registries themselves are freed when the last handle to
            // them drops, right after this function returns.
            CURRENT.store(None);
            state.teardowns += 1;
            tracing::info!("factory registries torn down");
        }
    }
}

impl Deref for FactoryGuard {
    type Target = FactoryRegistries;

    fn deref(&self) -> &FactoryRegistries {
        self.registries()
    }
}

impl std::fmt::Debug for FactoryGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryGuard")
            .field("registries", &self.registries.get())
            .finish()
    }
}

/// The currently published registries, if any guard is alive.
///
/// Lock-free. The returned handle keeps that generation of registries in
/// memory, but it is no longer published once the last guard drops.
pub fn current() -> Option<Arc<FactoryRegistries>> {
    CURRENT.load_full()
}

/// Number of live guards.
pub fn active_guards() -> usize {
    ACTIVE.load(Ordering::SeqCst)
}

/// Initialization and teardown counts since process start.
pub fn lifecycle_stats() -> LifecycleStats {
    let state = lock_state();
    LifecycleStats {
        initializations: state.initializations,
        teardowns: state.teardowns,
    }
}

/// Install the hook that registers platform factories on initialization.
///
/// Takes effect at the next 0→1 transition; registries that are already
/// published are not modified.
pub fn install_platform_factories(hook: PlatformHook) {
    let mut state = lock_state();
    let active = ACTIVE.load(Ordering::SeqCst);
    if active > 0 {
        tracing::warn!(
            active_guards = active,
            "platform factories installed while registries are live; applies to next initialization"
        );
    }
    state.platform = Some(hook);
}

/// Remove the installed platform hook, if any.
pub fn clear_platform_factories() {
    lock_state().platform = None;
}
