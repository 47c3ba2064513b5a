//! # Plan Today Runtime
//!
//! Runtime for the Plan Today widget.
//!
//! This crate provides the Store that owns the widget state, runs the reducer
//! and executes the effects it returns.
//!
//! ## Core Components
//!
//! - **Store**: Single owner of state; every transition goes through [`Store::send`]
//! - **Effect Executor**: Runs effect descriptions and feeds resulting actions back
//! - **Teardown**: Stops accepting actions; late effect results are discarded
//!
//! ## Example
//!
//! ```ignore
//! use plan_today_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use plan_today_core::{effect::Effect, reducer::Reducer};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};

/// Prometheus metrics for observability
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store has been torn down and is not accepting new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timeout waiting for effects tracked by an [`EffectHandle`](crate::EffectHandle)
        #[error("Timeout waiting for effects")]
        Timeout,
    }
}

pub use error::StoreError;

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`] to allow waiting for the effects started by
/// that action. Actions fed back by those effects are not tracked.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.send(Action::LoadSeed).await?;
/// handle.wait_with_timeout(Duration::from_secs(5)).await?;
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    /// Create a new handle together with the tracking context used by the executor
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };

        let tracking = EffectTracking {
            counter,
            notifier: Arc::new(tx),
        };

        (handle, tracking)
    }

    /// Create a handle that's already complete
    #[must_use]
    pub fn completed() -> Self {
        let (_tx, rx) = watch::channel(());

        Self {
            effects: Arc::new(AtomicUsize::new(0)),
            completion: rx,
        }
    }

    /// Number of effects still running
    #[must_use]
    pub fn pending(&self) -> usize {
        self.effects.load(Ordering::SeqCst)
    }

    /// Wait for all tracked effects to complete
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            // All trackers dropped means every effect has finished
            if self.completion.changed().await.is_err() {
                break;
            }
        }
    }

    /// Wait for all tracked effects to complete with a timeout
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the timeout expires first.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.pending())
            .finish_non_exhaustive()
    }
}

/// Internal: Effect tracking context passed through effect execution
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: Arc<watch::Sender<()>>,
}

impl EffectTracking {
    /// Increment the effect counter (effect started)
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    /// Decrement the effect counter (effect completed)
    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            // Counter reached zero, notify waiters
            let _ = self.notifier.send(());
        }
    }
}

/// Internal: RAII guard that decrements the effect counter on drop
///
/// Keeps the counter accurate even if the effect panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Guard that decrements an atomic counter on drop (for shutdown tracking)
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{
        Arc, AtomicBool, AtomicCounterGuard, AtomicUsize, DecrementGuard, Duration, Effect,
        EffectHandle, EffectTracking, Ordering, Reducer, RwLock, StoreError,
    };
    use std::convert::Infallible;
    use tokio::sync::broadcast;

    /// Why a transition was not applied
    enum Rejected<Err> {
        TornDown,
        Check(Err),
    }

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; the write lock is held for each reducer call)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// Every state transition, whether it comes from the view or from a
    /// completed effect, goes through [`Store::send`]. Transitions are therefore
    /// serialized and the store has a single writer.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        torn_down: Arc<AtomicBool>,
        pending_effects: Arc<AtomicUsize>,
        /// Actions produced by effects, published after they were applied.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
        A: Send + Clone + std::fmt::Debug + 'static,
        S: Send + Sync + 'static,
        E: Clone + Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// The action broadcast buffers 16 actions; slower observers lag.
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
        }

        /// Create a new Store with custom action broadcast capacity
        ///
        /// # Panics
        ///
        /// Panics if `capacity` is zero.
        #[must_use]
        pub fn with_broadcast_capacity(
            initial_state: S,
            reducer: R,
            environment: E,
            capacity: usize,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(capacity);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                torn_down: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires write lock on state
        /// 2. Calls reducer with (state, action, environment)
        /// 3. Starts the returned effects; they run in spawned tasks
        /// 4. Actions produced by effects are sent back through this same path
        ///
        /// Returns once the transition is applied and effects are started, not
        /// when effects complete. Use the returned [`EffectHandle`] to wait.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store was torn down.
        ///
        /// # Panics
        ///
        /// If the reducer panics, the panic will propagate.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError> {
            let result = self.send_internal(action).await;
            if matches!(result, Err(StoreError::ShutdownInProgress)) {
                tracing::warn!("Rejected action: store has been torn down");
                metrics::counter!("store.actions.rejected").increment(1);
            }
            result
        }

        /// Send an action only if `check` accepts the current state
        ///
        /// `check` runs under the same write lock as the reducer, so the
        /// state it inspects is exactly the state the action is applied to.
        /// Whatever `check` returns on success is handed back alongside the
        /// [`EffectHandle`].
        ///
        /// # Errors
        ///
        /// Returns the error from `check` without reducing, or
        /// [`StoreError::ShutdownInProgress`] (converted into `Err`) if the
        /// store was torn down.
        #[tracing::instrument(skip(self, action, check), name = "store_send_checked")]
        pub async fn send_checked<T, Err, F>(
            &self,
            action: A,
            check: F,
        ) -> Result<(EffectHandle, T), Err>
        where
            F: FnOnce(&S) -> Result<T, Err>,
            Err: From<StoreError>,
        {
            match self.apply(action, check).await {
                Ok(applied) => Ok(applied),
                Err(Rejected::TornDown) => {
                    tracing::warn!("Rejected action: store has been torn down");
                    metrics::counter!("store.actions.rejected").increment(1);
                    Err(StoreError::ShutdownInProgress.into())
                },
                Err(Rejected::Check(error)) => {
                    tracing::debug!("Rejected action: precondition failed");
                    Err(error)
                },
            }
        }

        /// Subscribe to actions produced by effects
        ///
        /// Each action is published after it has been applied, so reading
        /// state on receipt observes its transition.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.items.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Number of effects currently running
        #[must_use]
        pub fn pending_effects(&self) -> usize {
            self.pending_effects.load(Ordering::Acquire)
        }

        /// Whether [`Store::teardown`] has been called
        #[must_use]
        pub fn is_torn_down(&self) -> bool {
            self.torn_down.load(Ordering::Acquire)
        }

        /// Stop accepting actions
        ///
        /// Running effects are not cancelled. Whatever they produce afterwards
        /// is discarded instead of being applied.
        pub fn teardown(&self) {
            if !self.torn_down.swap(true, Ordering::AcqRel) {
                tracing::info!(
                    pending_effects = self.pending_effects(),
                    "Store torn down"
                );
            }
        }

        /// Tear down and wait for running effects to finish
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if effects are still running
        /// when `timeout` elapses.
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            self.teardown();

            let start = std::time::Instant::now();
            let poll_interval = Duration::from_millis(10);

            loop {
                let pending = self.pending_effects();

                if pending == 0 {
                    tracing::debug!("All effects completed, shutdown successful");
                    return Ok(());
                }

                if start.elapsed() >= timeout {
                    tracing::error!(
                        pending_effects = pending,
                        "Shutdown timeout: {} effects still running", pending
                    );
                    return Err(StoreError::ShutdownTimeout(pending));
                }

                tokio::time::sleep(poll_interval).await;
            }
        }

        async fn send_internal(&self, action: A) -> Result<EffectHandle, StoreError> {
            match self.apply(action, |_| Ok::<(), Infallible>(())).await {
                Ok((handle, ())) => Ok(handle),
                Err(Rejected::TornDown) => Err(StoreError::ShutdownInProgress),
                Err(Rejected::Check(never)) => match never {},
            }
        }

        async fn apply<T, Err, F>(
            &self,
            action: A,
            check: F,
        ) -> Result<(EffectHandle, T), Rejected<Err>>
        where
            F: FnOnce(&S) -> Result<T, Err>,
        {
            let (handle, tracking) = EffectHandle::new();

            let (effects, checked) = {
                let mut state = self.state.write().await;

                // Checked under the lock so nothing lands after teardown
                if self.torn_down.load(Ordering::Acquire) {
                    return Err(Rejected::TornDown);
                }

                let checked = check(&*state).map_err(Rejected::Check)?;

                tracing::debug!(?action, "Processing action");
                metrics::counter!("store.actions.total").increment(1);

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                (effects, checked)
            };

            for effect in effects {
                self.execute_effect(effect, tracking.clone());
            }

            Ok((handle, checked))
        }

        /// Execute an effect with tracking
        ///
        /// - `None`: No-op
        /// - `Future`: Spawned; a produced action is sent back to the store.
        ///   If the store was torn down meanwhile, the action is discarded.
        #[allow(clippy::needless_pass_by_value)] // tracking is cloned into the task
        fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                    tracking.increment();

                    self.pending_effects.fetch_add(1, Ordering::SeqCst);
                    let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                    let tracking_clone = tracking.clone();
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = DecrementGuard(tracking_clone);
                        let _pending_guard = pending_guard;

                        let Some(action) = fut.await else {
                            tracing::trace!("Effect::Future completed with no action");
                            return;
                        };

                        match store.send_internal(action.clone()).await {
                            Ok(_) => {
                                let _ = store.action_broadcast.send(action);
                            },
                            Err(error) => {
                                tracing::debug!(
                                    ?action,
                                    %error,
                                    "Discarded action produced after teardown"
                                );
                                metrics::counter!("store.actions.discarded").increment(1);
                            },
                        }
                    });
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                torn_down: Arc::clone(&self.torn_down),
                pending_effects: Arc::clone(&self.pending_effects),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;
