//! # CSA Runtime
//!
//! Runtime implementation for the CSA club registration architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds produced
//!   actions back to the reducer
//! - **Action Broadcast**: Observers can subscribe to actions produced by
//!   effects (request-response patterns, UI feedback)
//!
//! ## Example
//!
//! ```ignore
//! use csa_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use csa_core::{effect::Effect, reducer::Reducer};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, broadcast};
use tokio::task::JoinHandle;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timeout waiting for a matching action or effect completion
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed
        ///
        /// The action broadcast channel was closed, typically because the
        /// store is shutting down.
        #[error("Action broadcast channel closed")]
        ChannelClosed,

        /// A spawned effect task panicked or was cancelled
        #[error("Effect task failed: {0}")]
        TaskJoinError(#[from] tokio::task::JoinError),
    }
}

pub use error::StoreError;

/// Handle to the effect tasks spawned by a single `send` call
///
/// `send()` returns after *starting* effect execution, not after completion.
/// Await this handle when the caller needs the cascade of effects (including
/// actions they feed back) to have finished.
#[derive(Debug)]
pub struct EffectHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl EffectHandle {
    const fn new(tasks: Vec<JoinHandle<()>>) -> Self {
        Self { tasks }
    }

    /// Wait for all effects spawned by the originating `send` to complete
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskJoinError`] if an effect task panicked.
    pub async fn wait(self) -> Result<(), StoreError> {
        for task in self.tasks {
            task.await?;
        }
        Ok(())
    }

    /// Wait for effect completion with a timeout
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the effects are still running when
    /// the timeout expires, or [`StoreError::TaskJoinError`] if a task
    /// panicked.
    pub async fn wait_with_timeout(self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)?
    }
}

/// The Store - runtime for reducer-driven features
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with action feedback loop)
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
    shutdown: Arc<AtomicBool>,
    pending_effects: Arc<AtomicUsize>,
    /// Action broadcast channel for observing actions produced by effects.
    ///
    /// Only actions produced by effects (e.g. from `Effect::Future` or
    /// `Effect::Delay`) are broadcast, not the initial action passed to
    /// `send`. This enables request-response patterns.
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// Uses the default action broadcast capacity of 16; increase with
    /// [`Store::with_broadcast_capacity`] when observers frequently lag.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Create a new store with a custom action broadcast capacity
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
            shutdown: Arc::new(AtomicBool::new(false)),
            pending_effects: Arc::new(AtomicUsize::new(0)),
            action_broadcast,
        }
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Executes returned effects asynchronously
    /// 4. Effects may produce more actions (feedback loop)
    ///
    /// The reducer executes synchronously while holding the write lock;
    /// effects execute in spawned tasks and may complete after `send`
    /// returns. Await the returned [`EffectHandle`] to wait for them.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting
    /// down.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError> {
        if self.shutdown.load(Ordering::Acquire) {
            return Err(StoreError::ShutdownInProgress);
        }

        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        let tasks = effects
            .into_iter()
            .map(|effect| self.spawn_effect(effect))
            .collect();

        Ok(EffectHandle::new(tasks))
    }

    /// Send an action and wait for a matching result action
    ///
    /// Designed for request-response patterns: subscribes to the action
    /// broadcast *before* sending (avoiding race conditions), sends the
    /// initial action, then waits for the first effect-produced action
    /// matching the predicate.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`]: timeout expired before a matching action
    /// - [`StoreError::ChannelClosed`]: the broadcast channel closed
    /// - [`StoreError::ShutdownInProgress`]: the store is shutting down
    pub async fn send_and_wait_for<F>(
        &self,
        action: A,
        predicate: F,
        timeout: Duration,
    ) -> Result<A, StoreError>
    where
        F: Fn(&A) -> bool,
    {
        let mut receiver = self.action_broadcast.subscribe();
        let _handle = self.send(action).await?;

        let deadline = std::time::Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            if remaining.is_zero() {
                return Err(StoreError::Timeout);
            }

            match tokio::time::timeout(remaining, receiver.recv()).await {
                Err(_) => return Err(StoreError::Timeout),
                Ok(Ok(produced)) => {
                    if predicate(&produced) {
                        return Ok(produced);
                    }
                },
                // Dropped actions are tolerated; the timeout catches a miss.
                Ok(Err(broadcast::error::RecvError::Lagged(skipped))) => {
                    tracing::warn!(skipped, "action broadcast receiver lagged");
                },
                Ok(Err(broadcast::error::RecvError::Closed)) => {
                    return Err(StoreError::ChannelClosed);
                },
            }
        }
    }

    /// Read state through a projection function
    ///
    /// ```ignore
    /// let total = store.state(|s| s.totals().grand_total).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Subscribe to actions produced by effects
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Number of effect tasks currently running
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.pending_effects.load(Ordering::Acquire)
    }

    /// Initiate graceful shutdown of the store
    ///
    /// Sets the shutdown flag (rejecting new actions), then waits for
    /// pending effects to complete.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before
    /// all pending effects complete.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        tracing::info!("Initiating graceful shutdown");
        self.shutdown.store(true, Ordering::Release);

        let start = std::time::Instant::now();
        let poll_interval = Duration::from_millis(50);

        loop {
            let pending = self.pending_effects.load(Ordering::Acquire);

            if pending == 0 {
                tracing::info!("All effects completed, shutdown successful");
                return Ok(());
            }

            if start.elapsed() >= timeout {
                tracing::error!(pending_effects = pending, "Shutdown timed out");
                return Err(StoreError::ShutdownTimeout(pending));
            }

            tracing::debug!(
                pending_effects = pending,
                elapsed_ms = start.elapsed().as_millis(),
                "Waiting for effects to complete"
            );

            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Spawn a top-level effect task, tracking it for shutdown
    fn spawn_effect(&self, effect: Effect<A>) -> JoinHandle<()> {
        self.pending_effects.fetch_add(1, Ordering::AcqRel);
        let store = self.clone();

        tokio::spawn(async move {
            store.run_effect(effect).await;
            store.pending_effects.fetch_sub(1, Ordering::AcqRel);
        })
    }

    /// Execute an effect description, feeding produced actions back
    async fn run_effect(&self, effect: Effect<A>) {
        match effect {
            Effect::None => {},
            Effect::Parallel(effects) => {
                let futures = effects.into_iter().map(|e| self.run_effect_boxed(e));
                futures::future::join_all(futures).await;
            },
            Effect::Sequential(effects) => {
                for e in effects {
                    self.run_effect_boxed(e).await;
                }
            },
            Effect::Delay { duration, action } => {
                tokio::time::sleep(duration).await;
                self.feedback(*action).await;
            },
            Effect::Future(future) => {
                if let Some(action) = future.await {
                    self.feedback(action).await;
                }
            },
        }
    }

    /// Boxed recursion point for nested effects
    fn run_effect_boxed<'a>(
        &'a self,
        effect: Effect<A>,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(self.run_effect(effect))
    }

    /// Feed an effect-produced action back through the reducer
    ///
    /// The action is broadcast to observers first, then reduced; any effects
    /// it yields run inline on the same task so `EffectHandle::wait` covers
    /// the whole cascade.
    async fn feedback(&self, action: A) {
        let _ = self.action_broadcast.send(action.clone());

        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        for effect in effects {
            self.run_effect_boxed(effect).await;
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
            shutdown: Arc::clone(&self.shutdown),
            pending_effects: Arc::clone(&self.pending_effects),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}
