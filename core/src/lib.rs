//! # Plan Today Core
//!
//! Core traits and types for the Plan Today todo widget.
//!
//! This crate provides the abstractions the widget is built from: a pure
//! reducer over a state value, effect descriptions returned by that reducer,
//! and the environment traits through which the outside world is injected.
//!
//! ## Core Concepts
//!
//! - **State**: Owned, cloneable domain data (the todo list and its edit cursor)
//! - **Action**: Every input to a reducer (user intents and effect results)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Example
//!
//! ```
//! use plan_today_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct Counter {
//!     count: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Counter,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = Counter::default();
//! let effects = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! assert_eq!(effects.len(), 1);
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed by the runtime
        ///
        /// Effects are never executed here. Anything asynchronous is wrapped
        /// in an [`Effect`] and handed back to the caller.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution).
pub mod effect {
    use futures::future::BoxFuture;
    use std::future::Future;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Future(BoxFuture<'static, Option<Action>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Wrap an async computation into an `Effect::Future`
        #[must_use]
        pub fn future<F>(fut: F) -> Self
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }

        /// Returns `true` for `Effect::None`
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use futures::future::BoxFuture;
    use thiserror::Error;

    /// Errors produced while loading seed items.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum SeedError {
        /// The request never produced a response (DNS, connect, TLS, I/O)
        #[error("Seed request failed: {0}")]
        RequestFailed(String),

        /// The source answered with a non-success status
        #[error("Seed source returned status {status}: {body}")]
        UnexpectedStatus {
            /// HTTP status code
            status: u16,
            /// Response body, possibly empty
            body: String,
        },

        /// The response body could not be decoded into titles
        #[error("Malformed seed response: {0}")]
        MalformedResponse(String),
    }

    /// Source of the initial todo items.
    ///
    /// Fetched exactly once at startup. Implementations must be `Send + Sync`
    /// so they can be shared as `Arc<dyn SeedSource>` and captured by effects.
    ///
    /// Returns an explicit boxed future instead of using `async fn` to stay
    /// dyn-compatible.
    pub trait SeedSource: Send + Sync {
        /// Fetch at most `limit` titles, in source order.
        ///
        /// # Errors
        ///
        /// Returns a [`SeedError`] when the source cannot be reached or its
        /// response cannot be decoded.
        fn fetch_titles(&self, limit: usize) -> BoxFuture<'_, Result<Vec<String>, SeedError>>;
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::environment::SeedError;

    #[test]
    fn effect_debug_hides_future() {
        let effect: Effect<u8> = Effect::future(async { Some(1) });
        assert_eq!(format!("{effect:?}"), "Effect::Future(<future>)");
        assert_eq!(format!("{:?}", Effect::<u8>::None), "Effect::None");
    }

    #[test]
    fn effect_future_resolves_to_action() {
        let Effect::Future(fut) = Effect::future(async { Some(7_u8) }) else {
            unreachable!("Effect::future always builds a Future variant");
        };
        assert_eq!(tokio_test::block_on(fut), Some(7));
    }

    #[test]
    fn seed_error_messages() {
        let err = SeedError::UnexpectedStatus {
            status: 503,
            body: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "Seed source returned status 503: busy");
        assert!(
            SeedError::MalformedResponse("eof".into())
                .to_string()
                .contains("eof")
        );
    }
}
