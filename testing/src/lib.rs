//! # Plan Today Testing
//!
//! Testing utilities and helpers for the Plan Today widget.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Property-based testing strategies
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use plan_today_testing::mocks::StaticSeedSource;
//! use std::sync::Arc;
//!
//! #[tokio::test]
//! async fn seeds_the_list() {
//!     let source = Arc::new(StaticSeedSource::new(["a", "b"]));
//!     let store = todo_store(source.clone());
//!
//!     store.send(TodoAction::LoadSeed).await?.wait().await;
//!
//!     assert_eq!(store.state(|s| s.items.len()).await, 2);
//!     assert_eq!(source.calls(), 1);
//! }
//! ```


/// Mock implementations of Environment traits
///
/// - `StaticSeedSource`: Resolves immediately with fixed titles
/// - `FailingSeedSource`: Always fails with a given error
/// - `GatedSeedSource`: Resolves only after [`GatedSeedSource::release`]
pub mod mocks {
    use futures::future::BoxFuture;
    use plan_today_core::environment::{SeedError, SeedSource};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Seed source that resolves immediately with fixed titles.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_today_testing::mocks::StaticSeedSource;
    /// use plan_today_core::environment::SeedSource;
    ///
    /// let source = StaticSeedSource::new(["a", "b", "c"]);
    /// let titles = tokio_test::block_on(source.fetch_titles(2)).unwrap();
    /// assert_eq!(titles, vec!["a", "b"]);
    /// assert_eq!(source.calls(), 1);
    /// ```
    #[derive(Debug, Default)]
    pub struct StaticSeedSource {
        titles: Vec<String>,
        calls: AtomicUsize,
    }

    impl StaticSeedSource {
        /// Create a source that yields `titles` (truncated to the requested limit)
        #[must_use]
        pub fn new<I, T>(titles: I) -> Self
        where
            I: IntoIterator<Item = T>,
            T: Into<String>,
        {
            Self {
                titles: titles.into_iter().map(Into::into).collect(),
                calls: AtomicUsize::new(0),
            }
        }

        /// Number of times `fetch_titles` was called
        #[must_use]
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SeedSource for StaticSeedSource {
        fn fetch_titles(&self, limit: usize) -> BoxFuture<'_, Result<Vec<String>, SeedError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let titles = self.titles.iter().take(limit).cloned().collect();
            Box::pin(async move { Ok(titles) })
        }
    }

    /// Seed source that always fails.
    #[derive(Debug)]
    pub struct FailingSeedSource {
        error: SeedError,
        calls: AtomicUsize,
    }

    impl FailingSeedSource {
        /// Create a source that fails with `error`
        #[must_use]
        pub const fn new(error: SeedError) -> Self {
            Self {
                error,
                calls: AtomicUsize::new(0),
            }
        }

        /// Create a source that fails as if the network were unreachable
        #[must_use]
        pub fn unreachable() -> Self {
            Self::new(SeedError::RequestFailed("connection refused".to_string()))
        }

        /// Number of times `fetch_titles` was called
        #[must_use]
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SeedSource for FailingSeedSource {
        fn fetch_titles(&self, _limit: usize) -> BoxFuture<'_, Result<Vec<String>, SeedError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let error = self.error.clone();
            Box::pin(async move { Err(error) })
        }
    }

    /// Seed source whose fetch stays pending until released.
    ///
    /// Lets tests interleave user intents or teardown with an in-flight fetch.
    #[derive(Debug, Default)]
    pub struct GatedSeedSource {
        inner: StaticSeedSource,
        gate: Notify,
    }

    impl GatedSeedSource {
        /// Create a gated source that yields `titles` once released
        #[must_use]
        pub fn new<I, T>(titles: I) -> Self
        where
            I: IntoIterator<Item = T>,
            T: Into<String>,
        {
            Self {
                inner: StaticSeedSource::new(titles),
                gate: Notify::new(),
            }
        }

        /// Let the pending (or next) fetch resolve
        pub fn release(&self) {
            self.gate.notify_one();
        }

        /// Number of times `fetch_titles` was called
        #[must_use]
        pub fn calls(&self) -> usize {
            self.inner.calls()
        }
    }

    impl SeedSource for GatedSeedSource {
        fn fetch_titles(&self, limit: usize) -> BoxFuture<'_, Result<Vec<String>, SeedError>> {
            let fetch = self.inner.fetch_titles(limit);
            Box::pin(async move {
                self.gate.notified().await;
                fetch.await
            })
        }
    }
}

/// Property-based testing strategies using proptest.
pub mod properties {
    use proptest::collection::vec;
    use proptest::prelude::*;

    /// Text a user could submit: non-blank, possibly padded with spaces
    pub fn todo_text() -> impl Strategy<Value = String> {
        "[ ]{0,2}[a-zA-Z0-9][a-zA-Z0-9 ,.!?-]{0,30}"
    }

    /// Text that is empty or whitespace only
    pub fn blank_text() -> impl Strategy<Value = String> {
        "[ \t\n]{0,6}"
    }

    /// A todo list of up to `max_len` items; duplicates are allowed
    pub fn todo_items(max_len: usize) -> impl Strategy<Value = Vec<String>> {
        vec(prop_oneof![todo_text(), Just("repeat".to_string())], 0..=max_len)
    }

    /// A non-empty todo list together with a valid index into it
    pub fn items_with_index(max_len: usize) -> impl Strategy<Value = (Vec<String>, usize)> {
        vec(todo_text(), 1..=max_len.max(1)).prop_flat_map(|items| {
            let len = items.len();
            (Just(items), 0..len)
        })
    }
}

// Re-export commonly used items
pub use mocks::{FailingSeedSource, GatedSeedSource, StaticSeedSource};
pub use reducer_test::{assertions, ReducerTest};
