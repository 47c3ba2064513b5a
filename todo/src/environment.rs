//! Environment dependencies for the todo reducer.

use plan_today_core::environment::SeedSource;
use std::sync::Arc;

/// Number of seed titles kept when nothing else is configured
pub const DEFAULT_SEED_LIMIT: usize = 6;

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Where the initial items come from
    pub seed_source: Arc<dyn SeedSource>,
    /// How many titles to keep from the seed source
    pub seed_limit: usize,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment` keeping [`DEFAULT_SEED_LIMIT`] titles
    #[must_use]
    pub fn new(seed_source: Arc<dyn SeedSource>) -> Self {
        Self {
            seed_source,
            seed_limit: DEFAULT_SEED_LIMIT,
        }
    }

    /// Overrides the number of seed titles kept
    #[must_use]
    pub const fn with_seed_limit(mut self, seed_limit: usize) -> Self {
        self.seed_limit = seed_limit;
        self
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment")
            .field("seed_limit", &self.seed_limit)
            .finish_non_exhaustive()
    }
}
