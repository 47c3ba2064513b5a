//! Todo list widget built on a pure reducer.
//!
//! The widget keeps an ordered list of strings plus an optional edit cursor.
//! At startup it fetches the first few titles from a remote collection and
//! replaces the list with them; after that every change is a user intent
//! (add, update, delete, start editing) dispatched through the store.
//!
//! # Quick Start
//!
//! ```no_run
//! use plan_today::{HttpSeedSource, TodoAction, TodoEnvironment, TodoReducer, TodoState, TodoStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::new(Arc::new(HttpSeedSource::new(
//!     "https://jsonplaceholder.typicode.com/todos",
//! )));
//! let store = TodoStore::new(TodoState::new(), TodoReducer::new(), env);
//!
//! // Seed the list and wait for the fetch to finish
//! store.send(TodoAction::LoadSeed).await?.wait().await;
//!
//! store.send(TodoAction::Add { text: "Buy milk".to_string() }).await?;
//!
//! let state = store.state(Clone::clone).await;
//! println!("{} items", state.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod environment;
pub mod reducer;
pub mod seed;
pub mod types;
pub mod view;

use plan_today_runtime::Store;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use controller::{ControllerError, InputController};
pub use environment::{TodoEnvironment, DEFAULT_SEED_LIMIT};
pub use reducer::{apply, TodoReducer};
pub use seed::{load_seed, HttpSeedSource, DEFAULT_SEED_URL};
pub use types::{TodoAction, TodoState};

/// Store running the todo reducer
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;
