//! Reducer logic for the todo list.
//!
//! Transitions are total: indices that do not fit the current list are
//! ignored instead of panicking. The view only offers valid indices, so an
//! ignored intent points at a caller bug and is logged.

use crate::environment::TodoEnvironment;
use crate::seed;
use crate::types::{TodoAction, TodoState};
use plan_today_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use std::sync::Arc;

/// Reducer for the todo list
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Applies the state half of an action
    fn transition(state: &mut TodoState, action: TodoAction) {
        match action {
            TodoAction::SetAll { items } => {
                state.items = items;
            },
            TodoAction::Add { text } => {
                state.items.push(text);
                state.edit_cursor = None;
            },
            TodoAction::Update { text } => {
                let Some(index) = state.edit_cursor.take() else {
                    tracing::warn!("Ignored update: no item is being edited");
                    return;
                };
                match state.items.get_mut(index) {
                    Some(item) => *item = text,
                    None => tracing::warn!(
                        index,
                        len = state.items.len(),
                        "Ignored update: edit cursor is stale"
                    ),
                }
            },
            TodoAction::Delete { index } => {
                if index < state.items.len() {
                    // Edit cursor is not adjusted
                    state.items.remove(index);
                } else {
                    tracing::warn!(index, len = state.items.len(), "Ignored delete: index out of range");
                }
            },
            TodoAction::SetEditCursor { index } => {
                if index < state.items.len() {
                    state.edit_cursor = Some(index);
                } else {
                    tracing::warn!(
                        index,
                        len = state.items.len(),
                        "Ignored edit: index out of range"
                    );
                }
            },
            TodoAction::LoadSeed => {},
        }
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::trace!(action = action.name(), "Reducing");

        match action {
            TodoAction::LoadSeed => {
                let source = Arc::clone(&env.seed_source);
                let limit = env.seed_limit;
                smallvec![Effect::future(seed::load_seed(source, limit))]
            },
            action => {
                Self::transition(state, action);
                SmallVec::new()
            },
        }
    }
}

/// Pure transition: returns the state that follows `state` under `action`.
///
/// Effects are not produced here; `LoadSeed` leaves the state unchanged.
///
/// ```
/// use plan_today::{apply, TodoAction, TodoState};
///
/// let state = apply(TodoState::new(), TodoAction::Add { text: "Buy milk".into() });
/// assert_eq!(state.items, vec!["Buy milk"]);
/// ```
#[must_use]
pub fn apply(mut state: TodoState, action: TodoAction) -> TodoState {
    TodoReducer::transition(&mut state, action);
    state
}
