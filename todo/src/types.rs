//! Domain types for the todo widget.
//!
//! The whole widget state is an ordered list of strings plus an optional
//! cursor pointing at the item being edited.

use serde::{Deserialize, Serialize};

/// Label of the submit button when a new item will be appended
pub const ADD_LABEL: &str = "Add Todo";

/// Label of the submit button while an item is being edited
pub const UPDATE_LABEL: &str = "Update";

/// State of the todo list
///
/// `edit_cursor` was a valid index into `items` when it was set. A later
/// `Delete` does not adjust it, so it may point past the end or at a
/// different item afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Items in insertion order; duplicates allowed
    pub items: Vec<String>,
    /// Index of the item being edited, if any
    pub edit_cursor: Option<usize>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            edit_cursor: None,
        }
    }

    /// Creates a state holding `items` with no cursor
    #[must_use]
    pub fn with_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            edit_cursor: None,
        }
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Whether an item is currently being edited
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.edit_cursor.is_some()
    }

    /// Label of the submit button for the current mode
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            UPDATE_LABEL
        } else {
            ADD_LABEL
        }
    }
}

/// Intents that transition the todo list
///
/// Every variant comes either from the view (through the input controller)
/// or from the seed loader. `LoadSeed` is the only one that returns an
/// effect; the others only change state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Replace all items. The cursor is left as is.
    SetAll {
        /// New items, in display order
        items: Vec<String>,
    },

    /// Append an item and leave edit mode
    Add {
        /// Item text, as typed
        text: String,
    },

    /// Replace the item under the cursor and leave edit mode
    Update {
        /// Replacement text, as typed
        text: String,
    },

    /// Remove the item at `index`
    Delete {
        /// Position of the item to remove
        index: usize,
    },

    /// Enter edit mode for the item at `index`
    SetEditCursor {
        /// Position of the item to edit
        index: usize,
    },

    /// Start the seed fetch
    ///
    /// Each `LoadSeed` starts a new fetch; sending it once at startup is
    /// what makes the seed one-shot.
    LoadSeed,
}

impl TodoAction {
    /// Short name for logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetAll { .. } => "set_all",
            Self::Add { .. } => "add",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::SetEditCursor { .. } => "set_edit_cursor",
            Self::LoadSeed => "load_seed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_state_new_is_empty() {
        let state = TodoState::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
        assert_eq!(state.edit_cursor, None);
        assert_eq!(state, TodoState::default());
    }

    #[test]
    fn todo_state_item_lookup() {
        let state = TodoState::with_items(["a", "b"]);
        assert_eq!(state.item(1), Some("b"));
        assert_eq!(state.item(2), None);
    }

    #[test]
    fn submit_label_follows_cursor() {
        let mut state = TodoState::with_items(["a"]);
        assert_eq!(state.submit_label(), ADD_LABEL);
        state.edit_cursor = Some(0);
        assert_eq!(state.submit_label(), UPDATE_LABEL);
    }

    #[test]
    fn todo_action_serializes_tagged() {
        let action = TodoAction::Delete { index: 2 };
        let json = serde_json::to_string(&action).unwrap_or_default();
        assert_eq!(json, r#"{"Delete":{"index":2}}"#);
        assert_eq!(action.name(), "delete");
    }
}
