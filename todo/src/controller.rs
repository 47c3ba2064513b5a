//! Input controller: turns view events into intents.
//!
//! Owns the single pending-text field of the input box. All state changes
//! still go through the store.

use crate::types::TodoAction;
use crate::TodoStore;
use plan_today_runtime::{EffectHandle, StoreError};
use thiserror::Error;

/// Errors reported by the input controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// The view asked for an item that does not exist
    #[error("No todo at index {index} (list has {len} items)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Current number of items
        len: usize,
    },

    /// The store refused the intent
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Pending input plus the dispatch rules of the form
#[derive(Debug, Default, Clone)]
pub struct InputController {
    pending: String,
}

impl InputController {
    /// Creates a controller with empty pending text
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: String::new(),
        }
    }

    /// Current pending text
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Replaces the pending text (the input box changed)
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Submits the pending text.
    ///
    /// Blank text is ignored and returns `Ok(None)`. Otherwise sends `Update`
    /// while an item is being edited and `Add` otherwise, then clears the
    /// pending text.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Store`] if the store was torn down; the
    /// pending text is kept in that case.
    pub async fn submit(&mut self, store: &TodoStore) -> Result<Option<EffectHandle>, ControllerError> {
        if self.pending.trim().is_empty() {
            tracing::trace!("Ignored blank submission");
            return Ok(None);
        }

        let editing = store.state(|s| s.is_editing()).await;
        let text = self.pending.clone();
        let action = if editing {
            TodoAction::Update { text }
        } else {
            TodoAction::Add { text }
        };

        tracing::debug!(action = action.name(), "Submitting pending text");
        let handle = store.send(action).await?;
        self.pending.clear();
        Ok(Some(handle))
    }

    /// Starts editing the item at `index`: moves the edit cursor there and
    /// copies the item into the pending text.
    ///
    /// The index is checked against the state `SetEditCursor` is applied to,
    /// so a seed landing concurrently cannot make this report an edit that
    /// never happened.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::IndexOutOfRange`] without dispatching if
    /// there is no such item, or [`ControllerError::Store`] if the store was
    /// torn down.
    pub async fn edit(&mut self, store: &TodoStore, index: usize) -> Result<EffectHandle, ControllerError> {
        let (handle, item) = store
            .send_checked(TodoAction::SetEditCursor { index }, |s| {
                s.item(index)
                    .map(str::to_owned)
                    .ok_or(ControllerError::IndexOutOfRange { index, len: s.len() })
            })
            .await?;

        self.pending = item;
        Ok(handle)
    }

    /// Deletes the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::IndexOutOfRange`] without dispatching if
    /// the list the delete would apply to has no such item, or
    /// [`ControllerError::Store`] if the store was torn down.
    pub async fn delete(&self, store: &TodoStore, index: usize) -> Result<EffectHandle, ControllerError> {
        let (handle, ()) = store
            .send_checked(TodoAction::Delete { index }, |s| {
                if index < s.len() {
                    Ok(())
                } else {
                    Err(ControllerError::IndexOutOfRange { index, len: s.len() })
                }
            })
            .await?;

        Ok(handle)
    }
}
