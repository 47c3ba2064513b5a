//! Integration tests for Store serialization
//!
//! Every transition, from callers or from effects, goes through the same
//! write path. These tests drive the store from many tasks at once and check
//! that no transition is lost.

#![allow(clippy::unwrap_used, clippy::panic)] // Test code can use unwrap/panic

use plan_today_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use plan_today_runtime::{Store, StoreError};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
struct ListState {
    entries: Vec<String>,
}

#[derive(Debug, Clone)]
enum ListAction {
    Push(String),
    PushLater(String),
}

#[derive(Clone)]
struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ListAction::Push(entry) => {
                state.entries.push(entry);
                smallvec![Effect::None]
            },
            ListAction::PushLater(entry) => smallvec![Effect::future(async move {
                tokio::task::yield_now().await;
                Some(ListAction::Push(entry))
            })],
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("plan_today_runtime=trace")
        .try_init();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sends_and_feedback_are_all_applied() {
    init_tracing();
    let store = Store::new(ListState::default(), ListReducer, ());

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let action = if i % 2 == 0 {
                    ListAction::Push(format!("direct-{i}"))
                } else {
                    ListAction::PushLater(format!("later-{i}"))
                };
                let mut handle = store.send(action).await.unwrap();
                handle.wait_with_timeout(Duration::from_secs(2)).await
            })
        })
        .collect();

    for task in tasks {
        if let Err(e) = task.await.unwrap() {
            panic!("effects did not finish: {e}");
        }
    }

    let entries = store.state(|s| s.entries.clone()).await;
    assert_eq!(entries.len(), 20);
    assert_eq!(entries.iter().filter(|e| e.starts_with("later-")).count(), 10);
    assert_eq!(store.pending_effects(), 0);
}

#[tokio::test]
async fn teardown_is_shared_between_clones() {
    let store = Store::new(ListState::default(), ListReducer, ());
    let view_handle = store.clone();

    view_handle.teardown();

    assert!(store.is_torn_down());
    assert_eq!(
        store.send(ListAction::Push("late".into())).await.unwrap_err(),
        StoreError::ShutdownInProgress
    );
}

#[test]
fn state_readable_from_blocking_context() {
    let store = Store::new(ListState::default(), ListReducer, ());
    tokio_test::block_on(async {
        let _ = store.send(ListAction::Push("one".into())).await;
    });
    let len = tokio_test::block_on(store.state(|s| s.entries.len()));
    assert_eq!(len, 1);
}
