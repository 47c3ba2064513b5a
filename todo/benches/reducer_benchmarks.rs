//! Todo reducer benchmarks
//!
//! Measures the pure transitions on a list of realistic size and the cost of
//! dispatching them through the store.
//!
//! Run with: `cargo bench -p plan-today`

#![allow(missing_docs)] // Benchmarks don't need extensive docs
#![allow(clippy::expect_used)] // Benchmarks can use expect for setup

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use plan_today::{apply, TodoAction, TodoEnvironment, TodoReducer, TodoState, TodoStore};
use plan_today_testing::StaticSeedSource;
use std::sync::Arc;

fn list_of(len: usize) -> TodoState {
    TodoState::with_items((0..len).map(|i| format!("todo number {i}")))
}

/// Benchmark pure transitions
fn benchmark_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    group.throughput(Throughput::Elements(1));

    for len in [6, 100] {
        let state = list_of(len);

        group.bench_function(format!("add/{len}"), |b| {
            b.iter_batched(
                || state.clone(),
                |s| apply(s, black_box(TodoAction::Add { text: "new".into() })),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("edit_update/{len}"), |b| {
            b.iter_batched(
                || state.clone(),
                |s| {
                    let s = apply(s, black_box(TodoAction::SetEditCursor { index: len / 2 }));
                    apply(s, black_box(TodoAction::Update { text: "changed".into() }))
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("delete_first/{len}"), |b| {
            b.iter_batched(
                || state.clone(),
                |s| apply(s, black_box(TodoAction::Delete { index: 0 })),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark dispatch through the store
fn benchmark_store_send(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_send");
    group.throughput(Throughput::Elements(1));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime");

    group.bench_function("edit_then_update", |b| {
        let env = TodoEnvironment::new(Arc::new(StaticSeedSource::default()));
        let store = TodoStore::new(list_of(6), TodoReducer::new(), env);

        b.to_async(&runtime).iter(|| async {
            let _ = store.send(black_box(TodoAction::SetEditCursor { index: 3 })).await;
            let _ = store.send(black_box(TodoAction::Update { text: "changed".into() })).await;
        });
    });

    group.bench_function("send_and_read_state", |b| {
        let env = TodoEnvironment::new(Arc::new(StaticSeedSource::default()));
        let store = TodoStore::new(list_of(6), TodoReducer::new(), env);

        b.to_async(&runtime).iter(|| async {
            let _ = store.send(black_box(TodoAction::SetEditCursor { index: 0 })).await;
            let _len = store.state(TodoState::len).await;
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_apply, benchmark_store_send);
criterion_main!(benches);
