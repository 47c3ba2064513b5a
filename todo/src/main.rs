//! Terminal front end for the todo widget.
//!
//! Renders the list to stdout and reads one command per line from stdin.
//! Logs go to stderr so they do not interleave with the rendered list.

use anyhow::Context;
use plan_today::view::{self, Command};
use plan_today::{
    Config, ControllerError, HttpSeedSource, InputController, TodoAction, TodoEnvironment,
    TodoReducer, TodoState, TodoStore,
};
use plan_today_runtime::metrics::MetricsServer;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast::error::RecvError, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(addr) = config.metrics_addr {
        let mut server = MetricsServer::new(addr);
        if let Err(error) = server.start() {
            tracing::warn!(%error, "Metrics disabled");
        }
    }

    let source = HttpSeedSource::new(config.seed_url.clone());
    tracing::info!(url = source.url(), limit = config.seed_limit, "Starting");

    let env = TodoEnvironment::new(Arc::new(source)).with_seed_limit(config.seed_limit);
    let store = TodoStore::new(TodoState::new(), TodoReducer::new(), env);
    let controller = Arc::new(Mutex::new(InputController::new()));

    // Re-render when the seed lands
    let mut actions = store.subscribe_actions();
    let observer = {
        let store = store.clone();
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            loop {
                match actions.recv().await {
                    Ok(TodoAction::SetAll { .. }) => {
                        let controller = controller.lock().await;
                        show(&store, &controller).await;
                    },
                    Ok(_) | Err(RecvError::Lagged(_)) => {},
                    Err(RecvError::Closed) => break,
                }
            }
        })
    };

    // Not awaited: the list is usable while the fetch is in flight
    store.send(TodoAction::LoadSeed).await?;

    show(&store, &*controller.lock().await).await;
    println!("Type :h for help");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let mut controller = controller.lock().await;

        let outcome = match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => {
                println!("{}", view::HELP);
                continue;
            },
            Command::Unknown(input) => {
                println!("Unknown command {input:?}; type :h for help");
                continue;
            },
            Command::Submit(text) => {
                controller.set_pending(text);
                controller.submit(&store).await.map(|_| ())
            },
            Command::SubmitPending => controller.submit(&store).await.map(|_| ()),
            Command::Edit(index) => controller.edit(&store, index).await.map(|_| ()),
            Command::Delete(index) => controller.delete(&store, index).await.map(|_| ()),
        };

        match outcome {
            Ok(()) => show(&store, &controller).await,
            Err(ControllerError::IndexOutOfRange { index, len }) => {
                println!("No item {index}; the list has {len}");
            },
            Err(error @ ControllerError::Store(_)) => return Err(error.into()),
        }
    }

    // A seed fetch still in flight is discarded
    store.teardown();
    observer.abort();
    tracing::info!("Stopped");

    Ok(())
}

async fn show(store: &TodoStore, controller: &InputController) {
    let state = store.state(Clone::clone).await;
    print!("{}", view::render(&state, controller.pending()));
}
