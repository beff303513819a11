use std::sync::Arc;

use clap::Parser;
use lexi_config::Config;
use lexi_core::state::LookupController;
use lexi_core::types::AppEvent;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod events;
mod io;
mod state;
mod ui;


use self::state::AppState;

#[derive(Parser)]
#[command(name = "lexi", about = "Look up word definitions in your terminal")]
struct Cli {
    /// Word to define; omit for an interactive prompt
    word: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexi=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::new();
    if !config.lookup.has_api_key() {
        anyhow::bail!("DICTIONARY_API_KEY is not set; export it or add it to a .env file");
    }

    let state = Arc::new(AppState::new(config));

    match cli.word {
        Some(word) => run_once(state, word).await,
        None => run_interactive(state).await,
    }
}

/// Look one word up, render, exit
async fn run_once(state: Arc<AppState>, word: String) -> anyhow::Result<()> {
    let provider = events::provider_from_state(&state).await;

    let mut controller = LookupController::new();
    controller.set_query(word);

    let Some(pending) = controller.begin_submit() else {
        return Ok(());
    };

    let outcome = events::perform_lookup(provider.as_ref(), &pending.word).await;
    controller.complete(pending.seq, outcome);
    ui::render_state(controller.state());

    Ok(())
}

/// Prompt loop: stdin lines in, rendered lookups out
async fn run_interactive(state: Arc<AppState>) -> anyhow::Result<()> {
    let (events_tx, events_rx) = kanal::bounded_async::<AppEvent>(64);
    let (ui_tx, ui_rx) = kanal::bounded_async::<AppEvent>(64);
    let cancel = CancellationToken::new();

    println!("lexi — type a word, Ctrl+D to quit");

    let event_loop = tokio::spawn(events::event_loop(
        Arc::clone(&state),
        events_rx,
        events_tx.clone(),
        ui_tx,
    ));
    let watcher = tokio::spawn(io::watcher_io(events_tx.clone(), cancel.child_token()));
    let ui = tokio::spawn(ui::ui_loop(ui_rx));

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            cancel.cancel();
        }
        result = event_loop => {
            match result {
                Ok(Ok(())) => tracing::debug!("event loop finished"),
                Ok(Err(e)) => tracing::error!("event loop exited: {e}"),
                Err(e) => tracing::error!("event loop panicked: {e}"),
            }
            cancel.cancel();
        }
        result = watcher => {
            match result {
                Ok(Ok(())) => tracing::debug!("input watcher finished"),
                Ok(Err(e)) => tracing::error!("input watcher exited: {e}"),
                Err(e) => tracing::error!("input watcher panicked: {e}"),
            }
        }
        result = ui => {
            match result {
                Ok(_) => tracing::warn!("ui task exited"),
                Err(e) => tracing::error!("ui task panicked: {e}"),
            }
        }
    }

    Ok(())
}
