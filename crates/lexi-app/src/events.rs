use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_client::{DictionaryProvider, ShecodesClient};
use lexi_core::state::{LookupController, LookupState, Pending};
use lexi_core::types::{AppEvent, LookupOutcome};

use crate::state::AppState;

/// Build the HTTP provider from config
pub async fn provider_from_state(state: &AppState) -> Arc<dyn DictionaryProvider> {
    let config = state.config.read().await;
    Arc::new(ShecodesClient::new(
        config.lookup.api_url.clone(),
        config.lookup.api_key.clone(),
    ))
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    events_rx: AsyncReceiver<AppEvent>,
    events_tx: AsyncSender<AppEvent>,
    ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let provider = provider_from_state(&state).await;
    run_events(provider, events_rx, events_tx, ui_tx).await
}

/// Drive the lookup controller from the event stream.
///
/// Lookups run as spawned tasks and report back on `events_tx`; completions
/// whose sequence number is no longer current are dropped, so overlapping
/// submissions cannot render out of order.
pub async fn run_events(
    provider: Arc<dyn DictionaryProvider>,
    events_rx: AsyncReceiver<AppEvent>,
    events_tx: AsyncSender<AppEvent>,
    ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut controller = LookupController::new();

    tracing::debug!("event loop started");
    loop {
        let event = events_rx.recv().await?;

        match event {
            AppEvent::TextInput(text) => {
                controller.set_query(text);
                if let Some(pending) = controller.begin_submit() {
                    tracing::info!("looking up '{}'", pending.word);
                    spawn_lookup(Arc::clone(&provider), pending, events_tx.clone());
                }
                // Blank input is a silent no-op
            }
            AppEvent::LookupCompleted { seq, outcome } => {
                if !controller.complete(seq, outcome) {
                    tracing::debug!(seq, "discarding stale lookup completion");
                    continue;
                }

                match controller.state() {
                    LookupState::Success(def) => {
                        ui_tx.send(AppEvent::ShowDefinition(def.clone())).await?;
                    }
                    LookupState::Failure(message) => {
                        ui_tx.send(AppEvent::ShowError(message.clone())).await?;
                    }
                    LookupState::Idle | LookupState::Loading => {}
                }
            }
            AppEvent::InputClosed => {
                tracing::debug!("input closed, leaving event loop");
                break;
            }
            AppEvent::ShowDefinition(_) | AppEvent::ShowError(_) => {
                // UI-only events, nothing to do here
            }
        }
    }

    Ok(())
}

/// Issue one request and collapse any failure into the generic outcome;
/// the cause only goes to the log
pub async fn perform_lookup(provider: &dyn DictionaryProvider, word: &str) -> LookupOutcome {
    match provider.define(word).await {
        Ok(def) => LookupOutcome::Resolved(def),
        Err(e) => {
            tracing::warn!("lookup for '{}' failed: {e}", word);
            LookupOutcome::Failed
        }
    }
}

fn spawn_lookup(
    provider: Arc<dyn DictionaryProvider>,
    pending: Pending,
    events_tx: AsyncSender<AppEvent>,
) {
    tokio::spawn(async move {
        let outcome = perform_lookup(provider.as_ref(), &pending.word).await;
        let completed = AppEvent::LookupCompleted {
            seq: pending.seq,
            outcome,
        };
        if events_tx.send(completed).await.is_err() {
            tracing::debug!("event loop gone, dropping completion");
        }
    });
}
