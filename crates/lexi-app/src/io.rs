use kanal::AsyncSender;
use lexi_core::types::AppEvent;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Forward stdin lines to the event loop; typing stays responsive while a
/// lookup is in flight
pub async fn watcher_io(
    events_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => match line? {
                Some(line) => events_tx.send(AppEvent::TextInput(line)).await?,
                None => {
                    events_tx.send(AppEvent::InputClosed).await?;
                    break;
                }
            },
        }
    }

    Ok(())
}
