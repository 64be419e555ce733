//! HTTP server loop with a bounded graceful shutdown.

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// How [`serve`] came to a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every in-flight request finished inside the grace period.
    Drained,
    /// The grace period ran out and the server task was aborted. Connection
    /// tasks may still be alive and holding pooled database connections;
    /// they end when the runtime is dropped.
    Forced,
}

/// Serve `app` until `signal` resolves, then let in-flight requests drain
/// for at most `grace`.
///
/// Returns as soon as the drain completes or the grace period expires,
/// whichever comes first. A server that stops on its own before the signal
/// reports [`ShutdownOutcome::Drained`].
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    grace: Duration,
    signal: F,
) -> anyhow::Result<ShutdownOutcome>
where
    F: Future<Output = ()>,
{
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    tokio::select! {
        joined = &mut server => {
            joined.context("Server task panicked")?.context("Server error")?;
            return Ok(ShutdownOutcome::Drained);
        }
        () = signal => {}
    }

    tracing::info!(
        grace_secs = grace.as_secs_f64(),
        "Stopped accepting connections, draining",
    );
    let _ = stop_tx.send(());

    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => {
            joined.context("Server task panicked")?.context("Server error")?;
            Ok(ShutdownOutcome::Drained)
        }
        Err(_) => {
            tracing::warn!(
                grace_secs = grace.as_secs_f64(),
                "In-flight requests did not finish in time, forcing shutdown",
            );
            server.abort();
            Ok(ShutdownOutcome::Forced)
        }
    }
}
