// Process signals -> dashboard shutdown flag

use std::future::Future;
use std::io;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Resolves on Ctrl+C or SIGTERM. Handlers are registered before the first poll.
pub fn signal() -> io::Result<impl Future<Output = ()>> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;
        Ok(async move {
            tokio::select! {
                _ = sigint.recv() => {}
                _ = sigterm.recv() => {}
            }
        })
    }
    #[cfg(not(unix))]
    {
        Ok(async {
            let _ = tokio::signal::ctrl_c().await;
        })
    }
}

/// Registers the handlers now and raises `shutdown` when a signal arrives.
pub fn forward_signals(shutdown: watch::Sender<bool>) -> io::Result<JoinHandle<()>> {
    let signal = signal()?;
    Ok(tokio::spawn(async move {
        signal.await;
        tracing::info!("Received shutdown signal");
        let _ = shutdown.send(true);
    }))
}
