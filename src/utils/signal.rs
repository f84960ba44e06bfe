#[cfg(unix)]
use smallvec::SmallVec;

/// Resolves once the process is asked to stop (SIGINT, SIGTERM or SIGQUIT on
/// unix, ctrl-c elsewhere).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{self, SignalKind};

        let kinds = [
            SignalKind::interrupt(),
            SignalKind::terminate(),
            SignalKind::quit(),
        ];

        let mut signals: SmallVec<[unix::Signal; 3]> = kinds
            .into_iter()
            .filter_map(|kind| {
                unix::signal(kind)
                    .map_err(|error| {
                        error!("failed to initialize signal listener: {kind:?}. error: {error}");
                    })
                    .ok()
            })
            .collect();

        if signals.is_empty() {
            warn!("no signal listener could be installed, running until killed");
            std::future::pending::<()>().await;
        }

        futures::future::select_all(signals.iter_mut().map(|signal| Box::pin(signal.recv())))
            .await;
    }

    #[cfg(not(unix))]
    {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {error}");
            std::future::pending::<()>().await;
        }
    }

    info!("shutdown signal received");
}
