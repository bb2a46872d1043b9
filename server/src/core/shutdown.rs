//! Centralized shutdown management

use std::sync::Arc;

use tokio::sync::watch;

use crate::data::StringStore;

/// Coordinates graceful shutdown of the HTTP server and the string store
#[derive(Clone)]
pub struct ShutdownService {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
    store: Arc<StringStore>,
}

impl ShutdownService {
    pub fn new(store: Arc<StringStore>) -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
            store,
        }
    }

    /// Trigger shutdown
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }

    /// Trigger shutdown (if a signal has not already) and flush the store
    pub async fn shutdown(&self) {
        tracing::debug!("Initiating graceful shutdown...");
        self.trigger();

        if let Err(e) = self.store.flush().await {
            tracing::warn!(error = %e, "Failed to flush string store");
        } else {
            tracing::debug!(backend = self.store.backend_name(), "String store flushed");
        }

        tracing::debug!("Shutdown complete");
    }

    /// Wait for shutdown signal (for use with axum graceful shutdown)
    /// Returns an owned future that can be passed to graceful_shutdown
    pub fn wait(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let mut rx = self.rx.clone();
        async move {
            let _ = rx.wait_for(|&v| v).await;
        }
    }

    /// Install OS signal handlers and auto-trigger on Ctrl+C/SIGTERM
    pub fn install_signal_handlers(&self) {
        let service = self.clone();
        tokio::spawn(async move {
            let ctrl_c = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                    std::future::pending::<()>().await;
                }
            };

            #[cfg(unix)]
            let terminate = async {
                match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(mut signal) => {
                        signal.recv().await;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to install SIGTERM handler");
                        std::future::pending::<()>().await;
                    }
                }
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                _ = ctrl_c => tracing::debug!("Received Ctrl+C, shutting down"),
                _ = terminate => tracing::debug!("Received SIGTERM, shutting down"),
            }

            service.trigger();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::data::strings::JsonFilePersistence;
    use crate::domain::AnalyzedString;

    fn make_shutdown() -> ShutdownService {
        ShutdownService::new(Arc::new(StringStore::in_memory()))
    }

    #[tokio::test]
    async fn test_wait_pending_until_trigger() {
        let shutdown = make_shutdown();
        let pending = tokio::time::timeout(Duration::from_millis(20), shutdown.wait()).await;
        assert!(pending.is_err());
    }

    #[tokio::test]
    async fn test_shutdown_wait_returns_after_trigger() {
        let shutdown = make_shutdown();
        let handle = tokio::spawn(shutdown.wait());

        tokio::task::yield_now().await;
        shutdown.trigger();

        tokio::time::timeout(Duration::from_millis(100), handle)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_releases_waiters() {
        let shutdown = make_shutdown();
        let handle = tokio::spawn(shutdown.wait());

        shutdown.shutdown().await;

        tokio::time::timeout(Duration::from_millis(100), handle)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_flushes_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.json");
        let store = Arc::new(
            StringStore::open(Arc::new(JsonFilePersistence::new(path.clone()))).await,
        );
        store.insert(AnalyzedString::new("noon")).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        ShutdownService::new(store).shutdown().await;

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("noon"));
    }
}
