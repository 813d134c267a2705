//! Alarm console service
//!
//! Serves the browser-rendered alarm console: the HTML shell, the compiled
//! wasm bundle and a health probe.

pub mod config;
pub mod dashboard;
pub mod error;

pub use config::{load_config, Config};
pub use error::{ConsoleError, Result};

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Builder for the console server.
///
/// Validates the configuration, builds the router, then binds the listener.
pub struct ConsoleBuilder {
    config: Config,
    cancel: Option<CancellationToken>,
}

impl ConsoleBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Stop the server when `cancel` fires instead of on ctrl-c only
    pub fn with_cancellation_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub async fn build(self) -> Result<BoundConsole> {
        self.config.validate()?;

        let router = dashboard::build_router(&self.config.api.base_url, &self.config.site.root);
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            ConsoleError::Config(format!(
                "Failed to bind port {}: {}",
                self.config.server.port, e
            ))
        })?;

        let bound_addr = listener.local_addr()?;
        println!("Bound alarm console bound_addr={}", bound_addr);
        tracing::info!("Bound alarm console bound_addr={}", bound_addr);
        tracing::info!("Alarm API base: {}", self.config.api.base_url);

        Ok(BoundConsole {
            listener,
            router,
            cancel: self.cancel.unwrap_or_default(),
        })
    }
}

/// A console server with its listener bound, ready to serve
pub struct BoundConsole {
    listener: TcpListener,
    router: Router,
    cancel: CancellationToken,
}

impl BoundConsole {
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Serve until ctrl-c or until the cancellation token fires
    pub async fn start(self) -> Result<()> {
        let cancel_for_signal = self.cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                result = tokio::signal::ctrl_c() => match result {
                    Ok(()) => {
                        tracing::info!("Shutdown signal received");
                        cancel_for_signal.cancel();
                    }
                    Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
                },
                _ = cancel_for_signal.cancelled() => {}
            }
        });

        let cancel = self.cancel.clone();
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async move {
                cancel.cancelled().await;
            })
            .await?;

        tracing::info!("Alarm console stopped");
        Ok(())
    }
}
