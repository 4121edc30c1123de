//! JSON API over the game core
//!
//! `POST /api/game` starts a round and hands back an opaque session id;
//! `POST /api/validate` scores a guess for that session. Secrets stay in the
//! [`SessionStore`] until the round is over.

mod routes;

pub use routes::{GuessRequest, GuessResponse, NewGameRequest, NewGameResponse};

use crate::game::{Clock, GameConfig, SessionStore, SystemClock};
use crate::wordlists::Dictionaries;
use axum::Router;
use axum::routing::{get, post};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;

/// Default listen address
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Shared handler state
pub struct AppState {
    pub dictionaries: Arc<Dictionaries>,
    pub sessions: SessionStore,
    pub clock: Arc<dyn Clock>,
    pub config: GameConfig,
}

impl AppState {
    #[must_use]
    pub fn new(dictionaries: Arc<Dictionaries>, config: GameConfig) -> Self {
        Self::with_clock(dictionaries, config, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(
        dictionaries: Arc<Dictionaries>,
        config: GameConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            dictionaries,
            sessions: SessionStore::new(),
            clock,
            config,
        }
    }
}

pub type SharedState = Arc<AppState>;

/// Listener settings
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// How often finished and stale sessions are dropped
    pub purge_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            purge_interval: Duration::from_secs(10 * 60),
        }
    }
}

/// Routes without a listener, for serving or for tests
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/game", post(routes::new_game))
        .route("/api/validate", post(routes::validate))
        .route("/api/health", get(routes::health))
        .with_state(state)
}

/// Serve until Ctrl-C or SIGTERM
///
/// # Errors
/// Returns an I/O error if the address cannot be bound or the server fails.
pub async fn serve(config: ServerConfig, state: SharedState) -> std::io::Result<()> {
    let purger = tokio::spawn(purge_sessions(Arc::clone(&state), config.purge_interval));

    let listener = TcpListener::bind(config.addr).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    purger.abort();
    info!("server stopped");
    Ok(())
}

async fn purge_sessions(state: SharedState, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    // The first tick completes immediately
    ticker.tick().await;
    loop {
        ticker.tick().await;
        state.sessions.purge(state.clock.today());
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown requested");
}
