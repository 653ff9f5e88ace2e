//! HTTP front end
//!
//! Serves the single dashboard page and a small JSON API the page talks to. All clients
//! share one [`Dispatcher`], and therefore one selection.

mod error;
mod handlers;
mod page;

use crate::dispatch::Dispatcher;
use axum::Router;
use axum::routing::{get, post};
use log::info;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct WebState {
    pub dispatcher: Arc<Mutex<Dispatcher>>,
}

impl WebState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(Mutex::new(dispatcher)),
        }
    }
}

pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/layout", get(handlers::layout))
        .route("/api/state", get(handlers::current_state))
        .route("/api/events", post(handlers::apply_event))
        .with_state(state)
}

/// Binds `addr` and serves until `shutdown` resolves.
pub async fn serve(
    state: WebState,
    addr: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Dashboard listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
