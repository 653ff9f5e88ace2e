//! Web mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::web::{self, WebState};
use std::error::Error;
use tokio::sync::broadcast;

/// Runs the HTTP dashboard until Ctrl+C
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Server shut down cleanly
/// * `Err` - The address could not be bound or the server failed
pub async fn run_serve_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("web", &session);
    let addr = session.config.bind_address();

    // Trigger shutdown on Ctrl+C
    let (shutdown_sender, _) = broadcast::channel::<()>(1);
    let shutdown_sender_clone = shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });
    let mut shutdown_receiver = shutdown_sender.subscribe();

    Event::server_with_level(
        format!("Open http://{} in a browser", addr),
        EventType::Success,
        LogLevel::Info,
    )
    .emit();

    let state = WebState::new(session.dispatcher);
    web::serve(state, &addr, async move {
        let _ = shutdown_receiver.recv().await;
    })
    .await?;

    print_session_shutdown();
    print_session_exit_success();
    Ok(())
}
