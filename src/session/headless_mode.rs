//! Headless mode execution

use super::{
    SessionData,
    messages::{
        SessionMessage, print_session_exit_success, print_session_shutdown,
        print_session_starting,
    },
};
use crate::events::WorkerUpdate;
use crate::workers::fetcher::RefreshOutcome;
use std::error::Error;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Ctrl+C shutdown handling
/// 3. Event loop management
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.environment.api_url());

    // Trigger shutdown on Ctrl+C
    let cancel = session.refresh_handle.cancellation_token();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_cancel.cancel();
        }
    });

    // Event loop: log updates to console until shutdown
    loop {
        tokio::select! {
            Some(update) = session.update_receiver.recv() => match update {
                WorkerUpdate::Activity(event) => {
                    if event.should_display() {
                        println!("{}", event);
                    }
                }
                WorkerUpdate::Loading { .. } => {}
                WorkerUpdate::Refreshed(outcome) => summarize(&outcome).print(),
            },
            _ = cancel.cancelled() => break,
            else => break,
        }
    }

    print_session_shutdown();
    session.refresh_handle.shutdown().await;
    print_session_exit_success();

    Ok(())
}

/// One-line summary of a finished refresh.
fn summarize(outcome: &RefreshOutcome) -> SessionMessage {
    match &outcome.proxies {
        Ok(page) => SessionMessage::info(format!(
            "{} refresh of page {}: {} proxies listed, {} in pool ({:.0}ms)",
            outcome.kind,
            outcome.page,
            page.proxies.len(),
            page.total(),
            outcome.elapsed.as_secs_f64() * 1000.0
        )),
        Err(e) => SessionMessage::warn(format!(
            "{} refresh of page {} failed: {}",
            outcome.kind, outcome.page, e
        )),
    }
}
