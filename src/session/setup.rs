//! Session setup and initialization

use crate::api::ProxyPoolClient;
use crate::config::Config;
use crate::environment::Environment;
use crate::events::WorkerUpdate;
use crate::runtime::start_refresh_worker;
use crate::ui::UIConfig;
use crate::workers::core::WorkerConfig;
use crate::workers::refresher::RefreshHandle;
use std::error::Error;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Update receiver for the refresh worker
    pub update_receiver: mpsc::Receiver<WorkerUpdate>,
    /// Handle controlling the refresh worker
    pub refresh_handle: RefreshHandle,
    /// Backend being polled
    pub environment: Environment,
    /// Dashboard settings resolved from the config file
    pub ui_config: UIConfig,
}

/// Sets up a polling session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the API client
/// 2. Resolves page size, refresh interval and export directory
/// 3. Starts the refresh worker, which loads data immediately
///
/// # Arguments
/// * `config` - Loaded configuration file
/// * `env` - Backend to poll
/// * `with_background` - Whether the TUI paints a background color
pub async fn setup_session(
    config: &Config,
    env: Environment,
    with_background: bool,
) -> Result<SessionData, Box<dyn Error>> {
    let client = ProxyPoolClient::new(env.clone(), config.api_key.clone())?;

    let worker_config = WorkerConfig {
        page_size: config.page_size(),
        refresh_interval: config.refresh_interval(),
        ..WorkerConfig::new(env.clone())
    };
    let ui_config = UIConfig::new(
        with_background,
        worker_config.page_size,
        worker_config.refresh_interval,
        config.export_dir(),
    );

    let (update_receiver, refresh_handle) = start_refresh_worker(Box::new(client), worker_config);

    Ok(SessionData {
        update_receiver,
        refresh_handle,
        environment: env,
        ui_config,
    })
}
