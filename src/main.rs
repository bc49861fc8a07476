mod api;
mod cli_messages;
mod config;
mod consts;
mod dashboard;
mod environment;
mod events;
mod logging;
mod network;
mod runtime;
mod session;
mod ui;
mod utils;
mod workers;

use crate::api::{ProxyPoolApi, ProxyPoolClient};
use crate::config::{Config, get_config_path};
use crate::dashboard::pagination::Pagination;
use crate::dashboard::stats::StatsPanel;
use crate::dashboard::table::ProxyTable;
use crate::environment::Environment;
use crate::network::{ApiResponse, request};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::utils::export::{ExportFormat, export_csv, export_json, export_txt, timestamped_filename};
use crate::utils::format::format_bytes;
use chrono::Local;
use clap::{Parser, Subcommand};
use reqwest::Method;
use serde_json::Value;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard
    Start {
        /// ProxyPool API base URL, e.g. http://127.0.0.1:5555
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print refreshes to the console instead of opening the dashboard
        #[arg(long)]
        headless: bool,

        /// Disable background colors in the dashboard
        #[arg(long = "no-background", action = clap::ArgAction::SetTrue)]
        no_background: bool,
    },
    /// Print the pool statistics once
    Stats {
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Export one page of proxies to a file
    Export {
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Page to export, starting at 1
        #[arg(long, default_value_t = 1)]
        page: i64,

        /// Only export proxies containing this text
        #[arg(long)]
        keyword: Option<String>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Txt)]
        format: ExportFormat,

        /// Output directory, defaults to the configured export directory
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
    /// Send a request to any API endpoint and print the response
    Request {
        /// HTTP method (GET, POST, PUT, DELETE)
        method: String,

        /// Endpoint path, e.g. /api/stats
        path: String,

        /// JSON body for POST and PUT
        #[arg(long)]
        body: Option<String>,

        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Write the configuration file
    Configure {
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Value sent in the API-KEY header
        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        page_size: Option<u32>,

        /// Seconds between automatic refreshes
        #[arg(long)]
        refresh_secs: Option<u64>,

        #[arg(long, value_name = "DIR")]
        export_dir: Option<PathBuf>,
    },
    /// Delete the configuration file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let config = Config::load_or_default(&config_path);
    let args = Args::parse();

    match args.command {
        Command::Start {
            api_url,
            headless,
            no_background,
        } => {
            let environment = resolve_environment(&config, api_url.as_deref())?;
            start(&config, environment, headless, !no_background).await
        }
        Command::Stats { api_url } => {
            logging::init_console_logger();
            let environment = resolve_environment(&config, api_url.as_deref())?;
            print_stats(&config, environment).await
        }
        Command::Export {
            api_url,
            page,
            keyword,
            format,
            output,
        } => {
            logging::init_console_logger();
            let environment = resolve_environment(&config, api_url.as_deref())?;
            let output = output.unwrap_or_else(|| config.export_dir());
            export(&config, environment, page, keyword.as_deref(), format, output).await
        }
        Command::Request {
            method,
            path,
            body,
            api_url,
        } => {
            logging::init_console_logger();
            let environment = resolve_environment(&config, api_url.as_deref())?;
            send_request(&config, environment, &method, &path, body.as_deref()).await
        }
        Command::Configure {
            api_url,
            api_key,
            page_size,
            refresh_secs,
            export_dir,
        } => configure(
            config,
            &config_path,
            api_url,
            api_key,
            page_size,
            refresh_secs,
            export_dir,
        ),
        Command::Reset => {
            print_cmd_info!("Resetting configuration", "{}", config_path.display());
            Config::clear(&config_path)?;
            print_cmd_success!("Configuration removed", "");
            Ok(())
        }
    }
}

fn resolve_environment(config: &Config, flag: Option<&str>) -> Result<Environment, Box<dyn Error>> {
    config.environment(flag).map_err(|e| {
        print_cmd_error!("Invalid API URL", &e);
        e.into()
    })
}

/// Starts the dashboard, or the console poller in headless mode.
async fn start(
    config: &Config,
    env: Environment,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    if headless {
        logging::init_console_logger();
    }
    let session = setup_session(config, env, with_background).await?;
    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session).await
    }
}

async fn print_stats(config: &Config, env: Environment) -> Result<(), Box<dyn Error>> {
    let client = ProxyPoolClient::new(env.clone(), config.api_key.clone())?;
    let snapshot = client.get_stats().await.map_err(|e| {
        print_cmd_error!("Failed to load stats", &e.to_string());
        e
    })?;

    let mut panel = StatsPanel::default();
    panel.apply(&snapshot);
    print_cmd_success!("ProxyPool stats", "{}", env.api_url());
    println!("  Proxies:       {}", panel.proxy_count);
    println!("  Crawlers:      {}", panel.crawler_count);
    println!("  Status:        {}", panel.status);
    println!("  Average score: {}", panel.avg_score);
    Ok(())
}

async fn export(
    config: &Config,
    env: Environment,
    page: i64,
    keyword: Option<&str>,
    format: ExportFormat,
    output: PathBuf,
) -> Result<(), Box<dyn Error>> {
    let mut pagination = Pagination::new(config.page_size());
    if !pagination.go_to(page) {
        print_cmd_error!("Invalid page", &format!("{} (pages start at 1)", page));
        return Err(format!("Invalid page: {}", page).into());
    }

    let client = ProxyPoolClient::new(env, config.api_key.clone())?;
    let proxy_page = client
        .get_proxies(pagination.page_size(), pagination.offset())
        .await
        .map_err(|e| {
            print_cmd_error!("Failed to load proxies", &e.to_string());
            e
        })?;

    let mut table = ProxyTable::new();
    table.render_proxies(proxy_page.proxies, &pagination);
    if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
        table.apply_filter(keyword);
    }
    let rows = table.export_rows();
    if rows.is_empty() {
        print_cmd_warn!("No proxies to export", "page {}", pagination.current_page());
        return Ok(());
    }

    let filename = timestamped_filename("proxies", format, &Local::now());
    let path = match format {
        ExportFormat::Txt => {
            let lines: Vec<String> = rows.iter().map(|row| row.proxy.clone()).collect();
            export_txt(&lines, &output, &filename)?
        }
        ExportFormat::Csv => export_csv(&rows, &output, &filename)?,
        ExportFormat::Json => export_json(&rows, &output, &filename)?,
    };
    print_cmd_success!(
        "Export complete",
        "{} proxies written to {}",
        rows.len(),
        path.display()
    );
    Ok(())
}

async fn send_request(
    config: &Config,
    env: Environment,
    method: &str,
    path: &str,
    body: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let method = Method::from_bytes(method.to_uppercase().as_bytes())
        .map_err(|e| format!("Invalid HTTP method {}: {}", method, e))?;
    let body: Option<Value> = body.map(serde_json::from_str::<Value>).transpose()?;

    let client = ProxyPoolClient::new(env, config.api_key.clone())?;
    let response = match (method.clone(), body.as_ref()) {
        (Method::GET, _) => request::get(&client, path).await,
        (Method::DELETE, _) => request::delete(&client, path).await,
        (Method::POST, Some(data)) => request::post(&client, path, data).await,
        (Method::PUT, Some(data)) => request::put(&client, path, data).await,
        (other, data) => request::send(&client, other, path, data).await,
    };
    match response {
        ApiResponse::Success { body, bytes } => {
            print_cmd_success!(
                "Request succeeded",
                "{} {} ({})",
                method,
                path,
                format_bytes(bytes as u64)
            );
            println!("{}", body);
            Ok(())
        }
        ApiResponse::Failure(message) => {
            print_cmd_error!("Request failed", &message);
            Err(message.into())
        }
    }
}

fn configure(
    mut config: Config,
    config_path: &std::path::Path,
    api_url: Option<String>,
    api_key: Option<String>,
    page_size: Option<u32>,
    refresh_secs: Option<u64>,
    export_dir: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    if let Some(url) = api_url {
        let environment = url.parse::<Environment>().map_err(|e| {
            print_cmd_error!("Invalid API URL", &e);
            e
        })?;
        config.api_url = Some(environment.api_url());
    }
    if let Some(key) = api_key {
        config.api_key = Some(key).filter(|k| !k.is_empty());
    }
    if let Some(size) = page_size {
        if size == 0 {
            print_cmd_error!("Page size must be at least 1");
            return Err("Invalid page size".into());
        }
        config.page_size = Some(size);
    }
    if let Some(secs) = refresh_secs {
        if secs == 0 {
            print_cmd_error!("Refresh interval must be at least 1 second");
            return Err("Invalid refresh interval".into());
        }
        config.refresh_interval_secs = Some(secs);
    }
    if export_dir.is_some() {
        config.export_dir = export_dir;
    }

    config
        .save(config_path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    print_cmd_success!("Configuration saved", "{}", config_path.display());
    Ok(())
}
