//! Command-line front end for the s.id URL manager.
//!
//! Stores the credential pair and drives the same action dispatcher as the
//! panel host, printing surface updates to the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Store X-Auth-Id / X-Auth-Key (prompts for missing values)
//! cargo run --bin sidctl -- auth
//!
//! # URL count status line
//! cargo run --bin sidctl -- status
//!
//! # List the second page
//! cargo run --bin sidctl -- list --page 2
//!
//! # Shorten a URL
//! cargo run --bin sidctl -- create https://www.rust-lang.org/learn
//!
//! # Rename a slug
//! cargo run --bin sidctl -- rename 1234 rust-learn https://www.rust-lang.org/learn
//!
//! # Open the settings file
//! cargo run --bin sidctl -- settings
//! ```
//!
//! # Environment Variables
//!
//! Same as the panel host; see `sid_url_manager::config`.

use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};

use sid_url_manager::application::ActionDispatcher;
use sid_url_manager::application::services::url_count_status;
use sid_url_manager::config::{Config, init_tracing, load_from_env};
use sid_url_manager::domain::entities::{Credentials, Pagination, ShortUrlRecord};
use sid_url_manager::domain::messages::{ActionMessage, OutboundMessage};
use sid_url_manager::domain::ports::{
    ConfigScope, CredentialStore, DisplaySurface, save_credentials,
};
use sid_url_manager::infrastructure::http::SidApiClient;
use sid_url_manager::infrastructure::settings::EditorSettingsLauncher;

/// CLI for managing s.id short URLs.
#[derive(Parser)]
#[command(name = "sidctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the X-Auth-Id / X-Auth-Key pair
    Auth {
        /// X-Auth-Id (prompted when omitted)
        #[arg(long)]
        id: Option<String>,

        /// X-Auth-Key (prompted, hidden, when omitted)
        #[arg(long)]
        key: Option<String>,

        /// Write to the workspace settings file instead of the global one
        #[arg(long)]
        workspace: bool,
    },

    /// Show the URL count status line
    Status,

    /// List short URLs
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Create a short URL
    Create {
        /// Absolute http(s) URL to shorten
        long_url: String,
    },

    /// Change the slug of a short URL
    Rename {
        /// Record id as shown by `list`
        id: String,

        /// New slug
        new_short: String,

        /// Long URL the record points to
        long_url: String,
    },

    /// Open the settings file in an editor
    Settings,
}

/// Prints surface updates and remembers whether the last notification failed.
#[derive(Default)]
struct ConsoleSurface {
    last_failed: Mutex<bool>,
}

impl ConsoleSurface {
    fn failed(&self) -> bool {
        self.last_failed.lock().map(|f| *f).unwrap_or(true)
    }
}

impl DisplaySurface for ConsoleSurface {
    fn post_message(&self, message: OutboundMessage) {
        match message {
            OutboundMessage::UpdateList { urls, pagination } => print_list(&urls, pagination),
            OutboundMessage::Notification {
                message,
                is_success,
            } => {
                if is_success {
                    println!("{} {}", "✔".green().bold(), message.green());
                } else {
                    eprintln!("{} {}", "✘".red().bold(), message.red());
                }
                if let Ok(mut failed) = self.last_failed.lock() {
                    *failed = !is_success;
                }
            }
        }
    }
}

/// Renders one page of records.
///
/// ```text
///   ID        Short           Long URL
///   ───────────────────────────────────────────────────────────────
///   1234      rust-learn      https://www.rust-lang.org/learn
///
///   Page 1 of 3
/// ```
fn print_list(urls: &[ShortUrlRecord], pagination: Pagination) {
    println!();
    if urls.is_empty() {
        println!("{}", "  No short URLs on this page".yellow());
    } else {
        println!(
            "  {:<9} {:<15} {}",
            "ID".bright_white().bold(),
            "Short".bright_white().bold(),
            "Long URL".bright_white().bold()
        );
        println!("  {}", "─".repeat(63).bright_black());
        for url in urls {
            println!(
                "  {:<9} {:<15} {}",
                url.id.bright_black(),
                url.short.cyan(),
                url.long_url
            );
        }
    }
    println!();
    println!(
        "  Page {} of {}",
        pagination.current_page.to_string().bright_white().bold(),
        pagination.total_pages.to_string().bright_white().bold()
    );
    println!();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_from_env()?;
    init_tracing(&config.log_level, &config.log_format);

    match cli.command {
        Commands::Auth { id, key, workspace } => {
            let scope = if workspace {
                ConfigScope::Workspace
            } else {
                ConfigScope::Global
            };
            handle_auth(&config, id, key, scope)
        }
        Commands::Status => handle_status(&config).await,
        Commands::List { page } => {
            run_action(&config, ActionMessage::FetchUrls { page: Some(page) }).await
        }
        Commands::Create { long_url } => {
            run_action(&config, ActionMessage::GenerateUrl { long_url }).await
        }
        Commands::Rename {
            id,
            new_short,
            long_url,
        } => {
            run_action(
                &config,
                ActionMessage::EditUrl {
                    id,
                    new_short,
                    long_url,
                },
            )
            .await
        }
        Commands::Settings => run_action(&config, ActionMessage::OpenSettingsJson).await,
    }
}

/// Prompts for and stores the credential pair.
///
/// Nothing is written unless both values are provided.
fn handle_auth(
    config: &Config,
    id: Option<String>,
    key: Option<String>,
    scope: ConfigScope,
) -> Result<ExitCode> {
    println!("{}", "Configure s.id authentication".bright_blue().bold());
    println!();

    let auth_id = match id {
        Some(id) => id,
        None => Input::<String>::new()
            .with_prompt("Enter X-Auth-Id")
            .allow_empty(true)
            .interact_text()?,
    };

    let auth_key = match key {
        Some(key) => key,
        None => Password::new()
            .with_prompt("Enter X-Auth-Key")
            .allow_empty_password(true)
            .interact()?,
    };

    let Some(credentials) = Credentials::from_parts(Some(auth_id), Some(auth_key)) else {
        println!(
            "{}",
            "Authentication setup is incomplete. Both fields are required.".yellow()
        );
        return Ok(ExitCode::FAILURE);
    };

    let store = config.credential_store();
    save_credentials(&store, &credentials, scope)
        .context("An error occurred while saving authentication settings")?;

    println!(
        "{}",
        "Authentication settings saved successfully.".green().bold()
    );
    println!(
        "  X-Auth-Id:  {}\n  X-Auth-Key: {}",
        credentials.auth_id().cyan(),
        credentials.masked_key().bright_black()
    );
    Ok(ExitCode::SUCCESS)
}

async fn handle_status(config: &Config) -> Result<ExitCode> {
    let api = SidApiClient::new(config.api_base_url.clone(), config.http_timeout())?;
    let store = config.credential_store();

    let status = url_count_status(&api, &store).await;
    println!("{}", status);
    Ok(ExitCode::SUCCESS)
}

/// Dispatches a single action against a console surface.
async fn run_action(config: &Config, message: ActionMessage) -> Result<ExitCode> {
    let api = Arc::new(SidApiClient::new(
        config.api_base_url.clone(),
        config.http_timeout(),
    )?);
    let file_store = config.credential_store();
    let settings = Arc::new(EditorSettingsLauncher::new(file_store.clone()));
    let store: Arc<dyn CredentialStore> = Arc::new(file_store);
    let surface = Arc::new(ConsoleSurface::default());

    let dispatcher = match ActionDispatcher::new(api, store.as_ref(), surface.clone(), settings) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            eprintln!("{} {}", "✘".red().bold(), e.detail().red());
            eprintln!("  Run {} first.", "sidctl auth".bright_cyan());
            return Ok(ExitCode::FAILURE);
        }
    };

    dispatcher.dispatch(message).await;

    Ok(if surface.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
