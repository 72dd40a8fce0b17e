//! webhook-submit - challenge webhook client
//!
//! CLI binary that requests a webhook and submits the SQL answer to it.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use webhook_submit::config::{DEFAULT_TIMEOUT_SECS, Settings};
use webhook_submit::types::IdentityInfo;

mod cli;

#[derive(Parser)]
#[command(name = "webhook-submit")]
#[command(about = "Request a challenge webhook and submit the SQL answer to it")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct SettingsArgs {
    /// Participant name
    #[arg(long, env = "SUBMITTER_NAME", global = true)]
    name: Option<String>,

    /// Registration number
    #[arg(long, env = "SUBMITTER_REG_NO", global = true)]
    reg_no: Option<String>,

    /// Contact email
    #[arg(long, env = "SUBMITTER_EMAIL", global = true)]
    email: Option<String>,

    /// Endpoint that hands out the webhook URL and access token
    #[arg(long, env = "GENERATE_WEBHOOK_URL", global = true)]
    generate_webhook_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "SUBMITTER_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        global = true
    )]
    timeout_secs: u64,
}

impl SettingsArgs {
    fn into_settings(self) -> Result<Settings> {
        let identity = IdentityInfo {
            name: self.name.context("missing --name (or SUBMITTER_NAME)")?,
            reg_no: self.reg_no.context("missing --reg-no (or SUBMITTER_REG_NO)")?,
            email: self.email.context("missing --email (or SUBMITTER_EMAIL)")?,
        };
        let url = self
            .generate_webhook_url
            .context("missing --generate-webhook-url (or GENERATE_WEBHOOK_URL)")?;

        Ok(Settings::new(identity, &url)?.with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Request a webhook and submit the answer (default)
    Run {
        /// Print the request bodies without sending anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the SQL answer
    Query,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads the environment
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { dry_run: false }) {
        Commands::Run { dry_run } => {
            let settings = cli.settings.into_settings()?;
            cli::run_submit(&settings, dry_run).await?;
        }
        Commands::Query => cli::run_query(),
    }

    Ok(())
}
