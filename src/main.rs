use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use asana_backlink::asana::client::AsanaClient;
use asana_backlink::asana::traits::{DryRunCommenter, TaskCommenter};
use asana_backlink::config::{self, Config};
use asana_backlink::github::{event, workflow};
use asana_backlink::output::terminal;
use asana_backlink::pipeline::{extract, notify};
use asana_backlink::references::extract::TaskLinkExtractor;

/// asana-backlink: link GitHub pull requests and comments back to Asana.
///
/// Finds Asana task links in a PR description or issue comment and adds a
/// comment on each newly linked task pointing back at GitHub.
#[derive(Parser)]
#[command(name = "asana-backlink", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Comment on Asana tasks newly linked by the triggering GitHub event
    Notify {
        /// Event payload file (defaults to GITHUB_EVENT_PATH)
        #[arg(long)]
        event_path: Option<PathBuf>,

        /// Show what would be posted without calling Asana
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the Asana tasks linked in a text file (or stdin)
    Extract {
        /// File to scan; reads stdin when omitted
        file: Option<PathBuf>,

        /// Previous revision of the text; only links new since then are printed
        #[arg(long)]
        previous: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("asana_backlink=info")),
        )
        .init();

    let cli = Cli::parse();

    // Every failure lands here. The step exits non-zero so the workflow run
    // shows it as failed, not just as a log line.
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = format!("{e:#}"), "asana-backlink failed");
            if config::running_in_actions() {
                workflow::annotate_error(&format!("{e:#}"));
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Notify {
            event_path,
            dry_run,
        } => {
            let config = Config::load()?;
            config.require_notify(dry_run)?;

            let path = config.require_event_path(event_path)?;
            let context = event::load_context(&path)?;
            if dry_run {
                terminal::display_context(&context);
            }

            let extractor = TaskLinkExtractor::new()?;
            let Some(plan) = notify::plan(&extractor, &context, config.comment_prefix.as_deref())?
            else {
                return Ok(());
            };

            let commenter: Box<dyn TaskCommenter> = if dry_run {
                terminal::display_plan(&plan);
                Box::new(DryRunCommenter)
            } else {
                Box::new(AsanaClient::new(&config.asana_api_url, &config.asana_pat)?)
            };

            let summary = notify::run(commenter.as_ref(), plan).await?;
            info!(notified = summary.notified.len(), "Notification run complete");

            if !dry_run && !config.github_actions {
                terminal::display_summary(&summary);
            }
        }

        Commands::Extract { file, previous } => {
            let text = extract::read_text(file.as_deref())?;
            let extractor = TaskLinkExtractor::new()?;
            let refs = extract::run(&extractor, &text, previous.as_deref())?;
            terminal::display_references(&refs);
        }
    }

    Ok(())
}
