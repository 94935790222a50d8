//! ppage CLI - terminal viewer for pronouns.page profiles.
//!
//! Fetches a profile (or loads a saved one), runs the normalization
//! pipeline, and prints the flattened display. Nothing is rendered when
//! normalization fails; the error is surfaced once and the process exits
//! non-zero.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ppage_client::ProfileClient;
use ppage_pipeline::{normalize, resolve_link, NormalizeOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

/// ppage CLI application
#[derive(Parser)]
#[command(name = "ppage")]
#[command(about = "View pronouns.page profiles from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a profile from pronouns.page and display it
    Fetch {
        /// Username to look up
        username: String,

        /// Preferred language variant
        #[arg(long, default_value = "en")]
        lang: String,

        /// Also save the raw document to this path
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Display a locally saved profile document
    Show {
        /// Path to a saved profile JSON file
        path: PathBuf,

        /// Preferred language variant
        #[arg(long, default_value = "en")]
        lang: String,
    },

    /// Resolve the external reference behind one of a user's flags
    Link {
        /// Username to look up
        username: String,

        /// Display label of the flag to resolve
        #[arg(long)]
        flag: String,

        /// Preferred language variant
        #[arg(long, default_value = "en")]
        lang: String,
    },
}

/// Run the CLI with process arguments.
pub async fn run() -> anyhow::Result<()> {
    run_with_args(std::env::args_os()).await
}

/// Run the CLI with explicit arguments.
pub async fn run_with_args<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Fetch {
            username,
            lang,
            save,
        } => fetch(&username, &lang, save.as_deref()).await,
        Commands::Show { path, lang } => show(&path, &lang),
        Commands::Link {
            username,
            flag,
            lang,
        } => link(&username, &flag, &lang).await,
    }
}

async fn fetch(username: &str, lang: &str, save: Option<&std::path::Path>) -> anyhow::Result<()> {
    let client = ProfileClient::new()?;
    let profile = client
        .fetch_profile(username)
        .await
        .with_context(|| format!("fetching profile for `{username}`"))?;

    if let Some(path) = save {
        ppage_client::save_profile(path, &profile)
            .with_context(|| format!("saving profile to {}", path.display()))?;
    }

    let normalized = normalize(&profile, &options_for(lang))?;
    render::print_profile(&normalized);
    Ok(())
}

fn show(path: &std::path::Path, lang: &str) -> anyhow::Result<()> {
    let profile = ppage_client::load_profile(path)
        .with_context(|| format!("loading profile from {}", path.display()))?;

    let normalized = normalize(&profile, &options_for(lang))?;
    render::print_profile(&normalized);
    Ok(())
}

async fn link(username: &str, flag: &str, lang: &str) -> anyhow::Result<()> {
    let client = ProfileClient::new()?;
    let profile = client
        .fetch_profile(username)
        .await
        .with_context(|| format!("fetching profile for `{username}`"))?;

    let normalized = normalize(&profile, &options_for(lang))?;
    let entry = normalized
        .flags
        .entries()
        .find(|entry| entry.label == flag)
        .with_context(|| format!("`{username}` has no flag labeled `{flag}`"))?;

    let url = resolve_link(entry, &normalized.flags)?;
    println!("{url}");
    Ok(())
}

fn options_for(lang: &str) -> NormalizeOptions {
    NormalizeOptions {
        preferred_language: lang.to_string(),
    }
}
