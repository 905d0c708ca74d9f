mod app;
mod clipboard;
mod commands;
mod render;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use birthdays_core::config::BirthdaysConfig;
use birthdays_core::parse_date;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::commands::RecordArgs;

#[derive(Parser)]
#[command(name = "birthdays", version)]
#[command(about = "Keep track of birthdays and never miss a wish")]
struct Cli {
    /// Treat this day as today (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_reference_date)]
    date: Option<NaiveDate>,

    /// Use this config file instead of ~/.config/birthdays/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log what's happening to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every birthday
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show whose birthday it is today
    Today {
        #[arg(long)]
        json: bool,
    },
    /// Show the next birthdays coming up
    Upcoming {
        /// How many to show (defaults to upcoming_limit from the config)
        #[arg(short, long)]
        limit: Option<NonZeroUsize>,

        #[arg(long)]
        json: bool,
    },
    /// Add a birthday (prompts for anything missing)
    Add {
        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Change a birthday's details
    Edit {
        /// Name or id of the person
        query: String,

        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Remove a birthday
    Delete {
        /// Name or id of the person
        query: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Compose a greeting and copy it to the clipboard
    Wish {
        /// Name or id of the person
        query: String,

        /// Only print the greeting
        #[arg(long)]
        no_copy: bool,
    },
    /// Show config and storage paths
    Config,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {e:#}").red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => BirthdaysConfig::config_path()?,
    };
    let config = BirthdaysConfig::load_or_init(&config_path)
        .with_context(|| format!("Failed to read config {}", config_path.display()))?;

    if let Commands::Config = cli.command {
        return commands::config::run(&config_path, &config);
    }

    let app = App {
        store: Box::new(config.open_store().context("Failed to open birthday storage")?),
        engine: config.engine(),
        today: cli.date.unwrap_or_else(|| Local::now().date_naive()),
        upcoming_limit: config.upcoming_limit,
    };

    match cli.command {
        Commands::List { json } => commands::list::run(&app, json),
        Commands::Today { json } => commands::today::run(&app, json),
        Commands::Upcoming { limit, json } => commands::upcoming::run(&app, limit, json),
        Commands::Add { fields } => commands::add::run(&app, fields),
        Commands::Edit { query, fields } => commands::edit::run(&app, &query, fields),
        Commands::Delete { query, yes } => commands::delete::run(&app, &query, yes),
        Commands::Wish { query, no_copy } => {
            let clipboard = if no_copy { None } else { SystemClipboard::detect() };
            if !no_copy && clipboard.is_none() {
                eprintln!("{}", "No clipboard tool found, printing only".dimmed());
            }
            commands::wish::run(
                &app,
                &query,
                clipboard.as_ref().map(|c| c as &dyn ClipboardWriter),
            )
        }
        Commands::Config => Ok(()),
    }
}

fn parse_reference_date(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "birthdays=debug,birthdays_core=debug"
    } else {
        "birthdays=warn,birthdays_core=warn"
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
