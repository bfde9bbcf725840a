use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tally_core::{Category, CurrencyFormat};
use tally_finance::{CategoryFilter, Report, load_ledger};
use tally_ingest::DateOrder;

mod config;
mod render;
mod state;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Categorize bank statement spending")]
struct Cli {
    /// Config file (default: ~/.tally/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Categorize a statement (CSV or XLSX) and print spending summaries
    Report {
        /// Statement file
        file: PathBuf,

        /// Only include these categories (repeatable; default: all present)
        #[arg(long = "category", short = 'c')]
        categories: Vec<Category>,

        /// Read ambiguous dates like 05/03/2024 as day first
        #[arg(long)]
        day_first: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Limit number of transactions printed
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the category a narration would get
    Categorize {
        narration: String,
    },

    /// List categories, their `--category` names and keywords in rule order
    Categories,

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Report {
            file,
            categories,
            day_first,
            json,
            limit,
        } => {
            let cfg = config::load_config(cli.config.as_deref())?;
            let mut options = cfg.pipeline_options()?;
            if day_first {
                options.date_order = DateOrder::DayFirst;
            }

            let filter = if categories.is_empty() {
                CategoryFilter::All
            } else {
                CategoryFilter::only(categories)
            };

            let ledger = load_ledger(&file, &options)
                .with_context(|| format!("processing {}", file.display()))?;
            let report = Report::build(&ledger, &filter);

            let mut out = io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &report).context("write JSON report")?;
                writeln!(out)?;
            } else {
                let money = CurrencyFormat::new(&cfg.display.currency_symbol)?;
                let limit = limit.or(cfg.display.transaction_limit);
                render::write_report(&mut out, &report, &money, limit)?;
            }
        }

        Command::Categorize { narration } => {
            let cfg = config::load_config(cli.config.as_deref())?;
            let options = cfg.pipeline_options()?;
            println!("{}", options.rules.categorize(&narration));
        }

        Command::Categories => {
            let cfg = config::load_config(cli.config.as_deref())?;
            let options = cfg.pipeline_options()?;
            render::write_categories(&mut io::stdout().lock(), &options.rules)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                config::init_config(cli.config.as_deref())?;
            }
            ConfigCommand::Show => {
                let cfg = config::load_config(cli.config.as_deref())?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// Logs go to stderr so report and JSON output on stdout stay clean.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .init();
}
