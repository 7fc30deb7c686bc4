//! bankdb Binary
//!
//! Interactive menu by default; one-shot subcommands for scripting.

use std::io;
use std::path::PathBuf;

use bankdb::menu::{write_response, Session};
use bankdb::protocol::Command;
use bankdb::{Config, Record, SaveStrategy, Store};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, EnvFilter};

/// bankdb
#[derive(Parser, Debug)]
#[command(name = "bankdb")]
#[command(about = "File-persisted record manager for bank account entries")]
#[command(version)]
struct Args {
    /// Data file holding every record
    #[arg(short, long, default_value = "database.txt")]
    data_file: PathBuf,

    /// Rewrite the data file in place instead of write-then-rename
    #[arg(long)]
    overwrite: bool,

    /// Skip fsync after each save
    #[arg(long)]
    no_sync: bool,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a record
    Add {
        last_name: String,
        first_name: String,
        /// Last transaction date (yyyy-MM-dd)
        date: NaiveDate,
        #[arg(allow_hyphen_values = true)]
        balance: Decimal,
    },

    /// Replace the record with the given number
    Edit {
        /// Record number as shown by `list` (1-based)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
        last_name: String,
        first_name: String,
        /// Last transaction date (yyyy-MM-dd)
        date: NaiveDate,
        #[arg(allow_hyphen_values = true)]
        balance: Decimal,
    },

    /// Delete the record with the given number
    Delete {
        /// Record number as shown by `list` (1-based)
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },

    /// Show all records
    List,

    /// Find records by last transaction date
    Search {
        /// Date to match exactly (yyyy-MM-dd)
        date: NaiveDate,
    },

    /// Sort records by balance, highest first
    Sort,
}

impl Commands {
    fn into_command(self) -> bankdb::Result<Command> {
        let command = match self {
            Commands::Add {
                last_name,
                first_name,
                date,
                balance,
            } => Command::Add {
                record: Record::new(last_name, first_name, date, balance)?,
            },
            Commands::Edit {
                number,
                last_name,
                first_name,
                date,
                balance,
            } => Command::Edit {
                index: to_index(number),
                record: Record::new(last_name, first_name, date, balance)?,
            },
            Commands::Delete { number } => Command::Delete {
                index: to_index(number),
            },
            Commands::List => Command::List,
            Commands::Search { date } => Command::SearchByDate { date },
            Commands::Sort => Command::SortByBalance,
        };
        Ok(command)
    }
}

/// 1-based record number to 0-based index
fn to_index(number: u64) -> usize {
    usize::try_from(number - 1).unwrap_or(usize::MAX)
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging (stderr keeps the menu on stdout clean)
    let default_filter = if args.verbose { "info,bankdb=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("bankdb v{}", bankdb::VERSION);
    tracing::info!("Data file: {}", args.data_file.display());

    // Build config from args
    let config = Config::builder()
        .data_file(&args.data_file)
        .save_strategy(if args.overwrite {
            SaveStrategy::Overwrite
        } else {
            SaveStrategy::AtomicRename
        })
        .sync_on_save(!args.no_sync)
        .build();

    // Open store
    let mut store = match Store::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut store, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(store: &mut Store, command: Option<Commands>) -> bankdb::Result<()> {
    match command {
        Some(command) => {
            let response = store.execute(command.into_command()?)?;
            if response.is_not_found() {
                tracing::warn!("{:?} addressed a missing record", response);
            }
            write_response(&mut io::stdout().lock(), &response)
        }
        None => {
            let stdin = io::stdin();
            Session::new(store, stdin.lock(), io::stdout()).run()
        }
    }
}
