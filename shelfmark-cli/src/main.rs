//! Shelfmark - interactive catalog manager for book records.
//!
//! Main entry point: parses arguments, wires tracing to stderr so the menu
//! on stdout stays clean, and hands stdin/stdout to the menu loop.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io;
use tracing_subscriber::EnvFilter;

use shelfmark_core::catalog::{Catalog, MAX_RECORDS};

mod menu;
mod table;

use menu::Menu;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "shelfmark",
    about = "In-memory book catalog with automatic shelf locations",
    version
)]
struct Cli {
    /// Maximum number of records the catalog will hold.
    ///
    /// Capped at 130: position 130 is the last whose row letter stays
    /// within 'A'..='Z'.
    #[clap(long, default_value_t = MAX_RECORDS as u16, value_parser = clap::value_parser!(u16).range(1..=130))]
    capacity: u16,

    /// Log level for diagnostic output on stderr
    #[clap(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

fn initialize_tracing(log_level: &LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let catalog = Catalog::with_capacity(cli.capacity as usize);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(catalog, stdin.lock(), stdout.lock());
    menu.run()
}
