//! Carteira CLI binary.
//!
//! Drives the price chart pipeline from the command line: fetch one or more
//! tickers over a period window and emit the chart configuration.

mod cmd;

use anyhow::Result;
use carteira::Period;
use clap::{Parser, Subcommand};
use std::process;

#[derive(Parser)]
#[command(name = "carteira")]
#[command(about = "Stock price chart pipeline", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch tickers and emit the chart configuration
    Chart {
        /// Ticker symbols; the first one drives the shared date axis
        #[arg(value_delimiter = ',')]
        symbols: Vec<String>,

        /// Aggregation period (day, week, month)
        #[arg(short, long, default_value = "month")]
        period: Period,

        /// Output format (json or table)
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Show the date range a period resolves to
    Range {
        /// Aggregation period (day, week, month)
        #[arg(short, long, default_value = "month")]
        period: Period,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            symbols,
            period,
            format,
        } => {
            cmd::chart::render_chart(&symbols, period, &format).await?;
        }
        Commands::Range { period } => {
            cmd::range::show_range(period);
        }
    }

    Ok(())
}
