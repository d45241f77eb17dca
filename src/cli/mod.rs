//! Command-line interface definitions.

pub mod acca;
pub mod output;
pub mod prices;
pub mod table;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::{FileStore, HostedStore, QuoteStore};

/// Oddsfold - Football odds aggregation and accumulator price comparison.
#[derive(Parser, Debug)]
#[command(name = "oddsfold")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Path of the configuration file to load.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config
    }
}

/// Where fixtures and quotes come from.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Read fixtures from a local JSON document instead of the hosted store.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl SourceArgs {
    fn store(&self, config: &Config) -> Result<Arc<dyn QuoteStore>> {
        match &self.input {
            Some(path) => Ok(Arc::new(FileStore::new(path))),
            None => Ok(Arc::new(HostedStore::new(&config.store)?)),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the best 1X2 price per fixture for a date
    Prices(PricesArgs),

    /// Show the full per-bookmaker market grid for one fixture
    Table(TableArgs),

    /// Rank bookmakers for an accumulator across several fixtures
    Acca(AccaArgs),
}

#[derive(Args, Debug)]
pub struct PricesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Date to list fixtures for (defaults to today, UTC).
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Fixture ID.
    pub fixture: u64,
}

#[derive(Args, Debug)]
pub struct AccaArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// A pick in `FIXTURE:OUTCOME` form (e.g. `1001:home`); repeatable.
    #[arg(long = "pick", value_name = "FIXTURE:OUTCOME", required = true)]
    pub picks: Vec<String>,

    /// Stake amount.
    #[arg(long, default_value = "10")]
    pub stake: Decimal,
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Prices(args) => {
            let store = args.source.store(config)?;
            prices::run(store.as_ref(), args.date).await
        }
        Commands::Table(args) => {
            let store = args.source.store(config)?;
            table::run(store.as_ref(), args.fixture).await
        }
        Commands::Acca(args) => {
            let store = args.source.store(config)?;
            acca::run(store.as_ref(), &args.picks, args.stake).await
        }
    }
}

/// Parse a `FIXTURE:OUTCOME` pick argument.
pub(crate) fn parse_pick(raw: &str) -> Result<(u64, crate::domain::Outcome)> {
    let (fixture, outcome) = raw
        .split_once(':')
        .ok_or_else(|| Error::Parse(format!("pick '{raw}' is not in FIXTURE:OUTCOME form")))?;
    let fixture: u64 = fixture
        .parse()
        .map_err(|_| Error::Parse(format!("pick '{raw}' has a non-numeric fixture ID")))?;
    let outcome = crate::domain::Outcome::from_label(outcome)
        .ok_or_else(|| Error::Parse(format!("pick '{raw}' has an unknown outcome label")))?;
    Ok((fixture, outcome))
}
