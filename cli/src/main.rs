//! consolidate: migrate source-chain balances into a target-chain genesis ledger.

mod accounts;
mod config;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use consolidate_distribution::DistributionEngine;
use consolidate_ledger::{create_ledger, verify_conservation, LedgerAggregator};
use consolidate_types::{AddressConverter, Decimal};
use consolidate_utils::{format_elapsed, init_logging, LogFormat};

use crate::config::ConsolidateConfig;

#[derive(Parser)]
#[command(
    name = "consolidate",
    about = "Allocate the genesis supply to source-chain holders and verify the resulting ledger"
)]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "CONSOLIDATE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CONSOLIDATE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CONSOLIDATE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Qualifying source denomination.
    #[arg(long, env = "CONSOLIDATE_DENOM")]
    denom: Option<String>,

    /// Whole target tokens to distribute.
    #[arg(long, env = "CONSOLIDATE_TOTAL_SUPPLY")]
    total_supply: Option<u64>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Compute allocations and write the genesis balance ledger.
    Generate {
        /// JSON array of exported source accounts.
        #[arg(long)]
        accounts: PathBuf,

        /// Ledger to write; gzip-compressed when the name ends in `.gz`.
        #[arg(long)]
        output: PathBuf,

        /// Re-read the written ledger and check its total.
        #[arg(long)]
        verify: bool,
    },

    /// Sum a ledger and compare it against the expected grand total.
    Verify {
        /// Ledger to read; gzip-compressed when the name ends in `.gz`.
        #[arg(long)]
        ledger: PathBuf,

        /// Expected grand total; overrides `expected_total` from the config file.
        #[arg(long)]
        expected: Option<Decimal>,
    },

    /// Convert one source-chain address to the target prefix.
    Convert { address: String },
}

fn load_config(cli: &Cli) -> anyhow::Result<ConsolidateConfig> {
    let mut config = match &cli.config {
        Some(path) => ConsolidateConfig::from_toml_file(path)?,
        None => ConsolidateConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(denom) = &cli.denom {
        config.params.qualifying_denom = denom.clone();
    }
    if let Some(supply) = cli.total_supply {
        config.params.total_supply = supply;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(config.log_format, &config.log_level);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }
    let params = config.params.clone();
    let started = Instant::now();

    match cli.command {
        Command::Generate {
            accounts: accounts_path,
            output,
            verify,
        } => {
            let accounts = accounts::load_accounts(&accounts_path)?;
            let engine = DistributionEngine::new(params.clone());
            let distribution = engine.run(&accounts)?;

            let mut writer = create_ledger(&output, params.unit_suffix.clone())
                .with_context(|| format!("creating {}", output.display()))?;
            writer.write_all(&distribution.balances)?;
            let written = writer.close()?;

            if verify {
                let report = LedgerAggregator::from_params(&params).aggregate_path(&output)?;
                verify_conservation(report.total, written.total)?;
            }
            tracing::info!(
                records = written.records,
                dust = %distribution.summary.dust,
                elapsed = %format_elapsed(started.elapsed()),
                "generation complete"
            );
            println!("{}", written.total);
        }
        Command::Verify { ledger, expected } => {
            let report = LedgerAggregator::from_params(&params)
                .aggregate_path(&ledger)
                .with_context(|| format!("aggregating {}", ledger.display()))?;
            println!("{}", report.total);

            let expected = match expected {
                Some(expected) => Some(expected),
                None => config.expected_total()?,
            };
            match expected {
                Some(expected) => verify_conservation(report.total, expected)?,
                None => tracing::warn!("no expected total given; printed the ledger total only"),
            }
            tracing::info!(
                records = report.records,
                elapsed = %format_elapsed(started.elapsed()),
                "verification complete"
            );
        }
        Command::Convert { address } => {
            let converted = AddressConverter::from_params(&params).convert(&address)?;
            println!("{converted}");
        }
    }

    Ok(())
}
