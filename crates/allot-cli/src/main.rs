//! allot
//!
//! Inspect the genesis distribution and gate spends against it.
//!
//! Usage:
//!   allot info          [--network mainnet|fixture] [--json]
//!   allot addresses     [--subset all|unlocked|locked]
//!   allot allocations
//!   allot classify      <ADDR>...
//!   allot check-spend   <OUTPUTS_JSON>
//!
//! `check-spend` exits with status 2 when the outputs touch a locked address.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;

use allot_core::{
    constants::coins_to_droplets, error::AllotError, output::UxOut, types::Address,
};
use allot_distribution::{DistributionRegistry, LockStatus, Network};

/// Exit status of `check-spend` when the spend is rejected.
const EXIT_LOCKED: u8 = 2;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "allot",
    version,
    about = "Genesis distribution registry and locked-spend gate"
)]
struct Args {
    /// Built-in network to load.
    #[arg(long, global = true, default_value_t = Network::Mainnet)]
    network: Network,

    /// Emit JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print supply constants and partition sizes.
    Info,

    /// List distribution addresses in canonical order.
    Addresses {
        #[arg(long, value_enum, default_value_t = Subset::All)]
        subset: Subset,
    },

    /// Print the genesis allocation table.
    Allocations,

    /// Report the lock status of each address.
    Classify {
        #[arg(required = true)]
        addresses: Vec<String>,
    },

    /// Check whether a transaction's resolved inputs spend locked outputs.
    CheckSpend {
        /// JSON file holding an array of unspent outputs.
        outputs: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Subset {
    All,
    Unlocked,
    Locked,
}

// ── Reports ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct InfoReport<'a> {
    network: &'a str,
    max_coin_supply: u64,
    distribution_addresses_total: u64,
    distribution_address_initial_balance: u64,
    initial_balance_droplets: Option<u64>,
    initial_unlocked_count: u64,
    locked_count: u64,
    unlock_address_rate: u64,
    unlock_time_interval: u64,
}

#[derive(Serialize)]
struct Classification {
    address: String,
    status: Option<LockStatus>,
    well_formed: bool,
    /// Hex key hash, present when the address decodes.
    key: Option<String>,
}

#[derive(Serialize)]
struct SpendVerdict {
    outputs: usize,
    locked: bool,
    locked_address: Option<String>,
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("warn,allot=info,allot_distribution=info")
            }),
        )
        .init();

    let args = Args::parse();

    // Validated once, before any command runs.
    let registry = DistributionRegistry::for_network(args.network)
        .with_context(|| format!("invalid {} distribution", args.network))?;

    match args.command {
        Command::Info => {
            let schedule = registry.unlock_schedule();
            let report = InfoReport {
                network: registry.network(),
                max_coin_supply: registry.max_coin_supply(),
                distribution_addresses_total: registry.total(),
                distribution_address_initial_balance: registry.initial_balance(),
                initial_balance_droplets: coins_to_droplets(registry.initial_balance()),
                initial_unlocked_count: registry.initial_unlocked_count(),
                locked_count: registry.total() - registry.initial_unlocked_count(),
                unlock_address_rate: schedule.address_rate,
                unlock_time_interval: schedule.interval_secs,
            };
            if args.json {
                print_json(&report)?;
            } else {
                println!("Network:          {}", report.network);
                println!("Max supply:       {} coins", report.max_coin_supply);
                println!("Addresses:        {}", report.distribution_addresses_total);
                println!(
                    "Initial balance:  {} coins per address",
                    report.distribution_address_initial_balance
                );
                println!("Unlocked:         {}", report.initial_unlocked_count);
                println!("Locked:           {}", report.locked_count);
                println!(
                    "Unlock schedule:  {} addresses / {} s (inactive)",
                    report.unlock_address_rate, report.unlock_time_interval
                );
            }
        }

        Command::Addresses { subset } => {
            let addrs = match subset {
                Subset::All => registry.all_addresses(),
                Subset::Unlocked => registry.unlocked_addresses(),
                Subset::Locked => registry.locked_addresses(),
            };
            if args.json {
                print_json(&addrs)?;
            } else {
                for a in &addrs {
                    println!("{a}");
                }
            }
        }

        Command::Allocations => {
            let allocations = registry.genesis_allocations();
            if args.json {
                print_json(&allocations)?;
            } else {
                for a in &allocations {
                    println!(
                        "{:>3}  {:<36}  {:>10}  {}",
                        a.index,
                        a.address,
                        a.coins,
                        status_label(Some(a.status))
                    );
                }
            }
        }

        Command::Classify { addresses } => {
            let rows: Vec<Classification> = addresses
                .into_iter()
                .map(Address::from)
                .map(|a| {
                    let decoded = a.decode().ok();
                    Classification {
                        status: registry.classify(&a),
                        well_formed: decoded.is_some(),
                        key: decoded.map(|d| d.key_hex()),
                        address: a.to_string(),
                    }
                })
                .collect();
            if args.json {
                print_json(&rows)?;
            } else {
                for r in &rows {
                    let key = r.key.as_deref().unwrap_or("(malformed)");
                    println!("{}  {}  {}", r.address, status_label(r.status), key);
                }
            }
        }

        Command::CheckSpend { outputs } => {
            let spent = load_outputs(&outputs)?;
            debug!(outputs = spent.len(), "checking spend");
            let locked_address = match registry.check_spend(&spent) {
                Ok(()) => None,
                Err(AllotError::LockedOutputSpent { address }) => Some(address),
                Err(e) => return Err(e.into()),
            };
            let verdict = SpendVerdict {
                outputs: spent.len(),
                locked: locked_address.is_some(),
                locked_address,
            };

            if args.json {
                print_json(&verdict)?;
            } else {
                match &verdict.locked_address {
                    Some(a) => println!("LOCKED: spends output owned by {a}"),
                    None => println!("ok: {} outputs, none locked", verdict.outputs),
                }
            }

            if verdict.locked {
                return Ok(ExitCode::from(EXIT_LOCKED));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_outputs(path: &Path) -> anyhow::Result<Vec<UxOut>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading outputs from {}", path.display()))?;
    serde_json::from_str(&json).context("parsing outputs JSON")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn status_label(status: Option<LockStatus>) -> &'static str {
    match status {
        Some(LockStatus::Unlocked) => "unlocked",
        Some(LockStatus::Locked) => "locked",
        None => "not-distribution",
    }
}
