//! Tumbler demo binary.
//!
//! Installs a secret in a fresh lock and brute-forces it, logging the
//! recovered combination and how many attempts it took.
//!
//! # Usage
//!
//! ```bash
//! # Attack a known secret
//! tumbler --secret QRS
//!
//! # Attack a random secret with per-search debug logs
//! tumbler --random --log-level debug
//! ```

use clap::Parser;
use rand::Rng;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tumbler_core::{Combination, DIAL_SIZE, Letter, Lock, LockError};
use tumbler_search::Searcher;

/// Brute-force a three-letter combination lock
#[derive(Parser, Debug)]
#[command(name = "tumbler")]
#[command(about = "Brute-force a three-letter combination lock")]
#[command(version)]
struct Args {
    /// Combination to install (three uppercase letters A-Z)
    #[arg(short, long, default_value = "ABC")]
    secret: String,

    /// Install a uniformly random combination instead of --secret
    #[arg(long, conflicts_with = "secret")]
    random: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let mut lock = build_lock(&args).inspect_err(|err| {
        tracing::error!(%err, "cannot install secret");
    })?;

    tracing::info!("Tumbler starting");

    let mut searcher = Searcher::new(&mut lock);
    let found = searcher.find_combination().inspect_err(|err| {
        tracing::error!(%err, "search failed");
    })?;

    match found {
        Some(combination) => {
            let attempts = searcher.attempts().unwrap_or_default();
            tracing::info!(%combination, attempts, "combination recovered");
        },
        None => tracing::warn!("search exhausted without opening the lock"),
    }

    Ok(())
}

fn build_lock(args: &Args) -> Result<Lock, LockError> {
    if !args.random {
        return Lock::new(&args.secret);
    }

    let mut rng = rand::thread_rng();
    let letters = std::array::from_fn(|_| Letter::ALL[rng.gen_range(0..DIAL_SIZE)]);
    Ok(Lock::with_combination(Combination::from_letters(letters)))
}
