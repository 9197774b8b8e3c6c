//! Noisy-Walker main entry point
//!
//! This is the command-line interface for the Noisy-Walker random web walker.

use anyhow::Context;
use clap::Parser;
use noisy_walker::config::{load_policy_or_default, TraversalPolicy};
use noisy_walker::crawler::{crawl, RunLimits};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Noisy-Walker: a random-walk web wanderer
///
/// Noisy-Walker picks a random root URL, follows random links until it hits a
/// dead end, the depth limit, or the timeout, then starts over. By default it
/// never stops on its own.
#[derive(Parser, Debug)]
#[command(name = "noisy-walker")]
#[command(version = "1.0.0")]
#[command(about = "A random-walk web wanderer", long_about = None)]
struct Cli {
    /// Path to the JSON (or .toml) configuration file
    #[arg(value_name = "CONFIG", default_value = "config.json")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the loaded policy without walking
    #[arg(long)]
    dry_run: bool,

    /// Stop after this many walks
    #[arg(long, value_name = "N")]
    max_walks: Option<u64>,

    /// Stop once a walk finishes after this many seconds
    #[arg(long, value_name = "SECS")]
    max_runtime: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (policy, hash) = load_policy_or_default(&cli.config);
    if let Some(hash) = hash {
        tracing::info!("Configuration loaded (hash: {})", hash);
    }

    if cli.dry_run {
        print_policy(&cli.config, &policy);
        return Ok(());
    }

    let limits = RunLimits {
        max_walks: cli.max_walks,
        max_runtime: cli.max_runtime.map(Duration::from_secs),
    };

    tracing::info!(
        "Root URLs: {}, Blacklist: {}, Max depth: {}",
        policy.root_urls.len(),
        policy.blacklisted_urls.len(),
        policy.max_depth
    );

    crawl(policy, limits).await.context("Crawl stopped")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("noisy_walker=info,warn"),
            1 => EnvFilter::new("noisy_walker=debug,info"),
            2 => EnvFilter::new("noisy_walker=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode
fn print_policy(path: &std::path::Path, policy: &TraversalPolicy) {
    println!("=== Noisy-Walker Dry Run ===\n");
    println!("Config: {}\n", path.display());

    println!("Traversal Policy:");
    println!("  Max depth: {}", policy.max_depth);
    println!("  Sleep: {}ms..{}ms", policy.min_sleep, policy.max_sleep);
    if policy.timeout {
        println!("  Timeout: {}s", policy.timeout_secs);
    } else {
        println!("  Timeout: disabled");
    }

    println!("\nRoot URLs ({}):", policy.root_urls.len());
    for root in &policy.root_urls {
        println!("  - {}", root);
    }

    println!("\nBlacklisted ({}):", policy.blacklisted_urls.len());
    for entry in &policy.blacklisted_urls {
        println!("  - {}", entry);
    }

    println!("\nUser Agents ({}):", policy.user_agents.len());
    for agent in &policy.user_agents {
        println!("  - {}", agent);
    }

    if policy.root_urls.is_empty() {
        println!("\n✗ No root URLs configured, a crawl would stop immediately");
    } else {
        println!("\n✓ Would walk from {} root URLs", policy.root_urls.len());
    }
}
