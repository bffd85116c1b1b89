//! CONCORDIA Labor-law Reference Runtime — Demo CLI
//!
//! Runs one or all of the three contract-review demo scenarios.  Each
//! scenario uses real CONCORDIA components (normalizer, redactor, consensus
//! policy, cross-checker) wired to deterministic model stubs.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- concurring
//!   cargo run -p demo -- split
//!   cargo run -p demo -- degraded

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use concordia_ref_labor::scenarios::{concurring_verdicts, degraded_capability, split_verdicts};

// ── CLI definition ────────────────────────────────────────────────────────────

/// CONCORDIA — Dual-model cross-check labor-law demo.
///
/// Each subcommand runs one or all of the three contract-review scenarios,
/// demonstrating normalization, failure containment, the agreement
/// protocol, and personal-data masking.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "CONCORDIA labor-law reference runtime demo",
    long_about = "Runs CONCORDIA contract-review demo scenarios showing schema\n\
                  normalization, failure containment, the dual-model agreement\n\
                  protocol, and personal-data masking."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three contract-review scenarios in sequence.
    RunAll,
    /// Scenario 1: Concurring Verdicts (agreement + consolidation + masking).
    Concurring,
    /// Scenario 2: Split Verdicts (disagreement preserved, human review).
    Split,
    /// Scenario 3: Degraded Capability (containment + single-model mode).
    Degraded,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all().await,
        Command::Concurring => run_concurring().await,
        Command::Split => run_split().await,
        Command::Degraded => run_degraded().await,
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

async fn run_all() -> concordia_contracts::ConcordiaResult<()> {
    run_concurring().await?;
    run_split().await?;
    run_degraded().await?;
    Ok(())
}

async fn run_concurring() -> concordia_contracts::ConcordiaResult<()> {
    concurring_verdicts::run_scenario().await
}

async fn run_split() -> concordia_contracts::ConcordiaResult<()> {
    split_verdicts::run_scenario().await
}

async fn run_degraded() -> concordia_contracts::ConcordiaResult<()> {
    degraded_capability::run_scenario().await
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("CONCORDIA — Dual-model Cross-check for Contract Review");
    println!("Labor-law Reference Demo");
    println!("=======================================================");
    println!();
    println!("CONCORDIA cross-check protocol per request:");
    println!("  [1] The same contract image fans out to every registered model concurrently");
    println!("  [2] Each raw reply is normalized against the canonical verdict schema");
    println!("  [3] Model failures are contained as ERROR results, never propagated");
    println!("  [4] Statuses are compared → agreed / disagreed / insufficient-data");
    println!("  [5] Report text is masked: resident ids and mobile numbers never leave");
    println!();
}
