//! STEWARD — Support Agent Capability Control Demo CLI
//!
//! Runs one or all of the three demo scenarios. Each scenario uses real
//! STEWARD components (capability registry, resolver, lifecycle manager)
//! wired against the in-memory host implementations.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- provisioning
//!   cargo run -p demo -- access-check
//!   cargo run -p demo -- display

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod scenarios;

// ── CLI definition ────────────────────────────────────────────────────────────

/// STEWARD — capability-scoped support agents demo.
///
/// Each subcommand runs one or all of the demo scenarios, showing agent
/// provisioning, fail-closed access checks, and display-title resolution.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "STEWARD support-agent capability-control demo",
    long_about = "Runs STEWARD demo scenarios showing agent provisioning,\n\
                  capability grant validation, fail-closed access checks,\n\
                  and grouped display titles."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: agent provisioning and boundary validation.
    Provisioning,
    /// Scenario 2: capability resolution and fail-closed access checks.
    AccessCheck,
    /// Scenario 3: grouped display titles with the platform marker.
    Display,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output,
    // including the resolver's dropped-grant traces.
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
        Command::RunAll => run_all(),
        Command::Provisioning => scenarios::run_provisioning(),
        Command::AccessCheck => scenarios::run_access_check(),
        Command::Display => scenarios::run_display(),
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

fn run_all() -> steward_contracts::error::StewardResult<()> {
    scenarios::run_provisioning()?;
    scenarios::run_access_check()?;
    scenarios::run_display()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("STEWARD — Capability-Scoped Support Agents");
    println!("==========================================");
    println!();
    println!("Resolution model per access check:");
    println!("  [1] effective = (agent grants ∪ granting-admin caps) ∩ registry keys");
    println!("  [2] unregistered keys are dropped, never granted");
    println!("  [3] missing agent or empty key → deny (fail closed, never an error)");
    println!();
}
