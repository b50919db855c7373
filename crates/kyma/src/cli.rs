//! CLI argument parsing with clap

use clap::{Parser, Subcommand};

pub use crate::commands::provision::gcp::{GcpArgs, Options};

/// Kyma - Kubernetes cluster bootstrap CLI
#[derive(Parser, Debug)]
#[command(name = "kyma")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Provision a Kubernetes cluster
    #[command(subcommand)]
    Provision(ProvisionCommands),
}

// Provision commands
#[derive(Subcommand, Debug)]
pub enum ProvisionCommands {
    /// Provision a GKE cluster on Google Cloud Platform
    Gcp(GcpArgs),
}
