//! Cluster provisioning commands

pub mod gcp;

use crate::cli::ProvisionCommands;
use anyhow::Result;

/// Run a provision subcommand
pub async fn run(cmd: ProvisionCommands) -> Result<()> {
    match cmd {
        ProvisionCommands::Gcp(args) => gcp::run(args).await,
    }
}
