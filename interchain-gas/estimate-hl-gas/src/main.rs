//! Prints the ABI-encoded payment, in the origin chain's native token, needed
//! to relay a Hyperlane message whose recipient consumes `handle_gas` gas
//!
//! Usage: estimate-hl-gas [origin] [destination] [handle_gas]

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(clippy::needless_pass_by_value)]
#![deny(unsafe_code)]
#![deny(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::Parser;
use interchain_gas_quoter::{EnvironmentsConfig, IgpQuoter};

use crate::{cli::Cli, estimate::estimate};

mod cli;
mod estimate;

/// Entrypoint for the interchain gas estimator
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.configure_telemetry();

    let config = EnvironmentsConfig::load(cli.config.as_deref())?;
    let registry = config.environment(&cli.environment)?;
    let quoter = IgpQuoter::new(&cli.environment, registry);

    let request = cli.quote_request(registry);
    estimate(&quoter, &request, cli.output_format(), &mut std::io::stdout().lock()).await?;

    Ok(())
}
