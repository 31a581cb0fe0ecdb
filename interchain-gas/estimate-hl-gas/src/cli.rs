//! The CLI for the interchain gas estimator

use std::path::PathBuf;

use alloy_primitives::U256;
use clap::Parser;
use interchain_gas_quoter::{
    quoter::DEFAULT_HANDLE_GAS, ChainRef, ChainRegistry, OutputFormat, QuoteRequest,
};
use tracing::debug;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Estimates the payment needed to relay a Hyperlane message and prints it as
/// an ABI-encoded uint256
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // --- Route --- //
    /// The origin chain, by name or Hyperlane domain id
    #[arg(default_value = "ethereum")]
    pub origin: ChainRef,
    /// The destination chain, by name or Hyperlane domain id
    #[arg(default_value = "polygon")]
    pub destination: ChainRef,
    /// The gas consumed by the recipient's `handle` function
    #[arg(default_value_t = U256::from(DEFAULT_HANDLE_GAS))]
    pub handle_gas: U256,

    // --- Chain Config --- //
    /// The Hyperlane deployment environment to quote against
    #[arg(long, env = "HL_ENVIRONMENT", default_value = "mainnet")]
    pub environment: String,
    /// Path to a TOML chain registry, replacing the bundled one
    #[arg(long, env = "HL_CHAIN_CONFIG")]
    pub config: Option<PathBuf>,

    // --- Output --- //
    /// Print the encoded quote as a 0x-prefixed hex string instead of raw bytes
    #[arg(long)]
    pub hex: bool,

    // --- Telemetry --- //
    /// Whether or not to emit JSON-formatted logs
    #[arg(long, env = "JSON_LOGS")]
    pub json_logs: bool,
}

impl Cli {
    /// Configure logging to stderr, keeping stdout for the encoded quote
    pub fn configure_telemetry(&self) {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();
        let registry = tracing_subscriber::registry().with(filter);

        if self.json_logs {
            registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_file(true)
                        .with_line_number(true)
                        .json()
                        .flatten_event(true),
                )
                .init();
        } else {
            registry.with(fmt::layer().with_writer(std::io::stderr)).init();
        }
    }

    /// Build the quote request, resolving chain references against the
    /// registry
    pub fn quote_request(&self, registry: &ChainRegistry) -> QuoteRequest {
        let origin = self.origin.resolve_with(registry);
        let destination = self.destination.resolve_with(registry);
        debug!("resolved {} -> {origin}, {} -> {destination}", self.origin, self.destination);

        QuoteRequest::new(&origin, &destination, self.handle_gas)
    }

    /// The format to print the quote in
    pub fn output_format(&self) -> OutputFormat {
        if self.hex {
            OutputFormat::Hex
        } else {
            OutputFormat::Raw
        }
    }
}
