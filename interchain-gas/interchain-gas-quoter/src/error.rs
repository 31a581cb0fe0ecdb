//! Error types for the interchain gas quoter

use thiserror::Error;

/// The error type returned while configuring or querying a quoter
#[derive(Debug, Error)]
pub enum QuoterError {
    /// The chain registry configuration is malformed
    #[error("Configuration error: {0}")]
    Config(String),
    /// The requested deployment environment is not configured
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),
    /// A chain outside the configured registry was requested
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),
    /// The gas paymaster rejected the quote for a route
    #[error("No gas quote for route {origin} -> {destination}: {reason}")]
    Route {
        /// The origin chain of the rejected route
        origin: String,
        /// The destination chain of the rejected route
        destination: String,
        /// The reason the quote was rejected
        reason: String,
    },
    /// An error talking to a chain's RPC endpoints
    #[error("RPC error: {0}")]
    Rpc(String),
    /// An encoded quote could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl QuoterError {
    /// Create a new config error
    #[allow(clippy::needless_pass_by_value)]
    pub fn config<T: ToString>(msg: T) -> Self {
        Self::Config(msg.to_string())
    }

    /// Create a new unsupported chain error
    #[allow(clippy::needless_pass_by_value)]
    pub fn unsupported_chain<T: ToString>(chain: T) -> Self {
        Self::UnsupportedChain(chain.to_string())
    }

    /// Create a new route error
    #[allow(clippy::needless_pass_by_value)]
    pub fn route<T: ToString>(origin: &str, destination: &str, reason: T) -> Self {
        Self::Route {
            origin: origin.to_string(),
            destination: destination.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a new RPC error
    #[allow(clippy::needless_pass_by_value)]
    pub fn rpc<T: ToString>(msg: T) -> Self {
        Self::Rpc(msg.to_string())
    }

    /// Create a new decode error
    #[allow(clippy::needless_pass_by_value)]
    pub fn decode<T: ToString>(msg: T) -> Self {
        Self::Decode(msg.to_string())
    }
}
