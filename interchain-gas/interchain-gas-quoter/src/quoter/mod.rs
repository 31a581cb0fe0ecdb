//! The interface to an interchain gas pricing service, and its implementations

use alloy_primitives::U256;
use async_trait::async_trait;

use crate::error::QuoterError;

pub mod igp;
#[cfg(any(test, feature = "mocks"))]
pub mod mock;

/// The default amount of gas the destination `handle` call is given
pub const DEFAULT_HANDLE_GAS: u64 = 200_000;

/// A request for the payment needed to relay a message between two chains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    /// The name of the chain the message is sent from
    pub origin: String,
    /// The name of the chain the message is delivered to
    pub destination: String,
    /// The gas the destination `handle` call is expected to consume
    pub handle_gas: U256,
}

impl QuoteRequest {
    /// Create a new quote request
    pub fn new(origin: &str, destination: &str, handle_gas: U256) -> Self {
        Self { origin: origin.to_string(), destination: destination.to_string(), handle_gas }
    }
}

/// A service that prices interchain gas payments
#[async_trait]
pub trait InterchainGasQuoter: Send + Sync {
    /// The payment, in the origin chain's native token, that must be attached
    /// to a message so the destination handler is given at least
    /// `request.handle_gas` gas
    async fn estimate_payment_for_handle_gas(
        &self,
        request: &QuoteRequest,
    ) -> Result<U256, QuoterError>;
}
