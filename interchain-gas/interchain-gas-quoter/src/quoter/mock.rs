//! A mock quoter for testing, which serves canned quotes over an injected
//! chain registry

use std::collections::HashMap;

use alloy_primitives::U256;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{error::QuoterError, registry::ChainRegistry};

use super::{InterchainGasQuoter, QuoteRequest};

/// A mock quoter, returning a canned quote for any route within its registry
pub struct MockQuoter {
    /// The chains that may be quoted
    registry: ChainRegistry,
    /// Quotes for specific `(origin, destination)` routes
    route_quotes: HashMap<(String, String), U256>,
    /// The quote for routes without a specific quote
    default_quote: U256,
    /// Every request received, in order
    requests: Mutex<Vec<QuoteRequest>>,
}

impl MockQuoter {
    /// Create a mock quoter returning `default_quote` for every supported
    /// route
    pub fn new(registry: ChainRegistry, default_quote: U256) -> Self {
        Self {
            registry,
            route_quotes: HashMap::new(),
            default_quote,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Set the quote for a specific route
    pub fn with_route_quote(mut self, origin: &str, destination: &str, quote: U256) -> Self {
        self.route_quotes.insert((origin.to_string(), destination.to_string()), quote);
        self
    }

    /// The requests received so far
    pub async fn requests(&self) -> Vec<QuoteRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl InterchainGasQuoter for MockQuoter {
    async fn estimate_payment_for_handle_gas(
        &self,
        request: &QuoteRequest,
    ) -> Result<U256, QuoterError> {
        self.requests.lock().await.push(request.clone());
        for chain in [&request.origin, &request.destination] {
            if !self.registry.contains(chain) {
                return Err(QuoterError::unsupported_chain(chain));
            }
        }

        let route = (request.origin.clone(), request.destination.clone());
        Ok(self.route_quotes.get(&route).copied().unwrap_or(self.default_quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EnvironmentsConfig;

    /// Build a mock over the bundled mainnet registry
    fn mainnet_mock(default_quote: u64) -> MockQuoter {
        let config = EnvironmentsConfig::load(None).unwrap();
        let registry = config.environment("mainnet").unwrap().clone();
        MockQuoter::new(registry, U256::from(default_quote))
    }

    #[tokio::test]
    async fn test_route_quotes() {
        let quoter = mainnet_mock(7).with_route_quote("celo", "bsc", U256::from(99));

        let req = QuoteRequest::new("celo", "bsc", U256::from(1));
        assert_eq!(quoter.estimate_payment_for_handle_gas(&req).await.unwrap(), U256::from(99));

        let req = QuoteRequest::new("bsc", "celo", U256::from(1));
        assert_eq!(quoter.estimate_payment_for_handle_gas(&req).await.unwrap(), U256::from(7));

        assert_eq!(quoter.requests().await.len(), 2);
    }

    #[tokio::test]
    async fn test_rejects_unregistered_chain() {
        let quoter = mainnet_mock(7);
        let req = QuoteRequest::new("ethereum", "base", U256::from(1));
        let err = quoter.estimate_payment_for_handle_gas(&req).await.unwrap_err();
        assert!(matches!(err, QuoterError::UnsupportedChain(c) if c == "base"));
    }
}
