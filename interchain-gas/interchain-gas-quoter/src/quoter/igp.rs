//! A quoter backed by the Hyperlane interchain gas paymaster contracts
//!
//! The paymaster on the origin chain prices a message's destination gas in the
//! origin's native token, using its configured gas oracles for the exchange
//! rate and destination gas price. Quoting is a single view call.

use std::{collections::BTreeMap, time::Duration};

use alloy::{
    contract::Error as ContractError,
    primitives::utils::format_ether,
    providers::{DynProvider, ProviderBuilder},
    sol,
};
use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
    error::QuoterError,
    registry::{ChainConnectionConfig, ChainRegistry, EnvironmentsConfig},
};

use super::{InterchainGasQuoter, QuoteRequest};

use InterchainGasPaymaster::InterchainGasPaymasterInstance;

/// The timeout applied to each RPC request
const RPC_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

sol! {
    #[sol(rpc)]
    contract InterchainGasPaymaster {
        function quoteGasPayment(uint32 destinationDomain, uint256 gasAmount) external view returns (uint256);
    }
}

// ----------------
// | Chain Client |
// ----------------

/// A handle to a single chain's gas paymaster, over one or more RPC providers
#[derive(Clone)]
struct ChainClient {
    /// The chain's Hyperlane domain id
    domain_id: u32,
    /// The address of the gas paymaster
    igp_address: Address,
    /// The symbol of the native gas token
    native_token: String,
    /// Providers for each configured RPC URL, in failover order
    providers: Vec<DynProvider>,
}

impl ChainClient {
    /// Create a client with an HTTP provider for each configured RPC URL
    fn new(config: &ChainConnectionConfig) -> Self {
        let providers = config
            .rpc_urls
            .iter()
            .map(|url| DynProvider::new(ProviderBuilder::new().connect_http(url.clone())))
            .collect();

        Self::with_providers(config, providers)
    }

    /// Create a client over the given providers
    fn with_providers(config: &ChainConnectionConfig, providers: Vec<DynProvider>) -> Self {
        Self {
            domain_id: config.domain_id,
            igp_address: config.igp_address,
            native_token: config.native_token.clone(),
            providers,
        }
    }

    /// Quote the payment for `gas_amount` destination gas, trying each
    /// provider in turn
    ///
    /// Only transport failures move on to the next provider; a response from a
    /// node, including a revert, is final
    async fn quote_gas_payment(
        &self,
        request: &QuoteRequest,
        destination_domain: u32,
    ) -> Result<U256, QuoterError> {
        let mut last_err = None;
        for (idx, provider) in self.providers.iter().enumerate() {
            let igp = InterchainGasPaymasterInstance::new(self.igp_address, provider.clone());
            let call = igp.quoteGasPayment(destination_domain, request.handle_gas);

            match tokio::time::timeout(RPC_REQUEST_TIMEOUT, call.call()).await {
                Ok(Ok(quote)) => return Ok(quote),
                Ok(Err(e)) if !is_transport_failure(&e) => {
                    return Err(QuoterError::route(&request.origin, &request.destination, e));
                },
                Ok(Err(e)) => {
                    warn!(origin = %request.origin, provider = idx, "gas quote failed: {e}");
                    last_err = Some(QuoterError::rpc(e));
                },
                Err(_) => {
                    warn!(origin = %request.origin, provider = idx, "gas quote timed out");
                    last_err = Some(QuoterError::rpc(format!(
                        "request to {} timed out after {RPC_REQUEST_TIMEOUT:?}",
                        request.origin
                    )));
                },
            }
        }

        Err(last_err.unwrap_or_else(|| {
            QuoterError::rpc(format!("no RPC providers configured for {}", request.origin))
        }))
    }
}

/// Whether the error happened before any node answered the call
fn is_transport_failure(err: &ContractError) -> bool {
    matches!(err, ContractError::TransportError(e) if e.as_error_resp().is_none())
}

// --------------
// | IGP Quoter |
// --------------

/// Quotes interchain gas payments from the origin chain's gas paymaster
#[derive(Clone)]
pub struct IgpQuoter {
    /// The deployment environment the registry belongs to
    environment: String,
    /// The chains that may be quoted, keyed by name
    chains: BTreeMap<String, ChainClient>,
}

impl IgpQuoter {
    /// Create a quoter for a named environment of the given config
    pub fn from_environment(
        environment: &str,
        config: &EnvironmentsConfig,
    ) -> Result<Self, QuoterError> {
        let registry = config.environment(environment)?;
        Ok(Self::new(environment, registry))
    }

    /// Create a quoter over a chain registry
    pub fn new(environment: &str, registry: &ChainRegistry) -> Self {
        let chains = registry
            .iter()
            .map(|(name, config)| (name.to_string(), ChainClient::new(config)))
            .collect();

        Self { environment: environment.to_string(), chains }
    }

    /// The deployment environment of the quoter
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Get the client for a chain in the registry
    fn chain(&self, name: &str) -> Result<&ChainClient, QuoterError> {
        self.chains.get(name).ok_or_else(|| QuoterError::unsupported_chain(name))
    }
}

#[async_trait]
impl InterchainGasQuoter for IgpQuoter {
    async fn estimate_payment_for_handle_gas(
        &self,
        request: &QuoteRequest,
    ) -> Result<U256, QuoterError> {
        let origin = self.chain(&request.origin)?;
        let destination = self.chain(&request.destination)?;

        let quote = origin.quote_gas_payment(request, destination.domain_id).await?;
        info!(
            environment = %self.environment,
            origin = %request.origin,
            destination = %request.destination,
            handle_gas = %request.handle_gas,
            "quoted {} {}",
            format_ether(quote),
            origin.native_token,
        );

        Ok(quote)
    }
}
