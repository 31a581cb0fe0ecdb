//! The chain registry: which chains may be quoted, and how to reach them

use std::{collections::BTreeMap, path::Path};

use alloy_primitives::Address;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::QuoterError;

/// The bundled chain registry, used when no config file is given
const DEFAULT_CHAIN_CONFIG: &str = include_str!("../chains.toml");

/// The connection configuration for a single chain
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConnectionConfig {
    /// The Hyperlane domain id of the chain
    pub domain_id: u32,
    /// The address of the interchain gas paymaster deployed on the chain
    pub igp_address: Address,
    /// The symbol of the chain's native gas token, used for logging
    pub native_token: String,
    /// RPC endpoints for the chain, tried in order
    pub rpc_urls: Vec<Url>,
}

/// A mapping from chain name to connection configuration
///
/// Only chains in the registry can be quoted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ChainRegistry {
    /// The configured chains, keyed by name
    chains: BTreeMap<String, ChainConnectionConfig>,
}

impl ChainRegistry {
    /// Get the config for a chain
    pub fn get(&self, name: &str) -> Option<&ChainConnectionConfig> {
        self.chains.get(name)
    }

    /// Whether the chain is configured
    pub fn contains(&self, name: &str) -> bool {
        self.chains.contains_key(name)
    }

    /// Add or replace a chain
    pub fn insert(&mut self, name: &str, config: ChainConnectionConfig) {
        self.chains.insert(name.to_string(), config);
    }

    /// The configured chain names, sorted
    pub fn chain_names(&self) -> Vec<&str> {
        self.chains.keys().map(String::as_str).collect()
    }

    /// Find the configured chain with the given domain id
    pub fn name_for_domain(&self, domain_id: u32) -> Option<&str> {
        self.chains
            .iter()
            .find(|(_, config)| config.domain_id == domain_id)
            .map(|(name, _)| name.as_str())
    }

    /// Iterate over the configured chains
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChainConnectionConfig)> {
        self.chains.iter().map(|(name, config)| (name.as_str(), config))
    }

    /// Check that every chain can be connected to
    fn validate(&self, environment: &str) -> Result<(), QuoterError> {
        for (name, config) in self.iter() {
            if config.rpc_urls.is_empty() {
                return Err(QuoterError::config(format!(
                    "chain '{name}' in environment '{environment}' has no RPC URLs"
                )));
            }
        }

        Ok(())
    }
}

/// Chain registries keyed by deployment environment, e.g. `mainnet`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentsConfig {
    /// The registry for each environment
    environments: BTreeMap<String, ChainRegistry>,
}

impl EnvironmentsConfig {
    /// Load the config from the given path, or the bundled default if none is
    /// given
    pub fn load(path: Option<&Path>) -> Result<Self, QuoterError> {
        match path {
            Some(path) => {
                debug!("loading chain config from {}", path.display());
                let config_str = std::fs::read_to_string(path).map_err(|e| {
                    QuoterError::config(format!("failed to read {}: {e}", path.display()))
                })?;
                Self::from_toml(&config_str)
            },
            None => Self::from_toml(DEFAULT_CHAIN_CONFIG),
        }
    }

    /// Parse and validate a TOML config
    pub fn from_toml(config_str: &str) -> Result<Self, QuoterError> {
        let config: Self = toml::from_str(config_str).map_err(QuoterError::config)?;
        for (environment, registry) in config.environments.iter() {
            registry.validate(environment)?;
        }

        Ok(config)
    }

    /// Get the registry for an environment
    pub fn environment(&self, name: &str) -> Result<&ChainRegistry, QuoterError> {
        self.environments
            .get(name)
            .ok_or_else(|| QuoterError::UnknownEnvironment(name.to_string()))
    }
}
