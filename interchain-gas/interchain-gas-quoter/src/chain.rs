//! Chain references as accepted on the command line, and their resolution to
//! canonical chain names

use std::{convert::Infallible, fmt, str::FromStr};

use crate::registry::ChainRegistry;

/// Hyperlane domain ids of well-known mainnet chains
///
/// On these chains the Hyperlane domain id is the EVM chain id. Not every chain
/// listed here is configured in the default registry.
pub const KNOWN_DOMAINS: &[(u32, &str)] = &[
    (1, "ethereum"),
    (10, "optimism"),
    (56, "bsc"),
    (100, "gnosis"),
    (137, "polygon"),
    (1284, "moonbeam"),
    (8453, "base"),
    (42161, "arbitrum"),
    (42220, "celo"),
    (43114, "avalanche"),
    (59144, "linea"),
    (534352, "scroll"),
];

/// Look up the canonical name of a well-known domain id
pub fn known_domain_name(domain_id: u32) -> Option<&'static str> {
    KNOWN_DOMAINS.iter().find(|(id, _)| *id == domain_id).map(|(_, name)| *name)
}

/// A reference to a chain, either by name or by Hyperlane domain id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainRef {
    /// A chain referenced by its name, e.g. `ethereum`
    ByName(String),
    /// A chain referenced by its numeric domain id, e.g. `1`
    ByDomainId(u32),
}

impl ChainRef {
    /// Resolve the reference to a chain name using the static domain table
    ///
    /// Unknown domain ids are passed through as their decimal text
    pub fn resolve(&self) -> String {
        match self {
            Self::ByName(name) => name.clone(),
            Self::ByDomainId(id) => {
                known_domain_name(*id).map(str::to_string).unwrap_or_else(|| id.to_string())
            },
        }
    }

    /// Resolve the reference, preferring the domain ids configured in the given
    /// registry over the static domain table
    pub fn resolve_with(&self, registry: &ChainRegistry) -> String {
        match self {
            Self::ByDomainId(id) => match registry.name_for_domain(*id) {
                Some(name) => name.to_string(),
                None => self.resolve(),
            },
            Self::ByName(_) => self.resolve(),
        }
    }
}

impl FromStr for ChainRef {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `u32::from_str` accepts a leading `+`, which is not a domain id
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self::ByName(s.to_string()));
        }

        Ok(match s.parse::<u32>() {
            Ok(id) => Self::ByDomainId(id),
            Err(_) => Self::ByName(s.to_string()),
        })
    }
}

impl fmt::Display for ChainRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName(name) => write!(f, "{name}"),
            Self::ByDomainId(id) => write!(f, "{id}"),
        }
    }
}
