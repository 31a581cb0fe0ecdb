//! Quotes the native-token payment that must accompany a Hyperlane message so
//! that the destination chain's `handle` call receives a given amount of gas
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(clippy::needless_pass_by_value)]
#![deny(unsafe_code)]
#![deny(clippy::uninlined_format_args)]

pub mod chain;
pub mod encoding;
pub mod error;
pub mod quoter;
pub mod registry;

pub use chain::ChainRef;
pub use encoding::{decode_quote, encode_quote, OutputFormat};
pub use error::QuoterError;
pub use quoter::{igp::IgpQuoter, InterchainGasQuoter, QuoteRequest};
pub use registry::{ChainConnectionConfig, ChainRegistry, EnvironmentsConfig};

#[cfg(any(test, feature = "mocks"))]
pub use quoter::mock::MockQuoter;
