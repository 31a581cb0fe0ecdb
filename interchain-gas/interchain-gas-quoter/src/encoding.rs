//! ABI encoding of gas quotes for output

use alloy::hex;
use alloy_primitives::U256;
use alloy_sol_types::SolValue;

use crate::error::QuoterError;

/// The length of an ABI-encoded quote
pub const ENCODED_QUOTE_LEN: usize = 32;

/// Encode a quote as a single ABI `uint256` word
pub fn encode_quote(quote: U256) -> Vec<u8> {
    quote.abi_encode()
}

/// Decode a quote from a single ABI `uint256` word
pub fn decode_quote(data: &[u8]) -> Result<U256, QuoterError> {
    if data.len() != ENCODED_QUOTE_LEN {
        return Err(QuoterError::decode(format!(
            "expected {ENCODED_QUOTE_LEN} bytes, got {}",
            data.len()
        )));
    }

    U256::abi_decode(data).map_err(QuoterError::decode)
}

/// The format in which an encoded quote is emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The raw 32 byte word
    #[default]
    Raw,
    /// The word as a `0x` prefixed hex string
    Hex,
}

impl OutputFormat {
    /// Render an encoded quote in this format
    pub fn render(self, encoded: &[u8]) -> Vec<u8> {
        match self {
            Self::Raw => encoded.to_vec(),
            Self::Hex => hex::encode_prefixed(encoded).into_bytes(),
        }
    }
}
