//! Quotes a single route and writes the encoded quote

use std::io::Write;

use alloy_primitives::U256;
use anyhow::{Context, Result};
use interchain_gas_quoter::{encode_quote, InterchainGasQuoter, OutputFormat, QuoteRequest};

/// Quote the request and write the encoded quote to `out`
///
/// Nothing is written unless the quote succeeds
pub async fn estimate<Q, W>(
    quoter: &Q,
    request: &QuoteRequest,
    format: OutputFormat,
    out: &mut W,
) -> Result<U256>
where
    Q: InterchainGasQuoter + ?Sized,
    W: Write,
{
    let quote = quoter.estimate_payment_for_handle_gas(request).await?;

    let output = format.render(&encode_quote(quote));
    out.write_all(&output).context("failed to write quote")?;
    out.flush().context("failed to flush output")?;

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use interchain_gas_quoter::{
        decode_quote, ChainRegistry, EnvironmentsConfig, MockQuoter, QuoterError,
    };

    use super::*;
    use crate::cli::Cli;

    /// The bundled mainnet registry
    fn mainnet() -> ChainRegistry {
        EnvironmentsConfig::load(None).unwrap().environment("mainnet").unwrap().clone()
    }

    /// Run the estimator for the given CLI args against a mock quoter
    async fn run(quoter: &MockQuoter, args: &[&str]) -> (Result<U256>, Vec<u8>) {
        let argv = std::iter::once("estimate-hl-gas").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).unwrap();
        let request = cli.quote_request(&mainnet());

        let mut out = Vec::new();
        let res = estimate(quoter, &request, cli.output_format(), &mut out).await;
        (res, out)
    }

    #[tokio::test]
    async fn test_output_is_exact_quote() {
        let quote = U256::from(3_141_592_653_589_793_u64);
        let quoter = MockQuoter::new(mainnet(), U256::ZERO)
            .with_route_quote("arbitrum", "optimism", quote);

        let (res, out) = run(&quoter, &["arbitrum", "optimism", "123456"]).await;
        assert_eq!(res.unwrap(), quote);
        assert_eq!(out.len(), 32);
        assert_eq!(decode_quote(&out).unwrap(), quote);

        // The request reached the quoter unchanged
        let requests = quoter.requests().await;
        assert_eq!(requests, vec![QuoteRequest::new("arbitrum", "optimism", U256::from(123_456))]);
    }

    #[tokio::test]
    async fn test_every_supported_route_is_one_word() {
        let registry = mainnet();
        let quoter = MockQuoter::new(registry.clone(), U256::MAX);
        for origin in registry.chain_names() {
            for destination in registry.chain_names() {
                let (res, out) = run(&quoter, &[origin, destination]).await;
                assert_eq!(res.unwrap(), U256::MAX);
                assert_eq!(out, vec![0xff; 32]);
            }
        }
    }

    #[tokio::test]
    async fn test_domain_ids_match_names() {
        let quoter = MockQuoter::new(mainnet(), U256::from(5))
            .with_route_quote("ethereum", "gnosis", U256::from(77));

        let (_, by_id) = run(&quoter, &["1", "100"]).await;
        let (_, by_name) = run(&quoter, &["ethereum", "gnosis"]).await;
        assert_eq!(by_id, by_name);
        assert_eq!(decode_quote(&by_id).unwrap(), U256::from(77));
    }

    #[tokio::test]
    async fn test_defaults() {
        let quoter = MockQuoter::new(mainnet(), U256::from(9));

        let (_, defaulted) = run(&quoter, &[]).await;
        let (_, explicit) = run(&quoter, &["ethereum", "polygon", "200000"]).await;
        assert_eq!(defaulted, explicit);

        let requests = quoter.requests().await;
        assert_eq!(requests[0], requests[1]);
        assert_eq!(requests[0], QuoteRequest::new("ethereum", "polygon", U256::from(200_000)));
    }

    #[tokio::test]
    async fn test_unsupported_chain_writes_nothing() {
        let quoter = MockQuoter::new(mainnet(), U256::from(1));

        for args in [["solana", "polygon"], ["ethereum", "8453"]] {
            let (res, out) = run(&quoter, &args).await;
            let err = res.unwrap_err();
            assert!(matches!(
                err.downcast_ref::<QuoterError>(),
                Some(QuoterError::UnsupportedChain(_))
            ));
            assert!(out.is_empty());
        }
    }

    #[tokio::test]
    async fn test_hex_output() {
        let quoter = MockQuoter::new(mainnet(), U256::from(0xabcd));
        let (_, out) = run(&quoter, &["--hex"]).await;

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, format!("0x{}abcd", "0".repeat(60)));
    }
}
