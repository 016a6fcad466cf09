//! Shared fixtures for unit tests

use async_trait::async_trait;
use cosmwasm_std::Uint256;
use rust_decimal::Decimal;
use swap_router_quote::{ClassicQuote, GasEstimate, Quote};
use swap_router_types::{
    ClassicConfig, DutchV1Config, DutchV2Config, QuoteRequest, RelayConfig, RoutingConfig,
    TradeIntent, TradeType, Venue,
};

use crate::{Quoter, QuoterError};

pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
pub const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";

pub fn intent(trade_type: TradeType, token_in: &str, token_out: &str, amount: u128) -> TradeIntent {
    TradeIntent::builder()
        .request_id("test-request")
        .chain_id(1)
        .token_in(token_in)
        .token_out(token_out)
        .amount(amount)
        .trade_type(trade_type)
        .slippage_tolerance("0.5")
        .build()
        .unwrap()
}

/// Request for `venue` with default routing parameters
pub fn request(venue: Venue, info: TradeIntent) -> QuoteRequest {
    let config = match venue {
        Venue::Classic => RoutingConfig::Classic(ClassicConfig::default()),
        Venue::DutchV1 => RoutingConfig::DutchV1(DutchV1Config::default()),
        Venue::DutchV2 => RoutingConfig::DutchV2(DutchV2Config::default()),
        Venue::Relay => RoutingConfig::Relay(RelayConfig {
            gas_token: info.token_in.clone(),
            ..Default::default()
        }),
    };
    QuoteRequest::new(info, config)
}

/// Classic quote whose gas prices one unit at one quote-token unit
pub fn classic_quote(request: &QuoteRequest, quote: u128, gas_quote: u128) -> Quote {
    Quote::Classic(ClassicQuote::new(
        request.clone(),
        Uint256::from(quote),
        GasEstimate {
            gas_use_estimate: gas_quote as u64,
            gas_use_estimate_quote: Uint256::from(gas_quote),
            gas_use_estimate_usd: Decimal::new(5, 0),
            gas_price_wei: Uint256::from(1_000_000_000u128),
        },
    ))
}

type Respond = dyn Fn(&QuoteRequest) -> Result<Option<Quote>, QuoterError> + Send + Sync;

/// Quoter answering from a closure
pub struct FnQuoter {
    respond: Box<Respond>,
}

impl FnQuoter {
    pub fn new(
        respond: impl Fn(&QuoteRequest) -> Result<Option<Quote>, QuoterError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
        }
    }
}

#[async_trait]
impl Quoter for FnQuoter {
    async fn quote(&self, request: &QuoteRequest) -> Result<Option<Quote>, QuoterError> {
        (self.respond)(request)
    }
}
