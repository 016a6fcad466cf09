//! Mock quoters and request helpers shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use cosmwasm_std::Uint256;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use swap_router::quote::{
    ClassicQuote, DutchV1Quote, DutchV2Quote, GasEstimate, IntentOrder, IntentQuote, RelayQuote,
};
use swap_router::types::{
    ClassicConfig, DutchV1Config, DutchV2Config, RelayConfig, RoutingConfig, TradeIntent,
};
use swap_router::{Quote, QuoteRequest, Quoter, QuoterError, TradeType, Venue};

pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
pub const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";

/// Gas units every mocked Classic route reports
pub const ROUTE_GAS_UNITS: u64 = 100_000;

pub fn u(v: u128) -> Uint256 {
    Uint256::from(v)
}

pub fn intent(trade_type: TradeType, token_in: &str, token_out: &str, amount: u128) -> TradeIntent {
    TradeIntent::builder()
        .request_id("integration")
        .chain_id(1)
        .token_in(token_in)
        .token_out(token_out)
        .amount(amount)
        .trade_type(trade_type)
        .slippage_tolerance("0.5")
        .build()
        .unwrap()
}

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

pub fn requests(venues: &[Venue], info: &TradeIntent) -> Vec<QuoteRequest> {
    venues.iter().map(|&v| request(v, info.clone())).collect()
}

/// Route gas priced at `gas_quote` quote-token units, worth $5
pub fn gas(gas_quote: u128) -> GasEstimate {
    GasEstimate {
        gas_use_estimate: ROUTE_GAS_UNITS,
        gas_use_estimate_quote: u(gas_quote),
        gas_use_estimate_usd: Decimal::new(5, 0),
        gas_price_wei: u(30_000_000_000),
    }
}

/// Classic router answering from a fixed table of token pairs
#[derive(Clone, Default)]
pub struct MockClassicQuoter {
    routes: Arc<Mutex<HashMap<(String, String), (u128, u128)>>>,
    calls: Arc<Mutex<Vec<QuoteRequest>>>,
}

impl MockClassicQuoter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quote `quote` for the pair, with route gas costing `gas_quote`
    pub fn with_route(self, token_in: &str, token_out: &str, quote: u128, gas_quote: u128) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((token_in.to_string(), token_out.to_string()), (quote, gas_quote));
        self
    }

    pub fn calls(&self) -> Vec<QuoteRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Quoter for MockClassicQuoter {
    async fn quote(&self, request: &QuoteRequest) -> Result<Option<Quote>, QuoterError> {
        self.calls.lock().unwrap().push(request.clone());
        let pair = (request.info.token_in.clone(), request.info.token_out.clone());
        let route = self.routes.lock().unwrap().get(&pair).copied();

        Ok(route.map(|(quote, gas_quote)| {
            Quote::Classic(ClassicQuote::new(request.clone(), u(quote), gas(gas_quote)))
        }))
    }
}

/// Market maker quoting a fixed amount on the quoted side of any request
pub struct MockRfqQuoter {
    pub amount: u128,
    pub filler: Option<String>,
}

impl MockRfqQuoter {
    pub fn new(amount: u128) -> Self {
        Self {
            amount,
            filler: None,
        }
    }
}

#[async_trait]
impl Quoter for MockRfqQuoter {
    async fn quote(&self, request: &QuoteRequest) -> Result<Option<Quote>, QuoterError> {
        let (amount_in, amount_out) = match request.trade_type() {
            TradeType::ExactInput => (request.info.amount, u(self.amount)),
            TradeType::ExactOutput => (u(self.amount), request.info.amount),
        };
        let mut order = IntentOrder::rfq(
            request.clone(),
            format!("rfq-{}", request.venue()),
            amount_in,
            amount_out,
        );
        if let Some(filler) = &self.filler {
            order = order.with_filler(filler.clone());
        }

        Ok(match request.venue() {
            Venue::Classic => None,
            Venue::DutchV1 => Some(DutchV1Quote::rfq(order).into_quote()),
            Venue::DutchV2 => Some(DutchV2Quote::rfq(order).into_quote()),
            Venue::Relay => Some(RelayQuote::rfq(order, u(1_000)).into_quote()),
        })
    }
}

/// Quoter that always fails
pub struct FailingQuoter;

#[async_trait]
impl Quoter for FailingQuoter {
    async fn quote(&self, _request: &QuoteRequest) -> Result<Option<Quote>, QuoterError> {
        Err(QuoterError::Upstream(anyhow::anyhow!("service unavailable")))
    }
}
