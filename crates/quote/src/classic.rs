use cosmwasm_std::Uint256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use swap_router_types::{QuoteRequest, TradeType};

use crate::math::{gas_adjustment, portion_of};

/// Gas cost of executing the Classic route
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEstimate {
    /// Gas units of the route
    pub gas_use_estimate: u64,

    /// Cost of those units in the quote token
    pub gas_use_estimate_quote: Uint256,

    #[serde(rename = "gasUseEstimateUSD")]
    pub gas_use_estimate_usd: Decimal,

    pub gas_price_wei: Uint256,
}

/// One pool hop of a Classic route
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteHop {
    pub protocol: String,
    pub address: String,
    pub token_in: String,
    pub token_out: String,
}

/// A quote from on-chain aggregated routing
///
/// `amount` is the request's fixed side, `quote` the routed other side. The
/// quote token is the output token for exact-input trades and the input token
/// for exact-output trades.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassicQuote {
    pub request: QuoteRequest,
    pub quote_id: String,
    pub amount: Uint256,
    pub quote: Uint256,
    pub gas: GasEstimate,
    pub route: Vec<RouteHop>,
    pub block_number: u64,
}

impl ClassicQuote {
    pub fn new(request: QuoteRequest, quote: Uint256, gas: GasEstimate) -> Self {
        Self {
            amount: request.info.amount,
            quote_id: uuid::Uuid::new_v4().to_string(),
            request,
            quote,
            gas,
            route: Vec::new(),
            block_number: 0,
        }
    }

    pub fn with_route(mut self, route: Vec<RouteHop>) -> Self {
        self.route = route;
        self
    }

    pub fn trade_type(&self) -> TradeType {
        self.request.trade_type()
    }

    pub fn amount_in(&self) -> Uint256 {
        match self.trade_type() {
            TradeType::ExactInput => self.amount,
            TradeType::ExactOutput => self.quote,
        }
    }

    pub fn amount_out(&self) -> Uint256 {
        match self.trade_type() {
            TradeType::ExactInput => self.quote,
            TradeType::ExactOutput => self.amount,
        }
    }

    /// Routed amount net of the route's gas cost
    pub fn quote_gas_adjusted(&self) -> Uint256 {
        match self.trade_type() {
            TradeType::ExactInput => self.quote.saturating_sub(self.gas.gas_use_estimate_quote),
            TradeType::ExactOutput => self.quote.saturating_add(self.gas.gas_use_estimate_quote),
        }
    }

    pub fn amount_in_gas_adjusted(&self) -> Uint256 {
        match self.trade_type() {
            TradeType::ExactInput => self.amount,
            TradeType::ExactOutput => self.quote_gas_adjusted(),
        }
    }

    pub fn amount_out_gas_adjusted(&self) -> Uint256 {
        match self.trade_type() {
            TradeType::ExactInput => self.quote_gas_adjusted(),
            TradeType::ExactOutput => self.amount,
        }
    }

    /// Fee portion of the output, zero unless fee sharing is active
    pub fn portion_amount(&self) -> Uint256 {
        match self.request.info.active_portion() {
            Some(portion) => portion_of(self.amount_out(), portion.bips),
            None => Uint256::zero(),
        }
    }

    /// Output left to the swapper after gas and fee portion
    ///
    /// For exact-output trades the routed input already covers the portion,
    /// so only the input side is adjusted, by gas.
    pub fn amount_out_gas_and_portion_adjusted(&self) -> Uint256 {
        match self.trade_type() {
            TradeType::ExactInput => self
                .amount_out_gas_adjusted()
                .saturating_sub(self.portion_amount()),
            TradeType::ExactOutput => self.amount_out(),
        }
    }

    /// Cost of `extra_units` of gas in the quote token
    pub fn gas_adjustment(&self, extra_units: u64) -> Uint256 {
        gas_adjustment(
            self.gas.gas_use_estimate_quote,
            self.gas.gas_use_estimate,
            extra_units,
            self.gas.gas_price_wei,
        )
    }

    /// USD value of the trade, priced through the route's gas cost
    ///
    /// `None` when the gas cost is zero or the amounts do not fit a `Decimal`.
    pub fn trade_usd(&self) -> Option<Decimal> {
        if self.gas.gas_use_estimate_quote.is_zero() {
            return None;
        }
        let quote = Decimal::from_str(&self.quote.to_string()).ok()?;
        let gas_quote = Decimal::from_str(&self.gas.gas_use_estimate_quote.to_string()).ok()?;
        quote
            .checked_mul(self.gas.gas_use_estimate_usd)?
            .checked_div(gas_quote)
    }

    pub(crate) fn view(&self) -> ClassicQuoteView<'_> {
        let info = &self.request.info;
        let portion = info.send_portion_enabled.then(|| {
            let active = info.active_portion();
            PortionView {
                portion_bips: active.map(|p| p.bips).unwrap_or(0),
                portion_amount: self.portion_amount(),
                portion_recipient: active.map(|p| p.recipient.clone()).unwrap_or_default(),
            }
        });

        ClassicQuoteView {
            request_id: &info.request_id,
            quote_id: &self.quote_id,
            trade_type: info.trade_type,
            amount: self.amount,
            quote: self.quote,
            quote_gas_adjusted: self.quote_gas_adjusted(),
            gas: &self.gas,
            route: &self.route,
            block_number: self.block_number,
            slippage: info.slippage_tolerance,
            portion,
        }
    }
}

/// Zero-filled fee portion fields, present whenever fee sharing is enabled
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PortionView {
    pub portion_bips: u64,
    pub portion_amount: Uint256,
    pub portion_recipient: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClassicQuoteView<'a> {
    request_id: &'a str,
    quote_id: &'a str,
    trade_type: TradeType,
    amount: Uint256,
    quote: Uint256,
    quote_gas_adjusted: Uint256,
    #[serde(flatten)]
    gas: &'a GasEstimate,
    route: &'a [RouteHop],
    block_number: u64,
    slippage: Decimal,
    #[serde(flatten)]
    portion: Option<PortionView>,
}
