//! Decaying intent orders shared by the Dutch and Relay venues

use cosmwasm_std::Uint256;
use rust_decimal::Decimal;
use serde::Serialize;
use swap_router_types::{
    is_native, ChainId, Portion, QuoteRequest, QuoteType, TradeType, Venue,
};

use crate::classic::PortionView;
use crate::math::{adjust_signed_bps, decrease_bps, increase_bps, portion_of};
use crate::params::{VenueParams, WETH_UNWRAP_GAS, WETH_WRAP_GAS};
use crate::{ClassicQuote, Quote, QuoteError};

/// Start and end bounds of an order's decay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayAmounts {
    pub amount_in_start: Uint256,
    pub amount_in_end: Uint256,
    pub amount_out_start: Uint256,
    pub amount_out_end: Uint256,
}

impl DecayAmounts {
    /// Amounts that do not decay
    pub fn constant(amount_in: Uint256, amount_out: Uint256) -> Self {
        Self {
            amount_in_start: amount_in,
            amount_in_end: amount_in,
            amount_out_start: amount_out,
            amount_out_end: amount_out,
        }
    }

    /// Amounts with `fixed` on the request's side and the quote side decaying
    /// from `start` to `end`
    pub fn from_quote_side(
        trade_type: TradeType,
        fixed: Uint256,
        start: Uint256,
        end: Uint256,
    ) -> Self {
        match trade_type {
            TradeType::ExactInput => Self {
                amount_in_start: fixed,
                amount_in_end: fixed,
                amount_out_start: start,
                amount_out_end: end,
            },
            TradeType::ExactOutput => Self {
                amount_in_start: start,
                amount_in_end: end,
                amount_out_start: fixed,
                amount_out_end: fixed,
            },
        }
    }

    /// Start of the quoted side: output for exact-input, input for exact-output
    pub fn quote_side_start(&self, trade_type: TradeType) -> Uint256 {
        match trade_type {
            TradeType::ExactInput => self.amount_out_start,
            TradeType::ExactOutput => self.amount_in_start,
        }
    }

    pub fn fixed_side(&self, trade_type: TradeType) -> Uint256 {
        match trade_type {
            TradeType::ExactInput => self.amount_in_start,
            TradeType::ExactOutput => self.amount_out_start,
        }
    }

    /// Reject zero amounts and decay that improves the taker's price over time
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.amount_in_start.is_zero()
            || self.amount_in_end.is_zero()
            || self.amount_out_start.is_zero()
            || self.amount_out_end.is_zero()
        {
            return Err(QuoteError::ZeroAmount);
        }
        if self.amount_out_end > self.amount_out_start {
            return Err(QuoteError::InvertedOutputDecay {
                start: self.amount_out_start,
                end: self.amount_out_end,
            });
        }
        if self.amount_in_end < self.amount_in_start {
            return Err(QuoteError::InvertedInputDecay {
                start: self.amount_in_start,
                end: self.amount_in_end,
            });
        }
        Ok(())
    }
}

/// Classic gas-adjusted amounts an order was derived against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassicAmounts {
    pub amount_in_gas_adjusted: Uint256,
    pub amount_out_gas_adjusted: Uint256,
}

impl From<&ClassicQuote> for ClassicAmounts {
    fn from(classic: &ClassicQuote) -> Self {
        Self {
            amount_in_gas_adjusted: classic.amount_in_gas_adjusted(),
            amount_out_gas_adjusted: classic.amount_out_gas_adjusted(),
        }
    }
}

/// One side of an order: a token moving between start and end amounts
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLeg {
    pub token: String,
    pub start_amount: Uint256,
    pub end_amount: Uint256,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

/// Named overrides for deriving one order from another
#[derive(Clone, Debug, Default)]
pub struct OrderUpdate {
    pub request: Option<QuoteRequest>,
    pub quote_type: Option<QuoteType>,
    pub amounts: Option<DecayAmounts>,
    pub classic_amounts: Option<ClassicAmounts>,
}

/// An intent order priced for one venue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntentOrder {
    pub request: QuoteRequest,
    pub quote_id: String,
    pub quote_type: QuoteType,
    pub amounts: DecayAmounts,
    /// Exclusive filler for the start of the auction
    pub filler: Option<String>,
    pub nonce: Option<String>,
    pub portion: Option<Portion>,
    pub classic_amounts: Option<ClassicAmounts>,
}

impl IntentOrder {
    /// A live quote as returned by a venue's pricing service
    pub fn rfq(
        request: QuoteRequest,
        quote_id: impl Into<String>,
        amount_in: Uint256,
        amount_out: Uint256,
    ) -> Self {
        Self {
            request,
            quote_id: quote_id.into(),
            quote_type: QuoteType::Rfq,
            amounts: DecayAmounts::constant(amount_in, amount_out),
            filler: None,
            nonce: None,
            portion: None,
            classic_amounts: None,
        }
    }

    pub fn with_filler(mut self, filler: impl Into<String>) -> Self {
        self.filler = Some(swap_router_types::normalize_address(&filler.into()));
        self
    }

    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Derive an order from the Classic quote alone
    ///
    /// Start is the improved Classic price net of pre-swap gas; end is start
    /// net of the venue's own gas, less slippage. The buffer then scales both.
    pub fn synthetic(derivation: &Derivation<'_>) -> Result<Self, QuoteError> {
        let classic = derivation.classic()?;

        let improved = derivation.improve(classic.quote_gas_adjusted());
        let start = derivation.charge_gas(improved, derivation.pre_swap_gas());
        let end = derivation.slippage(derivation.charge_gas(start, derivation.venue_gas()));

        let amounts = DecayAmounts::from_quote_side(
            derivation.trade_type(),
            derivation.request.info.amount,
            derivation.buffer(start),
            derivation.buffer(end),
        );

        Ok(Self {
            request: derivation.request.clone(),
            quote_id: uuid::Uuid::new_v4().to_string(),
            quote_type: QuoteType::Synthetic,
            amounts,
            filler: None,
            nonce: None,
            portion: None,
            classic_amounts: Some(ClassicAmounts::from(classic)),
        })
    }

    /// Re-derive the decay of a live quote
    ///
    /// Start keeps the quoted price net of pre-swap gas. End comes from the
    /// Classic price net of all gas, less slippage, or from start less
    /// slippage when there is no Classic quote.
    pub fn reparameterize(&self, derivation: &Derivation<'_>) -> Result<Self, QuoteError> {
        let trade_type = derivation.trade_type();
        let start = derivation.charge_gas(
            self.amounts.quote_side_start(trade_type),
            derivation.pre_swap_gas(),
        );
        let end = match derivation.classic {
            Some(classic) => {
                let gas = derivation
                    .pre_swap_gas()
                    .saturating_add(derivation.venue_gas());
                derivation.slippage(derivation.charge_gas(classic.quote_gas_adjusted(), gas))
            }
            None => derivation.slippage(start),
        };

        let amounts = DecayAmounts::from_quote_side(
            trade_type,
            self.amounts.fixed_side(trade_type),
            start,
            end,
        );
        amounts.validate()?;

        Ok(self.update(OrderUpdate {
            request: Some(derivation.request.clone()),
            amounts: Some(amounts),
            classic_amounts: derivation.classic.map(ClassicAmounts::from),
            ..Default::default()
        }))
    }

    /// Copy of this order with the given fields replaced
    pub fn update(&self, update: OrderUpdate) -> Self {
        Self {
            request: update.request.unwrap_or_else(|| self.request.clone()),
            quote_id: self.quote_id.clone(),
            quote_type: update.quote_type.unwrap_or(self.quote_type),
            amounts: update.amounts.unwrap_or(self.amounts),
            filler: self.filler.clone(),
            nonce: self.nonce.clone(),
            portion: self.portion.clone(),
            classic_amounts: update.classic_amounts.or(self.classic_amounts),
        }
    }

    /// Attach a fee portion
    ///
    /// Exact-input orders keep their amounts and split the output into legs.
    /// Exact-output orders raise the input by the portion's share so the
    /// swapper's output stays whole.
    pub fn with_portion(mut self, portion: &Portion) -> Self {
        if !self.request.trade_type().is_exact_input() {
            let scale = |amount| increase_bps(amount, portion.bips);
            self.amounts.amount_in_start = scale(self.amounts.amount_in_start);
            self.amounts.amount_in_end = scale(self.amounts.amount_in_end);
        }
        self.portion = Some(portion.clone());
        self
    }

    pub fn trade_type(&self) -> TradeType {
        self.request.trade_type()
    }

    pub fn amount_in(&self) -> Uint256 {
        self.amounts.amount_in_start
    }

    pub fn amount_out(&self) -> Uint256 {
        self.amounts.amount_out_start
    }

    pub fn portion_amount(&self) -> Uint256 {
        self.portion
            .as_ref()
            .map(|p| portion_of(self.amounts.amount_out_start, p.bips))
            .unwrap_or_else(Uint256::zero)
    }

    pub fn input(&self) -> OrderLeg {
        OrderLeg {
            token: self.request.info.token_in.clone(),
            start_amount: self.amounts.amount_in_start,
            end_amount: self.amounts.amount_in_end,
            recipient: None,
        }
    }

    /// Output legs: the swapper's, then the fee recipient's if a portion applies
    pub fn outputs(&self) -> Vec<OrderLeg> {
        let info = &self.request.info;
        let DecayAmounts {
            amount_out_start: start,
            amount_out_end: end,
            ..
        } = self.amounts;

        let Some(portion) = &self.portion else {
            return vec![OrderLeg {
                token: info.token_out.clone(),
                start_amount: start,
                end_amount: end,
                recipient: Some(info.swapper.clone()),
            }];
        };

        let fee_start = portion_of(start, portion.bips);
        let fee_end = portion_of(end, portion.bips);
        let (taker_start, taker_end) = match info.trade_type {
            TradeType::ExactInput => (start.saturating_sub(fee_start), end.saturating_sub(fee_end)),
            TradeType::ExactOutput => (start, end),
        };

        vec![
            OrderLeg {
                token: info.token_out.clone(),
                start_amount: taker_start,
                end_amount: taker_end,
                recipient: Some(info.swapper.clone()),
            },
            OrderLeg {
                token: info.token_out.clone(),
                start_amount: fee_start,
                end_amount: fee_end,
                recipient: Some(portion.recipient.clone()),
            },
        ]
    }

    pub(crate) fn view(&self) -> OrderView<'_> {
        let info = &self.request.info;
        let portion = info.send_portion_enabled.then(|| PortionView {
            portion_bips: self.portion.as_ref().map(|p| p.bips).unwrap_or(0),
            portion_amount: self.portion_amount(),
            portion_recipient: self
                .portion
                .as_ref()
                .map(|p| p.recipient.clone())
                .unwrap_or_default(),
        });

        OrderView {
            request_id: &info.request_id,
            quote_id: &self.quote_id,
            quote_type: self.quote_type,
            chain_id: info.chain_id(),
            token_in_chain_id: info.token_in_chain_id,
            token_out_chain_id: info.token_out_chain_id,
            token_in: &info.token_in,
            token_out: &info.token_out,
            trade_type: info.trade_type,
            swapper: &info.swapper,
            amounts: self.amounts,
            input: self.input(),
            outputs: self.outputs(),
            filler: self.filler.as_deref(),
            nonce: self.nonce.as_deref(),
            slippage_tolerance: info.slippage_tolerance,
            portion,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderView<'a> {
    request_id: &'a str,
    quote_id: &'a str,
    quote_type: QuoteType,
    chain_id: ChainId,
    token_in_chain_id: ChainId,
    token_out_chain_id: ChainId,
    token_in: &'a str,
    token_out: &'a str,
    trade_type: TradeType,
    swapper: &'a str,
    #[serde(flatten)]
    amounts: DecayAmounts,
    input: OrderLeg,
    outputs: Vec<OrderLeg>,
    filler: Option<&'a str>,
    nonce: Option<&'a str>,
    slippage_tolerance: Decimal,
    #[serde(flatten)]
    portion: Option<PortionView>,
}

/// Inputs to a venue's derivation of one request
///
/// Every adjustment operates on the quote side of the trade: the output for
/// exact-input requests, the input for exact-output requests. Gas costs are in
/// the quote token and are zero without a Classic quote to price them.
#[derive(Clone, Copy, Debug)]
pub struct Derivation<'a> {
    pub request: &'a QuoteRequest,
    pub classic: Option<&'a ClassicQuote>,
    pub params: &'a VenueParams,
}

impl<'a> Derivation<'a> {
    pub fn new(
        request: &'a QuoteRequest,
        classic: Option<&'a ClassicQuote>,
        params: &'a VenueParams,
    ) -> Self {
        Self {
            request,
            classic,
            params,
        }
    }

    pub fn venue(&self) -> Venue {
        self.params.venue
    }

    pub fn trade_type(&self) -> TradeType {
        self.request.trade_type()
    }

    pub fn slippage_bps(&self) -> u64 {
        self.request.info.slippage_bps()
    }

    pub fn classic(&self) -> Result<&'a ClassicQuote, QuoteError> {
        self.classic.ok_or(QuoteError::MissingClassicQuote)
    }

    /// Gas units spent before the swap, wrapping a native input
    pub fn pre_swap_gas_units(&self) -> u64 {
        if is_native(&self.request.info.token_in) {
            WETH_WRAP_GAS
        } else {
            0
        }
    }

    /// Gas units of filling through the venue, unwrapping a native output
    pub fn venue_gas_units(&self) -> u64 {
        let unwrap = if is_native(&self.request.info.token_out) {
            WETH_UNWRAP_GAS
        } else {
            0
        };
        self.params.base_gas_units.saturating_add(unwrap)
    }

    pub fn pre_swap_gas(&self) -> Uint256 {
        self.gas_in_quote_token(self.pre_swap_gas_units())
    }

    pub fn venue_gas(&self) -> Uint256 {
        self.gas_in_quote_token(self.venue_gas_units())
    }

    fn gas_in_quote_token(&self, units: u64) -> Uint256 {
        self.classic
            .map(|classic| classic.gas_adjustment(units))
            .unwrap_or_else(Uint256::zero)
    }

    /// Worsen the quote side by a gas cost
    pub fn charge_gas(&self, amount: Uint256, gas: Uint256) -> Uint256 {
        match self.trade_type() {
            TradeType::ExactInput => amount.saturating_sub(gas),
            TradeType::ExactOutput => amount.saturating_add(gas),
        }
    }

    /// Improve the quote side by the venue's price improvement
    pub fn improve(&self, amount: Uint256) -> Uint256 {
        match self.trade_type() {
            TradeType::ExactInput => increase_bps(amount, self.params.price_improvement_bps),
            TradeType::ExactOutput => decrease_bps(amount, self.params.price_improvement_bps),
        }
    }

    /// Worst acceptable quote side given the request's slippage tolerance
    pub fn slippage(&self, amount: Uint256) -> Uint256 {
        match self.trade_type() {
            TradeType::ExactInput => decrease_bps(amount, self.slippage_bps()),
            TradeType::ExactOutput => increase_bps(amount, self.slippage_bps()),
        }
    }

    /// Apply the venue's signed price buffer, without clamping
    pub fn buffer(&self, amount: Uint256) -> Uint256 {
        let bps = self.params.price_buffer_bps;
        match self.trade_type() {
            TradeType::ExactInput => adjust_signed_bps(amount, bps.saturating_neg()),
            TradeType::ExactOutput => adjust_signed_bps(amount, bps),
        }
    }
}

/// A venue whose quotes are decaying intent orders
///
/// Implemented once per intent venue; resolution code is generic over it.
pub trait IntentQuote: Sized + Send + Sync + 'static {
    const VENUE: Venue;

    fn order(&self) -> &IntentOrder;

    /// This venue's live quote, if `quote` is one
    fn from_fetched(quote: &Quote) -> Option<&Self>;

    fn synthetic(derivation: &Derivation<'_>) -> Result<Self, QuoteError>;

    fn reparameterize(&self, derivation: &Derivation<'_>) -> Result<Self, QuoteError>;

    fn with_portion(self, portion: &Portion) -> Self;

    fn validate(&self) -> Result<(), QuoteError> {
        self.order().amounts.validate()
    }

    fn into_quote(self) -> Quote;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::classic::tests::{gas, USDC, WETH};
    use swap_router_types::{
        DutchV2Config, PortionType, RoutingConfig, TradeIntent, NATIVE_ADDRESS,
    };

    pub(crate) fn intent(
        trade_type: TradeType,
        token_in: &str,
        token_out: &str,
        amount: u128,
    ) -> TradeIntent {
        TradeIntent::builder()
            .request_id("req-1")
            .chain_id(1)
            .token_in(token_in)
            .token_out(token_out)
            .amount(amount)
            .trade_type(trade_type)
            .swapper("0x00000000000000000000000000000000000000aa")
            .slippage_tolerance("0.5")
            .build()
            .unwrap()
    }

    /// Classic quote whose gas prices every unit at one quote-token unit
    pub(crate) fn classic_for(info: &TradeIntent, quote: u128, gas_quote: u128) -> ClassicQuote {
        let mut estimate = gas(gas_quote);
        estimate.gas_use_estimate = gas_quote as u64;
        ClassicQuote::new(
            QuoteRequest::classic(info.clone()),
            Uint256::from(quote),
            estimate,
        )
    }

    fn v2_request(info: TradeIntent) -> QuoteRequest {
        QuoteRequest::new(info, RoutingConfig::DutchV2(DutchV2Config::default()))
    }

    fn u(v: u128) -> Uint256 {
        Uint256::from(v)
    }

    #[test]
    fn test_synthetic_exact_input() {
        let info = intent(TradeType::ExactInput, USDC, WETH, 1_000_000);
        let request = v2_request(info.clone());
        // gas_use_estimate 1_000 units costs 1_000 quote units
        let classic = classic_for(&info, 10_001_000, 1_000);
        let params = VenueParams {
            base_gas_units: 1_000,
            ..VenueParams::defaults(Venue::DutchV2)
        };

        let order = IntentOrder::synthetic(&Derivation::new(&request, Some(&classic), &params))
            .unwrap();

        // gas adjusted 10_000_000, improved by 10 bps to 10_010_000
        // venue gas 1_000: 10_009_000 less 50 bps slippage = 9_958_955
        // buffer of 10 bps on both ends
        assert_eq!(order.amounts.amount_in_start, u(1_000_000));
        assert_eq!(order.amounts.amount_in_end, u(1_000_000));
        assert_eq!(order.amounts.amount_out_start, u(9_999_990));
        assert_eq!(order.amounts.amount_out_end, u(9_948_996));
        assert_eq!(order.quote_type, QuoteType::Synthetic);
        assert!(order.nonce.is_none());
        assert!(order.amounts.validate().is_ok());
    }

    #[test]
    fn test_synthetic_exact_output() {
        let info = intent(TradeType::ExactOutput, USDC, WETH, 5_000_000);
        let request = v2_request(info.clone());
        let classic = classic_for(&info, 9_999_000, 1_000);
        let params = VenueParams {
            base_gas_units: 1_000,
            price_buffer_bps: 0,
            ..VenueParams::defaults(Venue::DutchV2)
        };

        let order = IntentOrder::synthetic(&Derivation::new(&request, Some(&classic), &params))
            .unwrap();

        // gas adjusted input 10_000_000, improved to 9_990_000
        // venue gas 1_000: 9_991_000 plus 50 bps slippage = 10_040_955
        assert_eq!(order.amounts.amount_in_start, u(9_990_000));
        assert_eq!(order.amounts.amount_in_end, u(10_040_955));
        assert_eq!(order.amounts.amount_out_start, u(5_000_000));
        assert_eq!(order.amounts.amount_out_end, u(5_000_000));
    }

    #[test]
    fn test_synthetic_charges_wrap_gas_on_native_input() {
        let info = intent(TradeType::ExactInput, NATIVE_ADDRESS, USDC, 1_000_000);
        let request = v2_request(info.clone());
        let classic = classic_for(&info, 1_000_000, 100_000);
        let params = VenueParams {
            price_improvement_bps: 0,
            price_buffer_bps: 0,
            base_gas_units: 0,
            ..VenueParams::defaults(Venue::DutchV2)
        };
        let derivation = Derivation::new(&request, Some(&classic), &params);
        assert_eq!(derivation.pre_swap_gas(), u(27_938));

        let order = IntentOrder::synthetic(&derivation).unwrap();
        // 1_000_000 - 100_000 gas - 27_938 wrap
        assert_eq!(order.amounts.amount_out_start, u(872_062));
    }

    #[test]
    fn test_synthetic_requires_classic() {
        let request = v2_request(intent(TradeType::ExactInput, USDC, WETH, 1_000));
        let params = VenueParams::defaults(Venue::DutchV2);
        assert_eq!(
            IntentOrder::synthetic(&Derivation::new(&request, None, &params)),
            Err(QuoteError::MissingClassicQuote)
        );
    }

    #[test]
    fn test_negative_buffer_is_not_clamped() {
        let info = intent(TradeType::ExactInput, USDC, WETH, 1_000_000);
        let request = v2_request(info.clone());
        let classic = classic_for(&info, 10_000_000, 0);
        let params = VenueParams {
            price_improvement_bps: 0,
            price_buffer_bps: -100,
            ..VenueParams::defaults(Venue::DutchV2)
        };

        let order = IntentOrder::synthetic(&Derivation::new(&request, Some(&classic), &params))
            .unwrap();
        assert_eq!(order.amounts.amount_out_start, u(10_100_000));
        assert!(order.amounts.amount_out_start > classic.amount_out_gas_adjusted());
    }

    #[test]
    fn test_reparameterize_rfq_end_from_classic() {
        let info = intent(TradeType::ExactInput, USDC, WETH, 1_000_000);
        let request = v2_request(info.clone());
        let classic = classic_for(&info, 10_001_000, 1_000);
        let params = VenueParams {
            base_gas_units: 1_000,
            ..VenueParams::defaults(Venue::DutchV2)
        };
        let rfq = IntentOrder::rfq(request.clone(), "rfq-1", u(1_000_000), u(10_050_000))
            .with_filler("0x00000000000000000000000000000000000000F1")
            .with_nonce("42");

        let order = rfq
            .reparameterize(&Derivation::new(&request, Some(&classic), &params))
            .unwrap();

        assert_eq!(order.quote_type, QuoteType::Rfq);
        assert_eq!(order.quote_id, "rfq-1");
        assert_eq!(order.nonce.as_deref(), Some("42"));
        assert_eq!(order.amounts.amount_out_start, u(10_050_000));
        // 10_000_000 less 1_000 venue gas, less 50 bps
        assert_eq!(order.amounts.amount_out_end, u(9_949_005));
        assert_eq!(
            order.classic_amounts.map(|c| c.amount_out_gas_adjusted),
            Some(u(10_000_000))
        );
    }

    #[test]
    fn test_reparameterize_without_classic_uses_slippage_of_start() {
        let request = v2_request(intent(TradeType::ExactOutput, USDC, WETH, 1_000));
        let params = VenueParams::defaults(Venue::DutchV2);
        let rfq = IntentOrder::rfq(request.clone(), "rfq-1", u(2_000_000), u(1_000));

        let order = rfq
            .reparameterize(&Derivation::new(&request, None, &params))
            .unwrap();
        assert_eq!(order.amounts.amount_in_start, u(2_000_000));
        assert_eq!(order.amounts.amount_in_end, u(2_010_000));
    }

    #[test]
    fn test_reparameterize_rejects_inverted_decay() {
        let info = intent(TradeType::ExactInput, USDC, WETH, 1_000_000);
        let request = v2_request(info.clone());
        // Classic is far better than the live quote
        let classic = classic_for(&info, 20_000_000, 0);
        let params = VenueParams::defaults(Venue::DutchV2);
        let rfq = IntentOrder::rfq(request.clone(), "rfq-1", u(1_000_000), u(10_000_000));

        let err = rfq
            .reparameterize(&Derivation::new(&request, Some(&classic), &params))
            .unwrap_err();
        assert!(matches!(err, QuoteError::InvertedOutputDecay { .. }));
    }

    #[test]
    fn test_exact_input_portion_splits_output() {
        let mut info = intent(TradeType::ExactInput, USDC, WETH, 1_000);
        info.send_portion_enabled = true;
        let portion = Portion::new(25, "0x00000000000000000000000000000000000000fe", PortionType::Flat);
        let order = IntentOrder::rfq(v2_request(info), "q", u(1_000), u(10_000));
        let mut order = order.update(OrderUpdate {
            amounts: Some(DecayAmounts {
                amount_out_end: u(9_000),
                ..order.amounts
            }),
            ..Default::default()
        });
        order = order.with_portion(&portion);

        let outputs = order.outputs();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].start_amount, u(9_975));
        assert_eq!(outputs[0].end_amount, u(8_978));
        assert_eq!(outputs[1].start_amount, u(25));
        assert_eq!(outputs[1].end_amount, u(22));
        assert_eq!(outputs[1].recipient.as_deref(), Some(portion.recipient.as_str()));
        assert_eq!(order.amount_out(), u(10_000));
        assert_eq!(order.portion_amount(), u(25));
    }

    #[test]
    fn test_exact_output_portion_raises_input() {
        let info = intent(TradeType::ExactOutput, USDC, WETH, 10_000);
        let portion = Portion::new(100, "0x00000000000000000000000000000000000000fe", PortionType::Flat);
        let order = IntentOrder::rfq(v2_request(info), "q", u(5_000), u(10_000)).with_portion(&portion);

        assert_eq!(order.amounts.amount_in_start, u(5_050));
        assert_eq!(order.amounts.amount_in_end, u(5_050));
        let outputs = order.outputs();
        assert_eq!(outputs[0].start_amount, u(10_000));
        assert_eq!(outputs[1].start_amount, u(100));
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            DecayAmounts::constant(u(0), u(1)).validate(),
            Err(QuoteError::ZeroAmount)
        );
        let inverted = DecayAmounts {
            amount_in_start: u(10),
            amount_in_end: u(9),
            amount_out_start: u(10),
            amount_out_end: u(10),
        };
        assert!(matches!(
            inverted.validate(),
            Err(QuoteError::InvertedInputDecay { .. })
        ));
    }
}
