use cosmwasm_std::Uint256;
use serde::Serialize;
use swap_router_types::{Portion, QuoteRequest, RoutingConfig, TradeType, Venue};

use crate::math::increase_bps;
use crate::order::{ClassicAmounts, DecayAmounts, OrderUpdate, OrderView};
use crate::{Derivation, IntentOrder, IntentQuote, Quote, QuoteError, VenueParams};

/// Gas fee paid to the relayer, in the gas token
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeLeg {
    pub token: String,
    pub start_amount: Uint256,
    pub end_amount: Uint256,
}

/// Gas-abstracted relayed order
///
/// The swap legs carry no gas cost; the relayer is paid through the fee leg.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayQuote {
    pub order: IntentOrder,
    pub fee: FeeLeg,
    pub deadline_buffer_secs: u64,
}

impl RelayQuote {
    /// Wrap a live quote and the relayer's fee for it
    pub fn rfq(order: IntentOrder, fee_amount: Uint256) -> Self {
        let fee = FeeLeg {
            token: gas_token(&order.request).to_string(),
            start_amount: fee_amount,
            end_amount: fee_amount,
        };
        let deadline_buffer_secs = deadline_buffer(&order, &VenueParams::defaults(Venue::Relay));
        Self {
            order,
            fee,
            deadline_buffer_secs,
        }
    }

    fn check_gas_token(derivation: &Derivation<'_>) -> Result<(), QuoteError> {
        let info = &derivation.request.info;
        let gas_token = gas_token(derivation.request);
        if gas_token != info.token_in {
            return Err(QuoteError::GasTokenMismatch {
                gas_token: gas_token.to_string(),
                token_in: info.token_in.clone(),
            });
        }
        Ok(())
    }

    /// Relayer fee at the start of the auction, in the input token
    ///
    /// The gas of the whole fill is priced in the quote token and, for
    /// exact-input trades, converted at the Classic quote's rate.
    fn fee_start(derivation: &Derivation<'_>) -> Result<Uint256, QuoteError> {
        let classic = derivation.classic()?;
        let gas = derivation
            .pre_swap_gas()
            .saturating_add(derivation.venue_gas());

        match derivation.trade_type() {
            TradeType::ExactInput => gas
                .checked_multiply_ratio(classic.amount_in(), classic.amount_out())
                .map_err(|_| QuoteError::ZeroAmount),
            TradeType::ExactOutput => Ok(gas),
        }
    }

    fn fee_end(derivation: &Derivation<'_>, start: Uint256) -> Uint256 {
        increase_bps(start, derivation.slippage_bps())
    }

    pub(crate) fn view(&self) -> RelayView<'_> {
        RelayView {
            order: self.order.view(),
            fee: &self.fee,
            deadline_buffer_secs: self.deadline_buffer_secs,
        }
    }
}

/// Token the relayer is paid in; an unset gas token means the input token
fn gas_token(request: &QuoteRequest) -> &str {
    match &request.config {
        RoutingConfig::Relay(config) if !config.gas_token.is_empty() => &config.gas_token,
        _ => &request.info.token_in,
    }
}

fn deadline_buffer(order: &IntentOrder, params: &VenueParams) -> u64 {
    match &order.request.config {
        RoutingConfig::Relay(config) => config.deadline_buffer_secs,
        _ => None,
    }
    .unwrap_or(params.deadline_buffer_secs)
}

impl IntentQuote for RelayQuote {
    const VENUE: Venue = Venue::Relay;

    fn order(&self) -> &IntentOrder {
        &self.order
    }

    fn from_fetched(quote: &Quote) -> Option<&Self> {
        match quote {
            Quote::Relay(quote) => Some(quote),
            _ => None,
        }
    }

    /// Swap legs start at the raw Classic amounts and end less slippage
    fn synthetic(derivation: &Derivation<'_>) -> Result<Self, QuoteError> {
        Self::check_gas_token(derivation)?;
        let classic = derivation.classic()?;

        let start = classic.quote;
        let amounts = DecayAmounts::from_quote_side(
            derivation.trade_type(),
            derivation.request.info.amount,
            start,
            derivation.slippage(start),
        );
        let order = IntentOrder {
            request: derivation.request.clone(),
            quote_id: uuid::Uuid::new_v4().to_string(),
            quote_type: swap_router_types::QuoteType::Synthetic,
            amounts,
            filler: None,
            nonce: None,
            portion: None,
            classic_amounts: Some(ClassicAmounts::from(classic)),
        };

        let fee_start = Self::fee_start(derivation)?;
        let fee = FeeLeg {
            token: gas_token(&order.request).to_string(),
            start_amount: fee_start,
            end_amount: Self::fee_end(derivation, fee_start),
        };
        let deadline_buffer_secs = deadline_buffer(&order, derivation.params);

        Ok(Self {
            order,
            fee,
            deadline_buffer_secs,
        })
    }

    fn reparameterize(&self, derivation: &Derivation<'_>) -> Result<Self, QuoteError> {
        Self::check_gas_token(derivation)?;
        let trade_type = derivation.trade_type();

        let start = self.order.amounts.quote_side_start(trade_type);
        let end = match derivation.classic {
            Some(classic) => derivation.slippage(classic.quote),
            None => derivation.slippage(start),
        };
        let amounts = DecayAmounts::from_quote_side(
            trade_type,
            self.order.amounts.fixed_side(trade_type),
            start,
            end,
        );
        amounts.validate()?;

        let order = self.order.update(OrderUpdate {
            request: Some(derivation.request.clone()),
            amounts: Some(amounts),
            classic_amounts: derivation.classic.map(ClassicAmounts::from),
            ..Default::default()
        });

        let fee_start = self.fee.start_amount;
        let fee = FeeLeg {
            token: gas_token(&order.request).to_string(),
            start_amount: fee_start,
            end_amount: Self::fee_end(derivation, fee_start),
        };
        let deadline_buffer_secs = deadline_buffer(&order, derivation.params);

        Ok(Self {
            order,
            fee,
            deadline_buffer_secs,
        })
    }

    fn with_portion(self, portion: &Portion) -> Self {
        Self {
            order: self.order.with_portion(portion),
            ..self
        }
    }

    fn validate(&self) -> Result<(), QuoteError> {
        self.order.amounts.validate()?;
        if self.fee.end_amount < self.fee.start_amount {
            return Err(QuoteError::InvertedInputDecay {
                start: self.fee.start_amount,
                end: self.fee.end_amount,
            });
        }
        Ok(())
    }

    fn into_quote(self) -> Quote {
        Quote::Relay(self)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RelayView<'a> {
    #[serde(flatten)]
    order: OrderView<'a>,
    fee: &'a FeeLeg,
    deadline_buffer_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classic::tests::{USDC, WETH};
    use crate::order::tests::{classic_for, intent};
    use swap_router_types::{QuoteType, RelayConfig, TradeIntent};

    fn request(info: &TradeIntent, gas_token: &str) -> QuoteRequest {
        QuoteRequest::new(
            info.clone(),
            RoutingConfig::Relay(RelayConfig {
                gas_token: gas_token.to_string(),
                ..Default::default()
            }),
        )
    }

    fn params() -> VenueParams {
        VenueParams {
            base_gas_units: 1_000,
            ..VenueParams::defaults(Venue::Relay)
        }
    }

    fn u(v: u128) -> Uint256 {
        Uint256::from(v)
    }

    #[test]
    fn test_synthetic_exact_input_fee_in_input_token() {
        let info = intent(TradeType::ExactInput, USDC, WETH, 1_000_000);
        let request = request(&info, USDC);
        // 1 input unit buys 4 output units; gas is 1 quote unit per unit
        let classic = classic_for(&info, 4_000_000, 1_000);
        let params = params();

        let quote = RelayQuote::synthetic(&Derivation::new(&request, Some(&classic), &params))
            .unwrap();

        assert_eq!(quote.order.amounts.amount_out_start, u(4_000_000));
        assert_eq!(quote.order.amounts.amount_out_end, u(3_980_000));
        assert_eq!(quote.order.quote_type, QuoteType::Synthetic);
        // 1_000 output units of gas at 4:1
        assert_eq!(quote.fee.token, USDC);
        assert_eq!(quote.fee.start_amount, u(250));
        assert_eq!(quote.fee.end_amount, u(251));
        assert!(quote.validate().is_ok());
    }

    #[test]
    fn test_synthetic_exact_output_fee_already_in_input_token() {
        let info = intent(TradeType::ExactOutput, USDC, WETH, 4_000_000);
        let request = request(&info, USDC);
        let classic = classic_for(&info, 1_000_000, 1_000);
        let params = params();

        let quote = RelayQuote::synthetic(&Derivation::new(&request, Some(&classic), &params))
            .unwrap();
        assert_eq!(quote.order.amounts.amount_in_start, u(1_000_000));
        assert_eq!(quote.order.amounts.amount_in_end, u(1_005_000));
        assert_eq!(quote.fee.start_amount, u(1_000));
        assert_eq!(quote.fee.end_amount, u(1_005));
    }

    #[test]
    fn test_gas_token_must_be_input_token() {
        let info = intent(TradeType::ExactInput, USDC, WETH, 1_000_000);
        let request = request(&info, WETH);
        let classic = classic_for(&info, 4_000_000, 1_000);
        let params = params();

        assert!(matches!(
            RelayQuote::synthetic(&Derivation::new(&request, Some(&classic), &params)),
            Err(QuoteError::GasTokenMismatch { .. })
        ));
    }

    #[test]
    fn test_unset_gas_token_pays_in_input_token() {
        let info = intent(TradeType::ExactInput, USDC, WETH, 1_000_000);
        let request = QuoteRequest::new(info.clone(), RoutingConfig::Relay(RelayConfig::default()));
        let classic = classic_for(&info, 4_000_000, 1_000);
        let params = params();

        let quote = RelayQuote::synthetic(&Derivation::new(&request, Some(&classic), &params))
            .unwrap();
        assert_eq!(quote.fee.token, USDC);
        assert_eq!(quote.fee.start_amount, u(250));
    }

    #[test]
    fn test_reparameterize_keeps_rfq_fee() {
        let info = intent(TradeType::ExactInput, USDC, WETH, 1_000_000);
        let request = request(&info, USDC);
        let classic = classic_for(&info, 4_000_000, 1_000);
        let params = params();
        let rfq = RelayQuote::rfq(
            IntentOrder::rfq(request.clone(), "relay-rfq", u(1_000_000), u(4_010_000)),
            u(300),
        );

        let quote = rfq
            .reparameterize(&Derivation::new(&request, Some(&classic), &params))
            .unwrap();
        assert_eq!(quote.order.amounts.amount_out_start, u(4_010_000));
        assert_eq!(quote.order.amounts.amount_out_end, u(3_980_000));
        assert_eq!(quote.fee.start_amount, u(300));
        assert_eq!(quote.fee.end_amount, u(301));
    }
}
