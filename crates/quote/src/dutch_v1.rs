use rust_decimal::Decimal;
use serde::Serialize;
use swap_router_types::{Portion, QuoteType, RoutingConfig, Venue};

use crate::order::OrderView;
use crate::params::LARGE_TRADE_USD_THRESHOLD;
use crate::{Derivation, IntentOrder, IntentQuote, Quote, QuoteError};

/// Seconds before the auction starts, for live quotes
pub const RFQ_START_TIME_BUFFER_SECS: u64 = 45;

/// Seconds before the auction starts, for synthetic quotes
pub const SYNTHETIC_START_TIME_BUFFER_SECS: u64 = 60;

/// Share of the price an exclusive filler must beat to override exclusivity
pub const DEFAULT_EXCLUSIVITY_OVERRIDE_BPS: u64 = 100;

/// First version Dutch auction order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DutchV1Quote {
    pub order: IntentOrder,
    pub auction_period_secs: u64,
    pub deadline_buffer_secs: u64,
    pub start_time_buffer_secs: u64,
    pub exclusivity_override_bps: u64,
}

impl DutchV1Quote {
    /// Wrap a live quote; timing is derived when the order is reparameterized
    pub fn rfq(order: IntentOrder) -> Self {
        Self::with_timing(order, None)
    }

    fn with_timing(order: IntentOrder, derivation: Option<&Derivation<'_>>) -> Self {
        let config = match &order.request.config {
            RoutingConfig::DutchV1(config) => Some(config.clone()),
            _ => None,
        }
        .unwrap_or_default();
        let params = derivation.map(|d| d.params);

        let auction_period_secs = config.auction_period_secs.unwrap_or_else(|| {
            let large = derivation
                .and_then(|d| d.classic)
                .and_then(|classic| classic.trade_usd())
                .is_some_and(|usd| usd >= Decimal::from(LARGE_TRADE_USD_THRESHOLD));
            match params {
                Some(p) if large => p.large_auction_period_secs,
                Some(p) => p.std_auction_period_secs,
                None => crate::params::DEFAULT_STD_AUCTION_PERIOD_SECS,
            }
        });

        let deadline_buffer_secs = config.deadline_buffer_secs.unwrap_or_else(|| {
            params
                .map(|p| p.deadline_buffer_secs)
                .unwrap_or(crate::VenueParams::defaults(Venue::DutchV1).deadline_buffer_secs)
        });

        let start_time_buffer_secs = match order.quote_type {
            QuoteType::Rfq => RFQ_START_TIME_BUFFER_SECS,
            QuoteType::Synthetic => SYNTHETIC_START_TIME_BUFFER_SECS,
        };

        let exclusivity_override_bps = config.exclusivity_override_bps.unwrap_or(
            if order.filler.is_some() {
                DEFAULT_EXCLUSIVITY_OVERRIDE_BPS
            } else {
                0
            },
        );

        Self {
            order,
            auction_period_secs,
            deadline_buffer_secs,
            start_time_buffer_secs,
            exclusivity_override_bps,
        }
    }

    pub(crate) fn view(&self) -> DutchV1View<'_> {
        DutchV1View {
            order: self.order.view(),
            auction_period_secs: self.auction_period_secs,
            deadline_buffer_secs: self.deadline_buffer_secs,
            start_time_buffer_secs: self.start_time_buffer_secs,
            exclusivity_override_bps: self.exclusivity_override_bps,
        }
    }
}

impl IntentQuote for DutchV1Quote {
    const VENUE: Venue = Venue::DutchV1;

    fn order(&self) -> &IntentOrder {
        &self.order
    }

    fn from_fetched(quote: &Quote) -> Option<&Self> {
        match quote {
            Quote::DutchV1(quote) => Some(quote),
            _ => None,
        }
    }

    fn synthetic(derivation: &Derivation<'_>) -> Result<Self, QuoteError> {
        let order = IntentOrder::synthetic(derivation)?;
        Ok(Self::with_timing(order, Some(derivation)))
    }

    fn reparameterize(&self, derivation: &Derivation<'_>) -> Result<Self, QuoteError> {
        let order = self.order.reparameterize(derivation)?;
        Ok(Self::with_timing(order, Some(derivation)))
    }

    fn with_portion(self, portion: &Portion) -> Self {
        Self {
            order: self.order.with_portion(portion),
            ..self
        }
    }

    fn into_quote(self) -> Quote {
        Quote::DutchV1(self)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DutchV1View<'a> {
    #[serde(flatten)]
    order: OrderView<'a>,
    auction_period_secs: u64,
    deadline_buffer_secs: u64,
    start_time_buffer_secs: u64,
    exclusivity_override_bps: u64,
}
