use serde::Serialize;
use swap_router_types::{Portion, RoutingConfig, Venue};

use crate::order::OrderView;
use crate::{Derivation, IntentOrder, IntentQuote, Quote, QuoteError, VenueParams};

/// Cosigned Dutch auction order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DutchV2Quote {
    pub order: IntentOrder,
    pub deadline_buffer_secs: u64,
}

impl DutchV2Quote {
    pub fn rfq(order: IntentOrder) -> Self {
        Self::with_deadline(order, &VenueParams::defaults(Venue::DutchV2))
    }

    fn with_deadline(order: IntentOrder, params: &VenueParams) -> Self {
        let deadline_buffer_secs = match &order.request.config {
            RoutingConfig::DutchV2(config) => config.deadline_buffer_secs,
            _ => None,
        }
        .unwrap_or(params.deadline_buffer_secs);

        Self {
            order,
            deadline_buffer_secs,
        }
    }

    pub(crate) fn view(&self) -> DutchV2View<'_> {
        DutchV2View {
            order: self.order.view(),
            deadline_buffer_secs: self.deadline_buffer_secs,
        }
    }
}

impl IntentQuote for DutchV2Quote {
    const VENUE: Venue = Venue::DutchV2;

    fn order(&self) -> &IntentOrder {
        &self.order
    }

    fn from_fetched(quote: &Quote) -> Option<&Self> {
        match quote {
            Quote::DutchV2(quote) => Some(quote),
            _ => None,
        }
    }

    fn synthetic(derivation: &Derivation<'_>) -> Result<Self, QuoteError> {
        let order = IntentOrder::synthetic(derivation)?;
        Ok(Self::with_deadline(order, derivation.params))
    }

    fn reparameterize(&self, derivation: &Derivation<'_>) -> Result<Self, QuoteError> {
        let order = self.order.reparameterize(derivation)?;
        Ok(Self::with_deadline(order, derivation.params))
    }

    fn with_portion(self, portion: &Portion) -> Self {
        Self {
            order: self.order.with_portion(portion),
            ..self
        }
    }

    fn into_quote(self) -> Quote {
        Quote::DutchV2(self)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DutchV2View<'a> {
    #[serde(flatten)]
    order: OrderView<'a>,
    deadline_buffer_secs: u64,
}
