use cosmwasm_std::Uint256;
use serde::{Serialize, Serializer};
use swap_router_types::{QuoteRequest, RequestKey, Venue};

use crate::classic::ClassicQuoteView;
use crate::dutch_v1::DutchV1View;
use crate::dutch_v2::DutchV2View;
use crate::relay::RelayView;
use crate::{ClassicQuote, DutchV1Quote, DutchV2Quote, IntentOrder, RelayQuote};

/// A resolved quote from any venue
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Quote {
    Classic(ClassicQuote),
    DutchV1(DutchV1Quote),
    DutchV2(DutchV2Quote),
    Relay(RelayQuote),
}

impl Quote {
    pub fn venue(&self) -> Venue {
        match self {
            Quote::Classic(_) => Venue::Classic,
            Quote::DutchV1(_) => Venue::DutchV1,
            Quote::DutchV2(_) => Venue::DutchV2,
            Quote::Relay(_) => Venue::Relay,
        }
    }

    pub fn request(&self) -> &QuoteRequest {
        match self {
            Quote::Classic(quote) => &quote.request,
            Quote::DutchV1(quote) => &quote.order.request,
            Quote::DutchV2(quote) => &quote.order.request,
            Quote::Relay(quote) => &quote.order.request,
        }
    }

    /// Identity of the request this quote answers
    pub fn key(&self) -> RequestKey {
        self.request().key()
    }

    /// Input amount, at the start of decay for intent orders
    pub fn amount_in(&self) -> Uint256 {
        match self {
            Quote::Classic(quote) => quote.amount_in(),
            _ => self.order().map(IntentOrder::amount_in).unwrap_or_default(),
        }
    }

    /// Output amount, at the start of decay for intent orders
    pub fn amount_out(&self) -> Uint256 {
        match self {
            Quote::Classic(quote) => quote.amount_out(),
            _ => self.order().map(IntentOrder::amount_out).unwrap_or_default(),
        }
    }

    pub fn as_classic(&self) -> Option<&ClassicQuote> {
        match self {
            Quote::Classic(quote) => Some(quote),
            _ => None,
        }
    }

    /// The intent order of a Dutch or Relay quote
    pub fn order(&self) -> Option<&IntentOrder> {
        match self {
            Quote::Classic(_) => None,
            Quote::DutchV1(quote) => Some(&quote.order),
            Quote::DutchV2(quote) => Some(&quote.order),
            Quote::Relay(quote) => Some(&quote.order),
        }
    }

    /// Wire view: `{ "routing": <venue>, "quote": { ... } }`
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum QuoteView<'a> {
    Classic(ClassicQuoteView<'a>),
    DutchV1(DutchV1View<'a>),
    DutchV2(DutchV2View<'a>),
    Relay(RelayView<'a>),
}

#[derive(Serialize)]
struct QuoteEnvelope<'a> {
    routing: Venue,
    quote: QuoteView<'a>,
}

impl Serialize for Quote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let quote = match self {
            Quote::Classic(quote) => QuoteView::Classic(quote.view()),
            Quote::DutchV1(quote) => QuoteView::DutchV1(quote.view()),
            Quote::DutchV2(quote) => QuoteView::DutchV2(quote.view()),
            Quote::Relay(quote) => QuoteView::Relay(quote.view()),
        };
        QuoteEnvelope {
            routing: self.venue(),
            quote,
        }
        .serialize(serializer)
    }
}
