//! Per-venue quote contexts
//!
//! A context declares the sibling requests it needs, then turns the fetched
//! quotes into at most one final quote for its own request.

use std::collections::HashMap;
use std::marker::PhantomData;
use swap_router_config::{ChainRegistry, RegistryError, VenueOverrides};
use swap_router_quote::{
    math::scale_bps, Derivation, DutchV1Quote, DutchV2Quote, IntentQuote, Quote, RelayQuote,
    VenueParams,
};
use swap_router_types::{is_native, QuoteRequest, RequestKey, TradeType, Venue};
use tracing::debug;

/// Fetched quotes by the identity of the request they answer
pub type QuoteMap = HashMap<RequestKey, Quote>;

/// Resolution logic for one requested venue
pub trait QuoteContext: Send + Sync {
    fn request(&self) -> &QuoteRequest;

    /// Sibling requests this context needs; pure, no I/O
    fn dependencies(&self) -> Vec<QuoteRequest>;

    /// Final quote for the context's request, if any
    ///
    /// Missing entries in `quotes` are treated as "no quote", never as errors.
    fn resolve(&self, quotes: &QuoteMap) -> Option<Quote>;
}

/// Build the context for a request's venue
pub fn context_for(
    request: QuoteRequest,
    registry: &ChainRegistry,
) -> Result<Box<dyn QuoteContext>, RegistryError> {
    let context: Box<dyn QuoteContext> = match request.venue() {
        Venue::Classic => {
            registry.quote_config(request.chain_id(), Venue::Classic)?;
            Box::new(ClassicContext::new(request))
        }
        Venue::DutchV1 => Box::new(IntentContext::<DutchV1Quote>::new(request, registry)?),
        Venue::DutchV2 => Box::new(IntentContext::<DutchV2Quote>::new(request, registry)?),
        Venue::Relay => Box::new(IntentContext::<RelayQuote>::new(request, registry)?),
    };
    Ok(context)
}

/// Passes through the quote fetched for its own request
pub struct ClassicContext {
    request: QuoteRequest,
}

impl ClassicContext {
    pub fn new(request: QuoteRequest) -> Self {
        Self { request }
    }
}

impl QuoteContext for ClassicContext {
    fn request(&self) -> &QuoteRequest {
        &self.request
    }

    fn dependencies(&self) -> Vec<QuoteRequest> {
        Vec::new()
    }

    fn resolve(&self, quotes: &QuoteMap) -> Option<Quote> {
        quotes
            .get(&self.request.key())
            .filter(|quote| quote.as_classic().is_some())
            .cloned()
    }
}

/// Resolution shared by every intent venue, parameterized by the venue's quote type
pub struct IntentContext<Q> {
    request: QuoteRequest,
    params: VenueParams,
    overrides: VenueOverrides,
    classic_request: QuoteRequest,
    route_back_request: Option<QuoteRequest>,
    venue: PhantomData<fn() -> Q>,
}

impl<Q: IntentQuote> IntentContext<Q> {
    pub fn new(request: QuoteRequest, registry: &ChainRegistry) -> Result<Self, RegistryError> {
        let chain_id = request.chain_id();
        let overrides = registry.quote_config(chain_id, Q::VENUE)?.clone();
        let wrapped_native = registry.wrapped_native(chain_id)?;

        let classic_request = QuoteRequest::classic(request.info.clone());
        let route_back_request = route_back_request(&request, wrapped_native);

        Ok(Self {
            params: VenueParams::resolve(Q::VENUE, &overrides),
            overrides,
            classic_request,
            route_back_request,
            request,
            venue: PhantomData,
        })
    }

    fn derive(&self, derivation: &Derivation<'_>, quotes: &QuoteMap) -> Option<Q> {
        let live = if self.params.skip_rfq || self.request.config.use_synthetic() {
            None
        } else {
            quotes.get(&self.request.key()).and_then(Q::from_fetched)
        };

        if let Some(live) = live {
            match live.reparameterize(derivation) {
                Ok(quote) => return Some(quote),
                Err(reason) => debug!(
                    venue = %Q::VENUE,
                    %reason,
                    "live quote unusable, deriving synthetic"
                ),
            }
        }

        match Q::synthetic(derivation) {
            Ok(quote) => Some(quote),
            Err(reason) => {
                debug!(venue = %Q::VENUE, %reason, "no synthetic quote");
                None
            }
        }
    }

    /// False when the output token demonstrably cannot be routed back to the
    /// wrapped native asset at a gas-adjusted price
    ///
    /// The back route is sized in the request's amount, which for exact-input
    /// trades is denominated in the input token. A gas-adjusted output that
    /// floors to zero only says the probe was small, so only an output the
    /// router could not price gas into disqualifies.
    fn can_route_back(&self, quotes: &QuoteMap) -> bool {
        let Some(request) = &self.route_back_request else {
            return true;
        };
        match quotes.get(&request.key()).and_then(Quote::as_classic) {
            Some(back) => back.amount_out_gas_adjusted() < back.amount_out(),
            None => true,
        }
    }

    /// Whether filling the order would spend too large a share of the trade on gas
    fn exceeds_gas_threshold(&self, derivation: &Derivation<'_>) -> bool {
        let Some(classic) = derivation.classic else {
            return false;
        };
        derivation.venue_gas() > scale_bps(classic.quote, self.params.gas_proportion_threshold_bps)
    }
}

impl<Q: IntentQuote> QuoteContext for IntentContext<Q> {
    fn request(&self) -> &QuoteRequest {
        &self.request
    }

    fn dependencies(&self) -> Vec<QuoteRequest> {
        let mut dependencies = vec![self.classic_request.clone()];
        dependencies.extend(self.route_back_request.clone());
        dependencies
    }

    fn resolve(&self, quotes: &QuoteMap) -> Option<Quote> {
        let info = &self.request.info;
        if !self.overrides.is_token_eligible(&info.token_in)
            || !self.overrides.is_token_eligible(&info.token_out)
        {
            debug!(venue = %Q::VENUE, "token pair not eligible");
            return None;
        }

        let classic = quotes
            .get(&self.classic_request.key())
            .and_then(Quote::as_classic);
        let derivation = Derivation::new(&self.request, classic, &self.params);

        let quote = self.derive(&derivation, quotes)?;

        if !self.can_route_back(quotes) {
            debug!(venue = %Q::VENUE, "no profitable route back to native");
            return None;
        }

        if self.exceeds_gas_threshold(&derivation) {
            debug!(
                venue = %Q::VENUE,
                threshold_bps = self.params.gas_proportion_threshold_bps,
                "gas cost too large for order size"
            );
            return None;
        }

        let quote = match info.active_portion() {
            Some(portion) => quote.with_portion(portion),
            None => quote,
        };

        if let Err(reason) = quote.validate() {
            debug!(venue = %Q::VENUE, %reason, "derived order rejected");
            return None;
        }

        Some(quote.into_quote())
    }
}

/// Classic request selling the output token back into wrapped native
fn route_back_request(request: &QuoteRequest, wrapped_native: &str) -> Option<QuoteRequest> {
    let token_out = &request.info.token_out;
    if is_native(token_out) || token_out == wrapped_native {
        return None;
    }

    let mut info = request.info.clone();
    info.token_in_chain_id = info.token_out_chain_id;
    info.token_in = token_out.clone();
    info.token_out = wrapped_native.to_string();
    info.trade_type = TradeType::ExactInput;
    info.send_portion_enabled = false;
    info.portion = None;
    Some(QuoteRequest::classic(info))
}
