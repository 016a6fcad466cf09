use std::sync::Arc;
use swap_router_config::ChainRegistry;
use swap_router_quote::Quote;
use swap_router_types::QuoteRequest;
use tracing::{debug, info, Instrument};

use crate::audit::log_candidates;
use crate::context::{context_for, QuoteContext};
use crate::selector::select_best;
use crate::telemetry::ResolutionSpan;
use crate::{EngineError, QuoteContextManager, QuoterRegistry};

/// Outcome of one resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteResolution {
    /// Best priced candidate, if any venue produced one
    pub winner: Option<Quote>,

    /// Every resolved quote, in request order
    pub candidates: Vec<Quote>,
}

/// Resolves a batch of venue requests for one trade into the best quote
#[derive(Clone)]
pub struct QuoteEngine {
    registry: Arc<ChainRegistry>,
    quoters: QuoterRegistry,
}

impl QuoteEngine {
    pub fn new(registry: Arc<ChainRegistry>, quoters: QuoterRegistry) -> Self {
        Self { registry, quoters }
    }

    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Resolve `requests`, one per venue, to their candidates and the winner
    ///
    /// Requests for venues the chain does not support are skipped. Finding no
    /// quote at all is not an error: the winner is then `None`.
    pub async fn resolve(
        &self,
        requests: Vec<QuoteRequest>,
    ) -> Result<QuoteResolution, EngineError> {
        let first = requests.first().ok_or(EngineError::NoRequests)?;
        let trade_type = first.trade_type();
        if let Some(other) = requests.iter().find(|r| r.trade_type() != trade_type) {
            return Err(EngineError::MixedTradeTypes {
                first: trade_type,
                other: other.trade_type(),
            });
        }

        let span = ResolutionSpan::new(first.info.request_id.clone()).span();
        Ok(self.resolve_supported(requests).instrument(span).await)
    }

    async fn resolve_supported(&self, requests: Vec<QuoteRequest>) -> QuoteResolution {
        let intent_requested = requests.iter().any(|r| r.venue().is_intent());

        let contexts: Vec<Box<dyn QuoteContext>> = requests
            .into_iter()
            .filter_map(|request| {
                let venue = request.venue();
                context_for(request, &self.registry)
                    .map_err(|e| debug!(venue = %venue, error = %e, "skipping request"))
                    .ok()
            })
            .collect();
        let manager = QuoteContextManager::new(contexts);
        if manager.is_empty() {
            return QuoteResolution::default();
        }

        let fetched = self.quoters.fetch_quotes(&manager.requests()).await;
        let candidates: Vec<Quote> = manager
            .resolve_quotes(fetched)
            .into_iter()
            .flatten()
            .collect();

        if intent_requested {
            log_candidates(&candidates);
        }

        let winner = select_best(&candidates).cloned();
        info!(
            candidates = candidates.len(),
            winner = winner.as_ref().map(|q| q.venue().as_str()).unwrap_or("none"),
            "quote resolution complete"
        );

        QuoteResolution { winner, candidates }
    }
}
