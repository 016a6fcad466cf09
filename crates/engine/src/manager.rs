use std::collections::HashSet;
use swap_router_config::{ChainRegistry, RegistryError};
use swap_router_quote::Quote;
use swap_router_types::QuoteRequest;
use tracing::debug;

use crate::context::{context_for, QuoteContext, QuoteMap};

/// Drives a set of contexts through one resolution
///
/// Flattening and resolution are synchronous; only the fetch between them
/// touches the network, and it is left to the caller.
pub struct QuoteContextManager {
    contexts: Vec<Box<dyn QuoteContext>>,
}

impl QuoteContextManager {
    pub fn new(contexts: Vec<Box<dyn QuoteContext>>) -> Self {
        Self { contexts }
    }

    /// Build one context per request
    pub fn from_requests(
        requests: impl IntoIterator<Item = QuoteRequest>,
        registry: &ChainRegistry,
    ) -> Result<Self, RegistryError> {
        let contexts = requests
            .into_iter()
            .map(|request| context_for(request, registry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(contexts))
    }

    pub fn contexts(&self) -> &[Box<dyn QuoteContext>] {
        &self.contexts
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Every request to fetch, each key once
    ///
    /// The contexts' own requests come first, in input order, followed by
    /// their dependencies. The first request seen for a key is kept.
    pub fn requests(&self) -> Vec<QuoteRequest> {
        let own = self.contexts.iter().map(|c| c.request().clone());
        let dependencies = self.contexts.iter().flat_map(|c| c.dependencies());

        let mut seen = HashSet::new();
        let requests: Vec<_> = own
            .chain(dependencies)
            .filter(|request| seen.insert(request.key()))
            .collect();

        debug!(
            contexts = self.contexts.len(),
            requests = requests.len(),
            "flattened quote requests"
        );
        requests
    }

    /// Resolve every context against the fetched quotes, in input order
    ///
    /// When two fetched quotes share a key the later one is used.
    pub fn resolve_quotes(&self, fetched: impl IntoIterator<Item = Quote>) -> Vec<Option<Quote>> {
        let quotes: QuoteMap = fetched
            .into_iter()
            .map(|quote| (quote.key(), quote))
            .collect();

        self.contexts
            .iter()
            .map(|context| context.resolve(&quotes))
            .collect()
    }
}
