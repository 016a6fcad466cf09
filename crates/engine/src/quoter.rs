use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use swap_router_quote::Quote;
use swap_router_types::{QuoteRequest, Venue};
use tracing::{debug, warn};

use crate::QuoterError;

/// Upstream pricing service for one venue
#[async_trait]
pub trait Quoter: Send + Sync {
    /// Quote one request
    ///
    /// `Ok(None)` means the venue has no route for it.
    async fn quote(&self, request: &QuoteRequest) -> Result<Option<Quote>, QuoterError>;
}

/// Quoters by venue, dispatched concurrently
#[derive(Clone, Default)]
pub struct QuoterRegistry {
    quoters: HashMap<Venue, Arc<dyn Quoter>>,
    timeout: Option<Duration>,
}

impl QuoterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound every quoter call; calls over the limit count as no quote
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_quoter(mut self, venue: Venue, quoter: Arc<dyn Quoter>) -> Self {
        self.register(venue, quoter);
        self
    }

    pub fn register(&mut self, venue: Venue, quoter: Arc<dyn Quoter>) {
        self.quoters.insert(venue, quoter);
    }

    pub fn get(&self, venue: Venue) -> Option<&Arc<dyn Quoter>> {
        self.quoters.get(&venue)
    }

    /// Fetch quotes for every request at once
    ///
    /// All requests are in flight together and the call returns once each has
    /// answered, failed or timed out. Failures are logged and leave no entry.
    pub async fn fetch_quotes(&self, requests: &[QuoteRequest]) -> Vec<Quote> {
        let futures: Vec<_> = requests.iter().map(|r| self.fetch_one(r)).collect();
        let results = futures::future::join_all(futures).await;

        requests
            .iter()
            .zip(results)
            .filter_map(|(request, result)| match result {
                Ok(Some(quote)) => Some(quote),
                Ok(None) => {
                    debug!(request = %request.key(), "no quote returned");
                    None
                }
                Err(e) => {
                    warn!(
                        venue = %request.venue(),
                        request = %request.key(),
                        error = %e,
                        "quoter failed"
                    );
                    None
                }
            })
            .collect()
    }

    async fn fetch_one(&self, request: &QuoteRequest) -> Result<Option<Quote>, QuoterError> {
        let quoter = self
            .get(request.venue())
            .ok_or_else(|| QuoterError::NoQuoter(request.key()))?;

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, quoter.quote(request))
                .await
                .map_err(|_| QuoterError::Timeout {
                    timeout_ms: limit.as_millis() as u64,
                })?,
            None => quoter.quote(request).await,
        }
    }
}
