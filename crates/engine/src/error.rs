use swap_router_types::{RequestKey, TradeType};
use thiserror::Error;

/// Failure of one upstream quoter call
#[derive(Debug, Error)]
pub enum QuoterError {
    #[error("no quoter registered for {0}")]
    NoQuoter(RequestKey),

    #[error("quoter timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("upstream error: {0}")]
    Upstream(#[from] anyhow::Error),
}

/// Problems with the input to a resolution
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no quote requests supplied")]
    NoRequests,

    #[error("requests mix trade types: {first} and {other}")]
    MixedTradeTypes { first: TradeType, other: TradeType },
}
