//! Swap quote resolution
//!
//! Given one trade and the venues it may execute through, fetch every quote
//! the venues need in a single concurrent round, derive each venue's final
//! quote and pick the best priced one.
//!
//! ```no_run
//! use std::sync::Arc;
//! use swap_router::{ChainRegistry, QuoteEngine, QuoterRegistry};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let registry = Arc::new(ChainRegistry::default_mainnets()?);
//! let engine = QuoteEngine::new(registry, QuoterRegistry::new());
//! let resolution = engine.resolve(Vec::new()).await;
//! # Ok(())
//! # }
//! ```

pub use swap_router_config as config;
pub use swap_router_engine as engine;
pub use swap_router_quote as quote;
pub use swap_router_types as types;

pub use swap_router_config::{load_registry, ChainConfig, ChainRegistry, ConfigError, RegistryError};
pub use swap_router_engine::{
    init_tracing, select_best, QuoteEngine, QuoteResolution, Quoter, QuoterError, QuoterRegistry,
};
pub use swap_router_quote::Quote;
pub use swap_router_types::{QuoteRequest, RoutingConfig, TradeIntent, TradeType, Venue};
