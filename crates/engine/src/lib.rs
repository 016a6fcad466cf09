//! Dependency-driven quote resolution
//!
//! Each requested venue gets a [`QuoteContext`] that declares the sibling
//! quotes it depends on. The [`QuoteContextManager`] flattens and
//! deduplicates those requests, the [`QuoterRegistry`] fetches them in one
//! concurrent round, and each context then derives its final quote from the
//! results. [`QuoteEngine`] ties the steps together and picks the winner.

pub mod audit;
pub mod context;
pub mod engine;
pub mod error;
pub mod manager;
pub mod quoter;
pub mod selector;
pub mod telemetry;

#[cfg(test)]
mod testing;

pub use audit::{log_candidates, CandidateAudit, AUDIT_TARGET};
pub use context::{context_for, ClassicContext, IntentContext, QuoteContext, QuoteMap};
pub use engine::{QuoteEngine, QuoteResolution};
pub use error::{EngineError, QuoterError};
pub use manager::QuoteContextManager;
pub use quoter::{Quoter, QuoterRegistry};
pub use selector::{compare, comparable_amount, is_better, select_best, INTENT_PREFERENCE_BUFFER_BPS};
pub use telemetry::{init_tracing, CorrelationId, ResolutionSpan, TracingError};
