use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,swap_router=debug";

/// Install a JSON subscriber for the process
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`]. Fails if a global
/// subscriber is already installed.
pub fn init_tracing() -> Result<(), TracingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TracingError::InitError(e.to_string()))?;

    Ok(())
}

/// Correlation id tying together the logs of one resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(uuid::Uuid);

impl CorrelationId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Span covering one call to the engine
#[derive(Debug, Clone)]
pub struct ResolutionSpan {
    pub correlation_id: CorrelationId,
    pub request_id: String,
}

impl ResolutionSpan {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            correlation_id: CorrelationId::new(),
            request_id: request_id.into(),
        }
    }

    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "resolve_quotes",
            correlation_id = %self.correlation_id,
            request_id = %self.request_id,
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("failed to initialize tracing: {0}")]
    InitError(String),
}
