//! Chain and venue configuration for the swap quote resolution engine
//!
//! This crate provides:
//! - Per-chain venue support and per-venue derivation overrides
//! - A validated registry that enforces venue dependency constraints once,
//!   at construction time
//! - Loading from TOML, YAML or JSON files

mod config;
mod loader;
mod registry;
mod validation;

pub use config::*;
pub use loader::*;
pub use registry::*;
pub use validation::*;

use swap_router_types::{ChainId, Venue};

/// Deployment-time configuration defects. These are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),

    #[error("Config validation failed: {0}")]
    ValidationError(String),

    #[error("chain {chain_id} supports {venue} but not its dependency {dependency}")]
    MissingDependency {
        chain_id: ChainId,
        venue: Venue,
        dependency: Venue,
    },

    #[error("chain {0} is configured more than once")]
    DuplicateChain(ChainId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Lookup failures against a valid registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unsupported chain: {0}")]
    UnsupportedChain(ChainId),

    #[error("venue {venue} is not supported on chain {chain_id}")]
    UnsupportedVenue { chain_id: ChainId, venue: Venue },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
