//! Configuration validation

use crate::{ChainConfig, ConfigError, Result, VenueOverrides};
use std::collections::HashSet;
use swap_router_types::BPS;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check that every venue's static dependencies are configured on the same chain
pub fn validate_dependencies(chain: &ChainConfig) -> Result<()> {
    for venue in chain.venues.keys() {
        for dependency in venue.dependencies() {
            if !chain.supports(*dependency) {
                return Err(ConfigError::MissingDependency {
                    chain_id: chain.chain_id,
                    venue: *venue,
                    dependency: *dependency,
                });
            }
        }
    }
    Ok(())
}

/// Validate a full chain table
///
/// Dependency violations are reported on their own; field problems are
/// collected across all chains and reported together.
pub fn validate_chains(chains: &[ChainConfig]) -> Result<()> {
    let mut seen = HashSet::new();
    for chain in chains {
        if !seen.insert(chain.chain_id) {
            return Err(ConfigError::DuplicateChain(chain.chain_id));
        }
        validate_dependencies(chain)?;
    }

    let errors: Vec<ValidationError> = chains.iter().flat_map(validate_chain_config).collect();

    if !errors.is_empty() {
        let error_msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ConfigError::ValidationError(error_msg));
    }

    Ok(())
}

/// Validate the fields of one chain configuration
pub fn validate_chain_config(chain: &ChainConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let prefix = format!("chains.{}", chain.chain_id);

    if chain.chain_id == 0 {
        errors.push(ValidationError::new(
            format!("{prefix}.chain_id"),
            "must be greater than 0",
        ));
    }

    if chain.wrapped_native.is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.wrapped_native"),
            "wrapped native token address is required",
        ));
    } else if !chain.wrapped_native.starts_with("0x") {
        errors.push(ValidationError::new(
            format!("{prefix}.wrapped_native"),
            "address must start with 0x",
        ));
    }

    if chain.venues.is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.venues"),
            "at least one venue must be supported",
        ));
    }

    for (venue, overrides) in &chain.venues {
        let field = format!("{prefix}.venues.{venue}");
        errors.extend(validate_overrides(&field, overrides));
    }

    errors
}

fn validate_overrides(field: &str, overrides: &VenueOverrides) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (name, value) in [
        ("price_improvement_bps", overrides.price_improvement_bps),
        (
            "gas_proportion_threshold_bps",
            overrides.gas_proportion_threshold_bps,
        ),
    ] {
        if value.is_some_and(|bps| bps > BPS) {
            errors.push(ValidationError::new(
                format!("{field}.{name}"),
                "must be <= 10000 (100%)",
            ));
        }
    }

    if let Some(buffer) = overrides.price_buffer_bps {
        if buffer.unsigned_abs() >= BPS {
            errors.push(ValidationError::new(
                format!("{field}.price_buffer_bps"),
                "must be strictly between -10000 and 10000",
            ));
        }
    }

    if overrides.std_auction_period_secs == Some(0) {
        errors.push(ValidationError::new(
            format!("{field}.std_auction_period_secs"),
            "must be greater than 0",
        ));
    }

    if overrides.large_auction_period_secs == Some(0) {
        errors.push(ValidationError::new(
            format!("{field}.large_auction_period_secs"),
            "must be greater than 0",
        ));
    }

    if let (Some(std), Some(large)) = (
        overrides.std_auction_period_secs,
        overrides.large_auction_period_secs,
    ) {
        if large < std {
            errors.push(ValidationError::new(
                format!("{field}.large_auction_period_secs"),
                format!("must be >= std_auction_period_secs ({std})"),
            ));
        }
    }

    if overrides.base_gas_units == Some(0) {
        errors.push(ValidationError::new(
            format!("{field}.base_gas_units"),
            "must be greater than 0",
        ));
    }

    errors
}
