//! Core configuration structures for chains and venues

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use swap_router_types::{normalize_address, ChainId, Venue};

/// Configuration file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub chains: Vec<ChainConfig>,
}

/// Venues supported on one chain and their parameter overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Chain identifier
    pub chain_id: ChainId,

    /// Human readable name, used in logs only
    #[serde(default)]
    pub name: String,

    /// Wrapped native token address (e.g. WETH)
    pub wrapped_native: String,

    /// Operational alarm flag, not consulted by quote resolution
    #[serde(default)]
    pub alarm_enabled: bool,

    /// Supported venues and their overrides
    #[serde(default)]
    pub venues: BTreeMap<Venue, VenueOverrides>,
}

impl ChainConfig {
    pub fn new(chain_id: ChainId, name: impl Into<String>, wrapped_native: &str) -> Self {
        Self {
            chain_id,
            name: name.into(),
            wrapped_native: normalize_address(wrapped_native),
            alarm_enabled: false,
            venues: BTreeMap::new(),
        }
    }

    /// Add a venue with default overrides
    pub fn with_venue(self, venue: Venue) -> Self {
        self.with_overrides(venue, VenueOverrides::default())
    }

    pub fn with_overrides(mut self, venue: Venue, overrides: VenueOverrides) -> Self {
        self.venues.insert(venue, overrides);
        self
    }

    pub fn supports(&self, venue: Venue) -> bool {
        self.venues.contains_key(&venue)
    }

    pub(crate) fn normalized(mut self) -> Self {
        self.wrapped_native = normalize_address(&self.wrapped_native);
        for overrides in self.venues.values_mut() {
            if let Some(tokens) = overrides.eligible_tokens.take() {
                overrides.eligible_tokens =
                    Some(tokens.iter().map(|t| normalize_address(t)).collect());
            }
        }
        self
    }
}

/// Per-venue derivation overrides for a chain
///
/// Every field is optional; unset fields fall back to the venue defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueOverrides {
    /// Auction period for ordinary trades
    pub std_auction_period_secs: Option<u64>,

    /// Auction period for trades above the large-trade threshold
    pub large_auction_period_secs: Option<u64>,

    /// Seconds between auction end and order deadline
    pub deadline_buffer_secs: Option<u64>,

    /// Improvement applied to synthetic quotes over the Classic price
    pub price_improvement_bps: Option<u64>,

    /// Extra adjustment after slippage; may be negative
    pub price_buffer_bps: Option<i64>,

    /// Never use live quotes on this chain, always derive synthetically
    pub skip_rfq: bool,

    /// Fixed gas units of filling an order of this venue
    pub base_gas_units: Option<u64>,

    /// Largest share of the trade that the fill's gas may consume
    pub gas_proportion_threshold_bps: Option<u64>,

    /// When set, only these tokens may be traded through the venue
    pub eligible_tokens: Option<BTreeSet<String>>,
}

impl VenueOverrides {
    pub fn is_token_eligible(&self, token: &str) -> bool {
        match &self.eligible_tokens {
            Some(tokens) => tokens.contains(&normalize_address(token)),
            None => true,
        }
    }
}

pub const MAINNET: ChainId = 1;
pub const OPTIMISM: ChainId = 10;
pub const POLYGON: ChainId = 137;
pub const BASE: ChainId = 8453;
pub const ARBITRUM: ChainId = 42161;
pub const SEPOLIA: ChainId = 11155111;

/// Built-in production chain table
pub fn default_chain_configs() -> Vec<ChainConfig> {
    vec![
        ChainConfig::new(MAINNET, "mainnet", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")
            .with_venue(Venue::Classic)
            .with_overrides(
                Venue::DutchV1,
                VenueOverrides {
                    std_auction_period_secs: Some(60),
                    large_auction_period_secs: Some(120),
                    ..Default::default()
                },
            )
            .with_venue(Venue::DutchV2)
            .with_venue(Venue::Relay),
        ChainConfig::new(OPTIMISM, "optimism", "0x4200000000000000000000000000000000000006")
            .with_venue(Venue::Classic),
        ChainConfig::new(POLYGON, "polygon", "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270")
            .with_venue(Venue::Classic)
            .with_overrides(
                Venue::DutchV1,
                VenueOverrides {
                    std_auction_period_secs: Some(60),
                    large_auction_period_secs: Some(60),
                    skip_rfq: true,
                    ..Default::default()
                },
            ),
        ChainConfig::new(BASE, "base", "0x4200000000000000000000000000000000000006")
            .with_venue(Venue::Classic),
        ChainConfig::new(ARBITRUM, "arbitrum", "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1")
            .with_venue(Venue::Classic)
            .with_overrides(
                Venue::DutchV2,
                VenueOverrides {
                    deadline_buffer_secs: Some(60),
                    price_buffer_bps: Some(-5),
                    ..Default::default()
                },
            ),
        ChainConfig::new(SEPOLIA, "sepolia", "0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14")
            .with_venue(Venue::Classic)
            .with_venue(Venue::DutchV1)
            .with_venue(Venue::DutchV2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligible_tokens_default_to_all() {
        let overrides = VenueOverrides::default();
        assert!(overrides.is_token_eligible("0xanything"));

        let restricted = VenueOverrides {
            eligible_tokens: Some(["0xabc".to_string()].into_iter().collect()),
            ..Default::default()
        };
        assert!(restricted.is_token_eligible("0xABC"));
        assert!(!restricted.is_token_eligible("0xdef"));
    }

    #[test]
    fn test_chain_config_builder() {
        let chain = ChainConfig::new(1, "mainnet", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")
            .with_venue(Venue::Classic);
        assert!(chain.supports(Venue::Classic));
        assert!(!chain.supports(Venue::Relay));
        assert_eq!(chain.wrapped_native, "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
    }
}
