//! Per-venue derivation parameters

use swap_router_config::VenueOverrides;
use swap_router_types::Venue;

/// Fixed gas units of filling a Dutch order
pub const UNISWAPX_BASE_GAS: u64 = 275_000;

/// Fixed gas units of relaying an order
pub const RELAY_BASE_GAS: u64 = 130_000;

/// Gas units of wrapping the native asset before the swap
pub const WETH_WRAP_GAS: u64 = 27_938;

/// Gas units of unwrapping to the native asset after the swap
pub const WETH_UNWRAP_GAS: u64 = 36_000;

pub const DEFAULT_GAS_PROPORTION_THRESHOLD_BPS: u64 = 500;

/// Trades worth at least this many USD use the large auction period
pub const LARGE_TRADE_USD_THRESHOLD: u64 = 10_000;

pub const DEFAULT_STD_AUCTION_PERIOD_SECS: u64 = 60;
pub const DEFAULT_LARGE_AUCTION_PERIOD_SECS: u64 = 120;

/// Effective parameters of one venue on one chain
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VenueParams {
    pub venue: Venue,
    pub base_gas_units: u64,
    pub price_improvement_bps: u64,
    /// Applied after slippage; positive values are conservative
    pub price_buffer_bps: i64,
    pub gas_proportion_threshold_bps: u64,
    pub deadline_buffer_secs: u64,
    pub std_auction_period_secs: u64,
    pub large_auction_period_secs: u64,
    pub skip_rfq: bool,
}

impl VenueParams {
    /// Built-in parameters of a venue
    pub const fn defaults(venue: Venue) -> Self {
        let (base_gas_units, price_improvement_bps, price_buffer_bps, deadline_buffer_secs) =
            match venue {
                Venue::Classic => (0, 0, 0, 0),
                Venue::DutchV1 => (UNISWAPX_BASE_GAS, 10, 0, 12),
                Venue::DutchV2 => (UNISWAPX_BASE_GAS, 10, 10, 60),
                Venue::Relay => (RELAY_BASE_GAS, 0, 0, 12),
            };

        Self {
            venue,
            base_gas_units,
            price_improvement_bps,
            price_buffer_bps,
            gas_proportion_threshold_bps: DEFAULT_GAS_PROPORTION_THRESHOLD_BPS,
            deadline_buffer_secs,
            std_auction_period_secs: DEFAULT_STD_AUCTION_PERIOD_SECS,
            large_auction_period_secs: DEFAULT_LARGE_AUCTION_PERIOD_SECS,
            skip_rfq: false,
        }
    }

    /// Venue defaults with a chain's overrides applied
    pub fn resolve(venue: Venue, overrides: &VenueOverrides) -> Self {
        let defaults = Self::defaults(venue);
        Self {
            venue,
            base_gas_units: overrides.base_gas_units.unwrap_or(defaults.base_gas_units),
            price_improvement_bps: overrides
                .price_improvement_bps
                .unwrap_or(defaults.price_improvement_bps),
            price_buffer_bps: overrides
                .price_buffer_bps
                .unwrap_or(defaults.price_buffer_bps),
            gas_proportion_threshold_bps: overrides
                .gas_proportion_threshold_bps
                .unwrap_or(defaults.gas_proportion_threshold_bps),
            deadline_buffer_secs: overrides
                .deadline_buffer_secs
                .unwrap_or(defaults.deadline_buffer_secs),
            std_auction_period_secs: overrides
                .std_auction_period_secs
                .unwrap_or(defaults.std_auction_period_secs),
            large_auction_period_secs: overrides
                .large_auction_period_secs
                .unwrap_or(defaults.large_auction_period_secs),
            skip_rfq: overrides.skip_rfq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_defaults() {
        let v1 = VenueParams::defaults(Venue::DutchV1);
        assert_eq!(v1.base_gas_units, 275_000);
        assert_eq!(v1.price_improvement_bps, 10);
        assert_eq!(v1.price_buffer_bps, 0);

        let v2 = VenueParams::defaults(Venue::DutchV2);
        assert_eq!(v2.price_buffer_bps, 10);
        assert_eq!(v2.deadline_buffer_secs, 60);

        let relay = VenueParams::defaults(Venue::Relay);
        assert_eq!(relay.base_gas_units, 130_000);
        assert_eq!(relay.price_improvement_bps, 0);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = VenueOverrides {
            price_buffer_bps: Some(-5),
            large_auction_period_secs: Some(240),
            skip_rfq: true,
            ..Default::default()
        };
        let params = VenueParams::resolve(Venue::DutchV2, &overrides);
        assert_eq!(params.price_buffer_bps, -5);
        assert_eq!(params.large_auction_period_secs, 240);
        assert_eq!(params.price_improvement_bps, 10);
        assert!(params.skip_rfq);
    }
}
