use cosmwasm_std::Uint256;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{normalize_address, ChainId, TradeIntent, TradeType, Venue};

/// Request-time parameters for on-chain routing
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassicConfig {
    /// Restrict routing to these protocols (empty means all)
    pub protocols: Vec<String>,

    /// Gas price to quote with instead of the network estimate
    pub gas_price_wei: Option<Uint256>,

    pub simulate_from_address: Option<String>,
}

/// Request-time parameters for first version Dutch orders
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DutchV1Config {
    /// Ignore live quotes and derive from the Classic quote
    pub use_synthetic: bool,
    pub auction_period_secs: Option<u64>,
    pub deadline_buffer_secs: Option<u64>,
    pub exclusivity_override_bps: Option<u64>,
}

/// Request-time parameters for cosigned Dutch orders
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DutchV2Config {
    pub use_synthetic: bool,
    pub deadline_buffer_secs: Option<u64>,
}

/// Request-time parameters for relayed orders
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelayConfig {
    /// Token the swapper pays the relayer's gas fee in
    pub gas_token: String,
    pub use_synthetic: bool,
    pub deadline_buffer_secs: Option<u64>,
}

/// Per-venue request configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "routingType")]
pub enum RoutingConfig {
    #[serde(rename = "CLASSIC")]
    Classic(ClassicConfig),
    #[serde(rename = "DUTCH_LIMIT")]
    DutchV1(DutchV1Config),
    #[serde(rename = "DUTCH_V2")]
    DutchV2(DutchV2Config),
    #[serde(rename = "RELAY")]
    Relay(RelayConfig),
}

impl RoutingConfig {
    pub fn venue(&self) -> Venue {
        match self {
            RoutingConfig::Classic(_) => Venue::Classic,
            RoutingConfig::DutchV1(_) => Venue::DutchV1,
            RoutingConfig::DutchV2(_) => Venue::DutchV2,
            RoutingConfig::Relay(_) => Venue::Relay,
        }
    }

    /// Whether the request opted out of live quotes
    pub fn use_synthetic(&self) -> bool {
        match self {
            RoutingConfig::Classic(_) => false,
            RoutingConfig::DutchV1(c) => c.use_synthetic,
            RoutingConfig::DutchV2(c) => c.use_synthetic,
            RoutingConfig::Relay(c) => c.use_synthetic,
        }
    }
}

/// A trade intent bound to one venue
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub info: TradeIntent,
    pub config: RoutingConfig,
}

impl QuoteRequest {
    pub fn new(info: TradeIntent, config: RoutingConfig) -> Self {
        let config = match config {
            RoutingConfig::Relay(mut relay) => {
                relay.gas_token = normalize_address(&relay.gas_token);
                RoutingConfig::Relay(relay)
            }
            other => other,
        };
        Self { info, config }
    }

    /// Classic request with default routing parameters
    pub fn classic(info: TradeIntent) -> Self {
        Self::new(info, RoutingConfig::Classic(ClassicConfig::default()))
    }

    pub fn venue(&self) -> Venue {
        self.config.venue()
    }

    pub fn chain_id(&self) -> ChainId {
        self.info.chain_id()
    }

    pub fn trade_type(&self) -> TradeType {
        self.info.trade_type
    }

    pub fn key(&self) -> RequestKey {
        RequestKey {
            venue: self.venue(),
            token_in_chain_id: self.info.token_in_chain_id,
            token_out_chain_id: self.info.token_out_chain_id,
            token_in: self.info.token_in.clone(),
            token_out: self.info.token_out.clone(),
            amount: self.info.amount.to_string(),
            trade_type: self.info.trade_type,
        }
    }
}

/// Deduplication identity of a quote request
///
/// Request id, slippage, swapper and routing parameters do not take part:
/// two requests that only differ there are served by one upstream quote.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestKey {
    pub venue: Venue,
    pub token_in_chain_id: ChainId,
    pub token_out_chain_id: ChainId,
    pub token_in: String,
    pub token_out: String,
    /// Decimal string of the request amount
    pub amount: String,
    pub trade_type: TradeType,
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}-{}-{}",
            self.venue,
            self.token_in_chain_id,
            self.token_out_chain_id,
            self.token_in,
            self.token_out,
            self.amount,
            self.trade_type
        )
    }
}
