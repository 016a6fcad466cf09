use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a trade
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TradeType {
    /// The input amount is fixed, the output amount is quoted
    #[serde(rename = "EXACT_INPUT")]
    ExactInput,

    /// The output amount is fixed, the input amount is quoted
    #[serde(rename = "EXACT_OUTPUT")]
    ExactOutput,
}

impl TradeType {
    pub fn is_exact_input(self) -> bool {
        matches!(self, TradeType::ExactInput)
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeType::ExactInput => f.write_str("EXACT_INPUT"),
            TradeType::ExactOutput => f.write_str("EXACT_OUTPUT"),
        }
    }
}

/// Execution venue for a swap
///
/// Declaration order is a topological order of the static dependency graph:
/// every venue appears after the venues it depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Venue {
    /// On-chain aggregated routing
    #[serde(rename = "CLASSIC")]
    Classic,

    /// Dutch auction order, first version
    #[serde(rename = "DUTCH_LIMIT")]
    DutchV1,

    /// Cosigned Dutch auction order
    #[serde(rename = "DUTCH_V2")]
    DutchV2,

    /// Gas-abstracted relayed order
    #[serde(rename = "RELAY")]
    Relay,
}

impl Venue {
    pub const ALL: [Venue; 4] = [Venue::Classic, Venue::DutchV1, Venue::DutchV2, Venue::Relay];

    /// Venues whose quotes this venue needs before it can resolve
    pub const fn dependencies(self) -> &'static [Venue] {
        match self {
            Venue::Classic => &[],
            Venue::DutchV1 | Venue::DutchV2 | Venue::Relay => &[Venue::Classic],
        }
    }

    /// Intent venues are filled off-chain by third parties and decay over time
    pub const fn is_intent(self) -> bool {
        !matches!(self, Venue::Classic)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Venue::Classic => "CLASSIC",
            Venue::DutchV1 => "DUTCH_LIMIT",
            Venue::DutchV2 => "DUTCH_V2",
            Venue::Relay => "RELAY",
        }
    }
}

// Dependencies must precede their dependants, which also rules out cycles.
const _: () = {
    let mut i = 0;
    while i < Venue::ALL.len() {
        let venue = Venue::ALL[i];
        let deps = venue.dependencies();
        let mut j = 0;
        while j < deps.len() {
            assert!(
                (deps[j] as usize) < (venue as usize),
                "venue dependency must be declared before its dependant"
            );
            j += 1;
        }
        i += 1;
    }
};

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Venue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLASSIC" => Ok(Venue::Classic),
            "DUTCH_LIMIT" => Ok(Venue::DutchV1),
            "DUTCH_V2" => Ok(Venue::DutchV2),
            "RELAY" => Ok(Venue::Relay),
            other => Err(format!("unknown venue: {other}")),
        }
    }
}

// Parsed through `FromStr` so venues also work as map keys in every config format.
impl<'de> Deserialize<'de> for Venue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Where an intent quote's price came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteType {
    /// Sourced from the venue's live pricing service
    #[serde(rename = "RFQ")]
    Rfq,

    /// Derived entirely from a Classic quote
    #[serde(rename = "SYNTHETIC")]
    Synthetic,
}
