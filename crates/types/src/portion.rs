use serde::{Deserialize, Serialize};

/// How the portion rate scales with trade size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortionType {
    Flat,
    Regressive,
}

/// Fee skimmed from one side of a trade and routed to a separate recipient
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portion {
    pub bips: u64,
    pub recipient: String,
    #[serde(rename = "type")]
    pub portion_type: PortionType,
}

impl Portion {
    pub fn new(bips: u64, recipient: impl Into<String>, portion_type: PortionType) -> Self {
        Self {
            bips,
            recipient: crate::normalize_address(&recipient.into()),
            portion_type,
        }
    }
}
