//! Quote value objects for the swap quote resolution engine
//!
//! Each venue's quote owns the arithmetic that derives it: gas adjustment,
//! price improvement, slippage decay, price buffers and fee portions. All
//! amounts are `Uint256` and every division floors.

pub mod classic;
pub mod dutch_v1;
pub mod dutch_v2;
pub mod error;
pub mod math;
pub mod order;
pub mod params;
pub mod quote;
pub mod relay;

pub use classic::{ClassicQuote, GasEstimate, RouteHop};
pub use dutch_v1::*;
pub use dutch_v2::*;
pub use error::*;
pub use order::{
    ClassicAmounts, DecayAmounts, Derivation, IntentOrder, IntentQuote, OrderLeg, OrderUpdate,
};
pub use params::*;
pub use quote::*;
pub use relay::*;
