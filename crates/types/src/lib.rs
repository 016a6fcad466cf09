pub mod intent;
pub mod portion;
pub mod request;
pub mod token;
pub mod trading;

pub use intent::*;
pub use portion::*;
pub use request::*;
pub use token::*;
pub use trading::*;

/// Basis points in one whole (100%)
pub const BPS: u64 = 10_000;

/// Default slippage tolerance, in percent
pub const DEFAULT_SLIPPAGE_TOLERANCE: &str = "0.5";

/// EVM chain identifier
pub type ChainId = u64;
