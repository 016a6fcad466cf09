use cosmwasm_std::Uint256;
use swap_router_types::Venue;
use thiserror::Error;

/// Reasons a derived quote is rejected
///
/// None of these are fatal: the venue simply has no candidate for the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("no classic quote to derive from")]
    MissingClassicQuote,

    #[error("zero amount in order")]
    ZeroAmount,

    #[error("inverted output decay: start {start}, end {end}")]
    InvertedOutputDecay { start: Uint256, end: Uint256 },

    #[error("inverted input decay: start {start}, end {end}")]
    InvertedInputDecay { start: Uint256, end: Uint256 },

    #[error("gas token {gas_token} differs from input token {token_in}")]
    GasTokenMismatch { gas_token: String, token_in: String },

    #[error("quote for {actual} cannot be used as {expected}")]
    VenueMismatch { expected: Venue, actual: Venue },
}
