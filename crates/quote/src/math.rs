//! Fixed-point helpers shared by every derivation
//!
//! All amounts are `Uint256` and every division floors. Results that would
//! not fit in 256 bits saturate at `Uint256::MAX`.

use cosmwasm_std::Uint256;
use swap_router_types::BPS;

/// `amount * numerator / BPS`, floored
pub fn scale_bps(amount: Uint256, numerator: u64) -> Uint256 {
    amount
        .checked_multiply_ratio(numerator, BPS)
        .unwrap_or(Uint256::MAX)
}

pub fn increase_bps(amount: Uint256, bps: u64) -> Uint256 {
    scale_bps(amount, BPS.saturating_add(bps))
}

pub fn decrease_bps(amount: Uint256, bps: u64) -> Uint256 {
    scale_bps(amount, BPS.saturating_sub(bps))
}

/// `amount * (BPS + bps) / BPS` for a signed adjustment
pub fn adjust_signed_bps(amount: Uint256, bps: i64) -> Uint256 {
    if bps >= 0 {
        increase_bps(amount, bps.unsigned_abs())
    } else {
        decrease_bps(amount, bps.unsigned_abs())
    }
}

/// Share of `amount` owed to a fee portion of `bips`
pub fn portion_of(amount: Uint256, bips: u64) -> Uint256 {
    scale_bps(amount, bips)
}

/// Cost of `extra_units` of gas expressed in the quote token
///
/// Scales the Classic quote's known gas cost in quote-token terms
/// (`gas_quote` for `gas_units` at `gas_price`) by the extra units:
/// `gas_quote * (extra_units * gas_price) / (gas_units * gas_price)`.
/// Zero when the denominator is zero.
pub fn gas_adjustment(
    gas_quote: Uint256,
    gas_units: u64,
    extra_units: u64,
    gas_price: Uint256,
) -> Uint256 {
    let numerator = Uint256::from(extra_units).checked_mul(gas_price);
    let denominator = Uint256::from(gas_units).checked_mul(gas_price);

    match (numerator, denominator) {
        (Ok(numerator), Ok(denominator)) if !denominator.is_zero() => gas_quote
            .checked_multiply_ratio(numerator, denominator)
            .unwrap_or(Uint256::MAX),
        _ => Uint256::zero(),
    }
}
