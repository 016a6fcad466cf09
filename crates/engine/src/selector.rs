//! Best-quote selection across venues

use cosmwasm_std::Uint256;
use std::cmp::Ordering;
use swap_router_quote::{
    math::{decrease_bps, increase_bps},
    Quote,
};
use swap_router_types::TradeType;

/// Head start given to intent quotes when compared against Classic
pub const INTENT_PREFERENCE_BUFFER_BPS: u64 = 50;

/// Amount a quote competes with
///
/// Exact-input quotes compete on output, exact-output quotes on input. Classic
/// quotes are net of gas and fees; intent quotes get the preference buffer.
pub fn comparable_amount(quote: &Quote) -> Uint256 {
    let trade_type = quote.request().trade_type();
    match (quote.as_classic(), trade_type) {
        (Some(classic), TradeType::ExactInput) => classic.amount_out_gas_and_portion_adjusted(),
        (Some(classic), TradeType::ExactOutput) => classic.amount_in_gas_adjusted(),
        (None, TradeType::ExactInput) => {
            increase_bps(quote.amount_out(), INTENT_PREFERENCE_BUFFER_BPS)
        }
        (None, TradeType::ExactOutput) => {
            decrease_bps(quote.amount_in(), INTENT_PREFERENCE_BUFFER_BPS)
        }
    }
}

/// Order two quotes for the same trade, `Greater` meaning `a` is the better price
pub fn compare(a: &Quote, b: &Quote) -> Ordering {
    let ordering = comparable_amount(a).cmp(&comparable_amount(b));
    match a.request().trade_type() {
        TradeType::ExactInput => ordering,
        TradeType::ExactOutput => ordering.reverse(),
    }
}

pub fn is_better(candidate: &Quote, incumbent: &Quote) -> bool {
    compare(candidate, incumbent) == Ordering::Greater
}

/// The best priced quote; the earliest one wins a tie
///
/// Quotes with nothing to output are never selected.
pub fn select_best(quotes: &[Quote]) -> Option<&Quote> {
    quotes
        .iter()
        .filter(|quote| !quote.amount_out().is_zero())
        .fold(None, |best, quote| match best {
            Some(best) if !is_better(quote, best) => Some(best),
            _ => Some(quote),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{classic_quote, intent, request, USDC, WETH};
    use swap_router_quote::{DutchV2Quote, IntentOrder, IntentQuote};
    use swap_router_types::Venue;

    fn u(v: u128) -> Uint256 {
        Uint256::from(v)
    }

    fn classic(trade_type: TradeType, quote: u128) -> Quote {
        let request = request(
            Venue::Classic,
            intent(trade_type, USDC, WETH, 1_000_000),
        );
        classic_quote(&request, quote, 0)
    }

    fn dutch(trade_type: TradeType, amount_in: u128, amount_out: u128) -> Quote {
        let request = request(
            Venue::DutchV2,
            intent(trade_type, USDC, WETH, 1_000_000),
        );
        DutchV2Quote::rfq(IntentOrder::rfq(request, "rfq", u(amount_in), u(amount_out)))
            .into_quote()
    }

    #[test]
    fn test_exact_input_prefers_larger_output() {
        let quotes = vec![
            classic(TradeType::ExactInput, 100),
            classic(TradeType::ExactInput, 101),
        ];
        assert_eq!(select_best(&quotes), Some(&quotes[1]));
    }

    #[test]
    fn test_exact_output_prefers_smaller_input() {
        let quotes = vec![
            classic(TradeType::ExactOutput, 101),
            classic(TradeType::ExactOutput, 100),
        ];
        assert_eq!(select_best(&quotes), Some(&quotes[1]));
    }

    #[test]
    fn test_intent_buffer_exact_input() {
        // 100_000 intent output competes as 100_500
        let intent = dutch(TradeType::ExactInput, 1_000_000, 100_000);
        assert_eq!(comparable_amount(&intent), u(100_500));

        let quotes = vec![classic(TradeType::ExactInput, 100_400), intent.clone()];
        assert_eq!(select_best(&quotes), Some(&quotes[1]));

        let quotes = vec![classic(TradeType::ExactInput, 101_000), intent];
        assert_eq!(select_best(&quotes), Some(&quotes[0]));
    }

    #[test]
    fn test_intent_buffer_exact_output() {
        // 100_000 intent input competes as 99_500
        let intent = dutch(TradeType::ExactOutput, 100_000, 1_000_000);
        assert_eq!(comparable_amount(&intent), u(99_500));

        let quotes = vec![classic(TradeType::ExactOutput, 99_600), intent.clone()];
        assert_eq!(select_best(&quotes), Some(&quotes[1]));

        let quotes = vec![classic(TradeType::ExactOutput, 99_000), intent];
        assert_eq!(select_best(&quotes), Some(&quotes[0]));
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        // 100_500 Classic ties with 100_000 intent after the buffer
        let quotes = vec![
            classic(TradeType::ExactInput, 100_500),
            dutch(TradeType::ExactInput, 1_000_000, 100_000),
        ];
        assert_eq!(compare(&quotes[0], &quotes[1]), Ordering::Equal);
        assert_eq!(select_best(&quotes), Some(&quotes[0]));

        let reversed: Vec<_> = quotes.iter().rev().cloned().collect();
        assert_eq!(select_best(&reversed), Some(&reversed[0]));
    }

    #[test]
    fn test_zero_output_skipped() {
        let quotes = vec![
            classic(TradeType::ExactInput, 0),
            classic(TradeType::ExactInput, 5),
        ];
        assert_eq!(select_best(&quotes), Some(&quotes[1]));
        assert_eq!(select_best(&quotes[..1]), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(select_best(&[]), None);
    }
}
