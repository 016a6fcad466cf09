//! Structured records of every candidate considered in a resolution

use cosmwasm_std::Uint256;
use serde::Serialize;
use swap_router_quote::{ClassicAmounts, Quote};
use swap_router_types::{QuoteType, TradeType, Venue};
use tracing::info;

/// Target audit records are logged under
pub const AUDIT_TARGET: &str = "swap_router::audit";

/// One candidate quote, flattened for analytics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateAudit {
    pub request_id: String,
    pub quote_id: String,
    pub routing: Venue,
    pub quote_type: Option<QuoteType>,
    pub trade_type: TradeType,
    pub token_in: String,
    pub token_out: String,
    pub amount_in_start: Uint256,
    pub amount_in_end: Uint256,
    pub amount_out_start: Uint256,
    pub amount_out_end: Uint256,
    pub amount_in_gas_adjusted: Option<Uint256>,
    pub amount_out_gas_adjusted: Option<Uint256>,
    pub portion_bips: Option<u64>,
    pub portion_recipient: Option<String>,
    pub portion_amount: Uint256,
}

impl From<&Quote> for CandidateAudit {
    fn from(quote: &Quote) -> Self {
        let info = &quote.request().info;
        let portion = info.active_portion();

        let (quote_id, quote_type, amounts, classic_amounts, portion_amount) =
            match (quote.as_classic(), quote.order()) {
                (Some(classic), _) => (
                    classic.quote_id.clone(),
                    None,
                    (
                        classic.amount_in(),
                        classic.amount_in(),
                        classic.amount_out(),
                        classic.amount_out(),
                    ),
                    Some(ClassicAmounts::from(classic)),
                    classic.portion_amount(),
                ),
                (None, Some(order)) => (
                    order.quote_id.clone(),
                    Some(order.quote_type),
                    (
                        order.amounts.amount_in_start,
                        order.amounts.amount_in_end,
                        order.amounts.amount_out_start,
                        order.amounts.amount_out_end,
                    ),
                    order.classic_amounts,
                    order.portion_amount(),
                ),
                (None, None) => (
                    String::new(),
                    None,
                    (quote.amount_in(), quote.amount_in(), quote.amount_out(), quote.amount_out()),
                    None,
                    Uint256::zero(),
                ),
            };
        let (amount_in_start, amount_in_end, amount_out_start, amount_out_end) = amounts;

        Self {
            request_id: info.request_id.clone(),
            quote_id,
            routing: quote.venue(),
            quote_type,
            trade_type: info.trade_type,
            token_in: info.token_in.clone(),
            token_out: info.token_out.clone(),
            amount_in_start,
            amount_in_end,
            amount_out_start,
            amount_out_end,
            amount_in_gas_adjusted: classic_amounts.map(|c| c.amount_in_gas_adjusted),
            amount_out_gas_adjusted: classic_amounts.map(|c| c.amount_out_gas_adjusted),
            portion_bips: portion.map(|p| p.bips),
            portion_recipient: portion.map(|p| p.recipient.clone()),
            portion_amount,
        }
    }
}

/// Log one audit record per candidate
pub fn log_candidates(quotes: &[Quote]) -> Vec<CandidateAudit> {
    let records: Vec<CandidateAudit> = quotes.iter().map(CandidateAudit::from).collect();
    for record in &records {
        match serde_json::to_string(record) {
            Ok(json) => info!(target: AUDIT_TARGET, record = %json, "quote candidate"),
            Err(e) => info!(
                target: AUDIT_TARGET,
                request_id = %record.request_id,
                error = %e,
                "quote candidate not serializable"
            ),
        }
    }
    records
}
