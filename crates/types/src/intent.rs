use cosmwasm_std::Uint256;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{
    normalize_address, ChainId, Portion, TradeType, BPS, DEFAULT_SLIPPAGE_TOLERANCE,
    NATIVE_ADDRESS,
};

/// A user's trade request, shared by every venue quoted for it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeIntent {
    /// Caller-supplied (or generated) request identifier
    pub request_id: String,

    pub token_in_chain_id: ChainId,
    pub token_out_chain_id: ChainId,

    /// Normalized input token address
    pub token_in: String,

    /// Normalized output token address
    pub token_out: String,

    /// Input amount for exact-input trades, output amount for exact-output
    pub amount: Uint256,

    pub trade_type: TradeType,

    /// Address that will sign and receive the swap
    pub swapper: String,

    /// Slippage tolerance in percent, e.g. 0.5
    pub slippage_tolerance: Decimal,

    /// Whether the integrator fee portion is shared with the response
    pub send_portion_enabled: bool,

    /// Fee portion looked up for this pair, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion: Option<Portion>,
}

impl TradeIntent {
    pub fn builder() -> TradeIntentBuilder {
        TradeIntentBuilder::default()
    }

    /// Chain the swap executes on
    pub fn chain_id(&self) -> ChainId {
        self.token_in_chain_id
    }

    /// Slippage tolerance in basis points, rounded down
    pub fn slippage_bps(&self) -> u64 {
        (self.slippage_tolerance * Decimal::ONE_HUNDRED)
            .floor()
            .to_u64()
            .unwrap_or(0)
            .min(BPS)
    }

    /// The portion to apply, only when fee sharing is enabled
    pub fn active_portion(&self) -> Option<&Portion> {
        if self.send_portion_enabled {
            self.portion.as_ref()
        } else {
            None
        }
    }
}

/// Builder for constructing trade intents
#[derive(Default)]
pub struct TradeIntentBuilder {
    request_id: Option<String>,
    token_in_chain_id: Option<ChainId>,
    token_out_chain_id: Option<ChainId>,
    token_in: Option<String>,
    token_out: Option<String>,
    amount: Option<Uint256>,
    trade_type: Option<TradeType>,
    swapper: Option<String>,
    slippage_tolerance: Option<String>,
    send_portion_enabled: bool,
    portion: Option<Portion>,
}

impl TradeIntentBuilder {
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set both input and output chain
    pub fn chain_id(mut self, chain_id: ChainId) -> Self {
        self.token_in_chain_id = Some(chain_id);
        self.token_out_chain_id = Some(chain_id);
        self
    }

    pub fn token_out_chain_id(mut self, chain_id: ChainId) -> Self {
        self.token_out_chain_id = Some(chain_id);
        self
    }

    pub fn token_in(mut self, token: impl Into<String>) -> Self {
        self.token_in = Some(token.into());
        self
    }

    pub fn token_out(mut self, token: impl Into<String>) -> Self {
        self.token_out = Some(token.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<Uint256>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn trade_type(mut self, trade_type: TradeType) -> Self {
        self.trade_type = Some(trade_type);
        self
    }

    pub fn swapper(mut self, swapper: impl Into<String>) -> Self {
        self.swapper = Some(swapper.into());
        self
    }

    /// Slippage tolerance in percent, as the API receives it
    pub fn slippage_tolerance(mut self, slippage: impl Into<String>) -> Self {
        self.slippage_tolerance = Some(slippage.into());
        self
    }

    pub fn send_portion_enabled(mut self, enabled: bool) -> Self {
        self.send_portion_enabled = enabled;
        self
    }

    pub fn portion(mut self, portion: Portion) -> Self {
        self.portion = Some(portion);
        self
    }

    pub fn build(self) -> Result<TradeIntent, IntentBuildError> {
        let token_in_chain_id = self
            .token_in_chain_id
            .ok_or(IntentBuildError::MissingChainId)?;
        let token_out_chain_id = self.token_out_chain_id.unwrap_or(token_in_chain_id);
        let token_in = normalize_address(&self.token_in.ok_or(IntentBuildError::MissingTokenIn)?);
        let token_out =
            normalize_address(&self.token_out.ok_or(IntentBuildError::MissingTokenOut)?);
        let amount = self.amount.ok_or(IntentBuildError::MissingAmount)?;
        let trade_type = self.trade_type.ok_or(IntentBuildError::MissingTradeType)?;

        if amount.is_zero() {
            return Err(IntentBuildError::ZeroAmount);
        }
        if token_in == token_out && token_in_chain_id == token_out_chain_id {
            return Err(IntentBuildError::SameToken(token_in));
        }

        let raw_slippage = self
            .slippage_tolerance
            .unwrap_or_else(|| DEFAULT_SLIPPAGE_TOLERANCE.to_string());
        let slippage_tolerance = Decimal::from_str(raw_slippage.trim())
            .map_err(|_| IntentBuildError::InvalidSlippage(raw_slippage.clone()))?;
        if slippage_tolerance.is_sign_negative() || slippage_tolerance > Decimal::ONE_HUNDRED {
            return Err(IntentBuildError::InvalidSlippage(raw_slippage));
        }

        if let Some(portion) = &self.portion {
            if portion.bips > BPS {
                return Err(IntentBuildError::InvalidPortion(portion.bips));
            }
        }

        Ok(TradeIntent {
            request_id: self
                .request_id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            token_in_chain_id,
            token_out_chain_id,
            token_in,
            token_out,
            amount,
            trade_type,
            swapper: normalize_address(self.swapper.as_deref().unwrap_or(NATIVE_ADDRESS)),
            slippage_tolerance: slippage_tolerance.normalize(),
            send_portion_enabled: self.send_portion_enabled,
            portion: self.portion,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IntentBuildError {
    #[error("missing chain id")]
    MissingChainId,
    #[error("missing input token")]
    MissingTokenIn,
    #[error("missing output token")]
    MissingTokenOut,
    #[error("missing amount")]
    MissingAmount,
    #[error("missing trade type")]
    MissingTradeType,
    #[error("amount must be greater than zero")]
    ZeroAmount,
    #[error("input and output token are the same: {0}")]
    SameToken(String),
    #[error("invalid slippage tolerance: {0}")]
    InvalidSlippage(String),
    #[error("portion bips out of range: {0}")]
    InvalidPortion(u64),
}
