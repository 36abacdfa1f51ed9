//! User-submitted request types and their lifecycle status. Grounded on
//! `original_source/x/liquidity/types/`'s deposit/withdraw/swap/MM order
//! message shapes, translated into the core's `Order`/`Int`/`FixedDec`
//! vocabulary instead of chain messages.

use amm_types::{FixedDec, Int, OrderDirection};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Completed,
    Expired,
    Canceled
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub pair_id: u64,
    pub depositor: String,
    pub x_offered: Int,
    pub y_offered: Int,
    pub status: RequestStatus
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub pair_id: u64,
    pub withdrawer: String,
    pub pool_coin: Int,
    pub status: RequestStatus
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub pair_id: u64,
    pub orderer: String,
    pub direction: OrderDirection,
    pub price: FixedDec,
    pub amount: Int,
    pub batches_remaining: u32,
    pub status: RequestStatus
}

/// A single market-making order submitted by a designated market maker,
/// spanning the range `[min_price, max_price]` split into ticks by
/// [`crate::translate::mm_order_ticks`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MMOrder {
    pub pair_id: u64,
    pub orderer: String,
    pub direction: OrderDirection,
    pub min_price: FixedDec,
    pub max_price: FixedDec,
    pub amount: Int,
    pub status: RequestStatus
}
