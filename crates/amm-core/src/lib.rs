//! Single-dependency re-export of the workspace's public surface.
//!
//! Callers that want the whole AMM stack — fixed-point arithmetic, pool
//! curves, the batch matcher, order-pool request types, and the batch
//! driver — without pinning each crate separately can depend on this one
//! instead. The individual crates remain independently usable.

pub use amm_pool as pool;
pub use amm_types as types;
pub use amm_utils as utils;
pub use batch_driver as batch;
pub use matching_engine as matching;
pub use order_pool as orders;

pub use amm_pool::{BasicPool, Pool, PoolKind, RangedPool, pool_buy_orders, pool_sell_orders};
pub use amm_types::{Error, FixedDec, Int, Order, OrderDirection, Result, TickGrid};
pub use batch_driver::{BankPort, BatchDriver, BatchError, BatchResult, Params, Scheduler, Store};
pub use matching_engine::{MatchEngine, MatchOutcome, OrderBook};
pub use order_pool::{DepositRequest, MMOrder, RequestStatus, SwapRequest, WithdrawRequest};
