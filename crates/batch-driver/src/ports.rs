//! Port traits the driver depends on but does not implement: bank transfers,
//! state persistence, and batch scheduling. Production call sites adapt these
//! to their ledger/chain; this crate ships only the in-memory reference
//! implementations used by its own tests (see [`crate::memory`]).

use amm_pool::PoolKind;
use amm_types::FixedDec;

use crate::error::BatchResult;

/// Moves coins between accounts. Mirrors the capability the original
/// `shogun` liquidity module borrows from `x/bank`'s `BankKeeper`.
pub trait BankPort {
    fn send_coins(&mut self, from: &str, to: &str, denom: &str, amount: &amm_types::Int) -> BatchResult<()>;

    /// A single multi-input/multi-output transfer, used by
    /// [`crate::bulk_send::BulkSendCoinsOperation`] to settle an entire
    /// batch in one call.
    fn input_output_coins(
        &mut self,
        inputs: &[(String, String, amm_types::Int)],
        outputs: &[(String, String, amm_types::Int)],
        denom: &str
    ) -> BatchResult<()>;
}

/// Persists per-pair pool state and the last clearing price across batches.
pub trait Store {
    fn get_pool(&self, pair_id: u64) -> Option<PoolKind>;
    fn set_pool(&mut self, pair_id: u64, pool: PoolKind);
    fn get_last_price(&self, pair_id: u64) -> Option<FixedDec>;
    fn set_last_price(&mut self, pair_id: u64, price: FixedDec);
}

/// Tells the driver which batch is currently executing, so expiry counters
/// and logging can reference an absolute height instead of an opaque tick.
pub trait Scheduler {
    fn current_batch_height(&self) -> u64;
}
