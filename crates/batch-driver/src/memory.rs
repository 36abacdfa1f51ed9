//! In-memory reference implementations of the driver's ports, used by this
//! crate's own tests. Not meant for production use: a real deployment swaps
//! these for chain-backed adapters.

use std::collections::HashMap;

use amm_pool::PoolKind;
use amm_types::FixedDec;

use crate::error::{BatchError, BatchResult};
use crate::ports::{BankPort, Scheduler, Store};

#[derive(Default)]
pub struct MemoryStore {
    pools: HashMap<u64, PoolKind>,
    last_prices: HashMap<u64, FixedDec>
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get_pool(&self, pair_id: u64) -> Option<PoolKind> {
        self.pools.get(&pair_id).cloned()
    }

    fn set_pool(&mut self, pair_id: u64, pool: PoolKind) {
        self.pools.insert(pair_id, pool);
    }

    fn get_last_price(&self, pair_id: u64) -> Option<FixedDec> {
        self.last_prices.get(&pair_id).cloned()
    }

    fn set_last_price(&mut self, pair_id: u64, price: FixedDec) {
        self.last_prices.insert(pair_id, price);
    }
}

/// Tracks per-account balances keyed by `(account, denom)`. Transfers from an
/// account with insufficient balance fail rather than going negative.
#[derive(Default)]
pub struct LedgerBank {
    balances: HashMap<(String, String), amm_types::Int>
}

impl LedgerBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credit(&mut self, account: &str, denom: &str, amount: amm_types::Int) {
        self.balances
            .entry((account.to_string(), denom.to_string()))
            .and_modify(|b| *b = &*b + &amount)
            .or_insert(amount);
    }

    pub fn balance(&self, account: &str, denom: &str) -> amm_types::Int {
        self.balances.get(&(account.to_string(), denom.to_string())).cloned().unwrap_or_else(amm_types::Int::zero)
    }
}

impl BankPort for LedgerBank {
    fn send_coins(&mut self, from: &str, to: &str, denom: &str, amount: &amm_types::Int) -> BatchResult<()> {
        let key = (from.to_string(), denom.to_string());
        let current = self.balances.get(&key).cloned().unwrap_or_else(amm_types::Int::zero);
        let remaining = current
            .checked_sub(amount)
            .ok_or_else(|| BatchError::BankTransfer(format!("{from} has insufficient {denom} balance")))?;
        self.balances.insert(key, remaining);
        self.credit(to, denom, amount.clone());
        Ok(())
    }

    fn input_output_coins(
        &mut self,
        inputs: &[(String, String, amm_types::Int)],
        _outputs: &[(String, String, amm_types::Int)],
        denom: &str
    ) -> BatchResult<()> {
        for (from, to, amount) in inputs {
            self.send_coins(from, to, denom, amount)?;
        }
        Ok(())
    }
}

/// Scheduler that just counts up every time the driver asks for the current
/// height; fine for tests, where batches run back to back.
#[derive(Default)]
pub struct CountingScheduler {
    height: std::cell::Cell<u64>
}

impl CountingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self) {
        self.height.set(self.height.get() + 1);
    }
}

impl Scheduler for CountingScheduler {
    fn current_batch_height(&self) -> u64 {
        self.height.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_bank_rejects_overdraft() {
        let mut bank = LedgerBank::new();
        bank.credit("alice", "uquote", amm_types::Int::from_u64(10));
        let err = bank.send_coins("alice", "pool", "uquote", &amm_types::Int::from_u64(20));
        assert!(err.is_err());
    }

    #[test]
    fn ledger_bank_moves_balance_on_success() {
        let mut bank = LedgerBank::new();
        bank.credit("alice", "uquote", amm_types::Int::from_u64(10));
        bank.send_coins("alice", "pool", "uquote", &amm_types::Int::from_u64(10)).unwrap();
        assert!(bank.balance("alice", "uquote").is_zero());
        assert_eq!(bank.balance("pool", "uquote"), amm_types::Int::from_u64(10));
    }
}
