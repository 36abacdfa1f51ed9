//! Batches many small transfers into one bank call. Grounded on
//! `original_source/x/liquidity/types/util.go`'s `BulkSendCoinsOperation`:
//! queue every `(from, to, amount)` triple for the batch, merge the ones
//! that share a `(from, to)` pair, then settle everything in a single
//! `input_output_coins` call instead of one bank message per order.

use std::collections::BTreeMap;

use amm_types::Int;

use crate::error::BatchResult;
use crate::ports::BankPort;

#[derive(Default)]
pub struct BulkSendCoinsOperation {
    denom: String,
    queued: BTreeMap<(String, String), Int>
}

impl BulkSendCoinsOperation {
    pub fn new(denom: impl Into<String>) -> Self {
        Self { denom: denom.into(), queued: BTreeMap::new() }
    }

    /// Queues a transfer. Repeated calls with the same `(from, to)` pair
    /// accumulate into a single merged amount rather than producing separate
    /// ledger entries.
    pub fn queue_send_coins(&mut self, from: &str, to: &str, amount: Int) {
        if amount.is_zero() {
            return;
        }
        self.queued
            .entry((from.to_string(), to.to_string()))
            .and_modify(|existing| *existing = &*existing + &amount)
            .or_insert(amount);
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    /// Issues exactly one [`BankPort::input_output_coins`] call covering
    /// every queued transfer, then clears the queue.
    pub fn run(&mut self, bank: &mut impl BankPort) -> BatchResult<()> {
        if self.queued.is_empty() {
            return Ok(());
        }
        let inputs: Vec<(String, String, Int)> =
            self.queued.iter().map(|((from, to), amt)| (from.clone(), to.clone(), amt.clone())).collect();
        // Inputs and outputs are the same triples here: each entry already
        // names both sides of the transfer, so the "multi-send" degenerates
        // to a list of direct transfers batched into one call.
        let outputs = inputs.clone();
        bank.input_output_coins(&inputs, &outputs, &self.denom)?;
        self.queued.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap as Map;

    use super::*;

    struct RecordingBank {
        calls: Vec<(Vec<(String, String, Int)>, String)>
    }

    impl BankPort for RecordingBank {
        fn send_coins(&mut self, _from: &str, _to: &str, _denom: &str, _amount: &Int) -> BatchResult<()> {
            Ok(())
        }

        fn input_output_coins(
            &mut self,
            inputs: &[(String, String, Int)],
            _outputs: &[(String, String, Int)],
            denom: &str
        ) -> BatchResult<()> {
            self.calls.push((inputs.to_vec(), denom.to_string()));
            Ok(())
        }
    }

    #[test]
    fn merges_repeated_transfers_and_settles_once() {
        let mut op = BulkSendCoinsOperation::new("uquote");
        op.queue_send_coins("alice", "pool", Int::from_u64(100));
        op.queue_send_coins("bob", "pool", Int::from_u64(50));
        op.queue_send_coins("alice", "pool", Int::from_u64(25));
        let mut bank = RecordingBank { calls: Vec::new() };
        op.run(&mut bank).unwrap();

        assert_eq!(bank.calls.len(), 1);
        let (inputs, denom) = &bank.calls[0];
        assert_eq!(denom, "uquote");
        let amounts: Map<_, _> =
            inputs.iter().map(|(from, to, amt)| ((from.clone(), to.clone()), amt.clone())).collect();
        assert_eq!(amounts[&("alice".to_string(), "pool".to_string())], Int::from_u64(125));
        assert_eq!(amounts[&("bob".to_string(), "pool".to_string())], Int::from_u64(50));
        assert!(op.is_empty());
    }

    #[test]
    fn empty_queue_issues_no_call() {
        let mut op = BulkSendCoinsOperation::new("uquote");
        let mut bank = RecordingBank { calls: Vec::new() };
        op.run(&mut bank).unwrap();
        assert!(bank.calls.is_empty());
    }
}
