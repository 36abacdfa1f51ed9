//! Batch-to-batch lifecycle bookkeeping for swap requests: a swap that
//! doesn't fully match within its allotted number of batches expires rather
//! than sitting in the book forever.

use crate::request::{RequestStatus, SwapRequest};

/// Decrements `batches_remaining` on every still-pending swap, expiring any
/// that reach zero. Returns the number of requests expired this call.
pub fn prune_expired(swaps: &mut [SwapRequest]) -> usize {
    let mut expired = 0;
    for swap in swaps.iter_mut() {
        if swap.status != RequestStatus::Pending {
            continue;
        }
        if swap.batches_remaining == 0 {
            swap.status = RequestStatus::Expired;
            expired += 1;
            continue;
        }
        swap.batches_remaining -= 1;
        if swap.batches_remaining == 0 {
            swap.status = RequestStatus::Expired;
            expired += 1;
        }
    }
    expired
}
