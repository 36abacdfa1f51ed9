//! Bridges pending requests into the matching engine's order book.

use amm_types::{DefaultOrderer, Orderer, TickGrid};
use matching_engine::OrderBook;

use crate::request::{RequestStatus, SwapRequest};

/// Appends every still-pending swap request to `book`, rounding each price to
/// the nearest tick via a fresh [`DefaultOrderer`] so the book's
/// tick-alignment invariant holds regardless of what price the requester
/// originally submitted.
pub fn populate_book(book: &mut OrderBook, swaps: &[SwapRequest], grid: TickGrid) {
    let orderer = DefaultOrderer::new(grid);
    for swap in swaps {
        if swap.status != RequestStatus::Pending {
            continue;
        }
        book.push(orderer.order(swap.direction, swap.price.clone(), swap.amount.clone()));
    }
}

#[cfg(test)]
mod tests {
    use amm_types::{Int, OrderDirection};

    use super::*;

    #[test]
    fn only_pending_swaps_enter_the_book() {
        let mut book = OrderBook::new();
        let grid = TickGrid::new(4);
        let swaps = vec![
            SwapRequest {
                pair_id: 1,
                orderer: "a".into(),
                direction: OrderDirection::Buy,
                price: "1.0".parse().unwrap(),
                amount: Int::from_u64(100),
                batches_remaining: 3,
                status: RequestStatus::Pending
            },
            SwapRequest {
                pair_id: 1,
                orderer: "b".into(),
                direction: OrderDirection::Sell,
                price: "1.0".parse().unwrap(),
                amount: Int::from_u64(50),
                batches_remaining: 3,
                status: RequestStatus::Completed
            },
        ];
        populate_book(&mut book, &swaps, grid);
        assert_eq!(book.buys().len(), 1);
        assert_eq!(book.sells().len(), 0);
    }
}
