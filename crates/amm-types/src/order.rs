//! The core `Order` type and the `Orderer` that constructs tick-aligned
//! orders for it. Shared across `amm-pool` (pool projection), `order-pool`
//! (user request translation) and `matching-engine` (book/match) so none of
//! those crates need to depend on each other just to talk about an order.

use crate::direction::OrderDirection;
use crate::fixed_dec::FixedDec;
use crate::int::Int;
use crate::tick_grid::TickGrid;

/// A single limit order, either a genuine user order or a synthetic
/// pool-projection slice. `open_amount` starts equal to `original_amount` and
/// is only ever decreased, during a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    direction: OrderDirection,
    price: FixedDec,
    original_amount: Int,
    open_amount: Int,
    paid: Int,
    received: Int,
    matched: bool
}

impl Order {
    pub fn new(direction: OrderDirection, price: FixedDec, amount: Int) -> Self {
        Self {
            direction,
            price,
            original_amount: amount.clone(),
            open_amount: amount,
            paid: Int::zero(),
            received: Int::zero(),
            matched: false
        }
    }

    pub fn direction(&self) -> OrderDirection {
        self.direction
    }

    pub fn price(&self) -> &FixedDec {
        &self.price
    }

    pub fn original_amount(&self) -> &Int {
        &self.original_amount
    }

    pub fn open_amount(&self) -> &Int {
        &self.open_amount
    }

    pub fn paid(&self) -> &Int {
        &self.paid
    }

    pub fn received(&self) -> &Int {
        &self.received
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Applies a fill of `amount` at `clearing_price`, per SPEC_FULL.md §4.7
    /// step 3/4: buys pay ceil(price*amount) and receive the base coin;
    /// sells pay the base coin and receive truncate(price*amount).
    pub fn apply_fill(&mut self, amount: Int, clearing_price: &FixedDec) {
        debug_assert!(amount.as_integer() <= self.open_amount.as_integer());
        match self.direction {
            OrderDirection::Buy => {
                let quote = clearing_price.mul(&FixedDec::from_int(&amount)).ceil();
                self.paid = (&self.paid) + (&quote);
                self.received = (&self.received) + (&amount);
            }
            OrderDirection::Sell => {
                let quote = clearing_price.mul(&FixedDec::from_int(&amount)).truncate_to_int();
                self.paid = (&self.paid) + (&amount);
                self.received = (&self.received) + (&quote);
            }
        }
        self.open_amount = self.open_amount.checked_sub(&amount).expect("fill exceeds open amount");
        self.matched = true;
    }
}

/// Factory for tick-aligned orders: every `Order` placed in the system,
/// user-submitted or pool-projected, is constructed through one of these so
/// the `OrderBook` invariant ("prices are already tick-aligned") holds by
/// construction.
pub trait Orderer {
    fn order(&self, direction: OrderDirection, price: FixedDec, amount: Int) -> Order;
}

/// The only `Orderer` implementation needed by the core: rounds the price to
/// the nearest tick before constructing the order.
#[derive(Copy, Clone, Debug)]
pub struct DefaultOrderer {
    grid: TickGrid
}

impl DefaultOrderer {
    pub fn new(grid: TickGrid) -> Self {
        Self { grid }
    }
}

impl Orderer for DefaultOrderer {
    fn order(&self, direction: OrderDirection, price: FixedDec, amount: Int) -> Order {
        Order::new(direction, self.grid.round_price(&price), amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_fill_ceils_paid_amount() {
        let mut o = Order::new(OrderDirection::Buy, "0.9999".parse().unwrap(), Int::from_u64(1000));
        o.apply_fill(Int::from_u64(1000), &"0.9999".parse().unwrap());
        assert!(o.is_matched());
        assert_eq!(o.received(), &Int::from_u64(1000));
        // 0.9999 * 1000 = 999.9 -> ceil = 1000
        assert_eq!(o.paid(), &Int::from_u64(1000));
    }

    #[test]
    fn sell_fill_truncates_received_amount() {
        let mut o = Order::new(OrderDirection::Sell, "0.9999".parse().unwrap(), Int::from_u64(1000));
        o.apply_fill(Int::from_u64(1000), &"0.9999".parse().unwrap());
        assert_eq!(o.paid(), &Int::from_u64(1000));
        // 0.9999 * 1000 = 999.9 -> truncate = 999
        assert_eq!(o.received(), &Int::from_u64(999));
    }
}
