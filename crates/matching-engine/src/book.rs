//! An in-memory limit order book for a single pair. Orders are kept in
//! insertion order; sorted views are produced on demand with a stable sort so
//! ties at the same price always resolve price-time priority (first in,
//! first filled).

use amm_types::{FixedDec, Order, OrderDirection};

#[derive(Clone, Debug, Default)]
pub struct OrderBook {
    buys: Vec<Order>,
    sells: Vec<Order>
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, order: Order) {
        match order.direction() {
            OrderDirection::Buy => self.buys.push(order),
            OrderDirection::Sell => self.sells.push(order)
        }
    }

    pub fn extend(&mut self, orders: impl IntoIterator<Item = Order>) {
        for order in orders {
            self.push(order);
        }
    }

    pub fn buys(&self) -> &[Order] {
        &self.buys
    }

    pub fn sells(&self) -> &[Order] {
        &self.sells
    }

    pub fn buys_mut(&mut self) -> &mut [Order] {
        &mut self.buys
    }

    pub fn sells_mut(&mut self) -> &mut [Order] {
        &mut self.sells
    }

    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }

    /// Indices into `buys()`, sorted price descending, insertion order as tie-break.
    pub fn buy_priority(&self) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..self.buys.len()).collect();
        idx.sort_by(|&a, &b| self.buys[b].price().cmp(self.buys[a].price()));
        idx
    }

    /// Indices into `sells()`, sorted price ascending, insertion order as tie-break.
    pub fn sell_priority(&self) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..self.sells.len()).collect();
        idx.sort_by(|&a, &b| self.sells[a].price().cmp(self.sells[b].price()));
        idx
    }

    pub fn best_buy_price(&self) -> Option<&FixedDec> {
        self.buys.iter().map(Order::price).max()
    }

    pub fn best_sell_price(&self) -> Option<&FixedDec> {
        self.sells.iter().map(Order::price).min()
    }
}

#[cfg(test)]
mod tests {
    use amm_types::Int;

    use super::*;

    fn dec(s: &str) -> FixedDec {
        s.parse().unwrap()
    }

    #[test]
    fn priority_orders_by_price_then_insertion() {
        let mut book = OrderBook::new();
        book.push(Order::new(OrderDirection::Buy, dec("1.0"), Int::from_u64(1)));
        book.push(Order::new(OrderDirection::Buy, dec("1.2"), Int::from_u64(1)));
        book.push(Order::new(OrderDirection::Buy, dec("1.0"), Int::from_u64(1)));
        let order = book.buy_priority();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn best_prices_reflect_book_extremes() {
        let mut book = OrderBook::new();
        book.push(Order::new(OrderDirection::Buy, dec("1.0"), Int::from_u64(1)));
        book.push(Order::new(OrderDirection::Buy, dec("1.2"), Int::from_u64(1)));
        book.push(Order::new(OrderDirection::Sell, dec("1.5"), Int::from_u64(1)));
        book.push(Order::new(OrderDirection::Sell, dec("1.3"), Int::from_u64(1)));
        assert_eq!(book.best_buy_price(), Some(&dec("1.2")));
        assert_eq!(book.best_sell_price(), Some(&dec("1.3")));
    }
}
