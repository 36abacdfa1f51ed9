//! Tagged-enum dispatch over the two pool variants. A `Box<dyn Pool>` would
//! lose `Clone` (object-safety requires `Self: Sized` for `Clone`), and pool
//! snapshots are cloned constantly during projection, so variants are
//! dispatched explicitly instead.

use amm_types::{FixedDec, Int};

use crate::basic::BasicPool;
use crate::pool::Pool;
use crate::ranged::RangedPool;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolKind {
    Basic(BasicPool),
    Ranged(RangedPool)
}

impl Pool for PoolKind {
    fn balances(&self) -> (Int, Int) {
        match self {
            Self::Basic(p) => p.balances(),
            Self::Ranged(p) => p.balances()
        }
    }

    fn set_balances(&mut self, rx: Int, ry: Int, derive: bool) {
        match self {
            Self::Basic(p) => p.set_balances(rx, ry, derive),
            Self::Ranged(p) => p.set_balances(rx, ry, derive)
        }
    }

    fn pool_coin_supply(&self) -> &Int {
        match self {
            Self::Basic(p) => p.pool_coin_supply(),
            Self::Ranged(p) => p.pool_coin_supply()
        }
    }

    fn price(&self) -> FixedDec {
        match self {
            Self::Basic(p) => p.price(),
            Self::Ranged(p) => p.price()
        }
    }

    fn is_depleted(&self) -> bool {
        match self {
            Self::Basic(p) => p.is_depleted(),
            Self::Ranged(p) => p.is_depleted()
        }
    }

    fn buy_amount_over(&self, price: &FixedDec) -> Int {
        match self {
            Self::Basic(p) => p.buy_amount_over(price),
            Self::Ranged(p) => p.buy_amount_over(price)
        }
    }

    fn sell_amount_under(&self, price: &FixedDec) -> Int {
        match self {
            Self::Basic(p) => p.sell_amount_under(price),
            Self::Ranged(p) => p.sell_amount_under(price)
        }
    }

    fn buy_amount_to(&self, price: &FixedDec) -> Int {
        match self {
            Self::Basic(p) => p.buy_amount_to(price),
            Self::Ranged(p) => p.buy_amount_to(price)
        }
    }

    fn sell_amount_to(&self, price: &FixedDec) -> Int {
        match self {
            Self::Basic(p) => p.sell_amount_to(price),
            Self::Ranged(p) => p.sell_amount_to(price)
        }
    }
}

impl From<BasicPool> for PoolKind {
    fn from(p: BasicPool) -> Self {
        Self::Basic(p)
    }
}

impl From<RangedPool> for PoolKind {
    fn from(p: RangedPool) -> Self {
        Self::Ranged(p)
    }
}
