//! BasicPool: full-range constant-product pool. Grounded on
//! `original_source/x/liquidity/amm/pool.go`'s `BasicPool`.

use amm_types::{FixedDec, Int, MAX_COIN_AMOUNT, MAX_POOL_PRICE, MIN_POOL_PRICE, safe_math};

use crate::deposit_withdraw::initial_pool_coin_supply;
use crate::pool::Pool;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicPool {
    rx: Int,
    ry: Int,
    ps: Int
}

fn clamp(price: &FixedDec, lo: &FixedDec, hi: &FixedDec) -> FixedDec {
    if price < lo {
        lo.clone()
    } else if price > hi {
        hi.clone()
    } else {
        price.clone()
    }
}

impl BasicPool {
    pub fn new(rx: Int, ry: Int, ps: Int) -> Self {
        Self { rx, ry, ps }
    }

    /// Validates the create-time price bound and derives the initial pool
    /// coin supply. Per DESIGN.md's Open Question decision, this validation
    /// never runs again after construction — `set_balances` does not
    /// re-check it, matching the source's `BasicPool.SetBalances`.
    pub fn create(rx: Int, ry: Int) -> Result<Self, amm_types::Error> {
        if rx.is_zero() || ry.is_zero() {
            return Err(amm_types::Error::InvalidPoolParams(
                "cannot create basic pool with zero reserve amount".into()
            ));
        }
        let price = FixedDec::from_int(&rx).quo(&FixedDec::from_int(&ry));
        if price < *MIN_POOL_PRICE {
            return Err(amm_types::Error::InvalidPoolParams(format!(
                "pool price is lower than min price {}",
                *MIN_POOL_PRICE
            )));
        }
        if price > *MAX_POOL_PRICE {
            return Err(amm_types::Error::InvalidPoolParams(format!(
                "pool price is greater than max price {}",
                *MAX_POOL_PRICE
            )));
        }
        let ps = initial_pool_coin_supply(&rx, &ry);
        Ok(Self::new(rx, ry, ps))
    }
}

impl Pool for BasicPool {
    fn balances(&self) -> (Int, Int) {
        (self.rx.clone(), self.ry.clone())
    }

    fn set_balances(&mut self, rx: Int, ry: Int, _derive: bool) {
        self.rx = rx;
        self.ry = ry;
    }

    fn pool_coin_supply(&self) -> &Int {
        &self.ps
    }

    fn price(&self) -> FixedDec {
        assert!(!self.is_depleted(), "pool price is not defined for a depleted pool");
        FixedDec::from_int(&self.rx).quo(&FixedDec::from_int(&self.ry))
    }

    fn is_depleted(&self) -> bool {
        self.ps.is_zero() || self.rx.is_zero() || self.ry.is_zero()
    }

    fn buy_amount_over(&self, price: &FixedDec) -> Int {
        let orig_price = price.clone();
        let price = clamp(price, &MIN_POOL_PRICE, &MAX_POOL_PRICE);
        if price >= self.price() {
            return Int::zero();
        }
        let dx = FixedDec::from_int(&self.rx).sub(&price.mul(&FixedDec::from_int(&self.ry)));
        if !dx.is_positive() {
            return Int::zero();
        }
        safe_math(
            "basic_pool::buy_amount_over",
            || {
                if orig_price.is_zero() {
                    return None;
                }
                let amt = dx.quo_truncate(&orig_price).truncate_to_int();
                Some(amt.clamp_to(&MAX_COIN_AMOUNT))
            },
            || MAX_COIN_AMOUNT.clone()
        )
    }

    fn sell_amount_under(&self, price: &FixedDec) -> Int {
        let price = clamp(price, &MIN_POOL_PRICE, &MAX_POOL_PRICE);
        if price <= self.price() {
            return Int::zero();
        }
        let amt = FixedDec::from_int(&self.ry)
            .sub(&FixedDec::from_int(&self.rx).quo_round_up(&price))
            .truncate_to_int();
        if !amt.is_positive() { Int::zero() } else { amt }
    }

    fn buy_amount_to(&self, price: &FixedDec) -> Int {
        let orig_price = price.clone();
        let price = clamp(price, &MIN_POOL_PRICE, &MAX_POOL_PRICE);
        if price >= self.price() {
            return Int::zero();
        }
        let sqrt_rx = match FixedDec::from_int(&self.rx).approx_sqrt() {
            Some(v) => v,
            None => return Int::zero()
        };
        let sqrt_ry = match FixedDec::from_int(&self.ry).approx_sqrt() {
            Some(v) => v,
            None => return Int::zero()
        };
        let sqrt_price = match price.approx_sqrt() {
            Some(v) => v,
            None => return Int::zero()
        };
        let dx = FixedDec::from_int(&self.rx).sub(&sqrt_price.mul(&sqrt_rx.mul(&sqrt_ry)));
        if !dx.is_positive() {
            return Int::zero();
        }
        safe_math(
            "basic_pool::buy_amount_to",
            || {
                if orig_price.is_zero() {
                    return None;
                }
                let amt = dx.quo_truncate(&orig_price).truncate_to_int();
                Some(amt.clamp_to(&MAX_COIN_AMOUNT))
            },
            || MAX_COIN_AMOUNT.clone()
        )
    }

    fn sell_amount_to(&self, price: &FixedDec) -> Int {
        let price = clamp(price, &MIN_POOL_PRICE, &MAX_POOL_PRICE);
        if price <= self.price() {
            return Int::zero();
        }
        let sqrt_rx = match FixedDec::from_int(&self.rx).approx_sqrt() {
            Some(v) => v,
            None => return Int::zero()
        };
        let sqrt_ry = match FixedDec::from_int(&self.ry).approx_sqrt() {
            Some(v) => v,
            None => return Int::zero()
        };
        let sqrt_price = match price.approx_sqrt() {
            Some(v) => v,
            None => return Int::zero()
        };
        let amt = FixedDec::from_int(&self.ry).sub(&sqrt_rx.mul(&sqrt_ry).quo(&sqrt_price)).truncate_to_int();
        if !amt.is_positive() { Int::zero() } else { amt }
    }
}

#[cfg(test)]
mod tests {
    use malachite::num::arithmetic::traits::Pow;

    use super::*;

    fn dec(s: &str) -> FixedDec {
        s.parse().unwrap()
    }

    /// SPEC_FULL.md §8 scenario 3.
    #[test]
    fn basic_pool_projection_scenario() {
        let pool = BasicPool::new(Int::from_u64(1_000_000), Int::from_u64(1_000_000), Int::zero());
        assert_eq!(pool.buy_amount_over(&dec("0.9")), Int::from_u64(111_111));
        assert_eq!(pool.sell_amount_under(&dec("1.1")), Int::from_u64(90_909));
        assert_eq!(pool.buy_amount_to(&dec("0.5")), Int::from_u64(585_786));
        assert_eq!(pool.sell_amount_to(&dec("1.5")), Int::from_u64(183_503));
    }

    /// SPEC_FULL.md §8 scenario 7: overflow saturates to MAX_COIN_AMOUNT.
    #[test]
    fn overflow_saturates() {
        let rx = Int::from_integer_unchecked(malachite::Integer::from(10i64).pow(43));
        let ry = Int::from_u64(1000);
        let pool = BasicPool::new(rx, ry, Int::zero());
        let grid = amm_types::TickGrid::new(4);
        let lowest = grid.lowest_tick();
        assert_eq!(pool.buy_amount_over(&lowest), MAX_COIN_AMOUNT.clone());
    }
}
