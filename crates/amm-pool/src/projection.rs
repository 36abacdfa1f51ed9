//! Projects a pool's depth into a sequence of synthetic limit orders walking
//! outward from the pool price, tick by tick, up to a tick-count cap. Grounded
//! on `original_source/x/liquidity/amm/pool.go`'s `PoolOrders` /
//! `PoolBuyOrders` / `PoolSellOrders`.
//!
//! `original_source/` references a `poolOrderPriceGapRatio(poolPrice, tick)`
//! helper whose definition was not present among the retrieved files. The
//! constants below (`DEFAULT_GAP`, `GAP_ADJUSTMENT`) are this crate's own
//! choice standing in for that helper, documented in DESIGN.md: the gap ratio
//! widens linearly with the relative distance from the pool price, so ticks
//! immediately next to the pool price are skipped less aggressively than
//! ticks far from it, keeping the projected book from flooding the nearest
//! few ticks with near-duplicate orders.

use amm_types::{FixedDec, Int, OrderDirection, Order, Orderer, TickGrid};

use crate::pool::Pool;

const DEFAULT_GAP: &str = "0.0003";
const GAP_ADJUSTMENT: &str = "0.07";

fn gap_ratio(pool_price: &FixedDec, tick: &FixedDec) -> FixedDec {
    let default_gap: FixedDec = DEFAULT_GAP.parse().expect("valid literal");
    let adjustment: FixedDec = GAP_ADJUSTMENT.parse().expect("valid literal");
    let relative = tick.sub(pool_price).abs().quo(pool_price).mul(&adjustment);
    if relative > default_gap { relative } else { default_gap }
}

/// Projects buy-side orders (bids) from `pool`'s price down to the lowest
/// tick on `grid`, capped at `max_num_ticks` orders. Each order's amount is
/// the marginal amount needed to move the pool price from the previous tick
/// to the next one.
pub fn pool_buy_orders<P: Pool>(pool: &P, grid: &TickGrid, max_num_ticks: usize, orderer: &impl Orderer) -> Vec<Order> {
    if pool.is_depleted() {
        return Vec::new();
    }
    let pool_price = pool.price();
    let mut orders = Vec::new();
    let mut cursor = pool_price.clone();
    let mut cumulative = Int::zero();
    for _ in 0..max_num_ticks {
        if cursor <= grid.lowest_tick() {
            break;
        }
        let gap = gap_ratio(&pool_price, &cursor);
        let next = grid.down_tick(&cursor).max(grid.lowest_tick());
        let step_ratio = FixedDec::one().sub(&gap);
        let candidate = cursor.mul(&step_ratio);
        let tick = if candidate < next { next.clone() } else { grid.round_price(&candidate) };
        if tick >= cursor {
            break;
        }
        let total_to_tick = pool.buy_amount_to(&tick);
        let marginal = total_to_tick.checked_sub(&cumulative).unwrap_or_else(Int::zero);
        if marginal.is_positive() {
            orders.push(orderer.order(OrderDirection::Buy, tick.clone(), marginal.clone()));
            cumulative = total_to_tick;
        }
        cursor = tick;
    }
    orders
}

/// Mirror of [`pool_buy_orders`] for the sell side (asks), walking upward to
/// the highest tick.
pub fn pool_sell_orders<P: Pool>(pool: &P, grid: &TickGrid, max_num_ticks: usize, orderer: &impl Orderer) -> Vec<Order> {
    if pool.is_depleted() {
        return Vec::new();
    }
    let pool_price = pool.price();
    let mut orders = Vec::new();
    let mut cursor = pool_price.clone();
    let mut cumulative = Int::zero();
    for _ in 0..max_num_ticks {
        if cursor >= grid.highest_tick() {
            break;
        }
        let gap = gap_ratio(&pool_price, &cursor);
        let next = grid.up_tick(&cursor).min(grid.highest_tick());
        let step_ratio = FixedDec::one().add(&gap);
        let candidate = cursor.mul(&step_ratio);
        let tick = if candidate > next { next.clone() } else { grid.round_price(&candidate) };
        if tick <= cursor {
            break;
        }
        let total_to_tick = pool.sell_amount_to(&tick);
        let marginal = total_to_tick.checked_sub(&cumulative).unwrap_or_else(Int::zero);
        if marginal.is_positive() {
            orders.push(orderer.order(OrderDirection::Sell, tick.clone(), marginal.clone()));
            cumulative = total_to_tick;
        }
        cursor = tick;
    }
    orders
}

#[cfg(test)]
mod tests {
    use amm_types::DefaultOrderer;

    use super::*;
    use crate::basic::BasicPool;

    #[test]
    fn projects_descending_buy_ticks() {
        let pool = BasicPool::new(Int::from_u64(1_000_000), Int::from_u64(1_000_000), Int::from_u64(1000));
        let grid = TickGrid::new(4);
        let orderer = DefaultOrderer::new(grid);
        let orders = pool_buy_orders(&pool, &grid, 5, &orderer);
        assert!(!orders.is_empty());
        for pair in orders.windows(2) {
            assert!(pair[0].price() > pair[1].price());
        }
    }

    #[test]
    fn projects_ascending_sell_ticks() {
        let pool = BasicPool::new(Int::from_u64(1_000_000), Int::from_u64(1_000_000), Int::from_u64(1000));
        let grid = TickGrid::new(4);
        let orderer = DefaultOrderer::new(grid);
        let orders = pool_sell_orders(&pool, &grid, 5, &orderer);
        assert!(!orders.is_empty());
        for pair in orders.windows(2) {
            assert!(pair[0].price() < pair[1].price());
        }
    }

    #[test]
    fn depleted_pool_has_no_projection() {
        let pool = BasicPool::new(Int::zero(), Int::zero(), Int::zero());
        let grid = TickGrid::new(4);
        let orderer = DefaultOrderer::new(grid);
        assert!(pool_buy_orders(&pool, &grid, 5, &orderer).is_empty());
        assert!(pool_sell_orders(&pool, &grid, 5, &orderer).is_empty());
    }
}
