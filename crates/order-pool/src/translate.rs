//! Request-translation helpers: limit-amount screening, price-limit
//! derivation and market-making order tick-splitting. Grounded on
//! `original_source/x/liquidity/types/util.go`'s `IsTooSmallOrderAmount`,
//! `PriceLimits` and `MMOrderTicks`.

use amm_types::{FixedDec, Int, MAX_POOL_PRICE, MIN_COIN_AMOUNT, MIN_POOL_PRICE, OrderDirection, TickGrid};

/// An order is too small to be worth matching if either its base-coin amount
/// or its quote-coin value (`price * amount`) falls below
/// [`amm_types::MIN_COIN_AMOUNT`].
pub fn is_too_small_order_amount(amount: &Int, price: &FixedDec) -> bool {
    if amount < &*MIN_COIN_AMOUNT {
        return true;
    }
    let quote_value = price.mul(&FixedDec::from_int(amount)).truncate_to_int();
    quote_value < *MIN_COIN_AMOUNT
}

/// Derives `[min_price, max_price]` around `last_price`, widened by `ratio`
/// on each side and snapped outward to the tick grid so the limits always
/// sit on tradable ticks, then clamped to the global price bounds.
pub fn price_limits(last_price: &FixedDec, ratio: &FixedDec, grid: &TickGrid) -> (FixedDec, FixedDec) {
    let one = FixedDec::one();
    let lower = if ratio >= &one { FixedDec::zero() } else { last_price.mul(&one.sub(ratio)) };
    let upper = last_price.mul(&one.add(ratio));

    let min_price = if lower.is_positive() { grid.price_to_down_tick(&lower) } else { MIN_POOL_PRICE.clone() };
    let max_price = grid.price_to_up_tick(&upper);

    let min_price = if min_price < *MIN_POOL_PRICE { MIN_POOL_PRICE.clone() } else { min_price };
    let max_price = if max_price > *MAX_POOL_PRICE { MAX_POOL_PRICE.clone() } else { max_price };
    (min_price, max_price)
}

/// Splits a market-making order of `amount` into individual tick-level
/// amounts spanning `[min_price, max_price]`, at most `max_num_ticks` ticks.
/// Adjacent duplicate ticks (can occur if the range is narrower than the
/// grid spacing) are merged. Any remainder from the even split is folded
/// into the outermost tick (the one farthest from `min_price` for a buy
/// order's walk, or equivalently the last tick produced) since that is
/// already the widest, least price-sensitive slice of the order.
pub fn mm_order_ticks(
    direction: OrderDirection,
    min_price: &FixedDec,
    max_price: &FixedDec,
    amount: &Int,
    max_num_ticks: u32,
    grid: &TickGrid
) -> Vec<(FixedDec, Int)> {
    if min_price >= max_price || max_num_ticks == 0 || amount.is_zero() {
        return Vec::new();
    }

    let mut ticks = Vec::new();
    let mut cursor = min_price.clone();
    ticks.push(cursor.clone());
    while &cursor < max_price && (ticks.len() as u32) < max_num_ticks {
        let next = grid.up_tick(&cursor);
        if next >= *max_price {
            break;
        }
        cursor = next.clone();
        ticks.push(next);
    }
    if *ticks.last().expect("non-empty") != *max_price {
        ticks.push(max_price.clone());
    }
    ticks.dedup();
    if (ticks.len() as u32) > max_num_ticks {
        ticks.truncate(max_num_ticks as usize);
    }

    let count = ticks.len();
    let per_tick = FixedDec::from_int(amount).quo_truncate(&FixedDec::from_i64(count as i64)).truncate_to_int();
    let distributed = &per_tick * &Int::from_u64(count as u64 - 1);
    let remainder = amount.checked_sub(&distributed).unwrap_or_else(Int::zero);

    let mut result: Vec<(FixedDec, Int)> = ticks.into_iter().map(|t| (t, per_tick.clone())).collect();
    // The outermost tick (farthest from where the order is likely to fill
    // first) absorbs the truncation remainder: for a buy that is the
    // lowest tick, for a sell the highest.
    let outermost = match direction {
        OrderDirection::Buy => result.first_mut(),
        OrderDirection::Sell => result.last_mut()
    };
    if let Some(slot) = outermost {
        slot.1 = remainder;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> FixedDec {
        s.parse().unwrap()
    }

    #[test]
    fn small_amount_is_flagged() {
        assert!(is_too_small_order_amount(&Int::from_u64(1), &dec("1.0")));
        assert!(!is_too_small_order_amount(&Int::from_u64(1_000), &dec("1.0")));
    }

    #[test]
    fn price_limits_widen_and_clamp() {
        let grid = TickGrid::new(4);
        let (min_price, max_price) = price_limits(&dec("1.0"), &dec("0.1"), &grid);
        assert!(min_price < dec("1.0"));
        assert!(max_price > dec("1.0"));
    }

    #[test]
    fn mm_order_ticks_sum_to_total_amount() {
        let grid = TickGrid::new(4);
        let ticks = mm_order_ticks(OrderDirection::Buy, &dec("0.9"), &dec("1.1"), &Int::from_u64(10_000), 5, &grid);
        assert!(!ticks.is_empty());
        let total = ticks.iter().fold(Int::zero(), |acc, (_, amt)| &acc + amt);
        assert_eq!(total, Int::from_u64(10_000));
    }
}
