//! Deposit/withdraw math and initial pool-coin-supply derivation. Grounded on
//! `original_source/x/liquidity/amm/pool.go`'s free functions `Deposit`,
//! `Withdraw` and `InitialPoolCoinSupply`.

use amm_types::{FixedDec, Int, safe_math};
use malachite::num::arithmetic::traits::Pow;

/// `c = ceil((digits(x) + digits(y)) / 2)`, returns `10^c`. Chooses an initial
/// pool-coin supply with roughly half the combined digit-width of the two
/// reserves, so pool-coin amounts stay in a comfortable integer range.
pub fn initial_pool_coin_supply(x: &Int, y: &Int) -> Int {
    fn digits(v: &Int) -> u32 {
        if v.is_zero() { 1 } else { v.as_integer().to_string().len() as u32 }
    }
    let c = (digits(x) + digits(y)).div_ceil(2);
    Int::from_integer_unchecked(malachite::Integer::from(10).pow(c as u64))
}

/// Computes the coins a depositor owes and the pool coins they receive for
/// depositing up to `(x, y)` into a pool with reserves `(rx, ry)` and supply
/// `ps`. Returns `(ax, ay, pc)`. Falls back to `(0, 0, 0)` if the math is
/// degenerate (e.g. a zero-reserve pool with no counterpart in x or y).
pub fn deposit(rx: &Int, ry: &Int, ps: &Int, x: &Int, y: &Int) -> (Int, Int, Int) {
    safe_math(
        "deposit",
        || {
            let rx_dec = FixedDec::from_int(rx);
            let ry_dec = FixedDec::from_int(ry);
            let x_dec = FixedDec::from_int(x);
            let y_dec = FixedDec::from_int(y);

            let ratio = if rx.is_zero() && ry.is_zero() {
                return None;
            } else if rx.is_zero() {
                y_dec.quo_truncate(&ry_dec)
            } else if ry.is_zero() {
                x_dec.quo_truncate(&rx_dec)
            } else {
                let rx_ratio = x_dec.quo_truncate(&rx_dec);
                let ry_ratio = y_dec.quo_truncate(&ry_dec);
                if rx_ratio < ry_ratio { rx_ratio } else { ry_ratio }
            };
            if !ratio.is_positive() {
                return None;
            }

            let ps_dec = FixedDec::from_int(ps);
            let pc = ps_dec.mul_truncate(&ratio).truncate_to_int();
            if pc.is_zero() {
                return None;
            }

            let mint_proportion = FixedDec::from_int(&pc).quo_truncate(&ps_dec);
            let ax = rx_dec.mul(&mint_proportion).ceil();
            let ay = ry_dec.mul(&mint_proportion).ceil();
            Some((ax, ay, pc))
        },
        || (Int::zero(), Int::zero(), Int::zero())
    )
}

/// Computes the coins returned for redeeming `pc` of `ps` total pool coins
/// from a pool with reserves `(rx, ry)`, net of `fee_rate`. Returns `(x, y)`.
/// A full-supply redemption (`pc == ps`) bypasses the fee and the rounding,
/// returning the exact reserves so the pool can be fully drained.
pub fn withdraw(rx: &Int, ry: &Int, ps: &Int, pc: &Int, fee_rate: &FixedDec) -> (Int, Int) {
    if pc == ps {
        return (rx.clone(), ry.clone());
    }
    safe_math(
        "withdraw",
        || {
            if ps.is_zero() {
                return None;
            }
            let proportion = FixedDec::from_int(pc).quo_truncate(&FixedDec::from_int(ps));
            let multiplier = FixedDec::one().sub(fee_rate);
            let x = FixedDec::from_int(rx).mul_truncate(&proportion).mul_truncate(&multiplier).truncate_to_int();
            let y = FixedDec::from_int(ry).mul_truncate(&proportion).mul_truncate(&multiplier).truncate_to_int();
            Some((x, y))
        },
        || (Int::zero(), Int::zero())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> FixedDec {
        s.parse().unwrap()
    }

    /// SPEC_FULL.md §8 scenario 4.
    #[test]
    fn deposit_rounds_conservatively() {
        let (ax, ay, pc) =
            deposit(&Int::from_u64(222), &Int::from_u64(333), &Int::from_u64(333), &Int::from_u64(100), &Int::from_u64(100));
        assert_eq!(ax, Int::from_u64(66));
        assert_eq!(ay, Int::from_u64(99));
        assert_eq!(pc, Int::from_u64(99));
    }

    /// SPEC_FULL.md §8 scenario 5: full-supply withdraw bypasses fee.
    #[test]
    fn withdraw_all_bypasses_fee() {
        let (x, y) =
            withdraw(&Int::from_u64(123), &Int::from_u64(567), &Int::from_u64(10), &Int::from_u64(10), &dec("0.003"));
        assert_eq!(x, Int::from_u64(123));
        assert_eq!(y, Int::from_u64(567));
    }

    #[test]
    fn initial_supply_is_half_combined_digits() {
        // digits(1_000_000) == 7 each, c = ceil(14/2) = 7 -> 10^7.
        assert_eq!(
            initial_pool_coin_supply(&Int::from_u64(1_000_000), &Int::from_u64(1_000_000)),
            Int::from_u64(10_000_000)
        );
    }
}
