//! Module-wide numeric bounds shared by every pool/matching component.

use malachite::Integer;
use malachite::num::arithmetic::traits::Pow;
use once_cell::sync::Lazy;

use crate::fixed_dec::{FRACTIONAL_DIGITS, FixedDec};
use crate::int::Int;

/// Smallest price a pool or order may quote at: `10^-15`.
pub static MIN_POOL_PRICE: Lazy<FixedDec> = Lazy::new(|| FixedDec::from_pow10(-15));

/// Largest price a pool or order may quote at: `10^20`.
pub static MAX_POOL_PRICE: Lazy<FixedDec> = Lazy::new(|| FixedDec::from_pow10(20));

/// Upper bound on any coin amount tracked by the core: `10^40`.
pub static MAX_COIN_AMOUNT: Lazy<Int> =
    Lazy::new(|| Int::from_integer_unchecked(Integer::from(10).pow(40)));

/// Orders/projection slices below this amount are not worth matching.
pub static MIN_COIN_AMOUNT: Lazy<Int> = Lazy::new(|| Int::from_u64(100));

/// Default tick precision (`k` in the tick-grid formula) when a pair does not
/// override it via `Params`.
pub const DEFAULT_TICK_PRECISION: u32 = 4;

/// Number of decimal digits `FixedDec` carries after the point.
pub const DECIMAL_DIGITS: u32 = FRACTIONAL_DIGITS;
