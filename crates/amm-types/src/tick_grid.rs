//! Base-10 logarithmic price grid.
//!
//! For a positive price `p`, with `e = floor(log10(p))`, the tick spacing at
//! `p` is `10^(e - k + 1)` where `k` is the tick precision (number of
//! significant digits per decade). This file has no direct Go counterpart in
//! `original_source/` (the retrieved pack does not include `tick.go`), so the
//! construction below follows the formula in `SPEC_FULL.md` §4.1 directly,
//! working entirely in scaled integers so every operation is exact and
//! deterministic.

use malachite::Integer;
use malachite::num::basic::traits::One;

use crate::constants::{MAX_POOL_PRICE, MIN_POOL_PRICE};
use crate::fixed_dec::FixedDec;

fn div_floor(num: &Integer, den: &Integer) -> Integer {
    let q = num / den;
    let r = num - &q * den;
    if r != Integer::from(0) && (r < Integer::from(0)) != (*den < Integer::from(0)) {
        q - Integer::from(1)
    } else {
        q
    }
}

fn div_ceil(num: &Integer, den: &Integer) -> Integer {
    let q = num / den;
    let r = num - &q * den;
    if r != Integer::from(0) && (r < Integer::from(0)) == (*den < Integer::from(0)) {
        q + Integer::from(1)
    } else {
        q
    }
}

fn div_half_up(num: &Integer, den: &Integer) -> Integer {
    let den_neg = *den < Integer::from(0);
    let num_neg = *num < Integer::from(0);
    let den_abs = if den_neg { -den.clone() } else { den.clone() };
    let num_abs = if num_neg { -num.clone() } else { num.clone() };
    let q = &num_abs / &den_abs;
    let r = &num_abs - &q * &den_abs;
    let q = if &r * Integer::from(2) >= den_abs { q + Integer::from(1) } else { q };
    if num_neg != den_neg { -q } else { q }
}

/// `floor(log10(p))`, computed exactly from `p`'s scaled-integer digit count.
fn floor_log10(p: &FixedDec) -> i32 {
    let raw = p.scaled();
    debug_assert!(*raw > Integer::from(0), "log10 of a non-positive price");
    let digits = raw.to_string().trim_start_matches('-').len() as i32;
    (digits - 1) - crate::fixed_dec::FRACTIONAL_DIGITS as i32
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickGrid {
    precision: u32
}

impl TickGrid {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    fn tick_unit_raw(&self, e: i32) -> Integer {
        FixedDec::from_pow10(e - self.precision as i32 + 1).scaled().clone()
    }

    /// Ceiling of `p` onto the grid.
    pub fn price_to_up_tick(&self, p: &FixedDec) -> FixedDec {
        let e = floor_log10(p);
        let unit = self.tick_unit_raw(e);
        let raw = p.scaled();
        FixedDec::from_scaled_integer(div_ceil(raw, &unit) * unit)
    }

    /// Floor of `p` onto the grid.
    pub fn price_to_down_tick(&self, p: &FixedDec) -> FixedDec {
        let e = floor_log10(p);
        let unit = self.tick_unit_raw(e);
        let raw = p.scaled();
        FixedDec::from_scaled_integer(div_floor(raw, &unit) * unit)
    }

    /// Smallest tick strictly greater than `p`.
    pub fn up_tick(&self, p: &FixedDec) -> FixedDec {
        let just_above = FixedDec::from_scaled_integer(p.scaled() + Integer::ONE);
        self.price_to_up_tick(&just_above)
    }

    /// Largest tick strictly less than `p`.
    pub fn down_tick(&self, p: &FixedDec) -> FixedDec {
        let just_below = FixedDec::from_scaled_integer(p.scaled() - Integer::ONE);
        self.price_to_down_tick(&just_below)
    }

    /// Nearest tick, ties away from zero.
    pub fn round_price(&self, p: &FixedDec) -> FixedDec {
        let e = floor_log10(p);
        let unit = self.tick_unit_raw(e);
        let raw = p.scaled();
        FixedDec::from_scaled_integer(div_half_up(raw, &unit) * unit)
    }

    pub fn lowest_tick(&self) -> FixedDec {
        MIN_POOL_PRICE.clone()
    }

    pub fn highest_tick(&self) -> FixedDec {
        MAX_POOL_PRICE.clone()
    }
}
