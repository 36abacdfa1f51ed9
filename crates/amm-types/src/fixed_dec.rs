//! Signed, 18-fractional-digit decimal backed by an arbitrary-precision integer.
//!
//! Mirrors the shape of the teacher's `Ray` newtype (a precision-bearing integer
//! wrapped with explicit rounding-mode conversions), but base-10 with 18
//! fractional digits instead of base-2 `U256` with a 1e27 scale, matching
//! `cosmossdk.io/math.LegacyDec`'s semantics as exercised by the original
//! `shogun` liquidity module.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use malachite::Integer;
use malachite::num::arithmetic::traits::Pow;
use malachite::num::basic::traits::Zero;
use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::int::Int;

/// Number of digits kept after the decimal point.
pub const FRACTIONAL_DIGITS: u32 = 18;

static SCALE: Lazy<Integer> = Lazy::new(|| Integer::from(10).pow(FRACTIONAL_DIGITS as u64));

fn div_trunc(num: &Integer, den: &Integer) -> Integer {
    (num / den).into()
}

fn div_floor(num: &Integer, den: &Integer) -> Integer {
    let q = num / den;
    let r = num - &q * den;
    if r != Integer::ZERO && (r < Integer::ZERO) != (*den < Integer::ZERO) {
        q - Integer::from(1)
    } else {
        q
    }
}

fn div_ceil(num: &Integer, den: &Integer) -> Integer {
    let q = num / den;
    let r = num - &q * den;
    if r != Integer::ZERO && (r < Integer::ZERO) == (*den < Integer::ZERO) {
        q + Integer::from(1)
    } else {
        q
    }
}

/// Round half away from zero.
fn div_half_up(num: &Integer, den: &Integer) -> Integer {
    let den_neg = *den < Integer::ZERO;
    let num_neg = *num < Integer::ZERO;
    let den_abs = if den_neg { -den.clone() } else { den.clone() };
    let num_abs = if num_neg { -num.clone() } else { num.clone() };
    let q = &num_abs / &den_abs;
    let r = &num_abs - &q * &den_abs;
    let q = if &r * Integer::from(2) >= den_abs { q + Integer::from(1) } else { q };
    if num_neg != den_neg { -q } else { q }
}

fn pow10(exp: u32) -> Integer {
    Integer::from(10).pow(exp as u64)
}

fn initial_sqrt_guess(n: &Integer) -> Integer {
    if *n <= Integer::ZERO {
        return Integer::ZERO;
    }
    let digits = n.to_string().trim_start_matches('-').len() as u32;
    let guess_digits = digits.div_ceil(2).max(1);
    pow10(guess_digits)
}

/// Fixed Newton-iteration cap so `approx_sqrt` is bit-for-bit deterministic
/// regardless of host (SPEC_FULL.md §9: "Determinism").
const SQRT_MAX_ITERS: u32 = 128;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedDec(Integer);

impl FixedDec {
    pub fn zero() -> Self {
        Self(Integer::ZERO)
    }

    pub fn one() -> Self {
        Self(SCALE.clone())
    }

    /// Constructs `10^exp` as a `FixedDec`. Only exact for `exp >= -FRACTIONAL_DIGITS`.
    pub fn from_pow10(exp: i32) -> Self {
        if exp >= 0 {
            Self(pow10(exp as u32) * &*SCALE)
        } else {
            let shift = (-exp) as u32;
            debug_assert!(shift <= FRACTIONAL_DIGITS);
            Self(div_trunc(&SCALE, &pow10(shift)))
        }
    }

    pub fn from_scaled_integer(raw: Integer) -> Self {
        Self(raw)
    }

    pub fn scaled(&self) -> &Integer {
        &self.0
    }

    pub fn from_int(i: &Int) -> Self {
        Self(i.as_integer() * &*SCALE)
    }

    pub fn from_i64(v: i64) -> Self {
        Self(Integer::from(v) * &*SCALE)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Integer::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Integer::ZERO
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Integer::ZERO
    }

    pub fn add(&self, other: &Self) -> Self {
        Self(&self.0 + &other.0)
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self(&self.0 - &other.0)
    }

    pub fn neg(&self) -> Self {
        Self(-self.0.clone())
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() { self.neg() } else { self.clone() }
    }

    /// Rounds half-up, matching `cosmossdk.io/math.LegacyDec.Mul`.
    pub fn mul(&self, other: &Self) -> Self {
        let prod = &self.0 * &other.0;
        Self(div_half_up(&prod, &SCALE))
    }

    pub fn mul_truncate(&self, other: &Self) -> Self {
        let prod = &self.0 * &other.0;
        Self(div_trunc(&prod, &SCALE))
    }

    /// Rounds half-up, matching `LegacyDec.Quo`.
    pub fn quo(&self, other: &Self) -> Self {
        let num = &self.0 * &*SCALE;
        Self(div_half_up(&num, &other.0))
    }

    pub fn quo_truncate(&self, other: &Self) -> Self {
        let num = &self.0 * &*SCALE;
        Self(div_trunc(&num, &other.0))
    }

    /// Rounds away from zero unconditionally (not just on a tie).
    pub fn quo_round_up(&self, other: &Self) -> Self {
        let num = &self.0 * &*SCALE;
        let q = div_trunc(&num, &other.0);
        let r = &num - &q * &other.0;
        if r == Integer::ZERO {
            Self(q)
        } else if (r < Integer::ZERO) == (other.0 < Integer::ZERO) {
            Self(q + Integer::from(1))
        } else {
            Self(q - Integer::from(1))
        }
    }

    /// Rounds `self` up to the nearest whole unit and returns it as an [`Int`].
    pub fn ceil(&self) -> Int {
        Int::from_integer_unchecked(div_ceil(&self.0, &SCALE))
    }

    pub fn floor_to_int(&self) -> Int {
        Int::from_integer_unchecked(div_floor(&self.0, &SCALE))
    }

    /// Truncates toward zero and returns the integer part as an [`Int`].
    pub fn truncate_to_int(&self) -> Int {
        Int::from_integer_unchecked(div_trunc(&self.0, &SCALE))
    }

    pub fn power(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            if exp > 1 {
                base = base.mul(&base);
            }
            exp >>= 1;
        }
        result
    }

    /// Newton's-method square root with a fixed iteration cap and tolerance,
    /// so the result is bit-for-bit identical across hosts. Returns `None` for
    /// negative inputs.
    pub fn approx_sqrt(&self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        if self.is_zero() {
            return Some(Self::zero());
        }
        // sqrt(self) scaled by 10^18 == sqrt(self.0 * 10^18)
        let target = &self.0 * &*SCALE;
        let mut x = initial_sqrt_guess(&target);
        if x == Integer::ZERO {
            x = Integer::from(1);
        }
        for _ in 0..SQRT_MAX_ITERS {
            let next = (&x + div_trunc(&target, &x)) / Integer::from(2);
            let diff = if next > x { &next - &x } else { &x - &next };
            x = next;
            if diff <= Integer::from(1) {
                break;
            }
        }
        Some(Self(x))
    }

    pub fn from_str_decimal(s: &str) -> Result<Self> {
        let s = s.trim();
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s.strip_prefix('+').unwrap_or(s))
        };
        let mut parts = rest.splitn(2, '.');
        let int_part = parts.next().unwrap_or("0");
        let frac_part = parts.next().unwrap_or("");
        if parts.next().is_some() || int_part.is_empty() && frac_part.is_empty() {
            return Err(Error::ParseDecimal(s.to_string()));
        }
        let int_val: Integer = if int_part.is_empty() {
            Integer::ZERO
        } else {
            Integer::from_str(int_part).map_err(|_| Error::ParseDecimal(s.to_string()))?
        };
        if frac_part.len() as u32 > FRACTIONAL_DIGITS {
            return Err(Error::ParseDecimal(format!(
                "{s} has more than {FRACTIONAL_DIGITS} fractional digits"
            )));
        }
        let pad = FRACTIONAL_DIGITS - frac_part.len() as u32;
        let frac_val: Integer = if frac_part.is_empty() {
            Integer::ZERO
        } else {
            Integer::from_str(frac_part).map_err(|_| Error::ParseDecimal(s.to_string()))?
        };
        let scaled = int_val * &*SCALE + frac_val * pow10(pad);
        Ok(Self(Integer::from(sign) * scaled))
    }
}

impl PartialOrd for FixedDec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedDec {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for FixedDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neg = self.is_negative();
        let abs = self.abs().0;
        let int_part = div_trunc(&abs, &SCALE);
        let frac_part = &abs - &int_part * &*SCALE;
        write!(
            f,
            "{}{}.{:0width$}",
            if neg { "-" } else { "" },
            int_part,
            frac_part,
            width = FRACTIONAL_DIGITS as usize
        )
    }
}

impl FromStr for FixedDec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_decimal(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FixedDec {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FixedDec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str_decimal(&s).map_err(serde::de::Error::custom)
    }
}
