use std::fmt;
use std::ops::{Add, Mul, Sub};

use malachite::Integer;
use malachite::num::basic::traits::Zero;

/// A non-negative, arbitrary-precision coin amount.
///
/// Backed by [`malachite::Integer`] rather than a fixed-width integer so that
/// intermediate pool math never overflows; callers that need the
/// `MAX_COIN_AMOUNT` ceiling go through [`crate::safe_math::SafeMath`], not
/// through this type directly.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(Integer);

impl Int {
    pub fn zero() -> Self {
        Self(Integer::ZERO)
    }

    pub fn from_u64(v: u64) -> Self {
        Self(Integer::from(v))
    }

    pub fn from_integer_unchecked(v: Integer) -> Self {
        debug_assert!(v >= Integer::ZERO, "Int must be non-negative");
        Self(v)
    }

    pub fn as_integer(&self) -> &Integer {
        &self.0
    }

    pub fn into_integer(self) -> Integer {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == Integer::ZERO
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Integer::ZERO
    }

    /// Saturating subtraction: never goes below zero.
    pub fn saturating_sub(&self, rhs: &Self) -> Self {
        if self.0 <= rhs.0 { Self::zero() } else { Self(&self.0 - &rhs.0) }
    }

    /// Checked subtraction: `None` if the result would be negative.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self.0 < rhs.0 { None } else { Some(Self(&self.0 - &rhs.0)) }
    }

    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }

    pub fn max(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }

    /// Clamp to `[0, bound]`.
    pub fn clamp_to(self, bound: &Self) -> Self {
        if &self.0 > bound.as_integer() { bound.clone() } else { self }
    }
}

impl Add for Int {
    type Output = Int;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Int> for &Int {
    type Output = Int;

    fn add(self, rhs: &Int) -> Self::Output {
        Int(&self.0 + &rhs.0)
    }
}

impl Mul for Int {
    type Output = Int;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Int> for &Int {
    type Output = Int;

    fn mul(self, rhs: &Int) -> Self::Output {
        Int(&self.0 * &rhs.0)
    }
}

impl Sub for Int {
    type Output = Int;

    /// Panics on underflow; use [`Int::checked_sub`] or
    /// [`Int::saturating_sub`] when the sign is not already known to be
    /// non-negative.
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).expect("Int subtraction underflow")
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Int {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Int {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Int {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>
    {
        use std::str::FromStr;
        let s = String::deserialize(deserializer)?;
        let inner = Integer::from_str(&s).map_err(serde::de::Error::custom)?;
        Ok(Self::from_integer_unchecked(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_sub_floors_at_zero() {
        let a = Int::from_u64(5);
        let b = Int::from_u64(10);
        assert!(a.saturating_sub(&b).is_zero());
    }

    #[test]
    fn checked_sub_detects_underflow() {
        let a = Int::from_u64(5);
        let b = Int::from_u64(10);
        assert!(a.checked_sub(&b).is_none());
    }
}
