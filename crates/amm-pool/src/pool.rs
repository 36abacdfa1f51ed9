use amm_types::{FixedDec, Int};

/// Capability set shared by every pool variant (SPEC_FULL.md §3 "Pool
/// (abstract)"). Implemented as a tagged enum (`PoolKind`) rather than a
/// trait object so `Clone` always returns the same variant, per DESIGN NOTES
/// "Polymorphism over pool variants".
pub trait Pool: Clone {
    /// `(rx, ry)`: quote-coin and base-coin reserves.
    fn balances(&self) -> (Int, Int);

    /// Replaces the reserves. `derive` only matters for `RangedPool`: when
    /// true the translation is recomputed from the new reserves; when false
    /// it is preserved (used by projection, which walks a frozen curve).
    fn set_balances(&mut self, rx: Int, ry: Int, derive: bool);

    fn pool_coin_supply(&self) -> &Int;

    /// Panics if the pool is depleted; callers must check [`Pool::is_depleted`]
    /// first (SPEC_FULL.md §7: a depleted-pool price query is a precondition
    /// violation, not a recoverable error).
    fn price(&self) -> FixedDec;

    fn is_depleted(&self) -> bool;

    fn highest_buy_price(&self) -> Option<FixedDec> {
        if self.is_depleted() { None } else { Some(self.price()) }
    }

    fn lowest_sell_price(&self) -> Option<FixedDec> {
        if self.is_depleted() { None } else { Some(self.price()) }
    }

    fn buy_amount_over(&self, price: &FixedDec) -> Int;
    fn sell_amount_under(&self, price: &FixedDec) -> Int;
    fn buy_amount_to(&self, price: &FixedDec) -> Int;
    fn sell_amount_to(&self, price: &FixedDec) -> Int;
}
