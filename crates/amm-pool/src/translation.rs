//! Derives the `(sqrt(P), transX, transY)` curve translation for a ranged
//! pool. Grounded on `original_source/x/liquidity/amm/pool.go`'s
//! `DeriveTranslation`.

use amm_types::{FixedDec, Int};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub sqrt_price: FixedDec,
    pub trans_x: FixedDec,
    pub trans_y: FixedDec
}

/// Derives the translated-curve parameters for reserves `(rx, ry)` bounded by
/// `[min_price, max_price]`. Returns `None` if the square roots involved are
/// degenerate (e.g. a negative radicand, which should not occur for a
/// validly-bounded price range but is guarded against regardless since this
/// runs through [`amm_types::safe_math::safe_math`] at the call site).
pub fn derive_translation(rx: &Int, ry: &Int, min_price: &FixedDec, max_price: &FixedDec) -> Option<Translation> {
    let sqrt_m = min_price.approx_sqrt()?;
    let sqrt_l = max_price.approx_sqrt()?;

    let rx_dec = FixedDec::from_int(rx);
    let ry_dec = FixedDec::from_int(ry);

    let sqrt_price = if rx.is_zero() {
        sqrt_m.clone()
    } else if ry.is_zero() {
        sqrt_l.clone()
    } else {
        let x_over_y = rx_dec.quo_truncate(&ry_dec);
        if x_over_y.is_zero() {
            sqrt_l.clone()
        } else {
            let sqrt_x_over_y = x_over_y.approx_sqrt()?;
            if sqrt_x_over_y.is_zero() {
                sqrt_l.clone()
            } else {
                let alpha = sqrt_m.quo(&sqrt_x_over_y).sub(&sqrt_x_over_y.quo(&sqrt_l));
                let discriminant = alpha.mul(&alpha).add(&FixedDec::from_i64(4));
                let sqrt_disc = discriminant.approx_sqrt()?;
                let numerator = alpha.add(&sqrt_disc);
                numerator.quo(&FixedDec::from_i64(2)).mul(&sqrt_x_over_y)
            }
        }
    };

    if !sqrt_price.is_positive() {
        return None;
    }

    let denom_x = sqrt_price.sub(&sqrt_m);
    let candidate_k_from_x =
        if denom_x.is_positive() { Some(rx_dec.quo(&denom_x)) } else { None };

    let inv_price = FixedDec::one().quo(&sqrt_price);
    let inv_l = FixedDec::one().quo(&sqrt_l);
    let denom_y = inv_price.sub(&inv_l);
    let candidate_k_from_y =
        if denom_y.is_positive() { Some(ry_dec.quo(&denom_y)) } else { None };

    let sqrt_k = match (candidate_k_from_x, candidate_k_from_y) {
        (Some(kx), Some(ky)) => {
            let price_sq = sqrt_price.mul(&sqrt_price);
            let dist_x = kx.mul(&kx).sub(&price_sq).abs();
            let dist_y = ky.mul(&ky).sub(&price_sq).abs();
            if dist_x <= dist_y { kx } else { ky }
        }
        (Some(kx), None) => kx,
        (None, Some(ky)) => ky,
        (None, None) => return None
    };

    let trans_x = sqrt_k.mul(&sqrt_m);
    let trans_y = sqrt_k.quo(&sqrt_l);

    Some(Translation { sqrt_price, trans_x, trans_y })
}
