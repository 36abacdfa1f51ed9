//! Pair-level configuration, validated once at construction. Grounded on
//! `original_source/x/liquidity/types/params.go`'s `Params.Validate`.

use amm_types::FixedDec;
use serde::{Deserialize, Serialize};

use crate::error::{BatchError, BatchResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Number of batches a swap request survives before expiring unmatched.
    pub batch_size: u32,
    /// Number of significant decimal digits per price decade.
    pub tick_precision: u32,
    /// Fee deducted from a `Withdraw`, expressed as a `FixedDec` in `[0, 1)`.
    pub fee_rate: FixedDec,
    /// Maximum fraction the swap price band may move away from the last
    /// clearing price in a single batch, in `(0, 1)`.
    pub max_price_limit_ratio: FixedDec,
    /// Upper bound on how many ticks a single market-making order may span.
    pub max_num_market_making_order_ticks: u32,
    /// Minimum allowed `(max_price - min_price) / min_price` for a ranged
    /// pool, strictly positive.
    pub min_ranged_pool_price_gap_ratio: FixedDec
}

impl Params {
    pub fn validate(&self) -> BatchResult<()> {
        if self.batch_size == 0 {
            return Err(BatchError::InvalidParams("batch_size must be greater than zero".into()));
        }
        if !(1..=18).contains(&self.tick_precision) {
            return Err(BatchError::InvalidParams("tick_precision must be between 1 and 18".into()));
        }
        if self.fee_rate.is_negative() || self.fee_rate >= FixedDec::one() {
            return Err(BatchError::InvalidParams("fee_rate must be in [0, 1)".into()));
        }
        if !self.max_price_limit_ratio.is_positive() || self.max_price_limit_ratio >= FixedDec::one() {
            return Err(BatchError::InvalidParams("max_price_limit_ratio must be in (0, 1)".into()));
        }
        if self.max_num_market_making_order_ticks < 1 {
            return Err(BatchError::InvalidParams(
                "max_num_market_making_order_ticks must be at least 1".into()
            ));
        }
        if !self.min_ranged_pool_price_gap_ratio.is_positive() {
            return Err(BatchError::InvalidParams("min_ranged_pool_price_gap_ratio must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> FixedDec {
        s.parse().unwrap()
    }

    fn valid_params() -> Params {
        Params {
            batch_size: 10,
            tick_precision: 4,
            fee_rate: dec("0.003"),
            max_price_limit_ratio: dec("0.1"),
            max_num_market_making_order_ticks: 10,
            min_ranged_pool_price_gap_ratio: dec("0.01")
        }
    }

    #[test]
    fn accepts_well_formed_params() {
        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn rejects_zero_batch_size() {
        let mut p = valid_params();
        p.batch_size = 0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_fee_rate_of_one() {
        let mut p = valid_params();
        p.fee_rate = dec("1.0");
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_tick_precision() {
        let mut p = valid_params();
        p.tick_precision = 19;
        assert!(p.validate().is_err());
    }
}
