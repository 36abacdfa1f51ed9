use thiserror::Error;

/// Crate-wide error type for the AMM core.
///
/// Arithmetic failures never appear here: they are absorbed by [`crate::safe_math::SafeMath`]
/// before they could reach a caller (see `SPEC_FULL.md` §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid pool parameters: {0}")]
    InvalidPoolParams(String),

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("pool is depleted and cannot be queried for price")]
    DepletedPool,

    #[error("failed to parse decimal: {0}")]
    ParseDecimal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
