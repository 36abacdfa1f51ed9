pub mod constants;
pub mod direction;
pub mod error;
pub mod fixed_dec;
pub mod int;
pub mod order;
pub mod safe_math;
pub mod tick_grid;

pub use constants::{
    DEFAULT_TICK_PRECISION, MAX_COIN_AMOUNT, MAX_POOL_PRICE, MIN_COIN_AMOUNT, MIN_POOL_PRICE
};
pub use direction::OrderDirection;
pub use error::{Error, Result};
pub use fixed_dec::FixedDec;
pub use int::Int;
pub use order::{DefaultOrderer, Order, Orderer};
pub use safe_math::safe_math;
pub use tick_grid::TickGrid;
