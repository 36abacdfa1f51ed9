pub mod basic;
pub mod deposit_withdraw;
pub mod kind;
pub mod pool;
pub mod projection;
pub mod ranged;
pub mod translation;

pub use basic::BasicPool;
pub use deposit_withdraw::{deposit, initial_pool_coin_supply, withdraw};
pub use kind::PoolKind;
pub use pool::Pool;
pub use projection::{pool_buy_orders, pool_sell_orders};
pub use ranged::RangedPool;
pub use translation::{Translation, derive_translation};
