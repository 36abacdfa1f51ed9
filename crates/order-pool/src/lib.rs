pub mod lifecycle;
pub mod request;
pub mod submit;
pub mod translate;

pub use lifecycle::prune_expired;
pub use request::{DepositRequest, MMOrder, RequestStatus, SwapRequest, WithdrawRequest};
pub use submit::populate_book;
pub use translate::{is_too_small_order_amount, mm_order_ticks, price_limits};
