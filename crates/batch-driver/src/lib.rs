pub mod bulk_send;
pub mod driver;
pub mod error;
pub mod memory;
pub mod params;
pub mod ports;

pub use bulk_send::BulkSendCoinsOperation;
pub use driver::BatchDriver;
pub use error::{BatchError, BatchResult};
pub use memory::{CountingScheduler, LedgerBank, MemoryStore};
pub use params::Params;
pub use ports::{BankPort, Scheduler, Store};
