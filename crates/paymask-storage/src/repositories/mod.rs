pub mod memory;
pub mod payment;

pub use memory::InMemoryPaymentStore;
pub use payment::{PaymentStore, SqlitePaymentStore};
