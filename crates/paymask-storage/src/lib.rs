//! # Paymask Storage
//!
//! Persistence for submitted payments.
//!
//! A submission is stored as the wire record the form sends (card number
//! without grouping spaces, `MM/YYYY` expiry, CVV and the amount as a
//! re-stringified number) and identified by a generated request id that is
//! echoed back to the submitter.
//!
//! Two stores implement [`PaymentStore`]:
//!
//! - [`SqlitePaymentStore`]: SQLite via SQLx with a pooled [`Database`]
//!   and migrations embedded at compile time
//! - [`InMemoryPaymentStore`]: a `HashMap` behind an async `RwLock`
//!
//! # Examples
//!
//! ```no_run
//! use paymask_core::PaymentFields;
//! use paymask_storage::{Database, DatabaseConfig, PaymentStore, SqlitePaymentStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new(DatabaseConfig::new("paymask.db")).await?;
//! let store = SqlitePaymentStore::new(db.pool().clone());
//!
//! let fields = PaymentFields {
//!     card_number: "1234123412341234".to_string(),
//!     expiration_date: "01/2099".to_string(),
//!     cvv: "123".to_string(),
//!     amount: "50".to_string(),
//! };
//!
//! let id = store.insert(&fields).await?;
//! assert!(store.find(&id).await?.is_some());
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{Database, DatabaseConfig};
pub use error::{StorageError, StorageResult};
pub use models::PaymentRecord;
pub use repositories::{InMemoryPaymentStore, PaymentStore, SqlitePaymentStore};
