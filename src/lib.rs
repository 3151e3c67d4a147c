pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod export;
pub mod interest;
pub mod ledger;
pub mod rates;
pub mod statement;
pub mod types;

// re-export key types
pub use config::StatementConfig;
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use events::{Event, EventStore};
pub use ledger::{DepositLot, LedgerEngine};
pub use rates::{MarginTier, TierSchedule};
pub use statement::{SeriesPoint, Statement, StatementRow, Totals};
pub use types::{EntryKind, LotId, Transaction, TransactionKind};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
