pub mod backup;
pub mod change;
pub mod config;
pub mod error;
pub mod history;
pub mod io;
pub mod ledger;
pub mod markdown;
pub mod paths;
pub mod prompt;
pub mod report;
pub mod store;
pub mod types;

pub use error::{LedgerError, Result};
pub use ledger::Ledger;
pub use store::{FileStore, MemoryStore, RecordStore};
