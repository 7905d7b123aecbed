//! Trade record management: CRUD, filtering, sorting, and aggregates

pub mod display;
mod manager;
mod types;

pub use manager::{JournalError, TradeJournal};
pub use types::{
    signed_value, JournalStats, Outcome, SortField, TradeDraft, TradeQuery, TradeRecord,
    TradeUpdate, ValidationError,
};
