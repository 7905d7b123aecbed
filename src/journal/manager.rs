//! Trade record manager
//!
//! Owns the in-memory per-session record list and keeps it in step with the
//! persisted full trade list (`trades.json`, all accounts interleaved).
//! Every operation is one synchronous read-modify-write cycle; aggregates
//! are recomputed on demand and never stored.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::journal::types::{
    signed_value, JournalStats, TradeDraft, TradeQuery, TradeRecord, TradeUpdate, ValidationError,
};
use crate::store::{JsonStore, StoreError, TRADES_KEY};

/// Journal errors
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Manages the trade records of the active session's account
pub struct TradeJournal {
    store: JsonStore,
    /// Active account id; `None` when logged out
    owner: Option<String>,
    /// In-memory records owned by `owner`, in insertion order
    trades: Vec<TradeRecord>,
}

impl TradeJournal {
    /// A journal with no active session; every mutation is a no-op
    pub fn detached(store: JsonStore) -> Self {
        Self {
            store,
            owner: None,
            trades: Vec::new(),
        }
    }

    /// Scope the journal to an account and load its records from the store
    pub fn attach(&mut self, account_id: &str) -> Result<(), JournalError> {
        let all: Vec<TradeRecord> = self.store.read_or_default(TRADES_KEY)?;
        self.trades = all
            .into_iter()
            .filter(|t| t.account_id == account_id)
            .collect();
        self.owner = Some(account_id.to_string());
        Ok(())
    }

    /// Drop the session scope and the in-memory list. Persisted records are
    /// untouched.
    pub fn detach(&mut self) {
        self.owner = None;
        self.trades.clear();
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// The active account's records, in insertion order
    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    /// Log a new trade. Returns `None` without touching any state when no
    /// session is active. Validation failures abort before any write.
    pub fn add_trade(&mut self, draft: TradeDraft) -> Result<Option<TradeRecord>, JournalError> {
        let Some(owner) = self.owner.clone() else {
            return Ok(None);
        };

        draft.validate()?;

        let record = TradeRecord {
            id: Uuid::new_v4().to_string(),
            account_id: owner,
            date: draft.date,
            asset: draft.asset.trim().to_string(),
            amount: draft.amount,
            outcome: draft.outcome,
            value: signed_value(draft.outcome, draft.value),
            notes: draft.notes.filter(|n| !n.trim().is_empty()),
            created_at: Utc::now(),
        };

        let mut all: Vec<TradeRecord> = self.store.read_or_default(TRADES_KEY)?;
        all.push(record.clone());
        self.store.write(TRADES_KEY, &all)?;

        self.trades.push(record.clone());

        info!("Logged {} trade {} on {}", record.outcome, record.id, record.asset);
        Ok(Some(record))
    }

    /// Merge fields into the record with the given id. Silently does nothing
    /// when the id is unknown (or owned by another account).
    pub fn update_trade(
        &mut self,
        id: &str,
        update: TradeUpdate,
    ) -> Result<Option<TradeRecord>, JournalError> {
        let Some(owner) = self.owner.clone() else {
            return Ok(None);
        };

        update.validate()?;

        let mut all: Vec<TradeRecord> = self.store.read_or_default(TRADES_KEY)?;
        let Some(record) = all
            .iter_mut()
            .find(|t| t.id == id && t.account_id == owner)
        else {
            return Ok(None);
        };

        update.apply(record);
        let updated = record.clone();
        self.store.write(TRADES_KEY, &all)?;

        if let Some(entry) = self.trades.iter_mut().find(|t| t.id == id) {
            *entry = updated.clone();
        }

        info!("Updated trade {}", id);
        Ok(Some(updated))
    }

    /// Remove the record with the given id from both lists. Returns `false`
    /// (and changes nothing) when the id is absent.
    pub fn delete_trade(&mut self, id: &str) -> Result<bool, JournalError> {
        let Some(owner) = self.owner.clone() else {
            return Ok(false);
        };

        let mut all: Vec<TradeRecord> = self.store.read_or_default(TRADES_KEY)?;
        let before = all.len();
        all.retain(|t| !(t.id == id && t.account_id == owner));

        if all.len() == before {
            return Ok(false);
        }

        self.store.write(TRADES_KEY, &all)?;
        self.trades.retain(|t| t.id != id);

        info!("Deleted trade {}", id);
        Ok(true)
    }

    /// Look up one of the active account's records by id
    pub fn get_trade(&self, id: &str) -> Option<&TradeRecord> {
        self.trades.iter().find(|t| t.id == id)
    }

    /// Filtered and sorted view over the in-memory list
    pub fn query(&self, query: &TradeQuery) -> Vec<TradeRecord> {
        query.apply(&self.trades)
    }

    /// The most recently logged records, newest first
    pub fn recent(&self, limit: usize) -> Vec<TradeRecord> {
        let mut records = self.trades.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        records
    }

    /// Aggregates over the in-memory list; recomputed on every call
    pub fn stats(&self) -> JournalStats {
        JournalStats::compute(&self.trades)
    }
}
