//! Application context passed to the CLI views
//!
//! Replaces ambient global state with one explicit object: the account
//! manager and the trade journal, loaded from the store on startup and torn
//! down on logout. The journal is always scoped to the active session.

use anyhow::{anyhow, Result};

use crate::accounts::{Account, AccountManager, ProfileUpdate};
use crate::journal::TradeJournal;
use crate::store::JsonStore;

pub struct AppContext {
    pub accounts: AccountManager,
    pub journal: TradeJournal,
}

impl AppContext {
    /// Restore state from the store: the persisted session (if any) and the
    /// session account's trade records
    pub fn load(store: JsonStore) -> Result<Self> {
        let accounts = AccountManager::load(store.clone())?;
        let mut journal = TradeJournal::detached(store);

        if let Some(id) = accounts.current().map(|a| a.id.clone()) {
            journal.attach(&id)?;
        }

        Ok(Self { accounts, journal })
    }

    /// Register an account, start its session, and reset the visible trade
    /// list to empty
    pub fn signup(&mut self, name: &str, email: &str, secret: &str) -> Result<Account> {
        let account = self.accounts.signup(name, email, secret)?;
        self.journal.attach(&account.id)?;
        Ok(account)
    }

    /// Authenticate, start the session, and load the account's records
    pub fn login(&mut self, email: &str, secret: &str) -> Result<Account> {
        let account = self.accounts.login(email, secret)?;
        self.journal.attach(&account.id)?;
        Ok(account)
    }

    /// Clear the session and the in-memory trade list; persisted trade
    /// records are untouched
    pub fn logout(&mut self) -> Result<()> {
        self.accounts.logout()?;
        self.journal.detach();
        Ok(())
    }

    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<Option<Account>> {
        Ok(self.accounts.update_profile(update)?)
    }

    /// The active account, or a user-facing error telling how to get one
    pub fn require_session(&self) -> Result<&Account> {
        self.accounts
            .current()
            .ok_or_else(|| anyhow!("No active session. Run 'gainloss login' or 'gainloss signup' first"))
    }
}
