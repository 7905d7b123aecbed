//! Session/account manager: signup, login, logout, profile edits
//!
//! The account list and the current session live in the JSON store. The
//! session is persisted with the secret stripped so it survives process
//! restarts; logout removes it without touching trade records.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::accounts::types::{Account, AccountRecord, ProfileUpdate};
use crate::store::{JsonStore, StoreError, SESSION_KEY, USERS_KEY};

/// Account and session errors
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("An account with email {0} already exists")]
    EmailTaken(String),

    /// Deliberately covers both unknown email and wrong secret
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Manages the persisted account list and the active session
pub struct AccountManager {
    store: JsonStore,
    current: Option<Account>,
}

impl AccountManager {
    /// Load the manager, restoring any persisted session
    pub fn load(store: JsonStore) -> Result<Self, AccountError> {
        let current = store.read(SESSION_KEY)?;
        Ok(Self { store, current })
    }

    /// The active session account, if any
    pub fn current(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    /// Register a new account and make it the active session.
    ///
    /// Fails with [`AccountError::EmailTaken`] when the email is already
    /// registered; the stored account list is left unchanged in that case.
    pub fn signup(&mut self, name: &str, email: &str, secret: &str) -> Result<Account, AccountError> {
        let mut users: Vec<AccountRecord> = self.store.read_or_default(USERS_KEY)?;

        if users.iter().any(|u| u.email == email) {
            return Err(AccountError::EmailTaken(email.to_string()));
        }

        let record = AccountRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            secret_hash: hash_secret(secret)?,
            created_at: Utc::now(),
        };
        let account = record.public();

        users.push(record);
        self.store.write(USERS_KEY, &users)?;
        self.store.write(SESSION_KEY, &account)?;
        self.current = Some(account.clone());

        info!("Created account {} for {}", account.id, account.email);
        Ok(account)
    }

    /// Authenticate and establish a session.
    ///
    /// Unknown email and wrong secret are indistinguishable: both yield
    /// [`AccountError::InvalidCredentials`] and leave the session unset.
    pub fn login(&mut self, email: &str, secret: &str) -> Result<Account, AccountError> {
        let users: Vec<AccountRecord> = self.store.read_or_default(USERS_KEY)?;

        let record = users
            .iter()
            .find(|u| u.email == email)
            .ok_or(AccountError::InvalidCredentials)?;

        if !verify_secret(secret, &record.secret_hash) {
            return Err(AccountError::InvalidCredentials);
        }

        let account = record.public();
        self.store.write(SESSION_KEY, &account)?;
        self.current = Some(account.clone());

        info!("Logged in as {}", account.email);
        Ok(account)
    }

    /// Clear the session. Persisted trade records are untouched.
    pub fn logout(&mut self) -> Result<(), AccountError> {
        self.store.remove(SESSION_KEY)?;
        self.current = None;
        info!("Logged out");
        Ok(())
    }

    /// Merge profile fields into the session and the persisted account list.
    /// Returns `None` when no session is active.
    pub fn update_profile(
        &mut self,
        update: ProfileUpdate,
    ) -> Result<Option<Account>, AccountError> {
        let Some(current) = self.current.clone() else {
            return Ok(None);
        };

        let mut users: Vec<AccountRecord> = self.store.read_or_default(USERS_KEY)?;

        // Email stays unique across accounts
        if let Some(new_email) = &update.email {
            if users
                .iter()
                .any(|u| u.id != current.id && u.email == *new_email)
            {
                return Err(AccountError::EmailTaken(new_email.clone()));
            }
        }

        let Some(record) = users.iter_mut().find(|u| u.id == current.id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(email) = update.email {
            record.email = email;
        }

        let account = record.public();
        self.store.write(USERS_KEY, &users)?;
        self.store.write(SESSION_KEY, &account)?;
        self.current = Some(account.clone());

        info!("Updated profile for {}", account.id);
        Ok(Some(account))
    }
}

/// Salted Argon2 hash in PHC string format
fn hash_secret(secret: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::Hash(e.to_string()))
}

fn verify_secret(secret: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok()
}
