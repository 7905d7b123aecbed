//! Type definitions for accounts and sessions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account as exposed to the rest of the application and persisted as the
/// current session. Never carries secret material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque identifier (UUID v4)
    pub id: String,

    /// Display name
    pub name: String,

    /// Email, unique across accounts
    pub email: String,
}

/// An account as persisted in the account list, including the salted
/// Argon2 hash of its secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub email: String,

    /// PHC-format Argon2 hash of the account secret
    pub secret_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl AccountRecord {
    /// The secret-free view of this record
    pub fn public(&self) -> Account {
        Account {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Partial profile edit; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_view_drops_the_hash() {
        let record = AccountRecord {
            id: "id-1".to_string(),
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            secret_hash: "$argon2id$...".to_string(),
            created_at: Utc::now(),
        };

        let account = record.public();
        assert_eq!(account.id, "id-1");
        assert_eq!(account.email, "jane@x.com");

        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("argon2"));
    }
}
