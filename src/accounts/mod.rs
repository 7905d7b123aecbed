//! Account registry and session handling

mod manager;
mod types;

pub use manager::{AccountError, AccountManager};
pub use types::{Account, AccountRecord, ProfileUpdate};
