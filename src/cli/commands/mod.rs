pub mod add;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod history;
pub mod login;
pub mod logout;
pub mod profile;
pub mod signup;

use anyhow::{anyhow, Result};

/// Resolve a secret from an optional flag, falling back to an interactive
/// prompt. Empty secrets are rejected either way.
pub(crate) fn resolve_secret(flag: &Option<String>, prompt: &str) -> Result<String> {
    let secret = match flag {
        Some(value) => value.clone(),
        None => rpassword::prompt_password(prompt)?,
    };

    if secret.is_empty() {
        return Err(anyhow!("Password cannot be empty"));
    }
    Ok(secret)
}

/// Ask a yes/no question on stdin; anything but `y`/`yes` declines
pub(crate) fn confirm(question: &str) -> Result<bool> {
    use std::io::Write;

    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
