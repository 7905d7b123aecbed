use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::context::AppContext;

#[derive(Args)]
pub struct LogoutArgs {}

pub struct LogoutCommand {
    #[allow(dead_code)]
    args: LogoutArgs,
}

impl LogoutCommand {
    pub fn new(args: LogoutArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        if ctx.accounts.current().is_none() {
            println!("{}", "No active session".bright_black());
            return Ok(());
        }

        ctx.logout()?;
        println!("{} Logged out. Your records stay on disk.", "👋".bright_green());
        Ok(())
    }
}
