use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;

use crate::accounts::ProfileUpdate;
use crate::context::AppContext;

#[derive(Args)]
pub struct ProfileArgs {
    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New email address (must be unused)
    #[arg(long)]
    pub email: Option<String>,
}

pub struct ProfileCommand {
    args: ProfileArgs,
}

impl ProfileCommand {
    pub fn new(args: ProfileArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, ctx: &mut AppContext) -> Result<()> {
        ctx.require_session()?;

        let update = ProfileUpdate {
            name: self.args.name.as_ref().map(|n| n.trim().to_string()),
            email: self.args.email.as_ref().map(|e| e.trim().to_string()),
        };

        if !update.is_empty() {
            ctx.update_profile(update)?;
            println!("{} Profile updated", "✅".bright_green());
            println!();
        }

        let account = ctx.require_session()?;
        println!("{}", "PROFILE".bright_yellow());
        println!("{}", "─".repeat(50).bright_black());
        println!("👤 Name:  {}", account.name.bright_white());
        println!("📧 Email: {}", account.email.bright_cyan());
        println!("🆔 Id:    {}", account.id.bright_black());
        Ok(())
    }
}
